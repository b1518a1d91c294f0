#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
/// Interleaved mesh vertex: position followed by color.
pub struct MeshVertex {
    /// World-space position before the model transform.
    pub position: [f32; 3],
    /// Linear RGB vertex color.
    pub color: [f32; 3],
}

/// Vertex buffer layout matching [`MeshVertex`].
pub fn vertex_buffer_layout() -> wgpu::VertexBufferLayout<'static> {
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];
    wgpu::VertexBufferLayout {
        array_stride: size_of::<MeshVertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &ATTRIBUTES,
    }
}

/// CPU-side mesh: owned vertex and index buffers, released automatically
/// at end of scope.
#[derive(Debug, Clone)]
pub struct MeshData {
    /// Interleaved vertex data.
    pub vertices: Vec<MeshVertex>,
    /// Triangle list indices into `vertices`.
    pub indices: Vec<u32>,
}

impl MeshData {
    /// Number of indices, as submitted to draw calls.
    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::{vertex_buffer_layout, MeshVertex};

    #[test]
    fn vertex_layout_matches_the_interleaved_struct() {
        let layout = vertex_buffer_layout();
        assert_eq!(layout.array_stride, size_of::<MeshVertex>() as u64);
        assert_eq!(layout.array_stride, 24);
        assert_eq!(layout.attributes.len(), 2);
        assert_eq!(layout.attributes[0].offset, 0);
        assert_eq!(layout.attributes[1].offset, 12);
        assert_eq!(layout.attributes[0].shader_location, 0);
        assert_eq!(layout.attributes[1].shader_location, 1);
    }
}
