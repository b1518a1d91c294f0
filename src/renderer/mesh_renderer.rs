use glam::{Mat4, Vec3};
use wgpu::util::DeviceExt;

use crate::gpu::depth::DepthTexture;
use crate::gpu::render_context::RenderContext;
use crate::scene::mesh::{vertex_buffer_layout, MeshData};

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
/// Per-model uniform: composed MVP, the model matrix for world-space
/// lighting, and the light position / height scale.
pub struct ModelUniform {
    /// Model-view-projection matrix.
    pub mvp: [[f32; 4]; 4],
    /// Model matrix (object space to world space).
    pub model: [[f32; 4]; 4],
    /// World-space light position.
    pub light_pos: [f32; 3],
    /// Height normalization value for color shading.
    pub max_value: f32,
}

impl ModelUniform {
    /// Build a uniform from the composed matrices and scene lighting.
    pub fn new(mvp: Mat4, model: Mat4, light_pos: Vec3, max_value: f32) -> Self {
        Self {
            mvp: mvp.to_cols_array_2d(),
            model: model.to_cols_array_2d(),
            light_pos: light_pos.to_array(),
            max_value,
        }
    }
}

/// Vertex/index buffers for one mesh, uploaded once at startup.
pub struct GpuMesh {
    /// Interleaved vertex buffer.
    pub vertex_buffer: wgpu::Buffer,
    /// `u32` triangle-list index buffer.
    pub index_buffer: wgpu::Buffer,
    /// Number of indices to draw.
    pub index_count: u32,
}

impl GpuMesh {
    /// Upload mesh data to the GPU.
    #[must_use]
    pub fn upload(context: &RenderContext, data: &MeshData, label: &str) -> Self {
        let vertex_buffer = context
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(label),
                contents: bytemuck::cast_slice(&data.vertices),
                usage: wgpu::BufferUsages::VERTEX,
            });
        let index_buffer = context
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(label),
                contents: bytemuck::cast_slice(&data.indices),
                usage: wgpu::BufferUsages::INDEX,
            });
        Self {
            vertex_buffer,
            index_buffer,
            index_count: data.index_count(),
        }
    }
}

/// Uniform buffer + bind group for one drawn model.
pub struct ModelBinding {
    buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

impl ModelBinding {
    /// Write a fresh uniform value for this frame.
    pub fn update(&self, queue: &wgpu::Queue, uniform: &ModelUniform) {
        queue.write_buffer(&self.buffer, 0, bytemuck::cast_slice(&[*uniform]));
    }
}

/// A depth-tested render pipeline over [`MeshVertex`] buffers, one per
/// shader pair (lit surface, flat light box).
///
/// [`MeshVertex`]: crate::scene::mesh::MeshVertex
pub struct MeshRenderer {
    pipeline: wgpu::RenderPipeline,
    model_layout: wgpu::BindGroupLayout,
}

impl MeshRenderer {
    /// Create the pipeline for the given shader. The camera bind group
    /// layout occupies group 0; the per-model uniform occupies group 1.
    pub fn new(
        context: &RenderContext,
        camera_layout: &wgpu::BindGroupLayout,
        shader: wgpu::ShaderModuleDescriptor<'_>,
        label: &str,
    ) -> Self {
        let shader = context.device.create_shader_module(shader);

        let model_layout = context.device.create_bind_group_layout(
            &wgpu::BindGroupLayoutDescriptor {
                label: Some("Model Bind Group Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX
                        | wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            },
        );

        let pipeline_layout = context.device.create_pipeline_layout(
            &wgpu::PipelineLayoutDescriptor {
                label: Some("Mesh Pipeline Layout"),
                bind_group_layouts: &[camera_layout, &model_layout],
                push_constant_ranges: &[],
            },
        );

        let pipeline = context.device.create_render_pipeline(
            &wgpu::RenderPipelineDescriptor {
                label: Some(label),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    buffers: &[vertex_buffer_layout()],
                    compilation_options: Default::default(),
                },
                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some("fs_main"),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: context.config.format,
                        blend: Some(wgpu::BlendState::REPLACE),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                    compilation_options: Default::default(),
                }),
                primitive: wgpu::PrimitiveState::default(),
                depth_stencil: Some(wgpu::DepthStencilState {
                    format: DepthTexture::FORMAT,
                    depth_write_enabled: true,
                    depth_compare: wgpu::CompareFunction::Less,
                    stencil: wgpu::StencilState::default(),
                    bias: wgpu::DepthBiasState::default(),
                }),
                multisample: wgpu::MultisampleState::default(),
                multiview: None,
                cache: None,
            },
        );

        Self {
            pipeline,
            model_layout,
        }
    }

    /// Create a uniform buffer + bind group pair for one model drawn with
    /// this pipeline.
    #[must_use]
    pub fn create_binding(&self, context: &RenderContext) -> ModelBinding {
        let buffer = context
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Model Uniform Buffer"),
                contents: bytemuck::cast_slice(&[ModelUniform::new(
                    Mat4::IDENTITY,
                    Mat4::IDENTITY,
                    Vec3::ZERO,
                    1.0,
                )]),
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            });
        let bind_group =
            context
                .device
                .create_bind_group(&wgpu::BindGroupDescriptor {
                    layout: &self.model_layout,
                    entries: &[wgpu::BindGroupEntry {
                        binding: 0,
                        resource: buffer.as_entire_binding(),
                    }],
                    label: Some("Model Bind Group"),
                });
        ModelBinding { buffer, bind_group }
    }

    /// Record draw commands for one mesh into an open render pass. The
    /// camera bind group must already be set at group 0 by the caller.
    pub fn draw(
        &self,
        pass: &mut wgpu::RenderPass<'_>,
        binding: &ModelBinding,
        mesh: &GpuMesh,
    ) {
        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(1, &binding.bind_group, &[]);
        pass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
        pass.set_index_buffer(
            mesh.index_buffer.slice(..),
            wgpu::IndexFormat::Uint32,
        );
        pass.draw_indexed(0..mesh.index_count, 0, 0..1);
    }
}
