//! GPU mesh upload and the depth-tested mesh render pipeline.

/// Mesh pipeline, per-model uniforms, and GPU mesh buffers.
pub mod mesh_renderer;

pub use mesh_renderer::{GpuMesh, MeshRenderer, ModelBinding, ModelUniform};
