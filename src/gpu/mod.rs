//! Core GPU resource ownership.

/// Depth buffer texture.
pub mod depth;
/// wgpu device/queue/surface setup.
pub mod render_context;
