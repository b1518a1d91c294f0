//! Scene content: mesh data, mesh generators, and per-object transform
//! state.

/// Mesh shape variants and their vertex/index generation.
pub mod generator;
/// CPU-side vertex and mesh buffer types.
pub mod mesh;
/// Per-object translation/rotation/scaling state.
pub mod model;

pub use generator::MeshGenerator;
pub use mesh::{MeshData, MeshVertex};
pub use model::Model;
