// -- Lint policy ---------------------------------------------------------
// Crate-wide lints live in Cargo.toml [lints]; the ones here are the
// non-negotiables restated for readers of the source.

// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]

//! Small wgpu study renderer: a tiled ground surface and a light-box
//! cube, orbited by an arcball camera driven with mouse drag and scroll.
//!
//! # Key entry points
//!
//! - [`camera::ArcballCamera`] - the spherical-coordinate orbit camera
//! - [`scene::MeshGenerator`] - grid-surface and unit-cube mesh builders
//! - [`scene::Model`] - per-object translation/rotation/scaling state
//! - [`engine::RenderEngine`] - owns all GPU and scene state
//! - [`viewer::Viewer`] - standalone winit window shell
//! - [`options::Options`] - runtime configuration (TOML)
//!
//! # Architecture
//!
//! Everything is single-threaded and synchronous: the winit event loop
//! borrows the engine, the engine borrows the camera and models, and a
//! frame is a single depth-tested render pass drawing both meshes. The
//! camera's view matrix and each model's transform are recomputed from
//! their scalar state every frame; nothing is cached across frames.

pub mod camera;
pub mod engine;
pub mod error;
pub mod gpu;
pub mod options;
pub mod renderer;
pub mod scene;
pub mod viewer;

pub use camera::ArcballCamera;
pub use error::OrbitviewError;
pub use viewer::Viewer;
