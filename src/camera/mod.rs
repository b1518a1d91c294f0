//! Camera system for 3D scene viewing.
//!
//! Provides a spherical-coordinate arcball camera with azimuth
//! wraparound and polar clamping, plus projection, GPU uniform, and
//! input-handling layers around it.

/// Spherical-coordinate orbit camera.
pub mod arcball;
/// Orbit camera controller managing GPU resources and drag mapping.
pub mod controller;
/// Projection parameters and GPU uniform types.
pub mod core;
/// Window-event-based camera input handler.
pub mod input;

pub use arcball::ArcballCamera;
pub use controller::CameraController;
pub use input::InputHandler;
