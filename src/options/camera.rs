use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Camera projection and control parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
    /// Rotation sensitivity multiplier applied to mouse-drag deltas.
    pub rotate_sensitivity: f32,
    /// Orbit radius (distance from the look-at point to the eye).
    pub radius: f32,
    /// Minimum orbit radius. Stored on the camera but read by no
    /// operation; zoom happens through model scaling instead.
    pub min_radius: f32,
    /// Initial azimuth angle in degrees.
    pub azimuth_deg: f32,
    /// Initial polar angle in degrees.
    pub polar_deg: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 45.0,
            znear: 0.1,
            zfar: 1000.0,
            rotate_sensitivity: 1.0,
            radius: 2.0,
            min_radius: 0.1,
            azimuth_deg: 30.0,
            polar_deg: 45.0,
        }
    }
}
