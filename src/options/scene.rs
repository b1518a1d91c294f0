use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Scene content parameters: grid resolution, model scales, lighting.
pub struct SceneOptions {
    /// Number of quads along each axis of the ground grid.
    pub grid_quads: u32,
    /// World-space extent of the ground grid; also uploaded to shaders
    /// as the height normalization value.
    pub surface_extent: f32,
    /// Initial uniform scale of the ground surface.
    pub surface_scale: f32,
    /// Initial uniform scale of the light box.
    pub lightbox_scale: f32,
    /// Scale change per scroll-wheel line.
    pub scroll_speed: f32,
    /// Lower bound the scroll scale cannot fall below.
    pub min_scale: f32,
    /// World-space light position; the light box is drawn here.
    pub light_position: [f32; 3],
    /// Background clear color (linear RGB).
    pub clear_color: [f32; 3],
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            grid_quads: 256,
            surface_extent: 8.0,
            surface_scale: 1.5,
            lightbox_scale: 0.01,
            scroll_speed: 0.01,
            min_scale: 1.0,
            light_position: [1.0, 1.0, 1.0],
            clear_color: [0.0, 0.0, 0.0],
        }
    }
}
