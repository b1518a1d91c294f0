//! Runtime configuration with TOML file support.
//!
//! All tweakable settings (camera, scene content) are consolidated here.
//! Options serialize to/from TOML; every sub-struct uses `#[serde(default)]`
//! so a partial file (e.g. only overriding `[camera]`) works correctly.

mod camera;
mod scene;

use std::path::Path;

pub use camera::CameraOptions;
pub use scene::SceneOptions;
use serde::{Deserialize, Serialize};

use crate::error::OrbitviewError;

/// Top-level options container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Options {
    /// Camera projection and control parameters.
    pub camera: CameraOptions,
    /// Scene content parameters.
    pub scene: SceneOptions,
}

impl Options {
    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, OrbitviewError> {
        let content =
            std::fs::read_to_string(path).map_err(OrbitviewError::Io)?;
        toml::from_str(&content)
            .map_err(|e| OrbitviewError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), OrbitviewError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| OrbitviewError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(OrbitviewError::Io)?;
        }
        std::fs::write(path, content).map_err(OrbitviewError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::Options;

    #[test]
    fn empty_toml_yields_defaults() {
        let parsed: Options = match toml::from_str("") {
            Ok(options) => options,
            Err(e) => panic!("empty options failed to parse: {e}"),
        };
        assert_eq!(parsed, Options::default());
    }

    #[test]
    fn partial_toml_overrides_only_named_fields() {
        let toml_src = "[camera]\nradius = 5.0\n";
        let parsed: Options = match toml::from_str(toml_src) {
            Ok(options) => options,
            Err(e) => panic!("partial options failed to parse: {e}"),
        };
        assert_eq!(parsed.camera.radius, 5.0);
        assert_eq!(parsed.camera.fovy, Options::default().camera.fovy);
        assert_eq!(parsed.scene, Options::default().scene);
    }

    #[test]
    fn options_round_trip_through_toml() {
        let mut options = Options::default();
        options.scene.grid_quads = 12;
        options.camera.azimuth_deg = 90.0;
        let serialized = match toml::to_string_pretty(&options) {
            Ok(s) => s,
            Err(e) => panic!("serialization failed: {e}"),
        };
        let parsed: Options = match toml::from_str(&serialized) {
            Ok(o) => o,
            Err(e) => panic!("round-trip parse failed: {e}"),
        };
        assert_eq!(parsed, options);
    }
}
