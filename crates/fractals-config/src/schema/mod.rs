//! Configuration schema types for Fractals.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the values the scene was designed around.

mod camera;
mod hud;
mod keybind_config;
mod logging;
mod scene;
mod window;

pub use camera::*;
pub use hud::*;
pub use keybind_config::*;
pub use logging::*;
pub use scene::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for Fractals.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FractalsConfig {
    pub window: WindowConfig,
    pub camera: CameraConfig,
    pub scene: SceneConfig,
    pub hud: HudConfig,
    pub keybinds: KeybindConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_gives_defaults() {
        let config: FractalsConfig = toml::from_str("").unwrap();
        assert_eq!(config.window.width, 1000);
        assert_eq!(config.window.height, 900);
        assert!((config.camera.zoom - 45.0).abs() < f32::EPSILON);
        assert_eq!(config.keybinds.quit, "Escape");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn partial_toml_overrides_nested_sections() {
        let toml_str = r##"
[camera]
mouse_sensitivity = 0.2

[scene.icosphere]
subdivisions = 1
smooth = true

[scene.petals]
count = 7
"##;
        let config: FractalsConfig = toml::from_str(toml_str).unwrap();
        assert!((config.camera.mouse_sensitivity - 0.2).abs() < f32::EPSILON);
        assert_eq!(config.scene.icosphere.subdivisions, 1);
        assert!(config.scene.icosphere.smooth);
        assert_eq!(config.scene.petals.count, 7);
        // Defaults preserved
        assert!((config.scene.petals.step_degrees - 20.0).abs() < f32::EPSILON);
        assert!((config.scene.icosphere.radius - 1.0).abs() < f32::EPSILON);
        assert_eq!(config.window.title, "Fractals");
    }

    #[test]
    fn unknown_projection_is_rejected() {
        let toml_str = r#"
[camera]
projection = "fisheye"
"#;
        assert!(toml::from_str::<FractalsConfig>(toml_str).is_err());
    }
}
