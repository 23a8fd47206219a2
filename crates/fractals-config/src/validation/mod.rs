//! Full configuration validation.
//!
//! Validates numeric ranges, keybind uniqueness, and color formats.
//! Each domain has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod camera;
mod helpers;
mod hud;
mod scene;


use crate::keybinds;
use crate::schema::FractalsConfig;
use fractals_common::ConfigError;

use helpers::validate_one_of;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &FractalsConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    if let Err(e) = keybinds::validate_no_duplicates(&config.keybinds) {
        errors.push(e.to_string());
    }

    if config.window.width == 0 || config.window.height == 0 {
        errors.push(format!(
            "window size {}x{} must be non-zero",
            config.window.width, config.window.height
        ));
    }

    camera::validate_camera(&mut errors, config);
    scene::validate_scene(&mut errors, config);
    scene::validate_icosphere(&mut errors, config);
    scene::validate_petals(&mut errors, config);
    hud::validate_hud(&mut errors, config);
    validate_one_of(&mut errors, "logging.level", &config.logging.level, LOG_LEVELS);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
