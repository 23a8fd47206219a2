//! Keybind validation utilities.

use crate::schema::KeybindConfig;
use fractals_common::ConfigError;
use std::collections::HashMap;

/// Returns all keybinds as `(name, binding)` pairs.
pub fn all_keybinds(config: &KeybindConfig) -> Vec<(&str, &str)> {
    vec![
        ("move_forward", &config.move_forward),
        ("move_backward", &config.move_backward),
        ("move_left", &config.move_left),
        ("move_right", &config.move_right),
        ("toggle_projection", &config.toggle_projection),
        ("toggle_petal_extension", &config.toggle_petal_extension),
        ("toggle_mouse_capture", &config.toggle_mouse_capture),
        ("toggle_hud", &config.toggle_hud),
        ("quit", &config.quit),
    ]
}

/// Validate that no two keybinds are mapped to the same key combination.
///
/// Bindings are compared case-insensitively, so "w" and "W" collide.
pub fn validate_no_duplicates(config: &KeybindConfig) -> Result<(), ConfigError> {
    let mut seen: HashMap<String, &str> = HashMap::new();

    for (name, binding) in all_keybinds(config) {
        let key = binding.to_ascii_lowercase();
        if let Some(existing_name) = seen.get(&key) {
            return Err(ConfigError::ValidationError(format!(
                "duplicate keybind '{binding}': assigned to both '{existing_name}' and '{name}'"
            )));
        }
        seen.insert(key, name);
    }

    Ok(())
}
