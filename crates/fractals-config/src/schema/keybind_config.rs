//! Keyboard shortcuts configuration types.
//!
//! Named `keybind_config` to avoid clash with the crate-level `keybinds` module.

use serde::{Deserialize, Serialize};

/// Keyboard shortcuts configuration.
///
/// Format: "Modifier+Key" where Modifier is one of: Cmd, Option, Control, Shift.
/// Single keys such as "W" or "Escape" need no modifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeybindConfig {
    pub move_forward: String,
    pub move_backward: String,
    pub move_left: String,
    pub move_right: String,
    pub toggle_projection: String,
    pub toggle_petal_extension: String,
    pub toggle_mouse_capture: String,
    pub toggle_hud: String,
    pub quit: String,
}

impl Default for KeybindConfig {
    fn default() -> Self {
        Self {
            move_forward: "W".into(),
            move_backward: "S".into(),
            move_left: "A".into(),
            move_right: "D".into(),
            toggle_projection: "P".into(),
            toggle_petal_extension: "1".into(),
            toggle_mouse_capture: "C".into(),
            toggle_hud: "H".into(),
            quit: "Escape".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keybind_defaults() {
        let config = KeybindConfig::default();
        assert_eq!(config.move_forward, "W");
        assert_eq!(config.toggle_petal_extension, "1");
        assert_eq!(config.quit, "Escape");
    }

    #[test]
    fn keybind_partial_toml() {
        let config: KeybindConfig = toml::from_str(r#"quit = "Cmd+Q""#).unwrap();
        assert_eq!(config.quit, "Cmd+Q");
        assert_eq!(config.move_left, "A");
    }
}
