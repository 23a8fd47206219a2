use std::collections::HashMap;

use fractals_common::Action;
use fractals_config::schema::KeybindConfig;

use crate::keymap::{keybind_to_display, parse_keybind};

use super::key_combo::KeyCombo;

/// Maps key combinations to [`Action`]s.
pub struct KeybindRegistry {
    bindings: HashMap<KeyCombo, Action>,
}

impl KeybindRegistry {
    /// Build the registry from the config keybind section.
    ///
    /// Invalid keybind strings are logged as warnings and skipped.
    pub fn from_config(config: &KeybindConfig) -> Self {
        let mappings: [(&str, Action); 9] = [
            (&config.move_forward, Action::MoveForward),
            (&config.move_backward, Action::MoveBackward),
            (&config.move_left, Action::MoveLeft),
            (&config.move_right, Action::MoveRight),
            (&config.toggle_projection, Action::ToggleProjection),
            (&config.toggle_petal_extension, Action::TogglePetalExtension),
            (&config.toggle_mouse_capture, Action::ToggleMouseCapture),
            (&config.toggle_hud, Action::ToggleHud),
            (&config.quit, Action::Quit),
        ];

        let mut bindings = HashMap::new();
        for (binding_str, action) in mappings {
            match parse_keybind(binding_str) {
                Ok(kb) => {
                    bindings.insert(KeyCombo::from_keybind(&kb), action);
                }
                Err(e) => {
                    tracing::warn!("invalid keybind '{binding_str}' for {}: {e}", action.label());
                }
            }
        }

        tracing::debug!(count = bindings.len(), "keybind registry built");
        Self { bindings }
    }

    /// Resolve a pressed key combination to an action.
    ///
    /// An exact match wins. Otherwise a held action bound to the bare key
    /// still fires, so Shift+W keeps moving the camera forward.
    pub fn resolve(&self, combo: &KeyCombo) -> Option<Action> {
        if let Some(action) = self.bindings.get(combo) {
            return Some(*action);
        }
        if combo.mods == 0 {
            return None;
        }
        self.bindings
            .get(&combo.unmodified())
            .copied()
            .filter(Action::is_held)
    }

    /// Display string of the key bound to `action`, for the HUD.
    pub fn keybind_for_action(&self, action: Action) -> Option<String> {
        self.bindings
            .iter()
            .find(|(_, a)| **a == action)
            .map(|(combo, _)| keybind_to_display(&combo.to_keybind()))
    }

    /// Number of registered bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
