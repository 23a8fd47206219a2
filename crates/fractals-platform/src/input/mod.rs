//! Keybind registry: maps parsed `KeyBind` values to runtime `Action`s.
//!
//! Built from [`KeybindConfig`](fractals_config::schema::KeybindConfig) at startup.

mod key_combo;
mod registry;

pub use key_combo::KeyCombo;
pub use registry::KeybindRegistry;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::{parse_keybind, Modifier};
    use fractals_common::Action;
    use fractals_config::schema::KeybindConfig;

    fn bare(key: &str) -> KeyCombo {
        KeyCombo::from_winit(false, false, false, false, key.into())
    }

    #[test]
    fn keycombo_from_keybind_sets_mask() {
        let combo = KeyCombo::from_keybind(&parse_keybind("Ctrl+Alt+G").unwrap());
        assert_eq!(combo.mods, Modifier::Ctrl.bit() | Modifier::Alt.bit());
        assert_eq!(combo.key, "G");
    }

    #[test]
    fn keycombo_from_winit_matches_parsed() {
        let a = KeyCombo::from_winit(false, false, true, false, "P".into());
        let b = KeyCombo::from_keybind(&parse_keybind("Shift+P").unwrap());
        assert_eq!(a, b);
    }

    #[test]
    fn keycombo_unmodified_strips_mask() {
        let combo = KeyCombo::from_winit(true, true, true, true, "W".into());
        assert_eq!(combo.unmodified(), bare("W"));
    }

    #[test]
    fn keycombo_back_to_keybind() {
        let original = parse_keybind("Ctrl+Shift+T").unwrap();
        let back = KeyCombo::from_keybind(&original).to_keybind();
        assert_eq!(back, original);
    }

    #[test]
    fn registry_from_default_config() {
        let registry = KeybindRegistry::from_config(&KeybindConfig::default());
        assert_eq!(registry.len(), 9);
        assert!(!registry.is_empty());
    }

    #[test]
    fn registry_resolves_defaults() {
        let registry = KeybindRegistry::from_config(&KeybindConfig::default());
        assert_eq!(registry.resolve(&bare("W")), Some(Action::MoveForward));
        assert_eq!(registry.resolve(&bare("D")), Some(Action::MoveRight));
        assert_eq!(registry.resolve(&bare("1")), Some(Action::TogglePetalExtension));
        assert_eq!(registry.resolve(&bare("P")), Some(Action::ToggleProjection));
        assert_eq!(registry.resolve(&bare("Escape")), Some(Action::Quit));
        assert_eq!(registry.resolve(&bare("Z")), None);
    }

    #[test]
    fn held_actions_ignore_modifiers() {
        let registry = KeybindRegistry::from_config(&KeybindConfig::default());
        let shift_w = KeyCombo::from_winit(false, false, true, false, "W".into());
        assert_eq!(registry.resolve(&shift_w), Some(Action::MoveForward));
    }

    #[test]
    fn toggles_require_exact_modifiers() {
        let registry = KeybindRegistry::from_config(&KeybindConfig::default());
        let ctrl_p = KeyCombo::from_winit(true, false, false, false, "P".into());
        assert_eq!(registry.resolve(&ctrl_p), None);
    }

    #[test]
    fn exact_binding_wins_over_fallback() {
        let config = KeybindConfig {
            quit: "Shift+W".into(),
            ..Default::default()
        };
        let registry = KeybindRegistry::from_config(&config);
        let shift_w = KeyCombo::from_winit(false, false, true, false, "W".into());
        assert_eq!(registry.resolve(&shift_w), Some(Action::Quit));
        assert_eq!(registry.resolve(&bare("W")), Some(Action::MoveForward));
    }

    #[test]
    fn invalid_binding_is_skipped() {
        let config = KeybindConfig {
            toggle_hud: "Hyper+H".into(),
            ..Default::default()
        };
        let registry = KeybindRegistry::from_config(&config);
        assert_eq!(registry.len(), 8);
        assert_eq!(registry.resolve(&bare("H")), None);
    }

    #[test]
    fn reverse_lookup_for_hud() {
        let registry = KeybindRegistry::from_config(&KeybindConfig::default());
        assert_eq!(
            registry.keybind_for_action(Action::ToggleProjection),
            Some("P".to_string())
        );
        assert_eq!(registry.keybind_for_action(Action::Quit), Some("Esc".to_string()));
    }
}
