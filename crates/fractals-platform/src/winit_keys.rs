//! Winit key code normalization.
//!
//! Camera movement should follow key position, not the active layout, so
//! the app looks keys up by winit's physical `KeyCode`. Its debug names
//! (`"KeyW"`, `"Digit1"`, `"ArrowUp"`) are converted here to the names
//! produced by [`parse_keybind`](crate::keymap::parse_keybind).

/// Convert a winit `KeyCode` debug name to the normalized key name used by
/// [`KeyCombo`](crate::input::KeyCombo).
pub fn normalize_key_code(code: &str) -> String {
    if let Some(letter) = code.strip_prefix("Key") {
        if letter.len() == 1 {
            return letter.to_string();
        }
    }
    if let Some(digit) = code
        .strip_prefix("Digit")
        .or_else(|| code.strip_prefix("Numpad").filter(|d| d.len() == 1))
    {
        return digit.to_string();
    }

    match code {
        "ArrowUp" => "Up".into(),
        "ArrowDown" => "Down".into(),
        "ArrowLeft" => "Left".into(),
        "ArrowRight" => "Right".into(),
        "NumpadEnter" => "Enter".into(),
        "Period" | "NumpadDecimal" => ".".into(),
        "Comma" => ",".into(),
        "Minus" | "NumpadSubtract" => "-".into(),
        "Equal" => "=".into(),
        "ShiftLeft" | "ShiftRight" => "Shift".into(),
        "ControlLeft" | "ControlRight" => "Ctrl".into(),
        "AltLeft" | "AltRight" => "Alt".into(),
        "SuperLeft" | "SuperRight" => "Super".into(),
        // Escape, Space, Enter, Tab, Backspace, F1..F24 pass through.
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_keys() {
        assert_eq!(normalize_key_code("KeyW"), "W");
        assert_eq!(normalize_key_code("KeyA"), "A");
    }

    #[test]
    fn digit_keys() {
        assert_eq!(normalize_key_code("Digit1"), "1");
        assert_eq!(normalize_key_code("Numpad1"), "1");
    }

    #[test]
    fn numpad_named_keys_are_not_digits() {
        assert_eq!(normalize_key_code("NumpadEnter"), "Enter");
        assert_eq!(normalize_key_code("NumpadAdd"), "NumpadAdd");
    }

    #[test]
    fn arrows_and_named_keys() {
        assert_eq!(normalize_key_code("ArrowLeft"), "Left");
        assert_eq!(normalize_key_code("Escape"), "Escape");
        assert_eq!(normalize_key_code("Space"), "Space");
        assert_eq!(normalize_key_code("F5"), "F5");
    }

    #[test]
    fn modifier_keys() {
        assert_eq!(normalize_key_code("ShiftLeft"), "Shift");
        assert_eq!(normalize_key_code("ControlRight"), "Ctrl");
    }

    #[test]
    fn matches_parsed_keybinds() {
        use crate::keymap::parse_keybind;
        for (code, bind) in [("KeyP", "p"), ("Digit1", "1"), ("Escape", "Esc"), ("ArrowUp", "Up")] {
            assert_eq!(normalize_key_code(code), parse_keybind(bind).unwrap().key);
        }
    }
}
