use fractals_common::PlatformError;

use super::types::{KeyBind, Modifier};

/// Parses a keybind string like `"W"`, `"Ctrl+Shift+P"` or `"Escape"` into
/// a [`KeyBind`].
///
/// Modifier aliases: `Cmd`/`Command` map to `Super` on macOS and `Ctrl`
/// elsewhere, `Option`/`Opt` map to `Alt`, `Win`/`Meta` map to `Super`.
/// The final token is always the key, even if it names a modifier.
pub fn parse_keybind(s: &str) -> Result<KeyBind, PlatformError> {
    let tokens: Vec<&str> = s.split('+').map(str::trim).collect();

    let Some((last, leading)) = tokens.split_last() else {
        return Err(PlatformError::NotSupported("empty keybind string".into()));
    };
    if last.is_empty() {
        return Err(PlatformError::NotSupported(format!(
            "keybind '{s}' has no key component"
        )));
    }

    let mut modifiers = Vec::new();
    for token in leading {
        let modifier = normalize_modifier(token).ok_or_else(|| {
            PlatformError::NotSupported(format!("unrecognized modifier: {token}"))
        })?;
        if !modifiers.contains(&modifier) {
            modifiers.push(modifier);
        }
    }

    Ok(KeyBind {
        modifiers,
        key: normalize_key_name(last),
    })
}

fn normalize_modifier(token: &str) -> Option<Modifier> {
    match token.to_ascii_lowercase().as_str() {
        "ctrl" | "control" => Some(Modifier::Ctrl),
        "alt" | "option" | "opt" => Some(Modifier::Alt),
        "shift" => Some(Modifier::Shift),
        "cmd" | "command" => {
            if cfg!(target_os = "macos") {
                Some(Modifier::Super)
            } else {
                Some(Modifier::Ctrl)
            }
        }
        "super" | "win" | "meta" => Some(Modifier::Super),
        _ => None,
    }
}

/// Canonical spelling of a key name as it appears in a config file.
pub(crate) fn normalize_key_name(token: &str) -> String {
    let lower = token.to_ascii_lowercase();
    match lower.as_str() {
        "space" => "Space".into(),
        "enter" | "return" => "Enter".into(),
        "escape" | "esc" => "Escape".into(),
        "tab" => "Tab".into(),
        "backspace" => "Backspace".into(),
        "up" | "arrowup" => "Up".into(),
        "down" | "arrowdown" => "Down".into(),
        "left" | "arrowleft" => "Left".into(),
        "right" | "arrowright" => "Right".into(),
        "period" => ".".into(),
        "comma" => ",".into(),
        "minus" => "-".into(),
        "equal" | "equals" => "=".into(),
        _ if token.chars().count() == 1 => token.to_uppercase(),
        _ => {
            let mut chars = lower.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => lower,
            }
        }
    }
}
