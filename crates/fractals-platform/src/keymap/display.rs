use super::types::{KeyBind, Modifier};

/// Converts a [`KeyBind`] into a short label for the HUD.
///
/// The glyph atlas only covers ASCII, so modifiers are always spelled out
/// using the names each platform prints on its keycaps.
pub fn keybind_to_display(kb: &KeyBind) -> String {
    let key = display_key(&kb.key);
    let mut parts: Vec<&str> = kb.modifiers.iter().map(|m| display_modifier(*m)).collect();
    parts.push(key);
    parts.join("+")
}

fn display_modifier(modifier: Modifier) -> &'static str {
    match modifier {
        Modifier::Ctrl => "Ctrl",
        Modifier::Alt if cfg!(target_os = "macos") => "Opt",
        Modifier::Alt => "Alt",
        Modifier::Shift => "Shift",
        Modifier::Super if cfg!(target_os = "macos") => "Cmd",
        Modifier::Super if cfg!(target_os = "windows") => "Win",
        Modifier::Super => "Super",
    }
}

fn display_key(key: &str) -> &str {
    match key {
        "Escape" => "Esc",
        "Backspace" => "Bksp",
        other => other,
    }
}
