use crate::keymap::{KeyBind, Modifier};

/// A canonical key representation for `HashMap` lookup.
///
/// Modifiers are a bitmask built from [`Modifier::bit`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub mods: u8,
    /// Normalized key name (e.g. "W", "1", "Escape").
    pub key: String,
}

impl KeyCombo {
    /// Build from a parsed [`KeyBind`].
    pub fn from_keybind(kb: &KeyBind) -> Self {
        let mods = kb.modifiers.iter().fold(0u8, |acc, m| acc | m.bit());
        Self {
            mods,
            key: kb.key.clone(),
        }
    }

    /// Build from winit modifier state and a normalized key name.
    pub fn from_winit(ctrl: bool, alt: bool, shift: bool, super_key: bool, key: String) -> Self {
        let mods = [ctrl, alt, shift, super_key]
            .into_iter()
            .zip(Modifier::ALL)
            .filter(|(held, _)| *held)
            .fold(0u8, |acc, (_, m)| acc | m.bit());
        Self { mods, key }
    }

    /// The same key with no modifiers held.
    pub fn unmodified(&self) -> Self {
        Self {
            mods: 0,
            key: self.key.clone(),
        }
    }

    /// Reconstruct a [`KeyBind`] for display purposes.
    pub fn to_keybind(&self) -> KeyBind {
        KeyBind {
            modifiers: Modifier::ALL
                .into_iter()
                .filter(|m| self.mods & m.bit() != 0)
                .collect(),
            key: self.key.clone(),
        }
    }
}
