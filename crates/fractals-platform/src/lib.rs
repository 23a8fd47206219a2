//! Keyboard input plumbing for Fractals.
//!
//! Turns keybind strings from the config into [`KeyCombo`]s, maps them to
//! [`Action`](fractals_common::Action)s, and normalizes winit key codes so
//! runtime events can be looked up in the same table.

pub mod input;
pub mod keymap;
pub mod winit_keys;

pub use input::{KeyCombo, KeybindRegistry};
pub use keymap::{KeyBind, Modifier};
pub use winit_keys::normalize_key_code;
