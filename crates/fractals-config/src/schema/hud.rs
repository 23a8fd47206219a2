//! Heads-up text overlay configuration.

use serde::{Deserialize, Serialize};

/// Screen-space text overlay.
///
/// `x` and `y` are the pen origin in pixels measured from the bottom-left
/// corner of the window.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HudConfig {
    pub enabled: bool,
    /// Font file loaded into the glyph atlas. Falls back to `font_family`.
    pub font_path: String,
    pub font_family: String,
    /// Rasterization height in pixels.
    pub pixel_height: u32,
    pub scale: f32,
    pub color: String,
    pub x: f32,
    pub y: f32,
    pub show_fps: bool,
}

impl Default for HudConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            font_path: "assets/fonts/Antonio-Bold.ttf".into(),
            font_family: "sans-serif".into(),
            pixel_height: 48,
            scale: 0.5,
            color: "#ffffff".into(),
            x: 25.0,
            y: 25.0,
            show_fps: true,
        }
    }
}
