use fractals_config::schema::{HudConfig, ProjectionMode};

use crate::text::TextLine;

/// Live values shown by the overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct HudStatus<'a> {
    pub title: &'a str,
    pub fps: f64,
    pub frame_time_ms: f64,
    pub projection: ProjectionMode,
    pub extension_pass: bool,
    /// Preformatted key hints, e.g. `"P projection  1 petals"`.
    pub hints: Option<&'a str>,
}

fn projection_label(mode: ProjectionMode) -> &'static str {
    match mode {
        ProjectionMode::Perspective => "perspective",
        ProjectionMode::Orthographic => "orthographic",
    }
}

/// Overlay lines, top to bottom, with the last line's baseline at
/// `(hud.x, hud.y)` and earlier lines stacked above it.
pub fn hud_lines(hud: &HudConfig, status: &HudStatus<'_>, line_height: f32) -> Vec<TextLine> {
    let mut texts = vec![status.title.to_string()];
    if hud.show_fps {
        texts.push(format!(
            "{:.0} fps  {:.2} ms",
            status.fps, status.frame_time_ms
        ));
        texts.push(format!(
            "{}  petals x{}",
            projection_label(status.projection),
            if status.extension_pass { 2 } else { 1 }
        ));
    }
    if let Some(hints) = status.hints.filter(|h| !h.is_empty()) {
        texts.push(hints.to_string());
    }

    let last = texts.len().saturating_sub(1);
    texts
        .into_iter()
        .enumerate()
        .map(|(i, text)| TextLine {
            text,
            x: hud.x,
            y: hud.y + (last - i) as f32 * line_height,
        })
        .collect()
}
