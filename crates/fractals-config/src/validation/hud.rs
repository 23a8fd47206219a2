//! Validation for the text overlay.

use crate::schema::FractalsConfig;

use super::helpers::{validate_color, validate_positive, validate_range};

/// Validate HUD constraints.
pub(crate) fn validate_hud(errors: &mut Vec<String>, config: &FractalsConfig) {
    let hud = &config.hud;

    validate_range(errors, "hud.pixel_height", hud.pixel_height, 8, 256);
    validate_positive(errors, "hud.scale", hud.scale);
    validate_color(errors, "hud.color", &hud.color);
    if !hud.x.is_finite() || !hud.y.is_finite() {
        errors.push(format!("hud position ({}, {}) must be finite", hud.x, hud.y));
    }
}
