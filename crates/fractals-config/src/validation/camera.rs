//! Validation for camera settings.

use crate::schema::FractalsConfig;

use super::helpers::{validate_positive, validate_range_f32};

/// Validate camera constraints.
pub(crate) fn validate_camera(errors: &mut Vec<String>, config: &FractalsConfig) {
    let camera = &config.camera;

    validate_range_f32(errors, "camera.pitch", camera.pitch, -89.0, 89.0);
    validate_range_f32(errors, "camera.zoom_min", camera.zoom_min, 0.1, 179.0);
    validate_range_f32(errors, "camera.zoom_max", camera.zoom_max, 0.1, 179.0);
    if camera.zoom_min > camera.zoom_max {
        errors.push(format!(
            "camera.zoom_min = {} exceeds camera.zoom_max = {}",
            camera.zoom_min, camera.zoom_max
        ));
    }
    validate_positive(errors, "camera.movement_speed", camera.movement_speed);
    validate_positive(errors, "camera.mouse_sensitivity", camera.mouse_sensitivity);
    validate_positive(errors, "camera.near", camera.near);
    if camera.far.is_nan() || camera.far <= camera.near {
        errors.push(format!(
            "camera.far = {} must be greater than camera.near = {}",
            camera.far, camera.near
        ));
    }
    validate_positive(errors, "camera.ortho_half_height", camera.ortho_half_height);
}
