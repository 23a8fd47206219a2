//! Validation for scene content: frame timing, ground, icosphere, petals.

use crate::schema::FractalsConfig;

use super::helpers::{validate_color, validate_positive, validate_range, validate_range_f32};

/// Validate top-level scene and ground constraints.
pub(crate) fn validate_scene(errors: &mut Vec<String>, config: &FractalsConfig) {
    let scene = &config.scene;

    validate_color(errors, "scene.clear_color", &scene.clear_color);
    validate_range_f32(errors, "scene.max_frame_delta", scene.max_frame_delta, 0.001, 1.0);
    if scene.light_direction.iter().all(|c| *c == 0.0) {
        errors.push("scene.light_direction must not be the zero vector".into());
    }

    validate_positive(errors, "scene.ground.size", scene.ground.size);
    validate_positive(errors, "scene.ground.scale", scene.ground.scale);
    validate_positive(errors, "scene.ground.uv_repeat", scene.ground.uv_repeat);
}

/// Validate icosphere constraints.
///
/// Subdivision levels above 6 are accepted; the generator warns about them.
pub(crate) fn validate_icosphere(errors: &mut Vec<String>, config: &FractalsConfig) {
    let sphere = &config.scene.icosphere;

    validate_positive(errors, "scene.icosphere.radius", sphere.radius);
    validate_range(errors, "scene.icosphere.subdivisions", sphere.subdivisions, 0, 8);
    validate_color(errors, "scene.icosphere.color", &sphere.color);
    if !sphere.spin_degrees_per_second.is_finite() {
        errors.push("scene.icosphere.spin_degrees_per_second must be finite".into());
    }
}

/// Validate petal ring constraints.
pub(crate) fn validate_petals(errors: &mut Vec<String>, config: &FractalsConfig) {
    let petals = &config.scene.petals;

    validate_range(errors, "scene.petals.count", petals.count, 1, 64);
    validate_range_f32(
        errors,
        "scene.petals.step_degrees",
        petals.step_degrees,
        -360.0,
        360.0,
    );
    validate_range_f32(errors, "scene.petals.color_floor", petals.color_floor, 0.0, 1.0);
    validate_positive(errors, "scene.petals.length", petals.length);
    validate_positive(errors, "scene.petals.width", petals.width);
    validate_range(errors, "scene.petals.segments", petals.segments, 2, 256);
}
