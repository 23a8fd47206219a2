//! Model/view/projection helpers on top of `glam`.
//!
//! All matrices are column-major `glam::Mat4`, right-handed, with the wgpu
//! clip-space depth range of `[0, 1]`.

use glam::{Mat3, Mat4, Vec3};

/// Rotation about +Z after `elapsed` seconds at `degrees_per_second`.
///
/// Returns the identity if the product is not finite.
pub fn spin_z(elapsed: f32, degrees_per_second: f32) -> Mat4 {
    let angle = (elapsed * degrees_per_second).to_radians();
    if angle.is_finite() {
        Mat4::from_rotation_z(angle)
    } else {
        Mat4::IDENTITY
    }
}

/// Drop the translation part of a view matrix so the skybox stays centered
/// on the camera.
pub fn strip_translation(view: Mat4) -> Mat4 {
    Mat4::from_mat3(Mat3::from_mat4(view))
}

/// Skybox view: `view` without translation, scaled up under an orthographic
/// `projection` so the unit cube still covers the whole viewport.
///
/// Perspective projections (`z_axis.w != 0`) keep the unit cube.
pub fn skybox_view(view: Mat4, projection: Mat4) -> Mat4 {
    let rotation = strip_translation(view);
    if projection.z_axis.w != 0.0 {
        return rotation;
    }
    // Radius of the viewport corner; a cube of this half-size contains it
    // under any rotation.
    let half_width = 1.0 / projection.x_axis.x.abs();
    let half_height = 1.0 / projection.y_axis.y.abs();
    let extent = half_width.hypot(half_height);
    if extent.is_finite() && extent > 1.0 {
        rotation * Mat4::from_scale(Vec3::splat(extent))
    } else {
        rotation
    }
}

/// Uniform scale followed by a translation.
pub fn scale_then_translate(scale: f32, offset: Vec3) -> Mat4 {
    Mat4::from_translation(offset) * Mat4::from_scale(Vec3::splat(scale))
}

/// Pixel-space orthographic projection with the origin at the bottom-left.
pub fn screen_projection(width: f32, height: f32) -> Mat4 {
    Mat4::orthographic_rh(0.0, width.max(1.0), 0.0, height.max(1.0), -1.0, 1.0)
}

/// Replace a non-finite aspect ratio (minimized window, zero height) with 1.0.
pub fn sanitize_aspect(aspect: f32) -> f32 {
    if aspect.is_finite() && aspect > 0.0 {
        aspect
    } else {
        1.0
    }
}

// =============================================================================
// Tests
// =============================================================================
