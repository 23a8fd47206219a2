//! Free-fly camera configuration types.

use serde::{Deserialize, Serialize};

/// Projection used for the 3D scene.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProjectionMode {
    #[default]
    Perspective,
    Orthographic,
}

impl ProjectionMode {
    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            ProjectionMode::Perspective => ProjectionMode::Orthographic,
            ProjectionMode::Orthographic => ProjectionMode::Perspective,
        }
    }
}

/// Initial camera state and input tuning.
///
/// Angles are in degrees. `zoom` is the vertical field of view used by the
/// perspective projection and is clamped into `[zoom_min, zoom_max]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub position: [f32; 3],
    pub yaw: f32,
    pub pitch: f32,
    pub zoom: f32,
    pub zoom_min: f32,
    pub zoom_max: f32,
    /// World units per second.
    pub movement_speed: f32,
    /// Degrees per pixel of cursor travel.
    pub mouse_sensitivity: f32,
    pub near: f32,
    pub far: f32,
    pub projection: ProjectionMode,
    /// Half of the visible world height in orthographic mode.
    pub ortho_half_height: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 3.0],
            yaw: -90.0,
            pitch: 0.0,
            zoom: 45.0,
            zoom_min: 1.0,
            zoom_max: 45.0,
            movement_speed: 2.5,
            mouse_sensitivity: 0.1,
            near: 0.1,
            far: 10000.0,
            projection: ProjectionMode::Perspective,
            ortho_half_height: 2.0,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
