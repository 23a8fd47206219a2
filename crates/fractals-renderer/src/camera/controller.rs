use glam::{Mat4, Vec3};

use fractals_config::schema::{CameraConfig, ProjectionMode};

use super::mouse::MouseTracker;
use crate::transform::sanitize_aspect;

/// Pitch is held inside `[-PITCH_LIMIT, PITCH_LIMIT]` degrees so the view
/// never flips over the pole.
pub const PITCH_LIMIT: f32 = 89.0;

/// Keyboard movement directions relative to the camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraMovement {
    Forward,
    Backward,
    Left,
    Right,
}

/// Position, orientation and lens of the scene camera.
///
/// `front`, `right` and `up` always form an orthonormal basis derived from
/// `yaw`/`pitch`; they are recomputed after every orientation change.
#[derive(Debug, Clone)]
pub struct Camera {
    pub position: Vec3,
    front: Vec3,
    up: Vec3,
    right: Vec3,
    world_up: Vec3,
    yaw: f32,
    pitch: f32,
    zoom: f32,
    zoom_min: f32,
    zoom_max: f32,
    pub movement_speed: f32,
    pub mouse_sensitivity: f32,
    near: f32,
    far: f32,
    projection: ProjectionMode,
    ortho_half_height: f32,
    mouse: MouseTracker,
}

impl Camera {
    pub fn from_config(config: &CameraConfig) -> Self {
        let zoom_min = config.zoom_min.min(config.zoom_max);
        let zoom_max = config.zoom_max.max(config.zoom_min);
        let mut camera = Self {
            position: Vec3::from_array(config.position),
            front: Vec3::NEG_Z,
            up: Vec3::Y,
            right: Vec3::X,
            world_up: Vec3::Y,
            yaw: config.yaw,
            pitch: config.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT),
            zoom: config.zoom.clamp(zoom_min, zoom_max),
            zoom_min,
            zoom_max,
            movement_speed: config.movement_speed,
            mouse_sensitivity: config.mouse_sensitivity,
            near: config.near,
            far: config.far,
            projection: config.projection,
            ortho_half_height: config.ortho_half_height,
            mouse: MouseTracker::new(),
        };
        camera.update_vectors();
        camera
    }

    /// Move along the view basis, scaled by `movement_speed * delta_time`.
    ///
    /// Negative or non-finite deltas are ignored. Position is unbounded.
    pub fn process_keyboard(&mut self, direction: CameraMovement, delta_time: f32) {
        if !delta_time.is_finite() || delta_time <= 0.0 {
            return;
        }
        let velocity = self.movement_speed * delta_time;
        match direction {
            CameraMovement::Forward => self.position += self.front * velocity,
            CameraMovement::Backward => self.position -= self.front * velocity,
            CameraMovement::Left => self.position -= self.right * velocity,
            CameraMovement::Right => self.position += self.right * velocity,
        }
    }

    /// Apply a look offset in cursor units.
    pub fn process_mouse_movement(&mut self, x_offset: f32, y_offset: f32) {
        if !x_offset.is_finite() || !y_offset.is_finite() {
            return;
        }
        self.yaw += x_offset * self.mouse_sensitivity;
        self.pitch = (self.pitch + y_offset * self.mouse_sensitivity).clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.update_vectors();
    }

    /// Feed an absolute cursor position through the first-mouse guard.
    ///
    /// Returns `false` when the sample was only recorded.
    pub fn process_cursor_position(&mut self, x: f32, y: f32) -> bool {
        match self.mouse.offset(x, y) {
            Some((dx, dy)) => {
                self.process_mouse_movement(dx, dy);
                true
            }
            None => false,
        }
    }

    /// Treat the next cursor sample as the first one (after (re)capture).
    pub fn rearm_first_mouse(&mut self) {
        self.mouse.reset();
    }

    /// Scroll wheel zoom: narrows the field of view on scroll up.
    pub fn process_scroll(&mut self, y_offset: f32) {
        if !y_offset.is_finite() {
            return;
        }
        self.zoom = (self.zoom - y_offset).clamp(self.zoom_min, self.zoom_max);
    }

    /// World-to-view transform looking along `front`.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    /// Projection for the current mode. `aspect_ratio` is width / height.
    pub fn projection_matrix(&self, aspect_ratio: f32) -> Mat4 {
        let aspect = sanitize_aspect(aspect_ratio);
        match self.projection {
            ProjectionMode::Perspective => {
                Mat4::perspective_rh(self.zoom.to_radians(), aspect, self.near, self.far)
            }
            ProjectionMode::Orthographic => {
                let h = self.ortho_half_height;
                let w = h * aspect;
                Mat4::orthographic_rh(-w, w, -h, h, self.near, self.far)
            }
        }
    }

    pub fn projection(&self) -> ProjectionMode {
        self.projection
    }

    pub fn toggle_projection(&mut self) -> ProjectionMode {
        self.projection = self.projection.toggled();
        self.projection
    }

    pub fn front(&self) -> Vec3 {
        self.front
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    fn update_vectors(&mut self) {
        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        self.front = Vec3::new(yaw.cos() * pitch.cos(), pitch.sin(), yaw.sin() * pitch.cos()).normalize();
        self.right = self.front.cross(self.world_up).normalize();
        self.up = self.right.cross(self.front).normalize();
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::from_config(&CameraConfig::default())
    }
}
