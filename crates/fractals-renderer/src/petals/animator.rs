use glam::Mat4;

use fractals_config::schema::PetalConfig;

/// One petal draw: the accumulated model matrix at the time it was drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PetalInstance {
    /// Rotation relative to the flower base, in degrees.
    pub angle_degrees: f32,
    pub model: Mat4,
    pub color: [f32; 4],
}

/// Both passes of one frame, in draw order.
#[derive(Debug, Clone, Default)]
pub struct PetalRing {
    pub primary: Vec<PetalInstance>,
    /// Empty when the extension pass is off.
    pub extension: Vec<PetalInstance>,
}

/// Pulse shared by every petal: `max(floor, sin(t) / 2 + 0.5)` on red and
/// blue. Green carries the same pulse only when `use_green` is set.
pub fn petal_color(elapsed: f32, floor: f32, use_green: bool) -> [f32; 4] {
    let t = if elapsed.is_finite() { elapsed } else { 0.0 };
    let c = (t.sin() / 2.0 + 0.5).max(floor).min(1.0);
    let g = if use_green { c } else { 0.0 };
    [c, g, c, 1.0]
}

/// Computes the petal ring for a frame.
#[derive(Debug, Clone)]
pub struct PetalAnimator {
    pub count: u32,
    pub step_degrees: f32,
    pub color_floor: f32,
    pub use_green_channel: bool,
    extension_pass: bool,
}

impl PetalAnimator {
    pub fn from_config(config: &PetalConfig) -> Self {
        Self {
            count: config.count,
            step_degrees: config.step_degrees,
            color_floor: config.color_floor.clamp(0.0, 1.0),
            use_green_channel: config.use_green_channel,
            extension_pass: config.extension_pass,
        }
    }

    pub fn extension_pass(&self) -> bool {
        self.extension_pass
    }

    pub fn toggle_extension_pass(&mut self) -> bool {
        self.extension_pass = !self.extension_pass;
        self.extension_pass
    }

    /// Build both passes starting from `base` (the flower's spin).
    ///
    /// Each petal multiplies one more step into a single accumulator, so
    /// petal `k` of the primary pass sits at `k * step`. The extension pass
    /// keeps the same accumulator and walks back by `-step`, ending at the
    /// base orientation.
    pub fn ring(&self, elapsed: f32, base: Mat4) -> PetalRing {
        let color = petal_color(elapsed, self.color_floor, self.use_green_channel);
        let forward = Mat4::from_rotation_z(self.step_degrees.to_radians());
        let backward = Mat4::from_rotation_z((-self.step_degrees).to_radians());

        let mut model = base;
        let mut angle = 0.0f32;
        let mut emit = |step: &Mat4, delta: f32| {
            model *= *step;
            angle += delta;
            PetalInstance {
                angle_degrees: angle,
                model,
                color,
            }
        };

        let primary: Vec<_> = (0..self.count)
            .map(|_| emit(&forward, self.step_degrees))
            .collect();
        let extension = if self.extension_pass {
            (0..self.count)
                .map(|_| emit(&backward, -self.step_degrees))
                .collect()
        } else {
            Vec::new()
        };

        PetalRing { primary, extension }
    }
}

impl Default for PetalAnimator {
    fn default() -> Self {
        Self::from_config(&PetalConfig::default())
    }
}
