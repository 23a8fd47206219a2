/// Turns absolute cursor samples into look offsets.
///
/// The first sample after creation or [`reset`](Self::reset) only records
/// the position, so grabbing the cursor never produces a jump.
#[derive(Debug, Clone, Copy, Default)]
pub struct MouseTracker {
    last: Option<(f32, f32)>,
}

impl MouseTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a cursor sample and return `(x_offset, y_offset)` since the
    /// previous one. Y is flipped so moving the mouse up is positive.
    pub fn offset(&mut self, x: f32, y: f32) -> Option<(f32, f32)> {
        let previous = self.last.replace((x, y));
        previous.map(|(last_x, last_y)| (x - last_x, last_y - y))
    }

    /// Forget the last sample; the next one is treated as the first.
    pub fn reset(&mut self) {
        self.last = None;
    }

    /// Whether the next sample will be swallowed.
    #[cfg(test)]
    pub fn is_armed(&self) -> bool {
        self.last.is_none()
    }
}
