//! Frame-to-frame animation time.

use std::time::Instant;

/// Default upper bound on one frame's delta, in seconds.
pub const DEFAULT_MAX_FRAME_DELTA: f32 = 0.25;

/// Monotonic animation clock advanced once per frame.
///
/// Deltas are clamped to `[0, max_delta]`, so a debugger pause or a
/// backwards wall clock never produces a huge or negative step, and
/// `elapsed` is the sum of clamped deltas.
#[derive(Debug, Clone)]
pub struct AnimationClock {
    origin: Instant,
    last: Option<f64>,
    elapsed: f32,
    delta: f32,
    max_delta: f32,
}

impl AnimationClock {
    pub fn new(max_delta: f32) -> Self {
        let max_delta = if max_delta.is_finite() && max_delta > 0.0 {
            max_delta
        } else {
            DEFAULT_MAX_FRAME_DELTA
        };
        Self {
            origin: Instant::now(),
            last: None,
            elapsed: 0.0,
            delta: 0.0,
            max_delta,
        }
    }

    /// Advance using the wall clock.
    pub fn tick(&mut self) -> f32 {
        let now = self.origin.elapsed().as_secs_f64();
        self.tick_at(now)
    }

    /// Advance to `now` seconds. The first call only sets the reference
    /// point and yields a zero delta.
    pub fn tick_at(&mut self, now: f64) -> f32 {
        let raw = match self.last {
            Some(last) if now.is_finite() => (now - last) as f32,
            _ => 0.0,
        };
        if now.is_finite() {
            self.last = Some(now);
        }
        self.delta = if raw.is_finite() {
            raw.clamp(0.0, self.max_delta)
        } else {
            0.0
        };
        self.elapsed += self.delta;
        self.delta
    }

    /// Seconds of animation since startup.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Clamped delta of the most recent tick.
    pub fn delta(&self) -> f32 {
        self.delta
    }

    pub fn max_delta(&self) -> f32 {
        self.max_delta
    }
}

impl Default for AnimationClock {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_FRAME_DELTA)
    }
}
