//! Rolling frame-rate statistics for the HUD.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

const MAX_SAMPLES: usize = 120;

/// Tracks recent frame durations for FPS display.
pub struct FrameTimer {
    frame_times: VecDeque<Duration>,
    last_frame: Option<Instant>,
}

impl FrameTimer {
    pub fn new() -> Self {
        Self {
            frame_times: VecDeque::with_capacity(MAX_SAMPLES),
            last_frame: None,
        }
    }

    /// Mark the start of a frame. The first call only sets the reference.
    pub fn begin_frame(&mut self) {
        let now = Instant::now();
        if let Some(last) = self.last_frame.replace(now) {
            self.record(now - last);
        }
    }

    /// Push one frame duration into the window.
    pub fn record(&mut self, frame_time: Duration) {
        if self.frame_times.len() == MAX_SAMPLES {
            self.frame_times.pop_front();
        }
        self.frame_times.push_back(frame_time);
    }

    fn total_secs(&self) -> f64 {
        self.frame_times.iter().map(Duration::as_secs_f64).sum()
    }

    /// Average frames per second over the window, 0 when unknown.
    pub fn fps(&self) -> f64 {
        let total = self.total_secs();
        if total <= 0.0 {
            return 0.0;
        }
        self.frame_times.len() as f64 / total
    }

    /// Average frame time in milliseconds.
    pub fn frame_time_ms(&self) -> f64 {
        if self.frame_times.is_empty() {
            return 0.0;
        }
        self.total_secs() / self.frame_times.len() as f64 * 1000.0
    }

    pub fn sample_count(&self) -> usize {
        self.frame_times.len()
    }
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_fps_is_zero() {
        let timer = FrameTimer::new();
        assert_eq!(timer.fps(), 0.0);
        assert_eq!(timer.frame_time_ms(), 0.0);
    }

    #[test]
    fn fps_from_recorded_frames() {
        let mut timer = FrameTimer::new();
        for _ in 0..10 {
            timer.record(Duration::from_millis(20));
        }
        assert!((timer.fps() - 50.0).abs() < 1e-6);
        assert!((timer.frame_time_ms() - 20.0).abs() < 1e-6);
    }

    #[test]
    fn first_begin_frame_records_nothing() {
        let mut timer = FrameTimer::new();
        timer.begin_frame();
        assert_eq!(timer.sample_count(), 0);
        std::thread::sleep(Duration::from_millis(1));
        timer.begin_frame();
        assert_eq!(timer.sample_count(), 1);
        assert!(timer.fps() > 0.0);
    }

    #[test]
    fn window_is_bounded() {
        let mut timer = FrameTimer::new();
        for i in 0..200 {
            timer.record(Duration::from_millis(if i < 100 { 100 } else { 10 }));
        }
        assert_eq!(timer.sample_count(), MAX_SAMPLES);
        // Only the newest 120 samples count: 20 slow + 100 fast.
        assert!((timer.frame_time_ms() - (20.0 * 100.0 + 100.0 * 10.0) / 120.0).abs() < 1e-6);
    }
}
