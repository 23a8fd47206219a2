//! Per-frame input queue and held-key state.
//!
//! Window and device callbacks only enqueue [`InputEvent`]s; the queue is
//! drained once at the start of each frame so every input is applied with
//! that frame's delta time.

use std::collections::{HashSet, VecDeque};

use winit::event::MouseScrollDelta;

use fractals_common::Action;
use fractals_renderer::CameraMovement;

/// Pixels per scroll line for touchpads reporting pixel deltas.
const PIXELS_PER_LINE: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) enum InputEvent {
    Action { action: Action, pressed: bool },
    /// Raw relative mouse motion.
    MouseMotion { dx: f64, dy: f64 },
    /// Vertical scroll in lines, positive away from the user.
    Scroll(f32),
}

/// Queued events, currently held movement actions and the virtual cursor.
#[derive(Debug, Default)]
pub(super) struct InputState {
    queue: VecDeque<InputEvent>,
    held: HashSet<Action>,
    cursor: (f64, f64),
}

impl InputState {
    pub(super) fn new() -> Self {
        Self::default()
    }

    pub(super) fn push(&mut self, event: InputEvent) {
        self.queue.push_back(event);
    }

    /// Take every queued event in arrival order.
    pub(super) fn drain(&mut self) -> Vec<InputEvent> {
        self.queue.drain(..).collect()
    }

    #[cfg(test)]
    pub(super) fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Track press/release of a held action. Returns false for one-shot
    /// actions, which the caller dispatches instead.
    pub(super) fn set_held(&mut self, action: Action, pressed: bool) -> bool {
        if !action.is_held() {
            return false;
        }
        if pressed {
            self.held.insert(action);
        } else {
            self.held.remove(&action);
        }
        true
    }

    pub(super) fn is_held(&self, action: Action) -> bool {
        self.held.contains(&action)
    }

    /// Forget every held key (focus loss, capture release).
    pub(super) fn release_all(&mut self) {
        self.held.clear();
    }

    /// Camera movements for the held keys, in a fixed order.
    pub(super) fn movements(&self) -> Vec<CameraMovement> {
        [
            Action::MoveForward,
            Action::MoveBackward,
            Action::MoveLeft,
            Action::MoveRight,
        ]
        .into_iter()
        .filter(|a| self.held.contains(a))
        .filter_map(movement_for)
        .collect()
    }

    /// Accumulate relative motion into an unbounded virtual cursor position.
    pub(super) fn move_cursor(&mut self, dx: f64, dy: f64) -> (f64, f64) {
        if dx.is_finite() && dy.is_finite() {
            self.cursor.0 += dx;
            self.cursor.1 += dy;
        }
        self.cursor
    }
}

pub(super) fn movement_for(action: Action) -> Option<CameraMovement> {
    match action {
        Action::MoveForward => Some(CameraMovement::Forward),
        Action::MoveBackward => Some(CameraMovement::Backward),
        Action::MoveLeft => Some(CameraMovement::Left),
        Action::MoveRight => Some(CameraMovement::Right),
        _ => None,
    }
}

/// Convert a wheel event to lines.
pub(super) fn scroll_lines(delta: MouseScrollDelta) -> f32 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => y,
        MouseScrollDelta::PixelDelta(pos) => (pos.y / PIXELS_PER_LINE) as f32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::PhysicalPosition;

    #[test]
    fn queue_preserves_order_and_empties() {
        let mut input = InputState::new();
        input.push(InputEvent::Scroll(1.0));
        input.push(InputEvent::MouseMotion { dx: 1.0, dy: 2.0 });
        assert_eq!(input.pending(), 2);
        let events = input.drain();
        assert_eq!(events[0], InputEvent::Scroll(1.0));
        assert_eq!(events[1], InputEvent::MouseMotion { dx: 1.0, dy: 2.0 });
        assert_eq!(input.pending(), 0);
        assert!(input.drain().is_empty());
    }

    #[test]
    fn held_actions_track_press_and_release() {
        let mut input = InputState::new();
        assert!(input.set_held(Action::MoveForward, true));
        assert!(input.is_held(Action::MoveForward));
        assert!(input.set_held(Action::MoveForward, false));
        assert!(!input.is_held(Action::MoveForward));
    }

    #[test]
    fn one_shot_actions_are_not_held() {
        let mut input = InputState::new();
        assert!(!input.set_held(Action::ToggleProjection, true));
        assert!(!input.is_held(Action::ToggleProjection));
    }

    #[test]
    fn movements_follow_held_keys() {
        let mut input = InputState::new();
        input.set_held(Action::MoveRight, true);
        input.set_held(Action::MoveForward, true);
        assert_eq!(
            input.movements(),
            vec![CameraMovement::Forward, CameraMovement::Right]
        );
        input.release_all();
        assert!(input.movements().is_empty());
    }

    #[test]
    fn virtual_cursor_accumulates() {
        let mut input = InputState::new();
        input.move_cursor(3.0, -2.0);
        assert_eq!(input.move_cursor(1.0, 1.0), (4.0, -1.0));
    }

    #[test]
    fn virtual_cursor_ignores_non_finite() {
        let mut input = InputState::new();
        input.move_cursor(1.0, 1.0);
        assert_eq!(input.move_cursor(f64::NAN, 5.0), (1.0, 1.0));
    }

    #[test]
    fn scroll_lines_from_both_delta_kinds() {
        assert_eq!(scroll_lines(MouseScrollDelta::LineDelta(0.0, 2.0)), 2.0);
        assert_eq!(
            scroll_lines(MouseScrollDelta::PixelDelta(PhysicalPosition::new(0.0, -40.0))),
            -2.0
        );
    }

    #[test]
    fn only_movement_actions_map_to_camera() {
        assert_eq!(movement_for(Action::MoveLeft), Some(CameraMovement::Left));
        assert_eq!(movement_for(Action::Quit), None);
    }
}
