//! Action dispatch and per-frame input application.

use fractals_common::Action;

use super::core::FractalsApp;
use super::input::InputEvent;

impl FractalsApp {
    /// Apply every queued input event, then move the camera for held keys.
    pub(super) fn process_input(&mut self, delta_time: f32) {
        for event in self.input.drain() {
            match event {
                InputEvent::Action { action, pressed } => {
                    if !self.input.set_held(action, pressed) && pressed {
                        self.dispatch(action);
                    }
                }
                InputEvent::MouseMotion { dx, dy } => {
                    if self.mouse_captured {
                        let (x, y) = self.input.move_cursor(dx, dy);
                        self.camera.process_cursor_position(x as f32, y as f32);
                    }
                }
                InputEvent::Scroll(lines) => {
                    self.camera.process_scroll(lines);
                }
            }
        }

        for movement in self.input.movements() {
            self.camera.process_keyboard(movement, delta_time);
        }
    }

    /// Dispatch a one-shot [`Action`].
    pub(super) fn dispatch(&mut self, action: Action) {
        match action {
            Action::ToggleProjection => {
                let mode = self.camera.toggle_projection();
                tracing::info!(?mode, "projection toggled");
            }
            Action::TogglePetalExtension => {
                let enabled = self.petals.toggle_extension_pass();
                tracing::info!(enabled, "petal extension pass toggled");
            }
            Action::ToggleMouseCapture => {
                let captured = !self.mouse_captured;
                self.set_mouse_capture(captured);
                if !captured {
                    self.input.release_all();
                }
            }
            Action::ToggleHud => {
                self.hud_visible = !self.hud_visible;
                tracing::debug!(visible = self.hud_visible, "hud toggled");
            }
            Action::Quit => {
                tracing::info!("Quit requested");
                self.should_exit = true;
            }
            Action::MoveForward | Action::MoveBackward | Action::MoveLeft | Action::MoveRight => {
                // Held actions never reach dispatch; they are tracked by InputState.
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use fractals_config::schema::ProjectionMode;
    use fractals_config::FractalsConfig;
    use fractals_platform::KeybindRegistry;

    use super::*;

    fn app() -> FractalsApp {
        let config = FractalsConfig::default();
        let registry = KeybindRegistry::from_config(&config.keybinds);
        FractalsApp::new(config, registry)
    }

    #[test]
    fn quit_sets_exit_flag() {
        let mut app = app();
        app.dispatch(Action::Quit);
        assert!(app.should_exit);
    }

    #[test]
    fn toggles_flip_state() {
        let mut app = app();
        let extension = app.petals.extension_pass();
        app.dispatch(Action::TogglePetalExtension);
        assert_eq!(app.petals.extension_pass(), !extension);

        app.dispatch(Action::ToggleProjection);
        assert_eq!(app.camera.projection(), ProjectionMode::Orthographic);

        let hud = app.hud_visible;
        app.dispatch(Action::ToggleHud);
        assert_eq!(app.hud_visible, !hud);
    }

    #[test]
    fn queued_toggle_applies_on_press_only() {
        let mut app = app();
        let extension = app.petals.extension_pass();
        app.input.push(InputEvent::Action {
            action: Action::TogglePetalExtension,
            pressed: true,
        });
        app.input.push(InputEvent::Action {
            action: Action::TogglePetalExtension,
            pressed: false,
        });
        app.process_input(0.016);
        assert_eq!(app.petals.extension_pass(), !extension);
    }

    #[test]
    fn held_forward_moves_camera_each_frame() {
        let mut app = app();
        let start = app.camera.position;
        app.input.push(InputEvent::Action {
            action: Action::MoveForward,
            pressed: true,
        });
        app.process_input(0.1);
        let after_one = app.camera.position;
        assert!(after_one.distance(start) > 0.0);

        app.process_input(0.1);
        assert!(app.camera.position.distance(after_one) > 0.0);

        app.input.push(InputEvent::Action {
            action: Action::MoveForward,
            pressed: false,
        });
        app.process_input(0.1);
        let stopped = app.camera.position;
        app.process_input(0.1);
        assert_eq!(app.camera.position, stopped);
    }

    #[test]
    fn mouse_motion_ignored_when_not_captured() {
        let mut app = app();
        let yaw = app.camera.yaw();
        app.input.push(InputEvent::MouseMotion { dx: 10.0, dy: 0.0 });
        app.input.push(InputEvent::MouseMotion { dx: 10.0, dy: 0.0 });
        app.process_input(0.016);
        assert_eq!(app.camera.yaw(), yaw);
    }

    #[test]
    fn mouse_motion_turns_camera_after_first_sample() {
        let mut app = app();
        app.mouse_captured = true;
        let yaw = app.camera.yaw();
        app.input.push(InputEvent::MouseMotion { dx: 10.0, dy: 0.0 });
        app.process_input(0.016);
        // First sample only arms the tracker.
        assert_eq!(app.camera.yaw(), yaw);
        app.input.push(InputEvent::MouseMotion { dx: 10.0, dy: 0.0 });
        app.process_input(0.016);
        assert!(app.camera.yaw() > yaw);
    }

    #[test]
    fn scroll_zooms_in() {
        let mut app = app();
        let zoom = app.camera.zoom();
        app.input.push(InputEvent::Scroll(5.0));
        app.process_input(0.016);
        assert!(app.camera.zoom() < zoom);
    }
}
