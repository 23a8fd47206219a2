//! `ApplicationHandler` implementation for the winit event loop.

use winit::application::ApplicationHandler;
use winit::event::{DeviceEvent, DeviceId, ElementState, KeyEvent, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::PhysicalKey;
use winit::window::WindowId;

use fractals_platform::{normalize_key_code, KeyCombo};

use super::core::FractalsApp;
use super::input::{scroll_lines, InputEvent};

impl ApplicationHandler for FractalsApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if let Err(e) = self.initialize_window(event_loop) {
            tracing::error!("Startup failed: {e}");
            event_loop.exit();
            return;
        }

        self.request_redraw();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Window close requested");
                self.should_exit = true;
            }

            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    if let Some(ref mut rs) = self.render_state {
                        rs.resize(size.width, size.height);
                    }
                }
            }

            WindowEvent::ModifiersChanged(new_modifiers) => {
                self.modifiers = new_modifiers.state();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                self.handle_keyboard_input(event);
            }

            WindowEvent::MouseWheel { delta, .. } => {
                self.input.push(InputEvent::Scroll(scroll_lines(delta)));
            }

            WindowEvent::Focused(false) => {
                self.input.release_all();
            }

            WindowEvent::RedrawRequested => {
                if self.should_exit {
                    self.shutdown();
                    event_loop.exit();
                    return;
                }
                self.render_frame();
            }

            _ => {}
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        if let DeviceEvent::MouseMotion { delta: (dx, dy) } = event {
            if self.mouse_captured {
                self.input.push(InputEvent::MouseMotion { dx, dy });
            }
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.should_exit {
            self.shutdown();
            event_loop.exit();
            return;
        }
        self.request_redraw();
    }
}

impl FractalsApp {
    /// Resolve a physical key through the registry and queue the action.
    fn handle_keyboard_input(&mut self, event: KeyEvent) {
        let KeyEvent {
            physical_key,
            state,
            repeat,
            ..
        } = event;
        let PhysicalKey::Code(code) = physical_key else {
            return;
        };
        let pressed = state == ElementState::Pressed;

        let key = normalize_key_code(&format!("{code:?}"));
        let combo = KeyCombo::from_winit(
            self.modifiers.control_key(),
            self.modifiers.alt_key(),
            self.modifiers.shift_key(),
            self.modifiers.super_key(),
            key,
        );
        let Some(action) = self.registry.resolve(&combo) else {
            return;
        };

        // Toggles fire once per physical press.
        if repeat && !action.is_held() {
            return;
        }
        self.input.push(InputEvent::Action { action, pressed });
    }

    pub(super) fn request_redraw(&self) {
        if let Some(ref window) = self.window {
            window.request_redraw();
        }
    }
}
