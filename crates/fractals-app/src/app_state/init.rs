//! Window creation and renderer initialization.

use std::sync::Arc;

use winit::event_loop::ActiveEventLoop;
use winit::window::{CursorGrabMode, Fullscreen, WindowAttributes};

use fractals_common::{FractalsError, PlatformError};
use fractals_config::schema::StartupMode;
use fractals_renderer::RenderState;

use super::core::FractalsApp;

impl FractalsApp {
    /// Create the window and initialize the GPU renderer.
    ///
    /// Any error is fatal: the caller exits the event loop.
    pub(super) fn initialize_window(
        &mut self,
        event_loop: &ActiveEventLoop,
    ) -> fractals_common::Result<()> {
        let window_config = &self.config.window;
        let mut attrs = WindowAttributes::default()
            .with_title(window_config.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(
                window_config.width as f64,
                window_config.height as f64,
            ));
        match window_config.startup_mode {
            StartupMode::Windowed => {}
            StartupMode::Maximized => attrs = attrs.with_maximized(true),
            StartupMode::Fullscreen => {
                attrs = attrs.with_fullscreen(Some(Fullscreen::Borderless(None)));
            }
        }

        let window = event_loop
            .create_window(attrs)
            .map(Arc::new)
            .map_err(|e| PlatformError::WindowError(e.to_string()))?;

        let render_state = pollster::block_on(RenderState::new(window.clone(), &self.config))
            .map_err(|e| FractalsError::Renderer(e.to_string()))?;
        self.render_state = Some(render_state);

        self.window = Some(window);
        self.set_mouse_capture(true);
        tracing::info!("Window and renderer initialized");
        Ok(())
    }

    /// Grab and hide the cursor for mouse look, or give it back.
    ///
    /// Confined grab is tried first and Locked second; platforms that
    /// support neither keep working with a visible, free cursor.
    pub(super) fn set_mouse_capture(&mut self, captured: bool) {
        let Some(window) = &self.window else {
            return;
        };

        if captured {
            let grab = window
                .set_cursor_grab(CursorGrabMode::Confined)
                .or_else(|_| window.set_cursor_grab(CursorGrabMode::Locked));
            if let Err(e) = grab {
                tracing::warn!("Cursor grab unavailable: {e}");
            }
        } else if let Err(e) = window.set_cursor_grab(CursorGrabMode::None) {
            tracing::warn!("Cursor release failed: {e}");
        }
        window.set_cursor_visible(!captured);

        self.mouse_captured = captured;
        self.camera.rearm_first_mouse();
        tracing::debug!(captured, "mouse capture changed");
    }
}
