//! Per-frame update and render.

use fractals_renderer::{hud_lines, FrameInputs, HudStatus, RendererError};

use super::core::FractalsApp;

impl FractalsApp {
    /// Advance time, apply input and draw one frame.
    pub(super) fn render_frame(&mut self) {
        self.timer.begin_frame();
        let delta_time = self.clock.tick();
        self.process_input(delta_time);

        let Some(ref mut rs) = self.render_state else {
            return;
        };

        let hud = &self.config.hud;
        let overlay = match rs.overlay_line_height(hud.scale) {
            Some(line_height) if self.hud_visible => {
                let status = HudStatus {
                    title: &self.config.window.title,
                    fps: self.timer.fps(),
                    frame_time_ms: self.timer.frame_time_ms(),
                    projection: self.camera.projection(),
                    extension_pass: self.petals.extension_pass(),
                    hints: Some(self.hints.as_str()),
                };
                hud_lines(hud, &status, line_height)
            }
            _ => Vec::new(),
        };

        let frame = FrameInputs {
            camera: &self.camera,
            elapsed: self.clock.elapsed(),
            petals: &self.petals,
            scene: &self.config.scene,
            overlay: &overlay,
            overlay_scale: hud.scale,
        };

        match rs.render_frame(&frame) {
            Ok(()) => {}
            Err(RendererError::SurfaceError(e)) => {
                tracing::error!("Render error: {e}");
                self.should_exit = true;
            }
            Err(e) => tracing::error!("Render error: {e}"),
        }
    }
}
