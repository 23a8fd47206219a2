//! Graceful shutdown: release input capture and GPU resources.

use super::core::FractalsApp;

impl FractalsApp {
    /// Tear down in reverse order of setup. Idempotent.
    pub(super) fn shutdown(&mut self) {
        if self.render_state.is_none() && !self.mouse_captured {
            return;
        }
        tracing::info!("Initiating graceful shutdown");

        if self.mouse_captured {
            self.set_mouse_capture(false);
        }
        self.input.release_all();

        if let Some(mut rs) = self.render_state.take() {
            rs.release();
        }

        tracing::info!("Graceful shutdown complete");
    }
}

#[cfg(test)]
mod tests {
    use crate::app_state::core::FractalsApp;
    use fractals_config::FractalsConfig;
    use fractals_platform::KeybindRegistry;

    #[test]
    fn shutdown_on_fresh_app_does_not_panic() {
        let config = FractalsConfig::default();
        let registry = KeybindRegistry::from_config(&config.keybinds);
        let mut app = FractalsApp::new(config, registry);
        app.shutdown();
        app.shutdown();
        assert!(app.render_state.is_none());
    }
}
