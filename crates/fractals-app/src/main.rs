mod app_state;
mod cli;

use std::path::Path;

use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;
use winit::error::EventLoopError;
use winit::event_loop::{ControlFlow, EventLoop};

use fractals_common::{ConfigError, PlatformError};
use fractals_config::{toml_loader, validation, FractalsConfig};

/// Load the config from `--config` or the platform default location.
///
/// A file that parses but fails validation is still returned; the caller
/// reports the violations once logging is up.
fn load_config(path: Option<&str>) -> Result<FractalsConfig, ConfigError> {
    match path {
        Some(path) => toml_loader::load_from_path(Path::new(path)),
        None => toml_loader::load_default(),
    }
}

/// Create the event loop and drive the app until it exits.
fn run(app: &mut app_state::FractalsApp) -> fractals_common::Result<()> {
    let event_loop = EventLoop::new().map_err(event_loop_error)?;
    // Continuous animation: redraw as fast as presentation allows.
    event_loop.set_control_flow(ControlFlow::Poll);

    tracing::info!("Entering event loop");
    event_loop.run_app(app).map_err(event_loop_error)?;
    Ok(())
}

fn event_loop_error(e: EventLoopError) -> PlatformError {
    PlatformError::WindowError(format!("event loop: {e}"))
}

fn main() {
    // Parse CLI arguments
    let args = cli::parse();

    // Relative asset paths in the config resolve against this directory.
    if let Some(ref dir) = args.directory {
        if let Err(e) = std::env::set_current_dir(dir) {
            eprintln!("Failed to change directory to {dir}: {e}");
        }
    }

    // Load config before logging so its level can seed the filter
    let loaded = load_config(args.config.as_deref());
    let config_directive = match &loaded {
        Ok(config) => config.logging.directive(),
        Err(_) => "fractals=info".to_string(),
    };

    // Initialize logging
    let log_directive = cli::log_directive(args.log_level.as_deref(), &config_directive);
    let filter = match log_directive.parse::<Directive>() {
        Ok(directive) => EnvFilter::from_default_env().add_directive(directive),
        Err(e) => {
            eprintln!("Invalid log directive '{log_directive}': {e}");
            EnvFilter::new("fractals=info")
        }
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!("Fractals v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {path}");
    }
    let config = match loaded {
        Ok(config) => {
            if let Err(e) = validation::validate(&config) {
                tracing::warn!("Config has invalid values, continuing with them: {e}");
            }
            config
        }
        Err(e) => {
            tracing::warn!("Config load failed, using defaults: {e}");
            FractalsConfig::default()
        }
    };
    tracing::info!(
        "Config loaded (icosphere subdivisions: {}, petals: {})",
        config.scene.icosphere.subdivisions,
        config.scene.petals.count
    );

    if args.print_config {
        println!("{}", fractals_config::config_to_json(&config));
        return;
    }

    // Build keybind registry from config
    let registry = fractals_platform::KeybindRegistry::from_config(&config.keybinds);
    tracing::info!("Keybind registry loaded ({} bindings)", registry.len());

    let mut app = app_state::FractalsApp::new(config, registry);
    if let Err(e) = run(&mut app) {
        tracing::error!("{e}");
        std::process::exit(1);
    }
    tracing::info!("Shutdown complete");
}
