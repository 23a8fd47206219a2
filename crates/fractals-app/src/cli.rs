use clap::Parser;

/// Fractals: a real-time 3D fractal flower viewer.
#[derive(Parser, Debug)]
#[command(name = "fractals", version, about)]
pub struct Args {
    /// Working directory to start in (asset paths are resolved from here).
    #[arg(short = 'd', long)]
    pub directory: Option<String>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log level override (trace, debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Print the effective configuration as JSON and exit.
    #[arg(long)]
    pub print_config: bool,
}

pub fn parse() -> Args {
    Args::parse()
}

/// Filter directive for the subscriber: a CLI level wins over the config.
pub fn log_directive(cli_level: Option<&str>, config_directive: &str) -> String {
    match cli_level {
        Some(level) if level.contains('=') => level.to_string(),
        Some(level) => format!("fractals={level}"),
        None => config_directive.to_string(),
    }
}
