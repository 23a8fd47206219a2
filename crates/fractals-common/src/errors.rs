use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("window error: {0}")]
    WindowError(String),

    #[error("not supported: {0}")]
    NotSupported(String),
}

/// Fatal startup failures surfaced by the binary.
#[derive(Debug, thiserror::Error)]
pub enum FractalsError {
    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error("renderer error: {0}")]
    Renderer(String),
}
