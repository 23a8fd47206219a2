pub mod actions;
pub mod errors;
pub mod types;

pub use actions::Action;
pub use errors::{ConfigError, FractalsError, PlatformError};
pub use types::Color;

pub type Result<T> = std::result::Result<T, FractalsError>;
