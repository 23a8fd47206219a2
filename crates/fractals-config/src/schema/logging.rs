//! Logging configuration types.

use serde::{Deserialize, Serialize};

/// Log output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// One of: trace, debug, info, warn, error.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
        }
    }
}

impl LoggingConfig {
    /// `tracing-subscriber` directive scoped to the workspace crates.
    pub fn directive(&self) -> String {
        format!("fractals={}", self.level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logging_directive_scopes_to_crate() {
        let config = LoggingConfig {
            level: "debug".into(),
        };
        assert_eq!(config.directive(), "fractals=debug");
    }
}
