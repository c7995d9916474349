//! Configuration errors
//!
//! All configuration errors are FATAL.
//!
//! Error codes:
//! - PARAMS_CONFIG_IO
//! - PARAMS_CONFIG_PARSE
//! - PARAMS_CONFIG_INVALID

use thiserror::Error;

use crate::params::Severity;

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Failure to load or validate a registry configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

impl ConfigError {
    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            ConfigError::Io { .. } => "PARAMS_CONFIG_IO",
            ConfigError::Parse(_) => "PARAMS_CONFIG_PARSE",
            ConfigError::Invalid(_) => "PARAMS_CONFIG_INVALID",
        }
    }

    pub fn severity(&self) -> Severity {
        Severity::Fatal
    }
}
