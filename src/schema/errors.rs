//! Key table construction errors
//!
//! Error codes:
//! - PARAMS_DUPLICATE_KEY (FATAL)
//! - PARAMS_INVALID_DEFAULT (FATAL)
//!
//! Both indicate a defect in a parameter set declaration.

use thiserror::Error;

use crate::params::{ParamError, Severity};

/// Result type for key table construction
pub type KeyTableResult<T> = Result<T, KeyTableError>;

/// Malformed key table
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyTableError {
    #[error("duplicate parameter key {0:?}")]
    DuplicateKey(String),

    #[error("default value of {key:?} fails its own validator: {source}")]
    InvalidDefault {
        key: String,
        #[source]
        source: ParamError,
    },
}

impl KeyTableError {
    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            KeyTableError::DuplicateKey(_) => "PARAMS_DUPLICATE_KEY",
            KeyTableError::InvalidDefault { .. } => "PARAMS_INVALID_DEFAULT",
        }
    }

    /// Always fatal: the declaration itself is wrong
    pub fn severity(&self) -> Severity {
        Severity::Fatal
    }
}
