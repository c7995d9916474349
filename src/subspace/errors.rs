//! Subspace error types
//!
//! Error codes:
//! - PARAMS_SCHEMA_NOT_BOUND (FATAL)
//! - PARAMS_SCHEMA_CONFLICT (FATAL)
//! - PARAMS_UNKNOWN_KEY (REJECT)
//! - PARAMS_NOT_FOUND (REJECT)
//! - PARAMS_CORRUPT_VALUE (FATAL)
//! - PARAMS_INVALID_PARAM (severity of the wrapped validation error)

use thiserror::Error;

use crate::params::{ParamError, Severity};

/// Result type for subspace operations
pub type SubspaceResult<T> = Result<T, SubspaceError>;

/// Subspace access and binding errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubspaceError {
    /// Parameter access before any key table was bound
    #[error("subspace {0:?} has no key table bound")]
    SchemaNotBound(String),

    /// Rebind with a key table different from the bound one
    #[error("subspace {0:?} is already bound to a different key table")]
    SchemaConflict(String),

    #[error("parameter {key:?} is not registered in subspace {namespace:?}")]
    UnknownKey { namespace: String, key: String },

    #[error("parameter {key:?} has no stored value in subspace {namespace:?}")]
    ParamNotFound { namespace: String, key: String },

    #[error("stored value of {namespace}/{key} cannot be decoded: {reason}")]
    CorruptValue {
        namespace: String,
        key: String,
        reason: String,
    },

    #[error("invalid value for {namespace}/{key}: {source}")]
    InvalidParam {
        namespace: String,
        key: String,
        #[source]
        source: ParamError,
    },
}

impl SubspaceError {
    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            SubspaceError::SchemaNotBound(_) => "PARAMS_SCHEMA_NOT_BOUND",
            SubspaceError::SchemaConflict(_) => "PARAMS_SCHEMA_CONFLICT",
            SubspaceError::UnknownKey { .. } => "PARAMS_UNKNOWN_KEY",
            SubspaceError::ParamNotFound { .. } => "PARAMS_NOT_FOUND",
            SubspaceError::CorruptValue { .. } => "PARAMS_CORRUPT_VALUE",
            SubspaceError::InvalidParam { .. } => "PARAMS_INVALID_PARAM",
        }
    }

    /// Returns the severity level for this error
    pub fn severity(&self) -> Severity {
        match self {
            SubspaceError::SchemaNotBound(_)
            | SubspaceError::SchemaConflict(_)
            | SubspaceError::CorruptValue { .. } => Severity::Fatal,
            SubspaceError::UnknownKey { .. } | SubspaceError::ParamNotFound { .. } => {
                Severity::Reject
            }
            SubspaceError::InvalidParam { source, .. } => source.severity(),
        }
    }

    /// Returns whether startup must abort on this error
    pub fn is_fatal(&self) -> bool {
        self.severity() == Severity::Fatal
    }
}
