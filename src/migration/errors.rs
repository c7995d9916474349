//! Migration errors
//!
//! Every migration error is FATAL: it points at a defect in the static
//! namespace-to-schema mapping, and startup must abort.
//!
//! Error codes:
//! - PARAMS_MALFORMED_KEY_TABLE (FATAL)
//! - codes of the wrapped subspace error (FATAL)

use thiserror::Error;

use crate::params::Severity;
use crate::schema::KeyTableError;
use crate::subspace::SubspaceError;

/// Result type for the migration pass
pub type MigrationResult<T> = Result<T, MigrationError>;

/// Fatal migration failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MigrationError {
    #[error("key table builder for {namespace:?} produced a malformed table: {source}")]
    MalformedKeyTable {
        namespace: String,
        #[source]
        source: KeyTableError,
    },

    #[error(transparent)]
    Subspace(#[from] SubspaceError),
}

impl MigrationError {
    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            MigrationError::MalformedKeyTable { .. } => "PARAMS_MALFORMED_KEY_TABLE",
            MigrationError::Subspace(err) => err.code(),
        }
    }

    pub fn severity(&self) -> Severity {
        Severity::Fatal
    }
}
