//! Parameter validation errors
//!
//! Error codes:
//! - PARAMS_INVALID_TYPE (FATAL)
//! - PARAMS_INVALID_RATE (REJECT)
//! - PARAMS_INVALID_ADDRESS (REJECT)
//! - PARAMS_BLANK_DENOM (REJECT)
//! - PARAMS_INVALID_DENOM_SYNTAX (REJECT, FATAL if the pattern itself is broken)
//! - PARAMS_INVALID_CONSENSUS_PARAM (REJECT)
//! - PARAMS_INVALID_MODULE_PARAM (REJECT)

use std::fmt;
use thiserror::Error;

use super::value::ValueKind;
use crate::codec::{AddressError, DenomError};

/// Severity levels shared by every error in this crate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The caller can recover by supplying corrected input
    Reject,
    /// Configuration or wiring defect; startup must abort
    Fatal,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Reject => write!(f, "REJECT"),
            Severity::Fatal => write!(f, "FATAL"),
        }
    }
}

/// Result type for parameter validation
pub type ParamResult<T> = Result<T, ParamError>;

/// Field-level validation failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParamError {
    /// A slot or stored value does not have the declared kind
    #[error("invalid parameter type: expected {expected}, got {got}")]
    InvalidType { expected: ValueKind, got: ValueKind },

    #[error("invalid fee rate {0}: must be between 0 and 100")]
    InvalidRate(i32),

    #[error("invalid address {address:?}: {source}")]
    InvalidAddress {
        address: String,
        #[source]
        source: AddressError,
    },

    #[error("base denom cannot be blank")]
    BlankDenom,

    #[error(transparent)]
    InvalidDenomSyntax(#[from] DenomError),

    #[error("invalid consensus parameter {key}: {reason}")]
    InvalidConsensusParam { key: &'static str, reason: String },

    /// A module parameter outside the tax set failed its rule
    #[error("invalid {module} parameter {key}: {reason}")]
    InvalidModuleParam {
        module: &'static str,
        key: &'static str,
        reason: String,
    },
}

impl ParamError {
    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            ParamError::InvalidType { .. } => "PARAMS_INVALID_TYPE",
            ParamError::InvalidRate(_) => "PARAMS_INVALID_RATE",
            ParamError::InvalidAddress { .. } => "PARAMS_INVALID_ADDRESS",
            ParamError::BlankDenom => "PARAMS_BLANK_DENOM",
            ParamError::InvalidDenomSyntax(_) => "PARAMS_INVALID_DENOM_SYNTAX",
            ParamError::InvalidConsensusParam { .. } => "PARAMS_INVALID_CONSENSUS_PARAM",
            ParamError::InvalidModuleParam { .. } => "PARAMS_INVALID_MODULE_PARAM",
        }
    }

    /// Returns the severity level for this error
    pub fn severity(&self) -> Severity {
        match self {
            ParamError::InvalidType { .. } => Severity::Fatal,
            ParamError::InvalidDenomSyntax(e) if e.is_fatal() => Severity::Fatal,
            _ => Severity::Reject,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_error_codes() {
        assert_eq!(ParamError::InvalidRate(101).code(), "PARAMS_INVALID_RATE");
        assert_eq!(ParamError::BlankDenom.code(), "PARAMS_BLANK_DENOM");
        assert_eq!(
            ParamError::InvalidDenomSyntax(DenomError::InvalidSyntax("9".into())).code(),
            "PARAMS_INVALID_DENOM_SYNTAX"
        );
    }

    #[test]
    fn test_severity_levels() {
        let wrong_type = ParamError::InvalidType {
            expected: ValueKind::Int32,
            got: ValueKind::Str,
        };
        assert_eq!(wrong_type.severity(), Severity::Fatal);
        assert_eq!(ParamError::InvalidRate(-1).severity(), Severity::Reject);
        assert_eq!(ParamError::BlankDenom.severity(), Severity::Reject);
        assert_eq!(
            ParamError::from(DenomError::InvalidSyntax("9x".into())).severity(),
            Severity::Reject
        );
        assert_eq!(
            ParamError::from(DenomError::InvalidPattern("unclosed class".into())).severity(),
            Severity::Fatal
        );
    }

    #[test]
    fn test_module_param_error() {
        let err = ParamError::InvalidModuleParam {
            module: "auth",
            key: "TxSigLimit",
            reason: "must be positive: 0".into(),
        };
        assert_eq!(err.code(), "PARAMS_INVALID_MODULE_PARAM");
        assert_eq!(err.to_string(), "invalid auth parameter TxSigLimit: must be positive: 0");
    }

    #[test]
    fn test_address_error_is_wrapped() {
        let err = ParamError::InvalidAddress {
            address: "bogus".into(),
            source: AddressError::MissingSeparator,
        };
        assert!(err.to_string().contains("bogus"));
        let source = err.source().unwrap();
        assert_eq!(source.to_string(), AddressError::MissingSeparator.to_string());
    }

    #[test]
    fn test_denom_syntax_surfaced_unchanged() {
        let inner = DenomError::InvalidSyntax("9x".into());
        let err = ParamError::from(inner.clone());
        assert_eq!(err.to_string(), inner.to_string());
    }
}
