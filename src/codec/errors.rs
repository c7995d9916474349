//! Address, denomination and coin errors
//!
//! Error codes:
//! - PARAMS_ADDRESS_MALFORMED (REJECT)
//! - PARAMS_ADDRESS_CHECKSUM (REJECT)
//! - PARAMS_ADDRESS_PREFIX (REJECT)
//! - PARAMS_DENOM_SYNTAX (REJECT)
//! - PARAMS_DENOM_PATTERN (FATAL)
//! - PARAMS_COIN_AMOUNT (REJECT)

use thiserror::Error;

/// Result type for address decoding
pub type AddressResult<T> = Result<T, AddressError>;

/// Failure to decode a bech32 account address
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error("empty address string is not allowed")]
    Empty,

    #[error("invalid bech32 string length {0}")]
    InvalidLength(usize),

    #[error("string not all lowercase or all uppercase")]
    MixedCase,

    #[error("missing '1' separator between prefix and data")]
    MissingSeparator,

    #[error("invalid character {0:?} in bech32 string")]
    InvalidChar(char),

    #[error("invalid checksum")]
    InvalidChecksum,

    #[error("invalid padding in data part")]
    InvalidPadding,

    #[error("invalid bech32 prefix; expected {expected}, got {got}")]
    WrongPrefix { expected: String, got: String },

    #[error("address payload length {0} out of range")]
    InvalidPayloadLength(usize),
}

impl AddressError {
    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            AddressError::InvalidChecksum => "PARAMS_ADDRESS_CHECKSUM",
            AddressError::WrongPrefix { .. } => "PARAMS_ADDRESS_PREFIX",
            _ => "PARAMS_ADDRESS_MALFORMED",
        }
    }
}

/// Result type for denomination checks
pub type DenomResult<T> = Result<T, DenomError>;

/// Denomination rejected by the syntax check
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DenomError {
    #[error("invalid denom: {0}")]
    InvalidSyntax(String),

    /// The denomination pattern did not compile
    #[error("invalid denom pattern: {0}")]
    InvalidPattern(String),
}

impl DenomError {
    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            DenomError::InvalidSyntax(_) => "PARAMS_DENOM_SYNTAX",
            DenomError::InvalidPattern(_) => "PARAMS_DENOM_PATTERN",
        }
    }

    /// A pattern failure rejects every input, so it is a wiring defect.
    pub fn is_fatal(&self) -> bool {
        matches!(self, DenomError::InvalidPattern(_))
    }
}

/// Result type for coin checks
pub type CoinResult<T> = Result<T, CoinError>;

/// Coin rejected by its amount or denomination
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoinError {
    #[error("invalid coin amount {0:?}: must be a non-negative integer")]
    InvalidAmount(String),

    #[error(transparent)]
    Denom(#[from] DenomError),
}

impl CoinError {
    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            CoinError::InvalidAmount(_) => "PARAMS_COIN_AMOUNT",
            CoinError::Denom(e) => e.code(),
        }
    }
}
