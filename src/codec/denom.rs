//! Coin denomination syntax
//!
//! A denomination starts with a letter, followed by 2 to 127 characters
//! drawn from letters, digits and `/ : . _ -`.

use regex::Regex;
use std::sync::OnceLock;

use super::errors::{DenomError, DenomResult};

const DENOM_PATTERN: &str = r"^[a-zA-Z][a-zA-Z0-9/:._-]{2,127}$";

static DENOM_REGEX: OnceLock<Regex> = OnceLock::new();

/// Returns the compiled denomination pattern, compiling it on first use.
fn denom_regex() -> DenomResult<&'static Regex> {
    if let Some(re) = DENOM_REGEX.get() {
        return Ok(re);
    }
    let re = Regex::new(DENOM_PATTERN).map_err(|e| DenomError::InvalidPattern(e.to_string()))?;
    Ok(DENOM_REGEX.get_or_init(|| re))
}

/// Returns true if `denom` satisfies the denomination syntax.
pub fn is_valid_denom(denom: &str) -> bool {
    validate_denom(denom).is_ok()
}

/// Checks `denom` against the denomination syntax.
///
/// # Errors
///
/// - `InvalidSyntax` if `denom` does not match
/// - `InvalidPattern` if the pattern itself fails to compile
pub fn validate_denom(denom: &str) -> DenomResult<()> {
    if !denom_regex()?.is_match(denom) {
        return Err(DenomError::InvalidSyntax(denom.to_string()));
    }
    Ok(())
}
