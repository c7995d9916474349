//! Field validators
//!
//! Every validator is pure and total: it inspects one value, never panics,
//! and returns the first rule it violates.
//!
//! Typed validators (`validate_*`) take the field's native type. The
//! [`Validator`] handle wraps a check over [`ParamValue`] for use by key
//! tables, where the kind is only known at runtime.

use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

use super::errors::{ParamError, ParamResult};
use super::value::ParamValue;
use crate::codec::{self, AccAddress, Coin};

/// Fractional digits carried by on-chain decimals
pub const DEC_PRECISION: u32 = 18;

/// Lower bound of a rate field
pub const MIN_RATE: i32 = 0;
/// Upper bound of a rate field
pub const MAX_RATE: i32 = 100;

/// Untyped check over a parameter value
pub type CheckFn = fn(&ParamValue) -> ParamResult<()>;

/// Named validator bound to a key table field
///
/// Two validators are equal when their names are equal. Function addresses
/// are not stable across codegen units, so the name is the identity, and
/// every name must identify exactly one rule. Built-in names are qualified
/// by their owner: `params.*` for the shared field rules, `<module>.<field>`
/// for module-specific ones.
#[derive(Clone, Copy)]
pub struct Validator {
    name: &'static str,
    check: CheckFn,
}

impl Validator {
    pub const fn new(name: &'static str, check: CheckFn) -> Self {
        Self { name, check }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Runs the check against `value`.
    pub fn check(&self, value: &ParamValue) -> ParamResult<()> {
        (self.check)(value)
    }
}

impl PartialEq for Validator {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Validator {}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Validator").field(&self.name).finish()
    }
}

/// Rate must lie in `[0, 100]`.
pub fn validate_rate(rate: i32) -> ParamResult<()> {
    if !(MIN_RATE..=MAX_RATE).contains(&rate) {
        return Err(ParamError::InvalidRate(rate));
    }
    Ok(())
}

/// Capped amounts are accepted as-is; coin parsing is left to the consumer.
pub fn validate_capped_amount(_amount: &str) -> ParamResult<()> {
    Ok(())
}

/// Address must decode as an account address.
pub fn validate_address(address: &str) -> ParamResult<()> {
    AccAddress::from_bech32(address).map_err(|source| ParamError::InvalidAddress {
        address: address.to_string(),
        source,
    })?;
    Ok(())
}

/// Denomination must be non-blank and pass the denomination syntax check.
pub fn validate_denom(denom: &str) -> ParamResult<()> {
    if denom.trim().is_empty() {
        return Err(ParamError::BlankDenom);
    }
    codec::validate_denom(denom)?;
    Ok(())
}

/// Error for a failed module parameter rule
pub fn module_error(module: &'static str, key: &'static str, reason: impl Into<String>) -> ParamError {
    ParamError::InvalidModuleParam {
        module,
        key,
        reason: reason.into(),
    }
}

/// Value must be strictly positive.
pub fn validate_positive(module: &'static str, key: &'static str, v: i64) -> ParamResult<()> {
    if v <= 0 {
        return Err(module_error(module, key, format!("must be positive: {}", v)));
    }
    Ok(())
}

/// Value must fit an unsigned 32-bit field and be at least `min`.
pub fn validate_u32(module: &'static str, key: &'static str, v: i64, min: u32) -> ParamResult<()> {
    if v < i64::from(min) || v > i64::from(u32::MAX) {
        return Err(module_error(
            module,
            key,
            format!("must be between {} and {}: {}", min, u32::MAX, v),
        ));
    }
    Ok(())
}

/// Parses an on-chain decimal string.
pub fn parse_dec(module: &'static str, key: &'static str, v: &str) -> ParamResult<Decimal> {
    let dec = Decimal::from_str(v)
        .map_err(|e| module_error(module, key, format!("invalid decimal {:?}: {}", v, e)))?;
    if dec.scale() > DEC_PRECISION {
        return Err(module_error(
            module,
            key,
            format!("too many decimal places in {:?}", v),
        ));
    }
    Ok(dec)
}

/// Decimal must lie in `[0, 1]`, or `(0, 1]` when `positive` is set.
pub fn validate_fraction(
    module: &'static str,
    key: &'static str,
    v: &str,
    positive: bool,
) -> ParamResult<()> {
    let dec = parse_dec(module, key, v)?;
    if dec.is_sign_negative() && !dec.is_zero() {
        return Err(module_error(module, key, format!("must not be negative: {}", v)));
    }
    if positive && dec.is_zero() {
        return Err(module_error(module, key, format!("must be positive: {}", v)));
    }
    if dec > Decimal::ONE {
        return Err(module_error(module, key, format!("must not exceed 1: {}", v)));
    }
    Ok(())
}

/// Denomination must be non-blank and pass the denomination syntax check.
pub fn validate_module_denom(module: &'static str, key: &'static str, v: &str) -> ParamResult<()> {
    if v.trim().is_empty() {
        return Err(module_error(module, key, "denom cannot be blank"));
    }
    codec::validate_denom(v)?;
    Ok(())
}

/// Coin must carry a valid denomination and a non-negative integer amount.
pub fn validate_coin(module: &'static str, key: &'static str, coin: &Coin) -> ParamResult<()> {
    coin.validate()
        .map_err(|e| module_error(module, key, format!("invalid coin {}: {}", coin, e)))
}

pub const RATE: Validator = Validator::new("params.rate", |v| validate_rate(v.as_i32()?));

pub const CAPPED_AMOUNT: Validator =
    Validator::new("params.capped_amount", |v| validate_capped_amount(v.as_str()?));

pub const ADDRESS: Validator =
    Validator::new("params.address", |v| validate_address(v.as_str()?));

pub const DENOM: Validator = Validator::new("params.denom", |v| validate_denom(v.as_str()?));
