//! Staking module parameters

use super::validators::{
    validate_fraction, validate_module_denom, validate_positive, validate_u32, Validator,
};
use super::ParamValue;
use crate::schema::{FieldDescriptor, KeyTable, KeyTableResult};

pub const MODULE_NAME: &str = "staking";

pub const KEY_UNBONDING_TIME: &str = "UnbondingTime";
pub const KEY_MAX_VALIDATORS: &str = "MaxValidators";
pub const KEY_MAX_ENTRIES: &str = "MaxEntries";
pub const KEY_HISTORICAL_ENTRIES: &str = "HistoricalEntries";
pub const KEY_BOND_DENOM: &str = "BondDenom";
pub const KEY_MIN_COMMISSION_RATE: &str = "MinCommissionRate";

/// Three weeks, in nanoseconds
pub const DEFAULT_UNBONDING_TIME: i64 = 21 * 24 * 3600 * 1_000_000_000;
pub const DEFAULT_MAX_VALIDATORS: i64 = 100;
pub const DEFAULT_MAX_ENTRIES: i64 = 7;
pub const DEFAULT_HISTORICAL_ENTRIES: i64 = 10_000;
pub const DEFAULT_BOND_DENOM: &str = "stake";
pub const DEFAULT_MIN_COMMISSION_RATE: &str = "0.000000000000000000";

const UNBONDING_TIME: Validator = Validator::new("staking.unbonding_time", |v| {
    validate_positive(MODULE_NAME, KEY_UNBONDING_TIME, v.as_i64()?)
});
const MAX_VALIDATORS: Validator = Validator::new("staking.max_validators", |v| {
    validate_u32(MODULE_NAME, KEY_MAX_VALIDATORS, v.as_i64()?, 1)
});
const MAX_ENTRIES: Validator = Validator::new("staking.max_entries", |v| {
    validate_u32(MODULE_NAME, KEY_MAX_ENTRIES, v.as_i64()?, 1)
});
const HISTORICAL_ENTRIES: Validator = Validator::new("staking.historical_entries", |v| {
    validate_u32(MODULE_NAME, KEY_HISTORICAL_ENTRIES, v.as_i64()?, 0)
});
const BOND_DENOM: Validator = Validator::new("staking.bond_denom", |v| {
    validate_module_denom(MODULE_NAME, KEY_BOND_DENOM, v.as_str()?)
});
const MIN_COMMISSION_RATE: Validator = Validator::new("staking.min_commission_rate", |v| {
    validate_fraction(MODULE_NAME, KEY_MIN_COMMISSION_RATE, v.as_str()?, false)
});

/// Key table for the staking subspace.
pub fn param_key_table() -> KeyTableResult<KeyTable> {
    KeyTable::new(vec![
        FieldDescriptor::new(
            KEY_UNBONDING_TIME,
            ParamValue::Int64(DEFAULT_UNBONDING_TIME),
            UNBONDING_TIME,
        ),
        FieldDescriptor::new(
            KEY_MAX_VALIDATORS,
            ParamValue::Int64(DEFAULT_MAX_VALIDATORS),
            MAX_VALIDATORS,
        ),
        FieldDescriptor::new(
            KEY_MAX_ENTRIES,
            ParamValue::Int64(DEFAULT_MAX_ENTRIES),
            MAX_ENTRIES,
        ),
        FieldDescriptor::new(
            KEY_HISTORICAL_ENTRIES,
            ParamValue::Int64(DEFAULT_HISTORICAL_ENTRIES),
            HISTORICAL_ENTRIES,
        ),
        FieldDescriptor::new(KEY_BOND_DENOM, ParamValue::from(DEFAULT_BOND_DENOM), BOND_DENOM),
        FieldDescriptor::new(
            KEY_MIN_COMMISSION_RATE,
            ParamValue::from(DEFAULT_MIN_COMMISSION_RATE),
            MIN_COMMISSION_RATE,
        ),
    ])
}
