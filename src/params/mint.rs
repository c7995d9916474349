//! Mint module parameters

use super::validators::{validate_module_denom, validate_positive, Validator};
use super::ParamValue;
use crate::schema::{FieldDescriptor, KeyTable, KeyTableResult};

pub const MODULE_NAME: &str = "mint";

pub const KEY_MINT_DENOM: &str = "MintDenom";
pub const KEY_MAX_MINTABLE_NANOSECONDS: &str = "MaxMintableNanoseconds";

pub const DEFAULT_MINT_DENOM: &str = "stake";
/// One minute
pub const DEFAULT_MAX_MINTABLE_NANOSECONDS: i64 = 60_000_000_000;

const MINT_DENOM: Validator = Validator::new("mint.mint_denom", |v| {
    validate_module_denom(MODULE_NAME, KEY_MINT_DENOM, v.as_str()?)
});
const MAX_MINTABLE_NANOSECONDS: Validator = Validator::new("mint.max_mintable_nanoseconds", |v| {
    validate_positive(MODULE_NAME, KEY_MAX_MINTABLE_NANOSECONDS, v.as_i64()?)
});

/// Key table for the mint subspace.
pub fn param_key_table() -> KeyTableResult<KeyTable> {
    KeyTable::new(vec![
        FieldDescriptor::new(KEY_MINT_DENOM, ParamValue::from(DEFAULT_MINT_DENOM), MINT_DENOM),
        FieldDescriptor::new(
            KEY_MAX_MINTABLE_NANOSECONDS,
            ParamValue::Int64(DEFAULT_MAX_MINTABLE_NANOSECONDS),
            MAX_MINTABLE_NANOSECONDS,
        ),
    ])
}
