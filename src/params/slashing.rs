//! Slashing module parameters

use super::validators::{validate_fraction, validate_positive, Validator};
use super::ParamValue;
use crate::schema::{FieldDescriptor, KeyTable, KeyTableResult};

pub const MODULE_NAME: &str = "slashing";

pub const KEY_SIGNED_BLOCKS_WINDOW: &str = "SignedBlocksWindow";
pub const KEY_MIN_SIGNED_PER_WINDOW: &str = "MinSignedPerWindow";
pub const KEY_DOWNTIME_JAIL_DURATION: &str = "DowntimeJailDuration";
pub const KEY_SLASH_FRACTION_DOUBLE_SIGN: &str = "SlashFractionDoubleSign";
pub const KEY_SLASH_FRACTION_DOWNTIME: &str = "SlashFractionDowntime";

pub const DEFAULT_SIGNED_BLOCKS_WINDOW: i64 = 100;
pub const DEFAULT_MIN_SIGNED_PER_WINDOW: &str = "0.500000000000000000";
/// Ten minutes, in nanoseconds
pub const DEFAULT_DOWNTIME_JAIL_DURATION: i64 = 600 * 1_000_000_000;
pub const DEFAULT_SLASH_FRACTION_DOUBLE_SIGN: &str = "0.050000000000000000";
pub const DEFAULT_SLASH_FRACTION_DOWNTIME: &str = "0.010000000000000000";

const SIGNED_BLOCKS_WINDOW: Validator = Validator::new("slashing.signed_blocks_window", |v| {
    validate_positive(MODULE_NAME, KEY_SIGNED_BLOCKS_WINDOW, v.as_i64()?)
});
const MIN_SIGNED_PER_WINDOW: Validator = Validator::new("slashing.min_signed_per_window", |v| {
    validate_fraction(MODULE_NAME, KEY_MIN_SIGNED_PER_WINDOW, v.as_str()?, false)
});
const DOWNTIME_JAIL_DURATION: Validator = Validator::new("slashing.downtime_jail_duration", |v| {
    validate_positive(MODULE_NAME, KEY_DOWNTIME_JAIL_DURATION, v.as_i64()?)
});
const SLASH_FRACTION_DOUBLE_SIGN: Validator =
    Validator::new("slashing.slash_fraction_double_sign", |v| {
        validate_fraction(MODULE_NAME, KEY_SLASH_FRACTION_DOUBLE_SIGN, v.as_str()?, false)
    });
const SLASH_FRACTION_DOWNTIME: Validator =
    Validator::new("slashing.slash_fraction_downtime", |v| {
        validate_fraction(MODULE_NAME, KEY_SLASH_FRACTION_DOWNTIME, v.as_str()?, false)
    });

/// Key table for the slashing subspace.
pub fn param_key_table() -> KeyTableResult<KeyTable> {
    KeyTable::new(vec![
        FieldDescriptor::new(
            KEY_SIGNED_BLOCKS_WINDOW,
            ParamValue::Int64(DEFAULT_SIGNED_BLOCKS_WINDOW),
            SIGNED_BLOCKS_WINDOW,
        ),
        FieldDescriptor::new(
            KEY_MIN_SIGNED_PER_WINDOW,
            ParamValue::from(DEFAULT_MIN_SIGNED_PER_WINDOW),
            MIN_SIGNED_PER_WINDOW,
        ),
        FieldDescriptor::new(
            KEY_DOWNTIME_JAIL_DURATION,
            ParamValue::Int64(DEFAULT_DOWNTIME_JAIL_DURATION),
            DOWNTIME_JAIL_DURATION,
        ),
        FieldDescriptor::new(
            KEY_SLASH_FRACTION_DOUBLE_SIGN,
            ParamValue::from(DEFAULT_SLASH_FRACTION_DOUBLE_SIGN),
            SLASH_FRACTION_DOUBLE_SIGN,
        ),
        FieldDescriptor::new(
            KEY_SLASH_FRACTION_DOWNTIME,
            ParamValue::from(DEFAULT_SLASH_FRACTION_DOWNTIME),
            SLASH_FRACTION_DOWNTIME,
        ),
    ])
}
