//! Distribution module parameters
//!
//! The proposer reward fields are deprecated upstream but still carried by
//! legacy subspaces, so they stay in the table.

use super::validators::{validate_fraction, Validator};
use super::ParamValue;
use crate::schema::{FieldDescriptor, KeyTable, KeyTableResult};

pub const MODULE_NAME: &str = "distribution";

pub const KEY_COMMUNITY_TAX: &str = "communitytax";
pub const KEY_BASE_PROPOSER_REWARD: &str = "baseproposerreward";
pub const KEY_BONUS_PROPOSER_REWARD: &str = "bonusproposerreward";
pub const KEY_WITHDRAW_ADDR_ENABLED: &str = "withdrawaddrenabled";

pub const DEFAULT_COMMUNITY_TAX: &str = "0.020000000000000000";
pub const DEFAULT_BASE_PROPOSER_REWARD: &str = "0.000000000000000000";
pub const DEFAULT_BONUS_PROPOSER_REWARD: &str = "0.000000000000000000";
pub const DEFAULT_WITHDRAW_ADDR_ENABLED: bool = true;

const COMMUNITY_TAX: Validator = Validator::new("distribution.community_tax", |v| {
    validate_fraction(MODULE_NAME, KEY_COMMUNITY_TAX, v.as_str()?, false)
});
const BASE_PROPOSER_REWARD: Validator = Validator::new("distribution.base_proposer_reward", |v| {
    validate_fraction(MODULE_NAME, KEY_BASE_PROPOSER_REWARD, v.as_str()?, false)
});
const BONUS_PROPOSER_REWARD: Validator =
    Validator::new("distribution.bonus_proposer_reward", |v| {
        validate_fraction(MODULE_NAME, KEY_BONUS_PROPOSER_REWARD, v.as_str()?, false)
    });
const WITHDRAW_ADDR_ENABLED: Validator =
    Validator::new("distribution.withdraw_addr_enabled", |v| v.as_bool().map(|_| ()));

/// Key table for the distribution subspace.
pub fn param_key_table() -> KeyTableResult<KeyTable> {
    KeyTable::new(vec![
        FieldDescriptor::new(
            KEY_COMMUNITY_TAX,
            ParamValue::from(DEFAULT_COMMUNITY_TAX),
            COMMUNITY_TAX,
        ),
        FieldDescriptor::new(
            KEY_BASE_PROPOSER_REWARD,
            ParamValue::from(DEFAULT_BASE_PROPOSER_REWARD),
            BASE_PROPOSER_REWARD,
        ),
        FieldDescriptor::new(
            KEY_BONUS_PROPOSER_REWARD,
            ParamValue::from(DEFAULT_BONUS_PROPOSER_REWARD),
            BONUS_PROPOSER_REWARD,
        ),
        FieldDescriptor::new(
            KEY_WITHDRAW_ADDR_ENABLED,
            ParamValue::Bool(DEFAULT_WITHDRAW_ADDR_ENABLED),
            WITHDRAW_ADDR_ENABLED,
        ),
    ])
}
