//! Auth module parameters
//!
//! Every field is an unsigned count or gas cost that must be positive.

use super::validators::{validate_positive, Validator};
use super::ParamValue;
use crate::schema::{FieldDescriptor, KeyTable, KeyTableResult};

pub const MODULE_NAME: &str = "auth";

pub const KEY_MAX_MEMO_CHARACTERS: &str = "MaxMemoCharacters";
pub const KEY_TX_SIG_LIMIT: &str = "TxSigLimit";
pub const KEY_TX_SIZE_COST_PER_BYTE: &str = "TxSizeCostPerByte";
pub const KEY_SIG_VERIFY_COST_ED25519: &str = "SigVerifyCostED25519";
pub const KEY_SIG_VERIFY_COST_SECP256K1: &str = "SigVerifyCostSecp256k1";

pub const DEFAULT_MAX_MEMO_CHARACTERS: i64 = 256;
pub const DEFAULT_TX_SIG_LIMIT: i64 = 7;
pub const DEFAULT_TX_SIZE_COST_PER_BYTE: i64 = 10;
pub const DEFAULT_SIG_VERIFY_COST_ED25519: i64 = 590;
pub const DEFAULT_SIG_VERIFY_COST_SECP256K1: i64 = 1000;

const MAX_MEMO_CHARACTERS: Validator = Validator::new("auth.max_memo_characters", |v| {
    validate_positive(MODULE_NAME, KEY_MAX_MEMO_CHARACTERS, v.as_i64()?)
});
const TX_SIG_LIMIT: Validator = Validator::new("auth.tx_sig_limit", |v| {
    validate_positive(MODULE_NAME, KEY_TX_SIG_LIMIT, v.as_i64()?)
});
const TX_SIZE_COST_PER_BYTE: Validator = Validator::new("auth.tx_size_cost_per_byte", |v| {
    validate_positive(MODULE_NAME, KEY_TX_SIZE_COST_PER_BYTE, v.as_i64()?)
});
const SIG_VERIFY_COST_ED25519: Validator = Validator::new("auth.sig_verify_cost_ed25519", |v| {
    validate_positive(MODULE_NAME, KEY_SIG_VERIFY_COST_ED25519, v.as_i64()?)
});
const SIG_VERIFY_COST_SECP256K1: Validator =
    Validator::new("auth.sig_verify_cost_secp256k1", |v| {
        validate_positive(MODULE_NAME, KEY_SIG_VERIFY_COST_SECP256K1, v.as_i64()?)
    });

/// Key table for the auth subspace.
pub fn param_key_table() -> KeyTableResult<KeyTable> {
    KeyTable::new(vec![
        FieldDescriptor::new(
            KEY_MAX_MEMO_CHARACTERS,
            ParamValue::Int64(DEFAULT_MAX_MEMO_CHARACTERS),
            MAX_MEMO_CHARACTERS,
        ),
        FieldDescriptor::new(
            KEY_TX_SIG_LIMIT,
            ParamValue::Int64(DEFAULT_TX_SIG_LIMIT),
            TX_SIG_LIMIT,
        ),
        FieldDescriptor::new(
            KEY_TX_SIZE_COST_PER_BYTE,
            ParamValue::Int64(DEFAULT_TX_SIZE_COST_PER_BYTE),
            TX_SIZE_COST_PER_BYTE,
        ),
        FieldDescriptor::new(
            KEY_SIG_VERIFY_COST_ED25519,
            ParamValue::Int64(DEFAULT_SIG_VERIFY_COST_ED25519),
            SIG_VERIFY_COST_ED25519,
        ),
        FieldDescriptor::new(
            KEY_SIG_VERIFY_COST_SECP256K1,
            ParamValue::Int64(DEFAULT_SIG_VERIFY_COST_SECP256K1),
            SIG_VERIFY_COST_SECP256K1,
        ),
    ])
}
