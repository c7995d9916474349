//! Bank module parameters
//!
//! `SendEnabled` holds per-denomination overrides of `defaultsendenabled`.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::errors::ParamResult;
use super::validators::{module_error, Validator};
use super::ParamValue;
use crate::codec;
use crate::schema::{FieldDescriptor, KeyTable, KeyTableResult};

pub const MODULE_NAME: &str = "bank";

pub const KEY_SEND_ENABLED: &str = "SendEnabled";
pub const KEY_DEFAULT_SEND_ENABLED: &str = "defaultsendenabled";

pub const DEFAULT_DEFAULT_SEND_ENABLED: bool = true;

/// Send switch for one denomination
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendEnabled {
    pub denom: String,
    pub enabled: bool,
}

/// Every denomination must be valid and listed at most once.
pub fn validate_send_enabled(entries: &[SendEnabled]) -> ParamResult<()> {
    let mut seen = HashSet::with_capacity(entries.len());
    for entry in entries {
        codec::validate_denom(&entry.denom)?;
        if !seen.insert(entry.denom.as_str()) {
            return Err(module_error(
                MODULE_NAME,
                KEY_SEND_ENABLED,
                format!("duplicate send enabled parameter found: {}", entry.denom),
            ));
        }
    }
    Ok(())
}

const SEND_ENABLED: Validator = Validator::new("bank.send_enabled", |v| {
    let entries: Vec<SendEnabled> = v
        .decode_object()?
        .map_err(|reason| module_error(MODULE_NAME, KEY_SEND_ENABLED, reason))?;
    validate_send_enabled(&entries)
});
const DEFAULT_SEND_ENABLED: Validator =
    Validator::new("bank.default_send_enabled", |v| v.as_bool().map(|_| ()));

/// Key table for the bank subspace.
pub fn param_key_table() -> KeyTableResult<KeyTable> {
    KeyTable::new(vec![
        FieldDescriptor::new(
            KEY_SEND_ENABLED,
            ParamValue::Object(serde_json::Value::Array(Vec::new())),
            SEND_ENABLED,
        ),
        FieldDescriptor::new(
            KEY_DEFAULT_SEND_ENABLED,
            ParamValue::Bool(DEFAULT_DEFAULT_SEND_ENABLED),
            DEFAULT_SEND_ENABLED,
        ),
    ])
}
