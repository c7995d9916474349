//! Interchain accounts controller parameters

use super::validators::Validator;
use super::ParamValue;
use crate::schema::{FieldDescriptor, KeyTable, KeyTableResult};

/// Submodule name; the controller keeps its own subspace
pub const MODULE_NAME: &str = "icacontroller";

pub const KEY_CONTROLLER_ENABLED: &str = "ControllerEnabled";

pub const DEFAULT_CONTROLLER_ENABLED: bool = true;

const CONTROLLER_ENABLED: Validator =
    Validator::new("icacontroller.controller_enabled", |v| v.as_bool().map(|_| ()));

/// Key table for the interchain accounts controller subspace.
pub fn param_key_table() -> KeyTableResult<KeyTable> {
    KeyTable::new(vec![FieldDescriptor::new(
        KEY_CONTROLLER_ENABLED,
        ParamValue::Bool(DEFAULT_CONTROLLER_ENABLED),
        CONTROLLER_ENABLED,
    )])
}
