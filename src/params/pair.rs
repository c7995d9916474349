//! Parameter sets and their (key, slot, validator) pairs

use super::errors::{ParamError, ParamResult};
use super::validators::Validator;
use super::value::{ParamValue, ValueKind};

/// Mutable view of one field inside a parameter set
#[derive(Debug)]
pub enum ParamSlot<'a> {
    Int32(&'a mut i32),
    Int64(&'a mut i64),
    Bool(&'a mut bool),
    Str(&'a mut String),
    StrList(&'a mut Vec<String>),
    Object(&'a mut serde_json::Value),
}

impl ParamSlot<'_> {
    /// Returns the declared kind of the slot
    pub fn kind(&self) -> ValueKind {
        match self {
            ParamSlot::Int32(_) => ValueKind::Int32,
            ParamSlot::Int64(_) => ValueKind::Int64,
            ParamSlot::Bool(_) => ValueKind::Bool,
            ParamSlot::Str(_) => ValueKind::Str,
            ParamSlot::StrList(_) => ValueKind::StrList,
            ParamSlot::Object(_) => ValueKind::Object,
        }
    }

    /// Copies the current slot contents out as a value.
    pub fn get(&self) -> ParamValue {
        match self {
            ParamSlot::Int32(v) => ParamValue::Int32(**v),
            ParamSlot::Int64(v) => ParamValue::Int64(**v),
            ParamSlot::Bool(v) => ParamValue::Bool(**v),
            ParamSlot::Str(v) => ParamValue::Str((**v).clone()),
            ParamSlot::StrList(v) => ParamValue::StrList((**v).clone()),
            ParamSlot::Object(v) => ParamValue::Object((**v).clone()),
        }
    }

    /// Overwrites the slot. The value must match the slot's kind.
    pub fn set(&mut self, value: ParamValue) -> ParamResult<()> {
        match (self, value) {
            (ParamSlot::Int32(slot), ParamValue::Int32(v)) => **slot = v,
            (ParamSlot::Int64(slot), ParamValue::Int64(v)) => **slot = v,
            (ParamSlot::Bool(slot), ParamValue::Bool(v)) => **slot = v,
            (ParamSlot::Str(slot), ParamValue::Str(v)) => **slot = v,
            (ParamSlot::StrList(slot), ParamValue::StrList(v)) => **slot = v,
            (ParamSlot::Object(slot), ParamValue::Object(v)) => **slot = v,
            (slot, value) => {
                return Err(ParamError::InvalidType {
                    expected: slot.kind(),
                    got: value.kind(),
                })
            }
        }
        Ok(())
    }
}

/// One declared field: its key, its storage slot and its validator
#[derive(Debug)]
pub struct ParamSetPair<'a> {
    pub key: &'static str,
    pub slot: ParamSlot<'a>,
    pub validator: Validator,
}

impl<'a> ParamSetPair<'a> {
    pub fn new(key: &'static str, slot: ParamSlot<'a>, validator: Validator) -> Self {
        Self {
            key,
            slot,
            validator,
        }
    }

    /// Runs the validator against the slot's current value.
    pub fn validate(&self) -> ParamResult<()> {
        self.validator.check(&self.slot.get())
    }
}

pub type ParamSetPairs<'a> = Vec<ParamSetPair<'a>>;

/// A named tuple of parameters that can describe its own fields.
///
/// `Default` must produce an instance whose every field satisfies its
/// validator; key tables are derived from it.
pub trait ParamSet: Default {
    /// Returns the fields in declaration order.
    fn param_set_pairs(&mut self) -> ParamSetPairs<'_>;

    /// Validates every field in declaration order, stopping at the first failure.
    fn validate_pairs(&mut self) -> ParamResult<()> {
        self.param_set_pairs()
            .iter()
            .try_for_each(ParamSetPair::validate)
    }
}
