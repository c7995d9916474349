//! Parameter value types
//!
//! Supported kinds:
//! - int32: 32-bit signed integer
//! - int64: 64-bit signed integer
//! - bool: Boolean
//! - string: UTF-8 string
//! - string_list: ordered list of strings
//! - object: structured JSON value (coins, nested parameter groups)

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::errors::{ParamError, ParamResult};

/// Semantic type tag of a parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    Int32,
    Int64,
    Bool,
    Str,
    StrList,
    Object,
}

impl ValueKind {
    /// Returns the type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            ValueKind::Int32 => "int32",
            ValueKind::Int64 => "int64",
            ValueKind::Bool => "bool",
            ValueKind::Str => "string",
            ValueKind::StrList => "string_list",
            ValueKind::Object => "object",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// A single parameter value
///
/// Stored values carry their kind tag, so a read can detect a slot wired
/// to the wrong type instead of coercing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum ParamValue {
    Int32(i32),
    Int64(i64),
    Bool(bool),
    Str(String),
    StrList(Vec<String>),
    Object(serde_json::Value),
}

impl ParamValue {
    /// Returns the kind of this value
    pub fn kind(&self) -> ValueKind {
        match self {
            ParamValue::Int32(_) => ValueKind::Int32,
            ParamValue::Int64(_) => ValueKind::Int64,
            ParamValue::Bool(_) => ValueKind::Bool,
            ParamValue::Str(_) => ValueKind::Str,
            ParamValue::StrList(_) => ValueKind::StrList,
            ParamValue::Object(_) => ValueKind::Object,
        }
    }

    /// Fails with `InvalidType` unless this value is of `expected` kind.
    pub fn expect_kind(&self, expected: ValueKind) -> ParamResult<()> {
        if self.kind() != expected {
            return Err(ParamError::InvalidType {
                expected,
                got: self.kind(),
            });
        }
        Ok(())
    }

    pub fn as_i32(&self) -> ParamResult<i32> {
        match self {
            ParamValue::Int32(v) => Ok(*v),
            other => Err(other.mismatch(ValueKind::Int32)),
        }
    }

    pub fn as_i64(&self) -> ParamResult<i64> {
        match self {
            ParamValue::Int64(v) => Ok(*v),
            other => Err(other.mismatch(ValueKind::Int64)),
        }
    }

    pub fn as_bool(&self) -> ParamResult<bool> {
        match self {
            ParamValue::Bool(v) => Ok(*v),
            other => Err(other.mismatch(ValueKind::Bool)),
        }
    }

    pub fn as_str(&self) -> ParamResult<&str> {
        match self {
            ParamValue::Str(v) => Ok(v),
            other => Err(other.mismatch(ValueKind::Str)),
        }
    }

    pub fn as_str_list(&self) -> ParamResult<&[String]> {
        match self {
            ParamValue::StrList(v) => Ok(v),
            other => Err(other.mismatch(ValueKind::StrList)),
        }
    }

    pub fn as_object(&self) -> ParamResult<&serde_json::Value> {
        match self {
            ParamValue::Object(v) => Ok(v),
            other => Err(other.mismatch(ValueKind::Object)),
        }
    }

    /// Decodes an object value into `T`.
    ///
    /// A value of another kind is `InvalidType`; an object that does not
    /// match `T`'s shape is returned as `Err(reason)` for the caller to wrap.
    pub fn decode_object<T: DeserializeOwned>(&self) -> ParamResult<Result<T, String>> {
        let value = self.as_object()?;
        Ok(T::deserialize(value).map_err(|e| e.to_string()))
    }

    fn mismatch(&self, expected: ValueKind) -> ParamError {
        ParamError::InvalidType {
            expected,
            got: self.kind(),
        }
    }
}

impl From<i32> for ParamValue {
    fn from(v: i32) -> Self {
        ParamValue::Int32(v)
    }
}

impl From<i64> for ParamValue {
    fn from(v: i64) -> Self {
        ParamValue::Int64(v)
    }
}

impl From<bool> for ParamValue {
    fn from(v: bool) -> Self {
        ParamValue::Bool(v)
    }
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self {
        ParamValue::Str(v.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(v: String) -> Self {
        ParamValue::Str(v)
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(v: Vec<String>) -> Self {
        ParamValue::StrList(v)
    }
}

impl From<serde_json::Value> for ParamValue {
    fn from(v: serde_json::Value) -> Self {
        ParamValue::Object(v)
    }
}
