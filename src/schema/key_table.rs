//! Field descriptors and the key table built from them

use std::collections::HashMap;

use super::errors::{KeyTableError, KeyTableResult};
use crate::params::{ParamResult, ParamSet, ParamValue, Validator, ValueKind};

/// One recognized parameter: key, kind, default and validator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub key: String,
    pub kind: ValueKind,
    pub default: ParamValue,
    pub validator: Validator,
}

impl FieldDescriptor {
    /// Creates a descriptor whose kind is taken from `default`.
    pub fn new(key: impl Into<String>, default: ParamValue, validator: Validator) -> Self {
        Self {
            key: key.into(),
            kind: default.kind(),
            default,
            validator,
        }
    }

    /// Checks the value's kind, then runs the field validator.
    pub fn validate(&self, value: &ParamValue) -> ParamResult<()> {
        value.expect_kind(self.kind)?;
        self.validator.check(value)
    }
}

/// Immutable catalog of field descriptors for one namespace
#[derive(Debug, Clone)]
pub struct KeyTable {
    fields: Vec<FieldDescriptor>,
    index: HashMap<String, usize>,
}

impl KeyTable {
    /// Builds a table from descriptors in declaration order.
    ///
    /// # Errors
    ///
    /// - `DuplicateKey` if two descriptors share a key
    /// - `InvalidDefault` if a default fails its own validator
    pub fn new(fields: Vec<FieldDescriptor>) -> KeyTableResult<Self> {
        let mut index = HashMap::with_capacity(fields.len());

        for (pos, field) in fields.iter().enumerate() {
            if index.insert(field.key.clone(), pos).is_some() {
                return Err(KeyTableError::DuplicateKey(field.key.clone()));
            }

            field
                .validate(&field.default)
                .map_err(|source| KeyTableError::InvalidDefault {
                    key: field.key.clone(),
                    source,
                })?;
        }

        Ok(Self { fields, index })
    }

    /// Builds a table from the pairs of `P::default()`.
    pub fn for_param_set<P: ParamSet>() -> KeyTableResult<Self> {
        let mut params = P::default();
        let fields = params
            .param_set_pairs()
            .into_iter()
            .map(|pair| FieldDescriptor::new(pair.key, pair.slot.get(), pair.validator))
            .collect();
        Self::new(fields)
    }

    pub fn get(&self, key: &str) -> Option<&FieldDescriptor> {
        self.index.get(key).and_then(|&pos| self.fields.get(pos))
    }

    pub fn validator(&self, key: &str) -> Option<Validator> {
        self.get(key).map(|field| field.validator)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Returns the keys in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|field| field.key.as_str())
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl PartialEq for KeyTable {
    fn eq(&self, other: &Self) -> bool {
        self.fields == other.fields
    }
}

impl Eq for KeyTable {}
