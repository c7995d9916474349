//! Namespace-to-schema-builder lookup table

use std::collections::BTreeMap;

use crate::params::{
    auth, bank, crisis, distribution, gov, icacontroller, mint, slashing, staking, tax,
};
use crate::schema::{KeyTable, KeyTableResult};

/// Produces the key table of one namespace
pub type SchemaBuilder = fn() -> KeyTableResult<KeyTable>;

/// Maps known namespaces to the builder of their key table
///
/// Namespaces absent from the table are skipped by the migration pass.
#[derive(Debug, Clone, Default)]
pub struct SchemaBuilderTable {
    builders: BTreeMap<String, SchemaBuilder>,
}

impl SchemaBuilderTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Table of the namespaces that still keep parameters in legacy subspaces.
    ///
    /// `ibc`, `transfer` and `feeibc` never used them, and vesting has no
    /// parameters, so they are absent and get skipped.
    pub fn legacy() -> Self {
        Self::new()
            .with(auth::MODULE_NAME, auth::param_key_table)
            .with(tax::MODULE_NAME, tax::param_key_table)
            .with(bank::MODULE_NAME, bank::param_key_table)
            .with(staking::MODULE_NAME, staking::param_key_table)
            .with(mint::MODULE_NAME, mint::param_key_table)
            .with(distribution::MODULE_NAME, distribution::param_key_table)
            .with(slashing::MODULE_NAME, slashing::param_key_table)
            .with(crisis::MODULE_NAME, crisis::param_key_table)
            .with(gov::MODULE_NAME, gov::param_key_table)
            .with(icacontroller::MODULE_NAME, icacontroller::param_key_table)
    }

    pub fn with(mut self, namespace: impl Into<String>, builder: SchemaBuilder) -> Self {
        self.insert(namespace, builder);
        self
    }

    /// Adds or replaces the builder for `namespace`, returning the previous one.
    pub fn insert(
        &mut self,
        namespace: impl Into<String>,
        builder: SchemaBuilder,
    ) -> Option<SchemaBuilder> {
        self.builders.insert(namespace.into(), builder)
    }

    pub fn get(&self, namespace: &str) -> Option<SchemaBuilder> {
        self.builders.get(namespace).copied()
    }

    pub fn contains(&self, namespace: &str) -> bool {
        self.builders.contains_key(namespace)
    }

    /// Returns the known namespaces in sorted order.
    pub fn namespaces(&self) -> impl Iterator<Item = &str> {
        self.builders.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.builders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.builders.is_empty()
    }
}
