//! Namespace-scoped parameter container gated by a bound key table
//!
//! State machine:
//! - Unbound (initial): every parameter access fails with `SchemaNotBound`
//! - Bound (terminal): reads and writes go through the bound key table
//!
//! Binding is monotonic. Rebinding an equal table is a no-op, rebinding a
//! different one fails with `SchemaConflict`. Binding never touches stored
//! values.

use tracing::{info, trace};

use super::errors::{SubspaceError, SubspaceResult};
use super::store::ParamStore;
use crate::params::{ParamSet, ParamSetPair, ParamValue};
use crate::schema::{FieldDescriptor, KeyTable};

/// Result of a bind attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindOutcome {
    /// The subspace went from Unbound to Bound
    Bound,
    /// The subspace already held an equal table
    Unchanged,
}

/// A named parameter container
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subspace {
    namespace: String,
    key_table: Option<KeyTable>,
}

impl Subspace {
    pub(crate) fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            key_table: None,
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn has_key_table(&self) -> bool {
        self.key_table.is_some()
    }

    pub fn key_table(&self) -> Option<&KeyTable> {
        self.key_table.as_ref()
    }

    /// Binds `table` to this subspace.
    ///
    /// # Errors
    ///
    /// Returns `SchemaConflict` if a different table is already bound.
    pub fn with_key_table(&mut self, table: KeyTable) -> SubspaceResult<BindOutcome> {
        if let Some(existing) = &self.key_table {
            if *existing == table {
                return Ok(BindOutcome::Unchanged);
            }
            return Err(SubspaceError::SchemaConflict(self.namespace.clone()));
        }

        info!(
            namespace = %self.namespace,
            fields = table.len(),
            "SUBSPACE_BOUND"
        );
        self.key_table = Some(table);
        Ok(BindOutcome::Bound)
    }

    fn table(&self) -> SubspaceResult<&KeyTable> {
        self.key_table
            .as_ref()
            .ok_or_else(|| SubspaceError::SchemaNotBound(self.namespace.clone()))
    }

    fn field(&self, key: &str) -> SubspaceResult<&FieldDescriptor> {
        self.table()?
            .get(key)
            .ok_or_else(|| SubspaceError::UnknownKey {
                namespace: self.namespace.clone(),
                key: key.to_string(),
            })
    }

    fn decode(&self, field: &FieldDescriptor, bytes: &[u8]) -> SubspaceResult<ParamValue> {
        let value: ParamValue =
            serde_json::from_slice(bytes).map_err(|e| SubspaceError::CorruptValue {
                namespace: self.namespace.clone(),
                key: field.key.clone(),
                reason: e.to_string(),
            })?;

        value
            .expect_kind(field.kind)
            .map_err(|source| self.invalid(&field.key, source))?;
        Ok(value)
    }

    fn encode(&self, key: &str, value: &ParamValue) -> SubspaceResult<Vec<u8>> {
        serde_json::to_vec(value).map_err(|e| SubspaceError::CorruptValue {
            namespace: self.namespace.clone(),
            key: key.to_string(),
            reason: e.to_string(),
        })
    }

    fn invalid(&self, key: &str, source: crate::params::ParamError) -> SubspaceError {
        SubspaceError::InvalidParam {
            namespace: self.namespace.clone(),
            key: key.to_string(),
            source,
        }
    }

    /// Reads a stored value, returning `None` when nothing is stored.
    pub fn get_if_exists<S: ParamStore + ?Sized>(
        &self,
        store: &S,
        key: &str,
    ) -> SubspaceResult<Option<ParamValue>> {
        let field = self.field(key)?;
        store
            .get(&self.namespace, key)
            .map(|bytes| self.decode(field, &bytes))
            .transpose()
    }

    /// Reads a stored value.
    ///
    /// # Errors
    ///
    /// - `SchemaNotBound` before binding
    /// - `UnknownKey` for keys outside the bound table
    /// - `ParamNotFound` when nothing is stored under the key
    pub fn get<S: ParamStore + ?Sized>(&self, store: &S, key: &str) -> SubspaceResult<ParamValue> {
        self.get_if_exists(store, key)?
            .ok_or_else(|| SubspaceError::ParamNotFound {
                namespace: self.namespace.clone(),
                key: key.to_string(),
            })
    }

    /// Reads a stored value, falling back to the field's declared default.
    pub fn get_or_default<S: ParamStore + ?Sized>(
        &self,
        store: &S,
        key: &str,
    ) -> SubspaceResult<ParamValue> {
        let field = self.field(key)?;
        match store.get(&self.namespace, key) {
            Some(bytes) => self.decode(field, &bytes),
            None => Ok(field.default.clone()),
        }
    }

    pub fn has<S: ParamStore + ?Sized>(&self, store: &S, key: &str) -> SubspaceResult<bool> {
        self.field(key)?;
        Ok(store.has(&self.namespace, key))
    }

    /// Validates `value` against the bound table and stores it.
    pub fn set<S: ParamStore + ?Sized>(
        &self,
        store: &mut S,
        key: &str,
        value: ParamValue,
    ) -> SubspaceResult<()> {
        let field = self.field(key)?;
        field
            .validate(&value)
            .map_err(|source| self.invalid(key, source))?;

        let bytes = self.encode(key, &value)?;
        store.set(&self.namespace, key, bytes);
        trace!(namespace = %self.namespace, key, "PARAM_SET");
        Ok(())
    }

    /// Fills every slot of `params` from the store.
    ///
    /// # Errors
    ///
    /// Fails with `ParamNotFound` if any declared key has no stored value.
    /// Slots read before the failure keep their new values.
    pub fn get_param_set<S, P>(&self, store: &S, params: &mut P) -> SubspaceResult<()>
    where
        S: ParamStore + ?Sized,
        P: ParamSet,
    {
        for mut pair in params.param_set_pairs() {
            let value = self.get(store, pair.key)?;
            self.fill(&mut pair, value)?;
        }
        Ok(())
    }

    /// Fills the slots of `params` that have a stored value; others are left as-is.
    pub fn get_param_set_if_exists<S, P>(&self, store: &S, params: &mut P) -> SubspaceResult<()>
    where
        S: ParamStore + ?Sized,
        P: ParamSet,
    {
        for mut pair in params.param_set_pairs() {
            if let Some(value) = self.get_if_exists(store, pair.key)? {
                self.fill(&mut pair, value)?;
            }
        }
        Ok(())
    }

    fn fill(&self, pair: &mut ParamSetPair<'_>, value: ParamValue) -> SubspaceResult<()> {
        pair.slot
            .set(value)
            .map_err(|source| self.invalid(pair.key, source))
    }

    /// Validates every field of `params`, then stores all of them.
    ///
    /// Nothing is written unless every field passes.
    pub fn set_param_set<S, P>(&self, store: &mut S, params: &mut P) -> SubspaceResult<()>
    where
        S: ParamStore + ?Sized,
        P: ParamSet,
    {
        let pairs = params.param_set_pairs();

        let mut staged = Vec::with_capacity(pairs.len());
        for pair in &pairs {
            let value = pair.slot.get();
            self.field(pair.key)?
                .validate(&value)
                .map_err(|source| self.invalid(pair.key, source))?;
            staged.push((pair.key, self.encode(pair.key, &value)?));
        }

        for (key, bytes) in staged {
            store.set(&self.namespace, key, bytes);
            trace!(namespace = %self.namespace, key, "PARAM_SET");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{tax, ParamError};
    use crate::subspace::MemoryStore;

    fn bound_tax() -> Subspace {
        let mut subspace = Subspace::new(tax::MODULE_NAME);
        subspace
            .with_key_table(tax::param_key_table().unwrap())
            .unwrap();
        subspace
    }

    #[test]
    fn test_unbound_rejects_access() {
        let subspace = Subspace::new("tax");
        let mut store = MemoryStore::new();

        assert!(!subspace.has_key_table());
        assert_eq!(
            subspace.get(&store, tax::KEY_FEE_RATE),
            Err(SubspaceError::SchemaNotBound("tax".into()))
        );
        assert_eq!(
            subspace.set(&mut store, tax::KEY_FEE_RATE, ParamValue::Int32(5)),
            Err(SubspaceError::SchemaNotBound("tax".into()))
        );
        assert!(store.is_empty());
    }

    #[test]
    fn test_bind_is_monotonic() {
        let mut subspace = Subspace::new("tax");
        let table = tax::param_key_table().unwrap();

        assert_eq!(subspace.with_key_table(table.clone()), Ok(BindOutcome::Bound));
        assert_eq!(subspace.with_key_table(table.clone()), Ok(BindOutcome::Unchanged));

        let other = crate::params::consensus::consensus_params_key_table().unwrap();
        assert_eq!(
            subspace.with_key_table(other),
            Err(SubspaceError::SchemaConflict("tax".into()))
        );
        assert_eq!(subspace.key_table(), Some(&table));
    }

    #[test]
    fn test_set_then_get() {
        let subspace = bound_tax();
        let mut store = MemoryStore::new();

        subspace
            .set(&mut store, tax::KEY_FEE_RATE, ParamValue::Int32(12))
            .unwrap();
        assert_eq!(
            subspace.get(&store, tax::KEY_FEE_RATE),
            Ok(ParamValue::Int32(12))
        );
        assert_eq!(subspace.has(&store, tax::KEY_FEE_RATE), Ok(true));
        assert_eq!(subspace.has(&store, tax::KEY_BASE_DENOM), Ok(false));
    }

    #[test]
    fn test_set_rejects_invalid_value() {
        let subspace = bound_tax();
        let mut store = MemoryStore::new();

        let err = subspace
            .set(&mut store, tax::KEY_FEE_RATE, ParamValue::Int32(101))
            .unwrap_err();
        assert_eq!(
            err,
            SubspaceError::InvalidParam {
                namespace: "tax".into(),
                key: tax::KEY_FEE_RATE.into(),
                source: ParamError::InvalidRate(101),
            }
        );
        assert!(store.is_empty());
    }

    #[test]
    fn test_unknown_key_and_missing_value() {
        let subspace = bound_tax();
        let store = MemoryStore::new();

        assert!(matches!(
            subspace.get(&store, "Nope"),
            Err(SubspaceError::UnknownKey { .. })
        ));
        assert!(matches!(
            subspace.get(&store, tax::KEY_FEE_CAPS),
            Err(SubspaceError::ParamNotFound { .. })
        ));
        assert_eq!(subspace.get_if_exists(&store, tax::KEY_FEE_CAPS), Ok(None));
        assert_eq!(
            subspace.get_or_default(&store, tax::KEY_FEE_CAPS),
            Ok(ParamValue::Str(tax::DEFAULT_FEE_CAPS.into()))
        );
    }

    #[test]
    fn test_corrupt_and_mistyped_values() {
        let subspace = bound_tax();
        let mut store = MemoryStore::new();

        store.set("tax", tax::KEY_FEE_RATE, b"not json".to_vec());
        assert!(matches!(
            subspace.get(&store, tax::KEY_FEE_RATE),
            Err(SubspaceError::CorruptValue { .. })
        ));

        store.set(
            "tax",
            tax::KEY_FEE_RATE,
            br#"{"type":"str","value":"40"}"#.to_vec(),
        );
        let err = subspace.get(&store, tax::KEY_FEE_RATE).unwrap_err();
        assert!(err.is_fatal());
    }

    #[test]
    fn test_param_set_round_trip() {
        let subspace = bound_tax();
        let mut store = MemoryStore::new();

        let mut written = tax::Params::new(7, "5unls", tax::DEFAULT_CONTRACT_ADDRESS, "unls");
        subspace.set_param_set(&mut store, &mut written).unwrap();
        assert_eq!(store.len(), 4);

        let mut read = tax::Params::default();
        subspace.get_param_set(&store, &mut read).unwrap();
        assert_eq!(read, written);
    }

    #[test]
    fn test_set_param_set_is_all_or_nothing() {
        let subspace = bound_tax();
        let mut store = MemoryStore::new();

        let mut params = tax::Params::default_params();
        params.base_denom = "".into();
        assert!(subspace.set_param_set(&mut store, &mut params).is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn test_get_param_set_if_exists_keeps_unset_slots() {
        let subspace = bound_tax();
        let mut store = MemoryStore::new();
        subspace
            .set(&mut store, tax::KEY_FEE_RATE, ParamValue::Int32(3))
            .unwrap();

        let mut params = tax::Params::default_params();
        assert!(subspace.get_param_set(&store, &mut params).is_err());

        let mut params = tax::Params::default_params();
        subspace.get_param_set_if_exists(&store, &mut params).unwrap();
        assert_eq!(params.fee_rate, 3);
        assert_eq!(params.base_denom, tax::DEFAULT_BASE_DENOM);
    }

    #[test]
    fn test_bind_keeps_stored_values() {
        let mut store = MemoryStore::new();
        let bytes = serde_json::to_vec(&ParamValue::Int32(77)).unwrap();
        store.set("tax", tax::KEY_FEE_RATE, bytes);

        let subspace = bound_tax();
        assert_eq!(
            subspace.get(&store, tax::KEY_FEE_RATE),
            Ok(ParamValue::Int32(77))
        );
    }
}
