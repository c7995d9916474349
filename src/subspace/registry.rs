//! Process-wide catalog of subspaces
//!
//! The registry owns every subspace. Callers hold [`SubspaceId`] handles
//! and need `&mut Registry` to bind, so initialization has a single writer.
//! Entries are never removed.

use std::collections::HashMap;

use tracing::debug;

use super::errors::SubspaceResult;
use super::space::{BindOutcome, Subspace};
use crate::schema::KeyTable;

/// Handle to a subspace owned by a [`Registry`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubspaceId(usize);

impl SubspaceId {
    /// Position of the subspace in registration order
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Arena of subspaces addressable by namespace
#[derive(Debug, Clone, Default)]
pub struct Registry {
    subspaces: Vec<Subspace>,
    index: HashMap<String, SubspaceId>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers every namespace in iteration order.
    pub fn with_namespaces<I, S>(namespaces: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut registry = Self::new();
        for namespace in namespaces {
            registry.register(namespace);
        }
        registry
    }

    /// Returns the subspace for `namespace`, creating an unbound one if absent.
    pub fn register(&mut self, namespace: impl Into<String>) -> SubspaceId {
        let namespace = namespace.into();
        if let Some(&id) = self.index.get(&namespace) {
            return id;
        }

        let id = SubspaceId(self.subspaces.len());
        debug!(namespace = %namespace, "SUBSPACE_REGISTERED");
        self.subspaces.push(Subspace::new(namespace.clone()));
        self.index.insert(namespace, id);
        id
    }

    /// Registers `namespace` if needed, then binds `table` to it.
    ///
    /// # Errors
    ///
    /// Returns `SchemaConflict` if a different table is already bound.
    pub fn bind(
        &mut self,
        namespace: &str,
        table: KeyTable,
    ) -> SubspaceResult<(SubspaceId, BindOutcome)> {
        let id = self.register(namespace);
        let outcome = self.subspaces[id.0].with_key_table(table)?;
        Ok((id, outcome))
    }

    pub fn get(&self, id: SubspaceId) -> Option<&Subspace> {
        self.subspaces.get(id.0)
    }

    pub fn get_mut(&mut self, id: SubspaceId) -> Option<&mut Subspace> {
        self.subspaces.get_mut(id.0)
    }

    pub fn id_of(&self, namespace: &str) -> Option<SubspaceId> {
        self.index.get(namespace).copied()
    }

    pub fn by_name(&self, namespace: &str) -> Option<&Subspace> {
        self.id_of(namespace).and_then(|id| self.get(id))
    }

    pub fn by_name_mut(&mut self, namespace: &str) -> Option<&mut Subspace> {
        let id = self.id_of(namespace)?;
        self.get_mut(id)
    }

    pub fn contains(&self, namespace: &str) -> bool {
        self.index.contains_key(namespace)
    }

    /// Returns every subspace in registration order.
    pub fn all(&self) -> impl Iterator<Item = &Subspace> {
        self.subspaces.iter()
    }

    /// Returns every handle in registration order.
    pub fn ids(&self) -> impl Iterator<Item = SubspaceId> {
        (0..self.subspaces.len()).map(SubspaceId)
    }

    pub fn namespaces(&self) -> impl Iterator<Item = &str> {
        self.subspaces.iter().map(Subspace::namespace)
    }

    pub fn len(&self) -> usize {
        self.subspaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subspaces.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::tax;

    #[test]
    fn test_register_is_idempotent() {
        let mut registry = Registry::new();
        let a = registry.register("auth");
        let b = registry.register("bank");
        let again = registry.register("auth");

        assert_eq!(a, again);
        assert_ne!(a, b);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_register_returns_existing_bound_subspace() {
        let mut registry = Registry::new();
        let id = registry.register("tax");
        registry
            .get_mut(id)
            .unwrap()
            .with_key_table(tax::param_key_table().unwrap())
            .unwrap();

        let again = registry.register("tax");
        assert_eq!(id, again);
        assert!(registry.get(again).unwrap().has_key_table());
    }

    #[test]
    fn test_bind_registers_missing_namespace() {
        let mut registry = Registry::new();
        let table = tax::param_key_table().unwrap();

        let (id, outcome) = registry.bind("tax", table.clone()).unwrap();
        assert_eq!(outcome, BindOutcome::Bound);
        assert_eq!(registry.id_of("tax"), Some(id));

        let (again, outcome) = registry.bind("tax", table).unwrap();
        assert_eq!(again, id);
        assert_eq!(outcome, BindOutcome::Unchanged);
    }

    #[test]
    fn test_bind_conflict_keeps_original() {
        let mut registry = Registry::new();
        registry.bind("tax", tax::param_key_table().unwrap()).unwrap();

        let other = crate::params::consensus::consensus_params_key_table().unwrap();
        let err = registry.bind("tax", other).unwrap_err();
        assert_eq!(err, crate::subspace::SubspaceError::SchemaConflict("tax".into()));
        assert_eq!(
            registry.by_name("tax").unwrap().key_table(),
            Some(&tax::param_key_table().unwrap())
        );
    }

    #[test]
    fn test_enumeration_in_registration_order() {
        let registry = Registry::with_namespaces(["bank", "auth", "tax"]);
        let names: Vec<_> = registry.namespaces().collect();
        assert_eq!(names, vec!["bank", "auth", "tax"]);

        let ids: Vec<_> = registry.ids().map(|id| id.index()).collect();
        assert_eq!(ids, vec![0, 1, 2]);
        assert_eq!(registry.all().count(), 3);
    }

    #[test]
    fn test_lookup_by_name() {
        let mut registry = Registry::with_namespaces(["auth"]);
        assert!(registry.contains("auth"));
        assert!(registry.by_name("auth").is_some());
        assert!(registry.by_name("bank").is_none());
        assert!(registry.by_name_mut("auth").is_some());
        assert_eq!(registry.id_of("bank"), None);
        assert!(!registry.by_name("auth").unwrap().has_key_table());
    }

    #[test]
    fn test_empty_registry() {
        let registry = Registry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.all().count(), 0);
    }
}
