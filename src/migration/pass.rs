//! One-shot key table backfill
//!
//! For every registered subspace:
//! 1. Namespaces absent from the lookup table are skipped
//! 2. Otherwise the key table is built; a malformed table aborts the pass
//! 3. Bound subspaces are left untouched
//! 4. Unbound subspaces get the built table
//!
//! Finally the consensus subspace is registered if needed and bound to the
//! fixed consensus key table.
//!
//! The pass plans every binding before applying any, so an aborted run
//! leaves the registry exactly as it found it. Running it again on the
//! same registry changes nothing.

use tracing::{debug, error, info};

use super::errors::{MigrationError, MigrationResult};
use super::lookup::SchemaBuilderTable;
use crate::params::consensus::consensus_params_key_table;
use crate::schema::KeyTable;
use crate::subspace::{Registry, SubspaceError, SubspaceId};

/// Namespace of the consensus parameters subspace
pub const CONSENSUS_NAMESPACE: &str = "baseapp";

/// Outcome of a migration pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationReport {
    /// Handle to the bound consensus subspace
    pub consensus: SubspaceId,
    /// Namespaces bound by this run
    pub bound: Vec<String>,
    /// Known namespaces that were already bound
    pub already_bound: Vec<String>,
    /// Namespaces absent from the lookup table, other than the consensus one
    pub skipped: Vec<String>,
}

impl MigrationReport {
    /// Returns true if this run bound nothing new.
    pub fn is_noop(&self) -> bool {
        self.bound.is_empty()
    }
}

struct Plan {
    bindings: Vec<(String, KeyTable)>,
    already_bound: Vec<String>,
    skipped: Vec<String>,
    consensus_table: KeyTable,
}

/// Runs the pass with the default consensus namespace.
pub fn migrate(
    registry: &mut Registry,
    table: &SchemaBuilderTable,
) -> MigrationResult<MigrationReport> {
    migrate_with_consensus_namespace(registry, table, CONSENSUS_NAMESPACE)
}

/// Runs the pass, binding the consensus key table under `consensus_namespace`.
///
/// # Errors
///
/// - `MalformedKeyTable` if any builder fails
/// - `Subspace(SchemaConflict)` if the consensus subspace holds, or would
///   receive, a different key table
pub fn migrate_with_consensus_namespace(
    registry: &mut Registry,
    table: &SchemaBuilderTable,
    consensus_namespace: &str,
) -> MigrationResult<MigrationReport> {
    let result = plan(registry, table, consensus_namespace)
        .and_then(|plan| commit(registry, plan, consensus_namespace));

    match &result {
        Ok(report) => info!(
            bound = report.bound.len(),
            already_bound = report.already_bound.len(),
            skipped = report.skipped.len(),
            "MIGRATION_COMPLETE"
        ),
        Err(err) => error!(code = err.code(), error = %err, "MIGRATION_ABORTED"),
    }
    result
}

fn plan(
    registry: &Registry,
    table: &SchemaBuilderTable,
    consensus_namespace: &str,
) -> MigrationResult<Plan> {
    let mut bindings = Vec::new();
    let mut already_bound = Vec::new();
    let mut skipped = Vec::new();

    for subspace in registry.all() {
        let namespace = subspace.namespace();

        let Some(builder) = table.get(namespace) else {
            if namespace == consensus_namespace {
                continue;
            }
            debug!(namespace, "MIGRATION_SKIPPED_NAMESPACE");
            skipped.push(namespace.to_string());
            continue;
        };

        let key_table = builder().map_err(|source| MigrationError::MalformedKeyTable {
            namespace: namespace.to_string(),
            source,
        })?;

        if subspace.has_key_table() {
            debug!(namespace, "MIGRATION_ALREADY_BOUND");
            already_bound.push(namespace.to_string());
            continue;
        }

        bindings.push((namespace.to_string(), key_table));
    }

    let consensus_table =
        consensus_params_key_table().map_err(|source| MigrationError::MalformedKeyTable {
            namespace: consensus_namespace.to_string(),
            source,
        })?;

    let existing = registry
        .by_name(consensus_namespace)
        .and_then(|subspace| subspace.key_table());
    let planned = bindings
        .iter()
        .find(|(namespace, _)| namespace == consensus_namespace)
        .map(|(_, key_table)| key_table);

    if let Some(other) = existing.or(planned) {
        if *other != consensus_table {
            return Err(SubspaceError::SchemaConflict(consensus_namespace.to_string()).into());
        }
    }

    Ok(Plan {
        bindings,
        already_bound,
        skipped,
        consensus_table,
    })
}

fn commit(
    registry: &mut Registry,
    plan: Plan,
    consensus_namespace: &str,
) -> MigrationResult<MigrationReport> {
    let mut bound = Vec::with_capacity(plan.bindings.len());
    for (namespace, key_table) in plan.bindings {
        registry.bind(&namespace, key_table)?;
        bound.push(namespace);
    }

    let (consensus, _) = registry.bind(consensus_namespace, plan.consensus_table)?;

    Ok(MigrationReport {
        consensus,
        bound,
        already_bound: plan.already_bound,
        skipped: plan.skipped,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::tax;
    use crate::schema::{FieldDescriptor, KeyTableError};
    use crate::params::{validators, ParamValue};

    fn bad_builder() -> crate::schema::KeyTableResult<KeyTable> {
        KeyTable::new(vec![
            FieldDescriptor::new("FeeRate", ParamValue::Int32(1), validators::RATE),
            FieldDescriptor::new("FeeRate", ParamValue::Int32(2), validators::RATE),
        ])
    }

    #[test]
    fn test_binds_known_and_skips_unknown() {
        let mut registry = Registry::with_namespaces(["tax", "ibc"]);
        let report = migrate(&mut registry, &SchemaBuilderTable::legacy()).unwrap();

        assert_eq!(report.bound, vec!["tax".to_string()]);
        assert_eq!(report.skipped, vec!["ibc".to_string()]);
        assert!(registry.by_name("tax").unwrap().has_key_table());
        assert!(!registry.by_name("ibc").unwrap().has_key_table());
    }

    #[test]
    fn test_consensus_subspace_always_bound() {
        let mut registry = Registry::new();
        let report = migrate(&mut registry, &SchemaBuilderTable::new()).unwrap();

        let consensus = registry.get(report.consensus).unwrap();
        assert_eq!(consensus.namespace(), CONSENSUS_NAMESPACE);
        assert_eq!(
            consensus.key_table(),
            Some(&consensus_params_key_table().unwrap())
        );
    }

    #[test]
    fn test_second_run_is_noop() {
        let mut registry = Registry::with_namespaces(["tax"]);
        let table = SchemaBuilderTable::legacy();

        let first = migrate(&mut registry, &table).unwrap();
        let snapshot = registry.clone();
        let second = migrate(&mut registry, &table).unwrap();

        assert!(!first.is_noop());
        assert!(second.is_noop());
        assert_eq!(second.already_bound, vec!["tax".to_string()]);
        assert_eq!(first.consensus, second.consensus);
        assert!(registry.all().eq(snapshot.all()));
    }

    #[test]
    fn test_malformed_builder_aborts_without_changes() {
        let mut registry = Registry::with_namespaces(["tax", "broken"]);
        let table = SchemaBuilderTable::legacy().with("broken", bad_builder);

        let err = migrate(&mut registry, &table).unwrap_err();
        assert_eq!(
            err,
            MigrationError::MalformedKeyTable {
                namespace: "broken".into(),
                source: KeyTableError::DuplicateKey("FeeRate".into()),
            }
        );
        assert!(!registry.by_name("tax").unwrap().has_key_table());
        assert!(!registry.contains(CONSENSUS_NAMESPACE));
    }

    #[test]
    fn test_malformed_builder_fatal_even_when_bound() {
        let mut registry = Registry::with_namespaces(["broken"]);
        registry
            .bind("broken", tax::param_key_table().unwrap())
            .unwrap();
        let table = SchemaBuilderTable::new().with("broken", bad_builder);

        assert!(matches!(
            migrate(&mut registry, &table),
            Err(MigrationError::MalformedKeyTable { .. })
        ));
    }

    #[test]
    fn test_consensus_conflict_is_fatal() {
        let mut registry = Registry::with_namespaces(["tax"]);
        registry
            .bind(CONSENSUS_NAMESPACE, tax::param_key_table().unwrap())
            .unwrap();

        let err = migrate(&mut registry, &SchemaBuilderTable::legacy()).unwrap_err();
        assert_eq!(
            err,
            MigrationError::Subspace(SubspaceError::SchemaConflict(CONSENSUS_NAMESPACE.into()))
        );
        assert!(!registry.by_name("tax").unwrap().has_key_table());
    }

    #[test]
    fn test_planned_consensus_conflict_is_fatal() {
        let mut registry = Registry::with_namespaces([CONSENSUS_NAMESPACE]);
        let table = SchemaBuilderTable::new().with(CONSENSUS_NAMESPACE, tax::param_key_table);

        assert!(migrate(&mut registry, &table).is_err());
        assert!(!registry.by_name(CONSENSUS_NAMESPACE).unwrap().has_key_table());
    }

    #[test]
    fn test_preregistered_consensus_not_reported_skipped() {
        let mut registry = Registry::with_namespaces([CONSENSUS_NAMESPACE, "ibc"]);
        let report = migrate(&mut registry, &SchemaBuilderTable::legacy()).unwrap();

        assert_eq!(report.skipped, vec!["ibc".to_string()]);
        assert!(report.bound.is_empty());
        assert!(registry.get(report.consensus).unwrap().has_key_table());
    }

    #[test]
    fn test_custom_consensus_namespace() {
        let mut registry = Registry::new();
        let report =
            migrate_with_consensus_namespace(&mut registry, &SchemaBuilderTable::new(), "consensus")
                .unwrap();
        assert_eq!(registry.get(report.consensus).unwrap().namespace(), "consensus");
        assert!(!registry.contains(CONSENSUS_NAMESPACE));
    }
}
