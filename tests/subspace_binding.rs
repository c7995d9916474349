//! Subspace Binding Tests
//!
//! End-to-end tests for the subspace lifecycle:
//! - Parameter access before binding is a sequencing defect
//! - Binding is monotonic and never touches stored values
//! - Values written through one subspace are read back with their kind
//! - Param sets are written all-or-nothing
//! - Startup from a configuration file

use paramspace::config::RegistryConfig;
use paramspace::migration::{migrate, SchemaBuilderTable};
use paramspace::params::consensus::{self, ConsensusParams};
use paramspace::params::{tax, ParamError, ParamValue};
use paramspace::subspace::{BindOutcome, MemoryStore, ParamStore, Registry, SubspaceError};
use std::io::Write;
use tempfile::NamedTempFile;

// =============================================================================
// Helper Functions
// =============================================================================

fn migrated(namespaces: &[&str]) -> Registry {
    let mut registry = Registry::with_namespaces(namespaces.iter().copied());
    migrate(&mut registry, &SchemaBuilderTable::legacy()).unwrap();
    registry
}

// =============================================================================
// Unbound Access Tests
// =============================================================================

/// Every parameter operation on an unbound subspace fails the same way.
#[test]
fn test_unbound_subspace_rejects_all_access() {
    let registry = Registry::with_namespaces([tax::MODULE_NAME]);
    let subspace = registry.by_name(tax::MODULE_NAME).unwrap();
    let mut store = MemoryStore::new();
    let expected = SubspaceError::SchemaNotBound(tax::MODULE_NAME.into());

    assert_eq!(subspace.get(&store, tax::KEY_FEE_RATE), Err(expected.clone()));
    assert_eq!(
        subspace.get_or_default(&store, tax::KEY_FEE_RATE),
        Err(expected.clone())
    );
    assert_eq!(subspace.has(&store, tax::KEY_FEE_RATE), Err(expected.clone()));
    assert_eq!(
        subspace.set(&mut store, tax::KEY_FEE_RATE, ParamValue::Int32(1)),
        Err(expected.clone())
    );

    let mut params = tax::Params::default();
    assert_eq!(
        subspace.set_param_set(&mut store, &mut params),
        Err(expected)
    );
    assert!(store.is_empty());
}

// =============================================================================
// Binding Tests
// =============================================================================

/// Binding after values were written leaves those values in place.
#[test]
fn test_binding_preserves_stored_values() {
    let mut store = MemoryStore::new();
    store.set(
        tax::MODULE_NAME,
        tax::KEY_FEE_RATE,
        serde_json::to_vec(&ParamValue::Int32(12)).unwrap(),
    );

    let registry = migrated(&[tax::MODULE_NAME]);
    let subspace = registry.by_name(tax::MODULE_NAME).unwrap();

    assert_eq!(
        subspace.get(&store, tax::KEY_FEE_RATE),
        Ok(ParamValue::Int32(12))
    );
}

/// The owning module may bind the same table again after migration.
#[test]
fn test_owner_rebind_with_equal_table() {
    let mut registry = migrated(&[tax::MODULE_NAME]);
    let outcome = registry
        .bind(tax::MODULE_NAME, tax::param_key_table().unwrap())
        .unwrap()
        .1;
    assert_eq!(outcome, BindOutcome::Unchanged);
}

/// Binding a different table after migration is rejected.
#[test]
fn test_conflicting_rebind_rejected() {
    let mut registry = migrated(&[tax::MODULE_NAME]);
    let err = registry
        .bind(
            tax::MODULE_NAME,
            consensus::consensus_params_key_table().unwrap(),
        )
        .unwrap_err();
    assert_eq!(err, SubspaceError::SchemaConflict(tax::MODULE_NAME.into()));
    assert!(err.is_fatal());
}

// =============================================================================
// Read / Write Tests
// =============================================================================

/// Single values go through validation on the way in.
#[test]
fn test_set_and_get_through_store() {
    let registry = migrated(&[tax::MODULE_NAME]);
    let subspace = registry.by_name(tax::MODULE_NAME).unwrap();
    let mut store = MemoryStore::new();

    assert_eq!(
        subspace.get_or_default(&store, tax::KEY_FEE_RATE),
        Ok(ParamValue::Int32(tax::DEFAULT_FEE_RATE))
    );
    assert!(matches!(
        subspace.get(&store, tax::KEY_FEE_RATE),
        Err(SubspaceError::ParamNotFound { .. })
    ));

    subspace
        .set(&mut store, tax::KEY_FEE_RATE, ParamValue::Int32(7))
        .unwrap();
    assert_eq!(subspace.get(&store, tax::KEY_FEE_RATE), Ok(ParamValue::Int32(7)));
    assert_eq!(subspace.has(&store, tax::KEY_FEE_RATE), Ok(true));

    let err = subspace
        .set(&mut store, tax::KEY_FEE_RATE, ParamValue::Int32(101))
        .unwrap_err();
    assert_eq!(
        err,
        SubspaceError::InvalidParam {
            namespace: tax::MODULE_NAME.into(),
            key: tax::KEY_FEE_RATE.into(),
            source: ParamError::InvalidRate(101),
        }
    );
    assert!(!err.is_fatal());
    assert_eq!(subspace.get(&store, tax::KEY_FEE_RATE), Ok(ParamValue::Int32(7)));
}

/// Keys outside the bound table are rejected.
#[test]
fn test_unknown_key_rejected() {
    let registry = migrated(&[tax::MODULE_NAME]);
    let subspace = registry.by_name(tax::MODULE_NAME).unwrap();
    let mut store = MemoryStore::new();

    assert!(matches!(
        subspace.set(&mut store, "MintRate", ParamValue::Int32(1)),
        Err(SubspaceError::UnknownKey { .. })
    ));
}

/// Two namespaces sharing one store never see each other's values.
#[test]
fn test_namespaces_are_isolated() {
    let registry = migrated(&[tax::MODULE_NAME]);
    let tax_space = registry.by_name(tax::MODULE_NAME).unwrap();
    let consensus_space = registry.by_name("baseapp").unwrap();
    let mut store = MemoryStore::new();

    tax_space
        .set(&mut store, tax::KEY_FEE_RATE, ParamValue::Int32(3))
        .unwrap();
    consensus_space
        .set(
            &mut store,
            consensus::KEY_BLOCK_MAX_GAS,
            ParamValue::Int64(50_000_000),
        )
        .unwrap();

    assert_eq!(store.keys(tax::MODULE_NAME).collect::<Vec<_>>(), vec![tax::KEY_FEE_RATE]);
    assert_eq!(
        store.keys("baseapp").collect::<Vec<_>>(),
        vec![consensus::KEY_BLOCK_MAX_GAS]
    );
}

// =============================================================================
// Param Set Tests
// =============================================================================

/// A full tax param set survives a write and a read.
#[test]
fn test_tax_param_set_through_store() {
    let registry = migrated(&[tax::MODULE_NAME]);
    let subspace = registry.by_name(tax::MODULE_NAME).unwrap();
    let mut store = MemoryStore::new();

    let mut written = tax::Params::new(15, "500unls", tax::DEFAULT_CONTRACT_ADDRESS, "unls");
    subspace.set_param_set(&mut store, &mut written).unwrap();

    let mut read = tax::Params::default();
    subspace.get_param_set(&store, &mut read).unwrap();
    assert_eq!(read, written);
}

/// A single invalid field means nothing is written.
#[test]
fn test_invalid_param_set_writes_nothing() {
    let registry = migrated(&[tax::MODULE_NAME]);
    let subspace = registry.by_name(tax::MODULE_NAME).unwrap();
    let mut store = MemoryStore::new();

    let mut params = tax::Params::default();
    params.base_denom = "   ".into();

    let err = subspace.set_param_set(&mut store, &mut params).unwrap_err();
    assert!(matches!(
        err,
        SubspaceError::InvalidParam {
            source: ParamError::BlankDenom,
            ..
        }
    ));
    assert!(store.is_empty());
}

/// Partial reads keep defaults for keys never written.
#[test]
fn test_consensus_param_set_partial_read() {
    let registry = migrated(&[]);
    let subspace = registry.by_name("baseapp").unwrap();
    let mut store = MemoryStore::new();

    subspace
        .set(
            &mut store,
            consensus::KEY_EVIDENCE_MAX_BYTES,
            ParamValue::Int64(0),
        )
        .unwrap();

    let mut params = ConsensusParams::default();
    subspace.get_param_set_if_exists(&store, &mut params).unwrap();
    assert_eq!(params.evidence_max_bytes, 0);
    assert_eq!(params.block_max_bytes, consensus::DEFAULT_BLOCK_MAX_BYTES);

    let mut strict = ConsensusParams::default();
    assert!(matches!(
        subspace.get_param_set(&store, &mut strict),
        Err(SubspaceError::ParamNotFound { .. })
    ));
}

/// A stored value of the wrong kind is reported, not coerced.
#[test]
fn test_stored_kind_mismatch_detected() {
    let registry = migrated(&[tax::MODULE_NAME]);
    let subspace = registry.by_name(tax::MODULE_NAME).unwrap();
    let mut store = MemoryStore::new();
    store.set(
        tax::MODULE_NAME,
        tax::KEY_FEE_RATE,
        serde_json::to_vec(&ParamValue::Str("forty".into())).unwrap(),
    );

    let err = subspace.get(&store, tax::KEY_FEE_RATE).unwrap_err();
    assert!(err.is_fatal());

    store.set(tax::MODULE_NAME, tax::KEY_FEE_RATE, b"not json".to_vec());
    assert!(matches!(
        subspace.get(&store, tax::KEY_FEE_RATE),
        Err(SubspaceError::CorruptValue { .. })
    ));
}

// =============================================================================
// Startup From Configuration
// =============================================================================

/// Configuration file to migrated registry in one flow.
#[test]
fn test_startup_from_config_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"namespaces": ["auth", "vesting"], "consensus_namespace": "consensus"}}"#
    )
    .unwrap();

    let config = RegistryConfig::load(file.path()).unwrap();
    let mut registry = config.build_registry();
    let report = config
        .migrate(&mut registry, &SchemaBuilderTable::legacy())
        .unwrap();

    assert_eq!(report.bound, vec!["auth".to_string()]);
    assert_eq!(report.skipped, vec!["vesting".to_string()]);
    assert_eq!(
        registry.get(report.consensus).unwrap().namespace(),
        "consensus"
    );
    assert!(!registry.contains("baseapp"));
}
