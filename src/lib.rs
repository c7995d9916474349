//! paramspace - typed configuration subspaces with lazy key table migration
//!
//! A fixed set of named subspaces is registered at startup, each of which
//! must be bound exactly once to a key table describing its parameters.
//! The migration pass backfills key tables onto subspaces that lack one,
//! and is safe to run on every startup.
//!
//! ```
//! use paramspace::migration::{migrate, SchemaBuilderTable};
//! use paramspace::params::{tax, ParamValue};
//! use paramspace::subspace::{MemoryStore, Registry};
//!
//! let mut registry = Registry::with_namespaces(["tax", "ibc"]);
//! let report = migrate(&mut registry, &SchemaBuilderTable::legacy()).unwrap();
//! assert_eq!(report.skipped, vec!["ibc".to_string()]);
//!
//! let mut store = MemoryStore::new();
//! let tax_space = registry.by_name("tax").unwrap();
//! tax_space.set(&mut store, tax::KEY_FEE_RATE, ParamValue::Int32(25)).unwrap();
//! assert_eq!(tax_space.get(&store, tax::KEY_FEE_RATE).unwrap(), ParamValue::Int32(25));
//! ```

pub mod codec;
pub mod config;
pub mod migration;
pub mod params;
pub mod schema;
pub mod subspace;

pub use params::Severity;
