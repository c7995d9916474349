//! Key table migration pass
//!
//! Backfills key tables onto subspaces that were registered without one,
//! using an explicit namespace-to-builder lookup table.
//!
//! # Design Principles
//!
//! - Unknown namespaces are skipped, never an error
//! - Bound subspaces are never overwritten
//! - Idempotent and independent of registry order
//! - Any malformed key table or conflict aborts the whole pass

mod errors;
mod lookup;
mod pass;

pub use errors::{MigrationError, MigrationResult};
pub use lookup::{SchemaBuilder, SchemaBuilderTable};
pub use pass::{migrate, migrate_with_consensus_namespace, MigrationReport, CONSENSUS_NAMESPACE};
