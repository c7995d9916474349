//! Key tables: per-namespace parameter schemas
//!
//! A key table is the immutable catalog of field descriptors for one
//! namespace. It is process-local metadata and is never persisted.
//!
//! # Design Principles
//!
//! - Built once from a parameter set's declared pairs
//! - Keys are unique within a table
//! - Every default satisfies its own validator
//! - Equality is structural, so rebuilding a table yields an equal one

mod errors;
mod key_table;

pub use crate::params::Validator;
pub use errors::{KeyTableError, KeyTableResult};
pub use key_table::{FieldDescriptor, KeyTable};
