//! Subspaces and the subspace registry
//!
//! A subspace is the namespace-scoped container parameter values live
//! under. It starts without a key table and becomes usable once exactly
//! one table is bound to it.
//!
//! # Design Principles
//!
//! - Access before binding fails with `SchemaNotBound`
//! - Binding is monotonic; equal rebinds are no-ops, different ones conflict
//! - Binding attaches metadata only; stored values are never rewritten
//! - The registry owns all subspaces; callers hold handles

mod errors;
mod registry;
mod space;
mod store;

pub use errors::{SubspaceError, SubspaceResult};
pub use registry::{Registry, SubspaceId};
pub use space::{BindOutcome, Subspace};
pub use store::{MemoryStore, ParamStore};
