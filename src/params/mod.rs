//! Parameter sets and field validators
//!
//! A parameter set is a plain struct whose fields are exposed as
//! (key, slot, validator) pairs in declaration order. Key tables are
//! built from those pairs; the set itself never touches a subspace.
//!
//! Besides the tax set, each module that kept parameters in a legacy
//! subspace exposes a `param_key_table()` describing that subspace's shape.
//!
//! # Design Principles
//!
//! - Default values always satisfy their own validators
//! - Validators are pure and total
//! - Aggregate validation stops at the first failing field
//! - No implicit type coercion between value kinds

pub mod auth;
pub mod bank;
pub mod consensus;
pub mod crisis;
pub mod distribution;
mod errors;
pub mod gov;
pub mod icacontroller;
pub mod mint;
mod pair;
pub mod slashing;
pub mod staking;
pub mod tax;
pub mod validators;
mod value;

pub use errors::{ParamError, ParamResult, Severity};
pub use pair::{ParamSet, ParamSetPair, ParamSetPairs, ParamSlot};
pub use validators::Validator;
pub use value::{ParamValue, ValueKind};
