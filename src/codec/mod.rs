//! Encoding collaborators used by parameter validators
//!
//! - Account addresses: bech32 (BIP-173) strings with a fixed human-readable prefix
//! - Denominations: coin denomination syntax
//! - Coins: denomination plus non-negative integer amount
//!
//! All are pure functions. They perform no I/O and hold no state beyond
//! a lazily compiled denomination pattern.

mod address;
mod coin;
mod denom;
mod errors;

pub use address::{AccAddress, ACCOUNT_PREFIX};
pub use coin::Coin;
pub use denom::{is_valid_denom, validate_denom};
pub use errors::{AddressError, AddressResult, CoinError, CoinResult, DenomError, DenomResult};
