//! Coins: a denomination with a non-negative integer amount

use serde::{Deserialize, Serialize};
use std::fmt;

use super::denom::validate_denom;
use super::errors::{CoinError, CoinResult};

/// Amount of one denomination
///
/// The amount is kept in its decimal string form, so arbitrarily large
/// amounts survive a round trip.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coin {
    pub denom: String,
    pub amount: String,
}

impl Coin {
    pub fn new(amount: u128, denom: impl Into<String>) -> Self {
        Self {
            denom: denom.into(),
            amount: amount.to_string(),
        }
    }

    /// Checks the denomination syntax and that the amount is a non-negative integer.
    pub fn validate(&self) -> CoinResult<()> {
        validate_denom(&self.denom)?;
        if self.amount.is_empty() || !self.amount.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CoinError::InvalidAmount(self.amount.clone()));
        }
        Ok(())
    }

    pub fn is_zero(&self) -> bool {
        self.amount.bytes().all(|b| b == b'0')
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}
