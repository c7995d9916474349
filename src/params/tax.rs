//! Tax module parameters
//!
//! | Key | Kind | Default |
//! |---|---|---|
//! | `FeeRate` | int32 | 40 |
//! | `FeeCaps` | string | `1000unls` |
//! | `ContractAddress` | string | treasury contract |
//! | `BaseDenom` | string | `stake` |

use serde::{Deserialize, Serialize};
use std::fmt;

use super::errors::ParamResult;
use super::pair::{ParamSet, ParamSetPair, ParamSetPairs, ParamSlot};
use super::validators::{
    self, validate_address, validate_capped_amount, validate_denom, validate_rate,
};
use crate::schema::{KeyTable, KeyTableResult};

/// Namespace of the tax module's subspace
pub const MODULE_NAME: &str = "tax";

pub const KEY_FEE_RATE: &str = "FeeRate";
pub const KEY_FEE_CAPS: &str = "FeeCaps";
pub const KEY_CONTRACT_ADDRESS: &str = "ContractAddress";
pub const KEY_BASE_DENOM: &str = "BaseDenom";

pub const DEFAULT_FEE_RATE: i32 = 40;
pub const DEFAULT_FEE_CAPS: &str = "1000unls";
pub const DEFAULT_CONTRACT_ADDRESS: &str =
    "nolus14hj2tavq8fpesdwxxcu44rty3hh90vhujrvcmstl4zr3txmfvw9s0k0puz";
pub const DEFAULT_BASE_DENOM: &str = "stake";

/// Tax module parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Params {
    pub fee_rate: i32,
    pub fee_caps: String,
    pub contract_address: String,
    pub base_denom: String,
}

impl Params {
    pub fn new(
        fee_rate: i32,
        fee_caps: impl Into<String>,
        contract_address: impl Into<String>,
        base_denom: impl Into<String>,
    ) -> Self {
        Self {
            fee_rate,
            fee_caps: fee_caps.into(),
            contract_address: contract_address.into(),
            base_denom: base_denom.into(),
        }
    }

    /// Returns the documented defaults.
    pub fn default_params() -> Self {
        Self::new(
            DEFAULT_FEE_RATE,
            DEFAULT_FEE_CAPS,
            DEFAULT_CONTRACT_ADDRESS,
            DEFAULT_BASE_DENOM,
        )
    }

    /// Validates every field in declaration order, returning the first failure.
    pub fn validate(&self) -> ParamResult<()> {
        validate_rate(self.fee_rate)?;
        validate_capped_amount(&self.fee_caps)?;
        validate_address(&self.contract_address)?;
        validate_denom(&self.base_denom)?;
        Ok(())
    }
}

impl Default for Params {
    fn default() -> Self {
        Self::default_params()
    }
}

impl ParamSet for Params {
    fn param_set_pairs(&mut self) -> ParamSetPairs<'_> {
        vec![
            ParamSetPair::new(
                KEY_FEE_RATE,
                ParamSlot::Int32(&mut self.fee_rate),
                validators::RATE,
            ),
            ParamSetPair::new(
                KEY_FEE_CAPS,
                ParamSlot::Str(&mut self.fee_caps),
                validators::CAPPED_AMOUNT,
            ),
            ParamSetPair::new(
                KEY_CONTRACT_ADDRESS,
                ParamSlot::Str(&mut self.contract_address),
                validators::ADDRESS,
            ),
            ParamSetPair::new(
                KEY_BASE_DENOM,
                ParamSlot::Str(&mut self.base_denom),
                validators::DENOM,
            ),
        ]
    }
}

impl fmt::Display for Params {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let out = serde_json::to_string_pretty(self).map_err(|_| fmt::Error)?;
        f.write_str(&out)
    }
}

/// Key table for the tax subspace.
pub fn param_key_table() -> KeyTableResult<KeyTable> {
    KeyTable::for_param_set::<Params>()
}
