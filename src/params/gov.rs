//! Governance module parameters
//!
//! Legacy governance keeps three grouped parameters, each stored as one
//! structured value. Durations are in nanoseconds.

use serde::{Deserialize, Serialize};

use super::errors::ParamResult;
use super::validators::{module_error, validate_coin, validate_fraction, Validator};
use super::ParamValue;
use crate::codec::Coin;
use crate::schema::{FieldDescriptor, KeyTable, KeyTableError, KeyTableResult};

pub const MODULE_NAME: &str = "gov";

pub const KEY_DEPOSIT_PARAMS: &str = "depositparams";
pub const KEY_VOTING_PARAMS: &str = "votingparams";
pub const KEY_TALLY_PARAMS: &str = "tallyparams";

/// Two days, in nanoseconds
pub const DEFAULT_PERIOD: i64 = 172_800 * 1_000_000_000;
pub const DEFAULT_MIN_DEPOSIT_AMOUNT: u128 = 10_000_000;
pub const DEFAULT_MIN_DEPOSIT_DENOM: &str = "stake";
pub const DEFAULT_QUORUM: &str = "0.334000000000000000";
pub const DEFAULT_THRESHOLD: &str = "0.500000000000000000";
pub const DEFAULT_VETO_THRESHOLD: &str = "0.334000000000000000";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepositParams {
    pub min_deposit: Vec<Coin>,
    pub max_deposit_period: i64,
}

impl Default for DepositParams {
    fn default() -> Self {
        Self {
            min_deposit: vec![Coin::new(DEFAULT_MIN_DEPOSIT_AMOUNT, DEFAULT_MIN_DEPOSIT_DENOM)],
            max_deposit_period: DEFAULT_PERIOD,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VotingParams {
    pub voting_period: i64,
}

impl Default for VotingParams {
    fn default() -> Self {
        Self {
            voting_period: DEFAULT_PERIOD,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TallyParams {
    pub quorum: String,
    pub threshold: String,
    pub veto_threshold: String,
}

impl Default for TallyParams {
    fn default() -> Self {
        Self {
            quorum: DEFAULT_QUORUM.to_string(),
            threshold: DEFAULT_THRESHOLD.to_string(),
            veto_threshold: DEFAULT_VETO_THRESHOLD.to_string(),
        }
    }
}

/// Minimum deposit coins must be valid, positive and sorted by denomination
/// without repeats; the deposit period must be positive.
pub fn validate_deposit_params(params: &DepositParams) -> ParamResult<()> {
    for coin in &params.min_deposit {
        validate_coin(MODULE_NAME, KEY_DEPOSIT_PARAMS, coin)?;
        if coin.is_zero() {
            return Err(module_error(
                MODULE_NAME,
                KEY_DEPOSIT_PARAMS,
                format!("minimum deposit must be positive: {}", coin),
            ));
        }
    }
    if params
        .min_deposit
        .windows(2)
        .any(|pair| pair[0].denom >= pair[1].denom)
    {
        return Err(module_error(
            MODULE_NAME,
            KEY_DEPOSIT_PARAMS,
            "minimum deposit denominations must be sorted and unique",
        ));
    }
    if params.max_deposit_period <= 0 {
        return Err(module_error(
            MODULE_NAME,
            KEY_DEPOSIT_PARAMS,
            format!("maximum deposit period must be positive: {}", params.max_deposit_period),
        ));
    }
    Ok(())
}

pub fn validate_voting_params(params: &VotingParams) -> ParamResult<()> {
    if params.voting_period <= 0 {
        return Err(module_error(
            MODULE_NAME,
            KEY_VOTING_PARAMS,
            format!("voting period must be positive: {}", params.voting_period),
        ));
    }
    Ok(())
}

/// Quorum lies in `[0, 1]`; both thresholds lie in `(0, 1]`.
pub fn validate_tally_params(params: &TallyParams) -> ParamResult<()> {
    validate_fraction(MODULE_NAME, KEY_TALLY_PARAMS, &params.quorum, false)?;
    validate_fraction(MODULE_NAME, KEY_TALLY_PARAMS, &params.threshold, true)?;
    validate_fraction(MODULE_NAME, KEY_TALLY_PARAMS, &params.veto_threshold, true)?;
    Ok(())
}

fn decode<T: serde::de::DeserializeOwned>(value: &ParamValue, key: &'static str) -> ParamResult<T> {
    value
        .decode_object()?
        .map_err(|reason| module_error(MODULE_NAME, key, reason))
}

const DEPOSIT_PARAMS: Validator = Validator::new("gov.deposit_params", |v| {
    validate_deposit_params(&decode(v, KEY_DEPOSIT_PARAMS)?)
});
const VOTING_PARAMS: Validator = Validator::new("gov.voting_params", |v| {
    validate_voting_params(&decode(v, KEY_VOTING_PARAMS)?)
});
const TALLY_PARAMS: Validator = Validator::new("gov.tally_params", |v| {
    validate_tally_params(&decode(v, KEY_TALLY_PARAMS)?)
});

fn encode<T: Serialize>(key: &'static str, value: &T) -> KeyTableResult<ParamValue> {
    serde_json::to_value(value)
        .map(ParamValue::Object)
        .map_err(|e| KeyTableError::InvalidDefault {
            key: key.to_string(),
            source: module_error(MODULE_NAME, key, e.to_string()),
        })
}

/// Key table for the governance subspace.
pub fn param_key_table() -> KeyTableResult<KeyTable> {
    KeyTable::new(vec![
        FieldDescriptor::new(
            KEY_DEPOSIT_PARAMS,
            encode(KEY_DEPOSIT_PARAMS, &DepositParams::default())?,
            DEPOSIT_PARAMS,
        ),
        FieldDescriptor::new(
            KEY_VOTING_PARAMS,
            encode(KEY_VOTING_PARAMS, &VotingParams::default())?,
            VOTING_PARAMS,
        ),
        FieldDescriptor::new(
            KEY_TALLY_PARAMS,
            encode(KEY_TALLY_PARAMS, &TallyParams::default())?,
            TALLY_PARAMS,
        ),
    ])
}
