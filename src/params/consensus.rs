//! Consensus parameters
//!
//! The fixed schema bound to the consensus subspace. The host hands the
//! bound subspace to its consensus engine; only the field layout lives here.

use serde::{Deserialize, Serialize};

use super::errors::{ParamError, ParamResult};
use super::pair::{ParamSet, ParamSetPair, ParamSetPairs, ParamSlot};
use super::validators::Validator;
use crate::schema::{KeyTable, KeyTableResult};

pub const KEY_BLOCK_MAX_BYTES: &str = "BlockMaxBytes";
pub const KEY_BLOCK_MAX_GAS: &str = "BlockMaxGas";
pub const KEY_EVIDENCE_MAX_AGE_NUM_BLOCKS: &str = "EvidenceMaxAgeNumBlocks";
pub const KEY_EVIDENCE_MAX_AGE_DURATION: &str = "EvidenceMaxAgeDuration";
pub const KEY_EVIDENCE_MAX_BYTES: &str = "EvidenceMaxBytes";
pub const KEY_VALIDATOR_PUB_KEY_TYPES: &str = "ValidatorPubKeyTypes";

pub const DEFAULT_BLOCK_MAX_BYTES: i64 = 22_020_096;
pub const DEFAULT_BLOCK_MAX_GAS: i64 = -1;
pub const DEFAULT_EVIDENCE_MAX_AGE_NUM_BLOCKS: i64 = 100_000;
/// 48 hours, in nanoseconds
pub const DEFAULT_EVIDENCE_MAX_AGE_DURATION: i64 = 172_800 * 1_000_000_000;
pub const DEFAULT_EVIDENCE_MAX_BYTES: i64 = 1_048_576;
pub const DEFAULT_PUB_KEY_TYPE: &str = "ed25519";

/// Block, evidence and validator limits handed to the consensus engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsensusParams {
    pub block_max_bytes: i64,
    pub block_max_gas: i64,
    pub evidence_max_age_num_blocks: i64,
    pub evidence_max_age_duration: i64,
    pub evidence_max_bytes: i64,
    pub validator_pub_key_types: Vec<String>,
}

impl Default for ConsensusParams {
    fn default() -> Self {
        Self {
            block_max_bytes: DEFAULT_BLOCK_MAX_BYTES,
            block_max_gas: DEFAULT_BLOCK_MAX_GAS,
            evidence_max_age_num_blocks: DEFAULT_EVIDENCE_MAX_AGE_NUM_BLOCKS,
            evidence_max_age_duration: DEFAULT_EVIDENCE_MAX_AGE_DURATION,
            evidence_max_bytes: DEFAULT_EVIDENCE_MAX_BYTES,
            validator_pub_key_types: vec![DEFAULT_PUB_KEY_TYPE.to_string()],
        }
    }
}

fn invalid(key: &'static str, reason: impl Into<String>) -> ParamError {
    ParamError::InvalidConsensusParam {
        key,
        reason: reason.into(),
    }
}

pub fn validate_block_max_bytes(v: i64) -> ParamResult<()> {
    if v <= 0 {
        return Err(invalid(KEY_BLOCK_MAX_BYTES, format!("must be positive: {}", v)));
    }
    Ok(())
}

pub fn validate_block_max_gas(v: i64) -> ParamResult<()> {
    if v < -1 {
        return Err(invalid(KEY_BLOCK_MAX_GAS, format!("must be -1 or greater: {}", v)));
    }
    Ok(())
}

pub fn validate_evidence_max_age_num_blocks(v: i64) -> ParamResult<()> {
    if v <= 0 {
        return Err(invalid(
            KEY_EVIDENCE_MAX_AGE_NUM_BLOCKS,
            format!("must be positive: {}", v),
        ));
    }
    Ok(())
}

pub fn validate_evidence_max_age_duration(v: i64) -> ParamResult<()> {
    if v <= 0 {
        return Err(invalid(
            KEY_EVIDENCE_MAX_AGE_DURATION,
            format!("must be positive: {}", v),
        ));
    }
    Ok(())
}

pub fn validate_evidence_max_bytes(v: i64) -> ParamResult<()> {
    if v < 0 {
        return Err(invalid(KEY_EVIDENCE_MAX_BYTES, format!("must not be negative: {}", v)));
    }
    Ok(())
}

pub fn validate_pub_key_types(types: &[String]) -> ParamResult<()> {
    if types.is_empty() {
        return Err(invalid(KEY_VALIDATOR_PUB_KEY_TYPES, "must not be empty"));
    }
    if types.iter().any(|t| t.trim().is_empty()) {
        return Err(invalid(KEY_VALIDATOR_PUB_KEY_TYPES, "contains a blank key type"));
    }
    Ok(())
}

const BLOCK_MAX_BYTES: Validator = Validator::new("consensus.block_max_bytes", |v| {
    validate_block_max_bytes(v.as_i64()?)
});
const BLOCK_MAX_GAS: Validator =
    Validator::new("consensus.block_max_gas", |v| validate_block_max_gas(v.as_i64()?));
const EVIDENCE_MAX_AGE_NUM_BLOCKS: Validator =
    Validator::new("consensus.evidence_max_age_num_blocks", |v| {
        validate_evidence_max_age_num_blocks(v.as_i64()?)
    });
const EVIDENCE_MAX_AGE_DURATION: Validator =
    Validator::new("consensus.evidence_max_age_duration", |v| {
        validate_evidence_max_age_duration(v.as_i64()?)
    });
const EVIDENCE_MAX_BYTES: Validator = Validator::new("consensus.evidence_max_bytes", |v| {
    validate_evidence_max_bytes(v.as_i64()?)
});
const PUB_KEY_TYPES: Validator = Validator::new("consensus.pub_key_types", |v| {
    validate_pub_key_types(v.as_str_list()?)
});

impl ParamSet for ConsensusParams {
    fn param_set_pairs(&mut self) -> ParamSetPairs<'_> {
        vec![
            ParamSetPair::new(
                KEY_BLOCK_MAX_BYTES,
                ParamSlot::Int64(&mut self.block_max_bytes),
                BLOCK_MAX_BYTES,
            ),
            ParamSetPair::new(
                KEY_BLOCK_MAX_GAS,
                ParamSlot::Int64(&mut self.block_max_gas),
                BLOCK_MAX_GAS,
            ),
            ParamSetPair::new(
                KEY_EVIDENCE_MAX_AGE_NUM_BLOCKS,
                ParamSlot::Int64(&mut self.evidence_max_age_num_blocks),
                EVIDENCE_MAX_AGE_NUM_BLOCKS,
            ),
            ParamSetPair::new(
                KEY_EVIDENCE_MAX_AGE_DURATION,
                ParamSlot::Int64(&mut self.evidence_max_age_duration),
                EVIDENCE_MAX_AGE_DURATION,
            ),
            ParamSetPair::new(
                KEY_EVIDENCE_MAX_BYTES,
                ParamSlot::Int64(&mut self.evidence_max_bytes),
                EVIDENCE_MAX_BYTES,
            ),
            ParamSetPair::new(
                KEY_VALIDATOR_PUB_KEY_TYPES,
                ParamSlot::StrList(&mut self.validator_pub_key_types),
                PUB_KEY_TYPES,
            ),
        ]
    }
}

/// Key table for the consensus subspace. It never varies between calls.
pub fn consensus_params_key_table() -> KeyTableResult<KeyTable> {
    KeyTable::for_param_set::<ConsensusParams>()
}
