//! Crisis module parameters

use super::validators::{module_error, validate_coin, Validator};
use super::ParamValue;
use crate::codec::Coin;
use crate::schema::{FieldDescriptor, KeyTable, KeyTableResult, KeyTableError};

pub const MODULE_NAME: &str = "crisis";

pub const KEY_CONSTANT_FEE: &str = "ConstantFee";

pub const DEFAULT_CONSTANT_FEE_AMOUNT: u128 = 1000;
pub const DEFAULT_CONSTANT_FEE_DENOM: &str = "stake";

const CONSTANT_FEE: Validator = Validator::new("crisis.constant_fee", |v| {
    let coin: Coin = v
        .decode_object()?
        .map_err(|reason| module_error(MODULE_NAME, KEY_CONSTANT_FEE, reason))?;
    validate_coin(MODULE_NAME, KEY_CONSTANT_FEE, &coin)
});

/// Fee charged to submit an invariant violation
pub fn default_constant_fee() -> Coin {
    Coin::new(DEFAULT_CONSTANT_FEE_AMOUNT, DEFAULT_CONSTANT_FEE_DENOM)
}

/// Key table for the crisis subspace.
pub fn param_key_table() -> KeyTableResult<KeyTable> {
    let fee = serde_json::to_value(default_constant_fee()).map_err(|e| {
        KeyTableError::InvalidDefault {
            key: KEY_CONSTANT_FEE.to_string(),
            source: module_error(MODULE_NAME, KEY_CONSTANT_FEE, e.to_string()),
        }
    })?;
    KeyTable::new(vec![FieldDescriptor::new(
        KEY_CONSTANT_FEE,
        ParamValue::Object(fee),
        CONSTANT_FEE,
    )])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_fee_shape() {
        let table = param_key_table().unwrap();
        let field = table.get(KEY_CONSTANT_FEE).unwrap();
        assert_eq!(
            field.default,
            ParamValue::from(json!({"denom": "stake", "amount": "1000"}))
        );
    }

    #[test]
    fn test_invalid_fee_rejected() {
        let table = param_key_table().unwrap();
        let field = table.get(KEY_CONSTANT_FEE).unwrap();
        for bad in [
            json!({"denom": "stake", "amount": "-1"}),
            json!({"denom": "9x", "amount": "1"}),
            json!({"denom": "stake"}),
        ] {
            assert!(field.validate(&ParamValue::from(bad)).is_err());
        }
    }
}
