//! Rendering of decoded ABI values as JSON.

use alloy::{dyn_abi::DynSolValue, primitives::U256};
use serde_json::Value;

/// Converts a `DynSolValue` to a `serde_json::Value`.
///
/// Integers that do not fit into an `i64` are rendered as decimal strings to
/// preserve precision.
pub fn dyn_sol_value_to_json(value: &DynSolValue) -> Value {
    match value {
        DynSolValue::Address(a) => Value::String(a.to_checksum(None)),
        DynSolValue::Bool(b) => Value::Bool(*b),
        DynSolValue::Bytes(b) => Value::String(format!("0x{}", hex::encode(b))),
        DynSolValue::FixedBytes(fb, size) => {
            Value::String(format!("0x{}", hex::encode(&fb[..*size])))
        }
        DynSolValue::Int(i, _) => match i64::try_from(*i) {
            Ok(val) => Value::Number(val.into()),
            Err(_) => Value::String(i.to_string()),
        },
        DynSolValue::Uint(u, _) => {
            if *u <= U256::from(i64::MAX as u64) {
                Value::Number((u.to::<u64>() as i64).into())
            } else {
                Value::String(u.to_string())
            }
        }
        DynSolValue::String(s) => Value::String(s.clone()),
        DynSolValue::Array(arr) | DynSolValue::FixedArray(arr) | DynSolValue::Tuple(arr) => {
            Value::Array(arr.iter().map(dyn_sol_value_to_json).collect())
        }
        DynSolValue::Function(f) => Value::String(format!("0x{}", hex::encode(f.as_slice()))),
        #[allow(unreachable_patterns)]
        _ => Value::Null,
    }
}

/// Converts an ordered list of decoded outputs into a JSON array.
pub fn dyn_sol_values_to_json(values: &[DynSolValue]) -> Value {
    Value::Array(values.iter().map(dyn_sol_value_to_json).collect())
}
