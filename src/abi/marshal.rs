//! Conversion of human-readable string arguments into typed ABI values.
//!
//! Only a closed set of parameter kinds is accepted. Anything outside of it
//! (tuples, strings, fixed-length or nested arrays, fixed-point numbers) is
//! rejected instead of being guessed at.

use std::{collections::HashMap, str::FromStr};

use alloy::{
    dyn_abi::DynSolValue,
    json_abi::{Function, Param},
    primitives::{Address, B256, I256, U256},
};
use thiserror::Error;

/// Returned when a string value cannot be converted into the declared type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("wrong data type, arg={arg}, expected type={ty}, actual value={value}")]
pub struct MarshalError {
    /// The declared argument name.
    pub arg: String,
    /// The declared type descriptor.
    pub ty: String,
    /// The raw value supplied by the caller.
    pub value: String,
}

/// A scalar ABI type that can be built from a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
    /// `uintN`, carrying the bit width.
    Uint(usize),
    /// `intN`, carrying the bit width.
    Int(usize),
    /// `address`
    Address,
    /// `bool`
    Bool,
    /// Dynamic `bytes`.
    Bytes,
    /// `bytesN`, carrying the byte length.
    FixedBytes(usize),
}

/// A supported parameter type: either a scalar or a single-level dynamic array
/// of integers, addresses or booleans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// A single value.
    Scalar(ScalarKind),
    /// A comma separated list, e.g. `uint256[]`.
    Array(ScalarKind),
}

impl ScalarKind {
    /// Parses a scalar type descriptor, returning `None` for anything outside
    /// the supported set.
    pub fn parse(ty: &str) -> Option<Self> {
        match ty {
            "address" => Some(Self::Address),
            "bool" => Some(Self::Bool),
            "bytes" => Some(Self::Bytes),
            "uint" => Some(Self::Uint(256)),
            "int" => Some(Self::Int(256)),
            _ => {
                if let Some(bits) = ty.strip_prefix("uint") {
                    parse_bit_width(bits).map(Self::Uint)
                } else if let Some(bits) = ty.strip_prefix("int") {
                    parse_bit_width(bits).map(Self::Int)
                } else if let Some(len) = ty.strip_prefix("bytes") {
                    parse_width(len).filter(|len| (1..=32).contains(len)).map(Self::FixedBytes)
                } else {
                    None
                }
            }
        }
    }

    fn convert(self, raw: &str) -> Option<DynSolValue> {
        match self {
            Self::Uint(bits) => parse_unsigned(raw).map(|value| DynSolValue::Uint(value, bits)),
            Self::Int(bits) => parse_signed(raw).map(|value| DynSolValue::Int(value, bits)),
            Self::Address => parse_address(raw).map(DynSolValue::Address),
            Self::Bool => match raw {
                "true" => Some(DynSolValue::Bool(true)),
                "false" => Some(DynSolValue::Bool(false)),
                _ => None,
            },
            Self::Bytes => parse_bytes(raw).map(DynSolValue::Bytes),
            Self::FixedBytes(len) => {
                let bytes = parse_bytes(raw)?;
                if bytes.len() > len {
                    return None;
                }
                let mut word = B256::ZERO;
                word[..bytes.len()].copy_from_slice(&bytes);
                Some(DynSolValue::FixedBytes(word, len))
            }
        }
    }

    fn is_array_element(self) -> bool {
        matches!(self, Self::Uint(_) | Self::Int(_) | Self::Address | Self::Bool)
    }
}

impl ParamKind {
    /// Parses a type descriptor such as `uint256`, `address[]` or `bytes32`.
    pub fn parse(ty: &str) -> Option<Self> {
        match ty.strip_suffix("[]") {
            Some(element) => ScalarKind::parse(element)
                .filter(|kind| kind.is_array_element())
                .map(Self::Array),
            None => ScalarKind::parse(ty).map(Self::Scalar),
        }
    }

    /// Converts a raw string into a value of this kind.
    ///
    /// Array input has all whitespace removed and is split on commas; every
    /// element must convert for the array to convert. An empty string yields
    /// a single empty element and therefore fails.
    pub fn convert(self, raw: &str) -> Option<DynSolValue> {
        match self {
            Self::Scalar(kind) => kind.convert(raw),
            Self::Array(kind) => {
                let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
                compact
                    .split(',')
                    .map(|item| kind.convert(item))
                    .collect::<Option<Vec<_>>>()
                    .map(DynSolValue::Array)
            }
        }
    }
}

/// Converts `raw` into the value expected by the encoder for `param`.
pub fn marshal(param: &Param, raw: &str) -> Result<DynSolValue, MarshalError> {
    ParamKind::parse(&param.ty).and_then(|kind| kind.convert(raw)).ok_or_else(|| MarshalError {
        arg: param.name.clone(),
        ty: param.ty.clone(),
        value: raw.to_string(),
    })
}

/// Marshals every declared input of `function`, in declaration order.
///
/// Inputs missing from `params` are converted from the empty string.
pub fn marshal_inputs(
    function: &Function,
    params: &HashMap<String, String>,
) -> Result<Vec<DynSolValue>, MarshalError> {
    function
        .inputs
        .iter()
        .map(|input| marshal(input, params.get(&input.name).map(String::as_str).unwrap_or_default()))
        .collect()
}

fn parse_width(digits: &str) -> Option<usize> {
    if digits.is_empty() || digits.starts_with('0') || !digits.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }
    digits.parse().ok()
}

fn parse_bit_width(digits: &str) -> Option<usize> {
    parse_width(digits).filter(|bits| (8..=256).contains(bits) && bits % 8 == 0)
}

/// Splits an optional sign from a base-10 numeral, rejecting anything that is
/// not a non-empty run of ASCII digits.
fn split_sign(raw: &str) -> Option<(bool, &str)> {
    let (negative, digits) = match raw.as_bytes().first() {
        Some(b'-') => (true, &raw[1..]),
        Some(b'+') => (false, &raw[1..]),
        _ => (false, raw),
    };
    (!digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())).then_some((negative, digits))
}

fn parse_unsigned(raw: &str) -> Option<U256> {
    let (negative, digits) = split_sign(raw)?;
    let value = U256::from_str_radix(digits, 10).ok()?;
    (!negative || value.is_zero()).then_some(value)
}

fn parse_signed(raw: &str) -> Option<I256> {
    split_sign(raw)?;
    I256::from_dec_str(raw).ok()
}

/// Parses 40 hex digits, with an optional `0x`/`0X` prefix, in any case.
/// Checksums are not enforced.
pub fn parse_address(raw: &str) -> Option<Address> {
    let digits = raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")).unwrap_or(raw);
    if digits.len() != 40 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    Address::from_str(digits).ok()
}

fn parse_bytes(raw: &str) -> Option<Vec<u8>> {
    if raw.contains("0x") {
        hex::decode(raw.strip_prefix("0x")?).ok()
    } else {
        Some(raw.as_bytes().to_vec())
    }
}
