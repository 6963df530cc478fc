//! This module contains the parsed representation of a contract ABI and the
//! helpers built on top of it: the method catalog, the argument marshaller
//! and JSON rendering of decoded values.
//!
//! ABIs are loaded at runtime, so everything here works with the dynamic
//! `alloy` ABI types rather than the `sol!` macro.

use std::collections::BTreeMap;

use alloy::json_abi::{Function, JsonAbi, StateMutability};
use thiserror::Error;

mod catalog;
mod json;
pub mod marshal;

pub use catalog::list_methods;
pub use json::{dyn_sol_value_to_json, dyn_sol_values_to_json};
pub use marshal::{
    MarshalError, ParamKind, ScalarKind, marshal, marshal_inputs, parse_address,
};

/// Errors raised while parsing raw ABI text.
#[derive(Error, Debug)]
pub enum AbiError {
    /// The ABI text is not a valid JSON ABI.
    #[error("cannot read abi, err: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A parsed contract interface, keyed by method name.
///
/// Overloaded functions keep their first declaration under the bare name;
/// later declarations are registered as `name0`, `name1`, ... while the
/// stored `Function` keeps its original name, so encoding still uses the
/// right selector.
#[derive(Debug, Clone, Default)]
pub struct AbiDefinition {
    methods: BTreeMap<String, Function>,
}

impl AbiDefinition {
    /// Parses raw ABI JSON text.
    pub fn parse(raw: &str) -> Result<Self, AbiError> {
        let abi: JsonAbi = serde_json::from_str(raw)?;
        Ok(Self::from(&abi))
    }

    /// Looks up any method by its registered name.
    pub fn method(&self, name: &str) -> Option<&Function> {
        self.methods.get(name)
    }

    /// Looks up a method by name, only if it is side-effect free.
    pub fn constant_method(&self, name: &str) -> Option<&Function> {
        self.method(name).filter(|function| is_constant(function))
    }

    /// Iterates over the side-effect free methods, ordered by name.
    pub fn constant_methods(&self) -> impl Iterator<Item = (&str, &Function)> {
        self.methods
            .iter()
            .filter(|(_, function)| is_constant(function))
            .map(|(name, function)| (name.as_str(), function))
    }
}

impl From<&JsonAbi> for AbiDefinition {
    fn from(abi: &JsonAbi) -> Self {
        // Declared names are registered before any overload alias, so an
        // alias never takes the name of a real function such as `get0`.
        let mut methods: BTreeMap<String, Function> = abi
            .functions
            .iter()
            .filter_map(|(name, overloads)| Some((name.clone(), overloads.first()?.clone())))
            .collect();
        for function in abi.functions.values().flat_map(|overloads| overloads.iter().skip(1)) {
            let name = free_name(&methods, &function.name);
            methods.insert(name, function.clone());
        }
        Self { methods }
    }
}

/// Returns true for `pure` and `view` functions.
pub fn is_constant(function: &Function) -> bool {
    matches!(function.state_mutability, StateMutability::Pure | StateMutability::View)
}

fn free_name(methods: &BTreeMap<String, Function>, raw: &str) -> String {
    if !methods.contains_key(raw) {
        return raw.to_string();
    }
    (0..)
        .map(|idx| format!("{raw}{idx}"))
        .find(|candidate| !methods.contains_key(candidate))
        .unwrap_or_else(|| raw.to_string())
}
