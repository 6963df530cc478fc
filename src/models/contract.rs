//! Typed inputs of the contract operations.
//!
//! The HTTP layer accepts loosely typed JSON bodies and converts them into
//! these structs before calling into the engine.

use std::collections::HashMap;

use alloy::primitives::Address;

use super::network::Network;

/// Input of the method listing operation.
#[derive(Debug, Clone, Default)]
pub struct MethodsQuery {
    /// The contract address.
    pub contract: Address,
    /// Caller-supplied ABI JSON text, if any.
    pub abi: Option<String>,
    /// Whether a fetched ABI should be written to the cache.
    pub remember_abi: bool,
    /// The network the contract lives on, if not the default one.
    pub network: Option<Network>,
}

/// Input of the contract call operation.
#[derive(Debug, Clone, Default)]
pub struct ContractCall {
    /// The contract address.
    pub contract: Address,
    /// Caller-supplied ABI JSON text, if any.
    pub abi: Option<String>,
    /// The method to invoke.
    pub method: String,
    /// Historical block, as a decimal or `0x`-prefixed hex numeral.
    pub block_number: Option<String>,
    /// Argument values keyed by argument name.
    pub params: HashMap<String, String>,
    /// A node URL to use instead of the default node.
    pub custom_node: Option<String>,
}
