//! Errors surfaced by the contract operations.

use alloy::primitives::Address;
use thiserror::Error;

use crate::{
    abi::{AbiError, MarshalError},
    explorer::ExplorerError,
    providers::traits::ChainClientError,
};

/// Every way a contract listing, call or network lookup can fail.
///
/// The `Display` text of each variant is what API clients see.
#[derive(Error, Debug)]
pub enum ContractError {
    /// The address holds no deployed code.
    #[error("cannot verify contract, err: no code at given contract {0}")]
    ContractNotFound(Address),

    /// The ABI was neither supplied nor cached, and the explorer lookup failed.
    #[error("cannot get contract ABI, err: {0}")]
    AbiFetchFailed(#[source] ExplorerError),

    /// The ABI text could not be parsed.
    #[error(transparent)]
    AbiParse(#[from] AbiError),

    /// The method is not a side-effect free method of the contract.
    #[error("method is not available in this contract, method = {0}")]
    MethodNotFound(String),

    /// An argument could not be converted to its declared type.
    #[error(transparent)]
    InvalidArgument(#[from] MarshalError),

    /// The block reference is neither a decimal nor a hex block number.
    #[error("wrong data type block number, input={0}")]
    InvalidBlockReference(String),

    /// The node could not be reached, or failed while being probed.
    #[error("cannot connect to given node, node={node}, err: {source}")]
    NodeUnavailable {
        /// The URL of the node.
        node: String,
        /// The underlying client error.
        #[source]
        source: ChainClientError,
    },

    /// The arguments could not be ABI-encoded.
    #[error("cannot encode call to {method}, err: {source}")]
    EncodingFailed {
        /// The method being called.
        method: String,
        /// The encoder error.
        #[source]
        source: alloy::dyn_abi::Error,
    },

    /// The node rejected or failed the `eth_call`.
    #[error("cannot get data from contract, err={0}")]
    CallExecutionFailed(#[source] ChainClientError),

    /// The returned bytes do not match the declared outputs.
    #[error("cannot decode result of {method}, err: {source}")]
    DecodingFailed {
        /// The method being called.
        method: String,
        /// The decoder error.
        #[source]
        source: alloy::dyn_abi::Error,
    },
}
