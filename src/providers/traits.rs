//! This module defines the interface for reading from an EVM-compatible
//! blockchain node.

use std::sync::Arc;

use alloy::primitives::{Address, Bytes};
use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use thiserror::Error;

/// Custom error type for chain client operations.
#[derive(Error, Debug)]
pub enum ChainClientError {
    /// Error when parsing the RPC URL.
    #[error("Failed to parse RPC URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Error when interacting with the provider.
    #[error("Provider error: {0}")]
    Provider(String),
}

/// A read-only view of a single node.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ChainClient: Send + Sync {
    /// Fetches the deployed bytecode at `address` on the latest block.
    async fn code_at(&self, address: Address) -> Result<Bytes, ChainClientError>;

    /// Executes an `eth_call` against `to` with the given calldata, at the
    /// given block or the latest one.
    async fn call(
        &self,
        to: Address,
        input: Bytes,
        block: Option<u64>,
    ) -> Result<Bytes, ChainClientError>;

    /// Fetches the chain id reported by the node.
    async fn chain_id(&self) -> Result<u64, ChainClientError>;
}

/// Opens connections to arbitrary node URLs.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait NodeConnector: Send + Sync {
    /// Connects to the node at `url`, failing if it cannot be reached.
    async fn connect(&self, url: &str) -> Result<Arc<dyn ChainClient>, ChainClientError>;
}
