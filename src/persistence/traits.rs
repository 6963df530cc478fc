//! This module defines the storage interface for cached contract ABIs.

use alloy::primitives::Address;
use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use super::error::PersistenceError;

/// A durable map from contract address to raw ABI JSON text.
///
/// Implementations key entries by the checksummed address, so lookups are
/// case-insensitive with respect to how the address was originally written.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AbiStore: Send + Sync {
    /// Retrieves the cached ABI for a contract, if one was stored.
    async fn get_abi(&self, contract: Address) -> Result<Option<String>, PersistenceError>;

    /// Stores the ABI for a contract, replacing any previous entry.
    async fn store_abi(&self, contract: Address, abi: &str) -> Result<(), PersistenceError>;
}
