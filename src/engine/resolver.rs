//! Resolution of the ABI text of a contract.

use std::sync::Arc;

use alloy::primitives::Address;

use super::{error::ContractError, nodes::Nodes};
use crate::{
    abi::AbiDefinition, explorer::AbiFetcher, models::Network, persistence::traits::AbiStore,
};

/// Produces ABI text for a contract from the caller, the cache or the block
/// explorer.
pub struct AbiResolver {
    store: Arc<dyn AbiStore>,
    fetcher: Arc<dyn AbiFetcher>,
    nodes: Arc<Nodes>,
}

impl AbiResolver {
    /// Creates a new `AbiResolver`.
    pub fn new(store: Arc<dyn AbiStore>, fetcher: Arc<dyn AbiFetcher>, nodes: Arc<Nodes>) -> Self {
        Self { store, fetcher, nodes }
    }

    /// Resolves the ABI text of `contract`.
    ///
    /// Supplied text is trusted once the contract is confirmed to hold code on
    /// the node serving `network`. Otherwise the ABI comes from the cache or
    /// the explorer, and a fetched ABI is cached when `remember` is set.
    #[tracing::instrument(skip(self, supplied), level = "debug")]
    pub async fn resolve(
        &self,
        contract: Address,
        supplied: Option<&str>,
        remember: bool,
        network: Option<Network>,
    ) -> Result<String, ContractError> {
        match supplied.filter(|abi| !abi.is_empty()) {
            Some(abi) => {
                self.verify_contract(contract, network).await?;
                Ok(abi.to_string())
            }
            None => self.lookup(contract, network, remember).await,
        }
    }

    /// Looks the ABI up in the cache, then on the explorer. With `remember`,
    /// a fetched ABI is cached once it parses.
    #[tracing::instrument(skip(self), level = "debug")]
    pub async fn lookup(
        &self,
        contract: Address,
        network: Option<Network>,
        remember: bool,
    ) -> Result<String, ContractError> {
        match self.store.get_abi(contract).await {
            Ok(Some(abi)) if !abi.is_empty() => {
                tracing::debug!(%contract, "ABI served from cache.");
                return Ok(abi);
            }
            Ok(_) => {}
            Err(e) => tracing::error!(error = %e, %contract, "Cannot read ABI from cache."),
        }

        let abi = self
            .fetcher
            .fetch_abi(contract, network)
            .await
            .map_err(ContractError::AbiFetchFailed)?;
        tracing::info!(%contract, ?network, "Fetched ABI from explorer.");

        if remember {
            // Only text that parses as an ABI is cached, so a bad answer from
            // the explorer never shadows later fetches.
            AbiDefinition::parse(&abi)?;
            if let Err(e) = self.store.store_abi(contract, &abi).await {
                tracing::error!(error = %e, %contract, "Cannot store contract ABI.");
            }
        }
        Ok(abi)
    }

    /// Fails unless `contract` holds deployed code.
    #[tracing::instrument(skip(self), level = "debug")]
    async fn verify_contract(
        &self,
        contract: Address,
        network: Option<Network>,
    ) -> Result<(), ContractError> {
        let (client, node) = self.nodes.for_network(network).await?;
        let code = client
            .code_at(contract)
            .await
            .map_err(|source| ContractError::NodeUnavailable { node, source })?;
        if code.is_empty() {
            tracing::debug!(%contract, "No code at contract address.");
            return Err(ContractError::ContractNotFound(contract));
        }
        Ok(())
    }
}
