//! This module provides the `ChainClient` implementation backed by an
//! `alloy` provider, and a connector that creates such clients on demand.

use std::sync::Arc;

use alloy::{
    eips::BlockId,
    network::TransactionBuilder,
    primitives::{Address, Bytes},
    providers::{Provider, ProviderBuilder},
    rpc::types::TransactionRequest,
};
use async_trait::async_trait;
use url::Url;

use super::traits::{ChainClient, ChainClientError, NodeConnector};

/// A `ChainClient` implementation that reads from an EVM RPC endpoint.
pub struct EvmRpcClient<P> {
    provider: P,
}

impl<P> EvmRpcClient<P>
where
    P: Provider,
{
    /// Creates a new `EvmRpcClient`.
    #[tracing::instrument(skip(provider), level = "debug")]
    pub fn new(provider: P) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl<P> ChainClient for EvmRpcClient<P>
where
    P: Provider + Send + Sync,
{
    #[tracing::instrument(skip(self), level = "debug")]
    async fn code_at(&self, address: Address) -> Result<Bytes, ChainClientError> {
        tracing::debug!(%address, "Fetching contract code.");
        let code = self
            .provider
            .get_code_at(address)
            .await
            .map_err(|e| ChainClientError::Provider(e.to_string()))?;
        tracing::debug!(%address, code_len = code.len(), "Fetched contract code.");
        Ok(code)
    }

    #[tracing::instrument(skip(self, input), level = "debug")]
    async fn call(
        &self,
        to: Address,
        input: Bytes,
        block: Option<u64>,
    ) -> Result<Bytes, ChainClientError> {
        let tx = TransactionRequest::default().with_to(to).with_input(input);
        let block_id = block.map(BlockId::number).unwrap_or_else(BlockId::latest);
        tracing::debug!(%to, ?block_id, "Executing eth_call.");
        self.provider.call(tx).block(block_id).await.map_err(|e| {
            tracing::warn!(error = %e, %to, "eth_call failed.");
            ChainClientError::Provider(e.to_string())
        })
    }

    #[tracing::instrument(skip(self), level = "debug")]
    async fn chain_id(&self) -> Result<u64, ChainClientError> {
        self.provider.get_chain_id().await.map_err(|e| ChainClientError::Provider(e.to_string()))
    }
}

/// Creates a new HTTP provider for the given RPC URL.
pub fn create_provider(url: &str) -> Result<impl Provider + Clone + 'static, ChainClientError> {
    let url = Url::parse(url)?;
    Ok(ProviderBuilder::new().connect_http(url))
}

/// A `NodeConnector` that builds a fresh HTTP client per URL.
///
/// Building an HTTP provider does not touch the network, so the new client is
/// probed with `eth_chainId` before it is handed out.
#[derive(Debug, Default, Clone)]
pub struct AlloyNodeConnector;

#[async_trait]
impl NodeConnector for AlloyNodeConnector {
    #[tracing::instrument(skip(self), level = "debug")]
    async fn connect(&self, url: &str) -> Result<Arc<dyn ChainClient>, ChainClientError> {
        let client = EvmRpcClient::new(create_provider(url)?);
        let chain_id = client.chain_id().await?;
        tracing::debug!(url, chain_id, "Connected to node.");
        Ok(Arc::new(client))
    }
}
