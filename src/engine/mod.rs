//! The contract engine answers the three questions the service exists for:
//! which read-only methods a contract has, what one of them returns, and
//! which network a node serves.

use std::sync::Arc;

use alloy::dyn_abi::DynSolValue;

mod dispatcher;
mod error;
mod nodes;
mod resolver;

pub use dispatcher::{CallDispatcher, parse_block_reference};
pub use error::ContractError;
pub use nodes::Nodes;
pub use resolver::AbiResolver;

use crate::{
    abi::{AbiDefinition, list_methods},
    explorer::AbiFetcher,
    models::{ContractCall, Method, MethodsQuery, Network},
    persistence::traits::AbiStore,
};

/// Entry point of the contract operations, shared by the HTTP server and the
/// command line.
pub struct ContractService {
    nodes: Arc<Nodes>,
    resolver: AbiResolver,
    dispatcher: CallDispatcher,
    network: Network,
}

impl ContractService {
    /// Creates a new `ContractService`, detecting the network of the default
    /// node.
    #[tracing::instrument(skip_all, level = "info")]
    pub async fn new(
        nodes: Nodes,
        store: Arc<dyn AbiStore>,
        fetcher: Arc<dyn AbiFetcher>,
    ) -> Result<Self, ContractError> {
        let chain_id = nodes.default_client().chain_id().await.map_err(|source| {
            ContractError::NodeUnavailable { node: nodes.default_url().to_string(), source }
        })?;
        let network = Network::from_chain_id(chain_id);
        tracing::info!(chain_id, %network, node = nodes.default_url(), "Detected default network.");

        let nodes = Arc::new(nodes);
        Ok(Self {
            resolver: AbiResolver::new(store, fetcher, nodes.clone()),
            dispatcher: CallDispatcher::new(nodes.clone()),
            nodes,
            network,
        })
    }

    /// The network served by the default node.
    pub fn network(&self) -> Network {
        self.network
    }

    /// Lists the side-effect free methods of a contract, sorted by name.
    #[tracing::instrument(skip(self, query), fields(contract = %query.contract), level = "debug")]
    pub async fn contract_methods(
        &self,
        query: &MethodsQuery,
    ) -> Result<Vec<Method>, ContractError> {
        let raw = self
            .resolver
            .resolve(query.contract, query.abi.as_deref(), query.remember_abi, query.network)
            .await?;
        let abi = AbiDefinition::parse(&raw)?;
        let methods = list_methods(&abi);
        tracing::debug!(count = methods.len(), "Listed contract methods.");
        Ok(methods)
    }

    /// Calls a side-effect free method and returns its decoded outputs.
    ///
    /// A supplied ABI is used as-is. Otherwise the ABI is looked up in the
    /// cache, then on the explorer of the default network, without caching it.
    #[tracing::instrument(
        skip(self, call),
        fields(contract = %call.contract, method = %call.method),
        level = "debug"
    )]
    pub async fn call_contract(
        &self,
        call: &ContractCall,
    ) -> Result<Vec<DynSolValue>, ContractError> {
        let raw = match call.abi.as_deref().filter(|abi| !abi.is_empty()) {
            Some(abi) => abi.to_string(),
            None => self.resolver.lookup(call.contract, Some(self.network), false).await?,
        };
        let abi = AbiDefinition::parse(&raw)?;
        self.dispatcher.call(&abi, call).await
    }

    /// Identifies the network of `node`, or of the default node.
    #[tracing::instrument(skip(self), level = "debug")]
    pub async fn network_info(&self, node: Option<&str>) -> Result<Network, ContractError> {
        let Some(url) = node.filter(|url| !url.is_empty()) else {
            return Ok(self.network);
        };
        let client = self.nodes.connect(url).await?;
        let chain_id = client
            .chain_id()
            .await
            .map_err(|source| ContractError::NodeUnavailable { node: url.to_string(), source })?;
        Ok(Network::from_chain_id(chain_id))
    }
}
