//! Resolution of the node a request is served by.

use std::{collections::HashMap, sync::Arc};

use url::Url;

use super::error::ContractError;
use crate::{
    models::Network,
    providers::traits::{ChainClient, NodeConnector},
};

/// The default node, the configured per-network nodes, and the means to
/// connect to arbitrary nodes on demand.
pub struct Nodes {
    default_url: String,
    default_client: Arc<dyn ChainClient>,
    by_network: HashMap<Network, Url>,
    connector: Arc<dyn NodeConnector>,
}

impl Nodes {
    /// Creates a new `Nodes` around an already connected default client.
    pub fn new(
        default_url: impl Into<String>,
        default_client: Arc<dyn ChainClient>,
        by_network: HashMap<Network, Url>,
        connector: Arc<dyn NodeConnector>,
    ) -> Self {
        Self { default_url: default_url.into(), default_client, by_network, connector }
    }

    /// The URL of the default node.
    pub fn default_url(&self) -> &str {
        &self.default_url
    }

    /// The shared client of the default node.
    pub fn default_client(&self) -> Arc<dyn ChainClient> {
        self.default_client.clone()
    }

    /// Opens a short-lived connection to `url`.
    #[tracing::instrument(skip(self), level = "debug")]
    pub async fn connect(&self, url: &str) -> Result<Arc<dyn ChainClient>, ContractError> {
        self.connector.connect(url).await.map_err(|source| {
            tracing::warn!(node = url, error = %source, "Cannot connect to node.");
            ContractError::NodeUnavailable { node: url.to_string(), source }
        })
    }

    /// Returns the client for an optional node override, falling back to the
    /// default node. Also returns the URL of the chosen node.
    pub async fn resolve(
        &self,
        node_override: Option<&str>,
    ) -> Result<(Arc<dyn ChainClient>, String), ContractError> {
        match node_override {
            Some(url) => Ok((self.connect(url).await?, url.to_string())),
            None => Ok((self.default_client(), self.default_url.clone())),
        }
    }

    /// Returns the client for the node configured for `network`, falling back
    /// to the default node when none is configured.
    pub async fn for_network(
        &self,
        network: Option<Network>,
    ) -> Result<(Arc<dyn ChainClient>, String), ContractError> {
        let url = network.and_then(|n| self.by_network.get(&n)).map(Url::as_str);
        self.resolve(url).await
    }
}
