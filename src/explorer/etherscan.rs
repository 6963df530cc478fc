//! An `AbiFetcher` for Etherscan-compatible explorer APIs.

use alloy::primitives::Address;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use url::Url;

use super::{AbiFetcher, ExplorerError};
use crate::{
    config::{BaseHttpClientConfig, EtherscanConfig},
    models::Network,
};

/// The envelope every Etherscan-style API response is wrapped in.
#[derive(Debug, Deserialize)]
struct ExplorerResponse {
    status: String,
    #[serde(default)]
    message: String,
    #[serde(default)]
    result: serde_json::Value,
}

/// Fetches contract ABIs through the `getabi` action of Etherscan and its
/// sister explorers.
#[derive(Debug, Clone)]
pub struct EtherscanClient {
    client: Client,
    api_key: Option<String>,
    default_base_url: String,
}

impl EtherscanClient {
    /// Creates a new `EtherscanClient`.
    pub fn new(
        config: &EtherscanConfig,
        http_config: &BaseHttpClientConfig,
    ) -> Result<Self, ExplorerError> {
        let client = Client::builder()
            .pool_max_idle_per_host(http_config.max_idle_per_host)
            .pool_idle_timeout(Some(http_config.idle_timeout))
            .connect_timeout(http_config.connect_timeout)
            .timeout(http_config.request_timeout)
            .build()?;
        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            default_base_url: config.base_url.clone(),
        })
    }

    /// The API base URL used for `network`. Networks without a dedicated
    /// explorer fall back to the configured default.
    pub fn base_url_for(&self, network: Option<Network>) -> &str {
        network.and_then(|n| n.explorer_api_url()).unwrap_or(&self.default_base_url)
    }

    fn request_url(
        &self,
        contract: Address,
        network: Option<Network>,
    ) -> Result<Url, ExplorerError> {
        let base = self.base_url_for(network).trim_end_matches('/');
        let mut url = Url::parse(&format!("{base}/api"))?;
        url.query_pairs_mut()
            .append_pair("module", "contract")
            .append_pair("action", "getabi")
            .append_pair("address", &contract.to_checksum(None))
            .append_pair("apikey", self.api_key.as_deref().unwrap_or_default());
        Ok(url)
    }
}

#[async_trait]
impl AbiFetcher for EtherscanClient {
    #[tracing::instrument(skip(self), level = "debug")]
    async fn fetch_abi(
        &self,
        contract: Address,
        network: Option<Network>,
    ) -> Result<String, ExplorerError> {
        let url = self.request_url(contract, network)?;
        tracing::debug!(host = url.host_str(), %contract, "Fetching ABI from explorer.");

        // reqwest errors carry the request URL, which holds the api key.
        let response = self.client.get(url).send().await.map_err(reqwest::Error::without_url)?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), %contract, "Explorer returned an error status.");
            return Err(ExplorerError::UnexpectedStatus { status: status.as_u16(), body });
        }

        let body: ExplorerResponse = response.json().await.map_err(reqwest::Error::without_url)?;
        let result = match body.result {
            serde_json::Value::String(s) => s,
            other => other.to_string(),
        };
        if body.status != "1" {
            tracing::warn!(message = %body.message, %contract, "Explorer rejected ABI lookup.");
            return Err(ExplorerError::Api { message: body.message, result });
        }

        tracing::debug!(%contract, abi_len = result.len(), "Fetched ABI from explorer.");
        Ok(result)
    }
}
