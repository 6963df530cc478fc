use std::collections::HashMap;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use url::Url;

use super::{BaseHttpClientConfig, EtherscanConfig, ServerConfig, deserialize_network_nodes};
use crate::models::Network;

/// Provides the default value for database_url.
fn default_database_url() -> String {
    "sqlite:contract.db".to_string()
}

/// Provides the default value for rpc_url.
fn default_rpc_url() -> Url {
    Url::parse("http://localhost:8545").expect("static URL is valid")
}

/// Application configuration for the contract caller.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Database URL for the SQLite ABI cache.
    #[serde(default = "default_database_url")]
    pub database_url: String,

    /// RPC URL of the default node.
    #[serde(default = "default_rpc_url")]
    pub rpc_url: Url,

    /// Optional per-network nodes, keyed by network name.
    #[serde(default, deserialize_with = "deserialize_network_nodes")]
    pub network_nodes: HashMap<Network, Url>,

    /// Block explorer configuration.
    #[serde(default)]
    pub etherscan: EtherscanConfig,

    /// Configuration for the base HTTP client.
    #[serde(default)]
    pub http_base_config: BaseHttpClientConfig,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: default_database_url(),
            rpc_url: default_rpc_url(),
            network_nodes: HashMap::new(),
            etherscan: EtherscanConfig::default(),
            http_base_config: BaseHttpClientConfig::default(),
            server: ServerConfig::default(),
        }
    }
}

impl AppConfig {
    /// Creates a new `AppConfig` by reading from the configuration directory.
    pub fn new(config_dir: Option<&str>) -> Result<Self, ConfigError> {
        let config_dir_str = config_dir.unwrap_or("configs");
        let s = Config::builder()
            .add_source(File::with_name(&format!("{}/app.yaml", config_dir_str)))
            .add_source(Environment::with_prefix("CONTRACT_CALLER").separator("__"))
            .build()?;
        s.try_deserialize()
    }
}
