use serde::Deserialize;

/// Configuration for the Etherscan-compatible ABI explorer.
#[derive(Debug, Deserialize, Clone)]
pub struct EtherscanConfig {
    /// API key sent with every lookup.
    /// If not set in config, falls back to the `ETHERSCAN_APIKEY` env var.
    #[serde(default = "default_api_key_from_env")]
    pub api_key: Option<String>,

    /// Explorer used for networks without a dedicated one.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for EtherscanConfig {
    fn default() -> Self {
        Self { api_key: default_api_key_from_env(), base_url: default_base_url() }
    }
}

fn default_base_url() -> String {
    "https://api.etherscan.io".to_string()
}

/// Loads the API key from the `ETHERSCAN_APIKEY` environment variable.
fn default_api_key_from_env() -> Option<String> {
    std::env::var("ETHERSCAN_APIKEY").ok()
}
