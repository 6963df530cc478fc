use std::path::PathBuf;

use serde::Deserialize;

/// Configuration for the REST API server.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Address and port for the HTTP server to listen on.
    #[serde(default = "default_api_server_listen_address")]
    pub listen_address: String,

    /// Optional directory of static files, served under `/public`.
    #[serde(default)]
    pub static_path: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { listen_address: default_api_server_listen_address(), static_path: None }
    }
}

/// Provides the default value for api_server_listen_address.
fn default_api_server_listen_address() -> String {
    "localhost:3001".to_string()
}
