//! Configuration module for the contract caller.

mod app_config;
mod etherscan;
mod helpers;
mod http_base;
mod server;

pub use app_config::AppConfig;
pub use etherscan::EtherscanConfig;
pub use helpers::{
    deserialize_duration_from_seconds, deserialize_network_nodes, serialize_duration_to_seconds,
};
pub use http_base::BaseHttpClientConfig;
pub use server::ServerConfig;
