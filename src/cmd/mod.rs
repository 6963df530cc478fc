//! Command line entry points.

use std::sync::Arc;

use thiserror::Error;

use crate::{
    config::AppConfig,
    engine::{ContractError, ContractService, Nodes},
    explorer::{EtherscanClient, ExplorerError},
    persistence::{SqliteAbiStore, error::PersistenceError},
    providers::{
        rpc::{AlloyNodeConnector, EvmRpcClient, create_provider},
        traits::ChainClientError,
    },
};

pub mod call;
pub mod run;

pub use call::CallArgs;
pub use run::RunArgs;

/// Errors raised while starting up or running a command.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// The configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    /// The ABI cache could not be opened.
    #[error("Persistence error: {0}")]
    Persistence(#[from] PersistenceError),
    /// The default node URL is invalid.
    #[error("Provider error: {0}")]
    Provider(#[from] ChainClientError),
    /// The explorer client could not be built.
    #[error("Explorer error: {0}")]
    Explorer(#[from] ExplorerError),
    /// A contract operation failed.
    #[error("{0}")]
    Contract(#[from] ContractError),
    /// A `--param` argument is not of the form `name=value`.
    #[error("invalid parameter, expected name=value: {0}")]
    InvalidParam(String),
    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Wires the contract service from the configuration: opens and migrates the
/// ABI cache, connects the default node and detects its network.
pub async fn build_service(
    config: &AppConfig,
) -> Result<(ContractService, Arc<SqliteAbiStore>), Error> {
    tracing::debug!(database_url = %config.database_url, "Initializing ABI cache...");
    let store = Arc::new(SqliteAbiStore::new(&config.database_url).await?);
    store.run_migrations().await?;

    tracing::debug!(rpc_url = %config.rpc_url, "Initializing default node client...");
    let provider = create_provider(config.rpc_url.as_str())?;
    let nodes = Nodes::new(
        config.rpc_url.as_str(),
        Arc::new(EvmRpcClient::new(provider)),
        config.network_nodes.clone(),
        Arc::new(AlloyNodeConnector),
    );

    let fetcher = Arc::new(EtherscanClient::new(&config.etherscan, &config.http_base_config)?);
    let service = ContractService::new(nodes, store.clone(), fetcher).await?;
    tracing::info!(network = %service.network(), "Contract service initialized.");
    Ok((service, store))
}
