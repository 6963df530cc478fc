//! The `run` command: serves the HTTP API.

use std::sync::Arc;

use clap::Parser;

use super::{Error, build_service};
use crate::{config::AppConfig, http_server};

/// Arguments of the `run` command.
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Directory holding `app.yaml`.
    #[arg(short, long, default_value = "configs")]
    config_dir: String,
}

/// Loads the configuration and serves the HTTP API until the process stops.
pub async fn execute(args: RunArgs) -> Result<(), Error> {
    tracing::debug!(config_dir = %args.config_dir, "Loading application configuration...");
    let config = Arc::new(AppConfig::new(Some(&args.config_dir))?);
    tracing::debug!(
        database_url = %config.database_url,
        rpc_url = %config.rpc_url,
        listen_address = %config.server.listen_address,
        "Configuration loaded."
    );

    let (service, store) = build_service(&config).await?;
    let result = http_server::run_server_from_config(config, Arc::new(service)).await;
    store.close().await;
    Ok(result?)
}
