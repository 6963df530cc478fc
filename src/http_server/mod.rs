//! HTTP server module

use std::{path::Path, sync::Arc};

use axum::{
    Json, Router,
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::json;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
};

use crate::{config::AppConfig, engine::ContractService};

mod contract;
mod error;

pub use error::ApiError;

/// Shared state of the HTTP handlers.
#[derive(Clone)]
pub struct ApiState {
    /// The contract operations.
    pub service: Arc<ContractService>,
}

async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// Builds the application router. When `static_path` is given, its files are
/// served under `/public`.
pub fn router(state: ApiState, static_path: Option<&Path>) -> Router {
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);

    let mut app = Router::new()
        .route("/health", get(health))
        .route("/contract/methods", post(contract::methods))
        .route("/contract/call", post(contract::call))
        .route("/contract/network-info", get(contract::network_info))
        .with_state(state);

    if let Some(dir) = static_path {
        app = app.nest_service("/public", ServeDir::new(dir));
    }

    app.layer(ServiceBuilder::new().layer(cors))
}

/// Serves `app` on an already bound listener until the process stops.
pub async fn run_server(listener: TcpListener, app: Router) -> std::io::Result<()> {
    tracing::info!(address = ?listener.local_addr().ok(), "HTTP server listening.");
    axum::serve(listener, app.into_make_service()).await
}

/// Runs the HTTP server based on the provided application configuration.
pub async fn run_server_from_config(
    config: Arc<AppConfig>,
    service: Arc<ContractService>,
) -> std::io::Result<()> {
    let listener = TcpListener::bind(&config.server.listen_address).await.map_err(|e| {
        tracing::error!(error = %e, address = %config.server.listen_address, "Failed to bind address.");
        e
    })?;
    let app = router(ApiState { service }, config.server.static_path.as_deref());
    run_server(listener, app).await
}
