use std::{collections::HashMap, net::SocketAddr, sync::Arc};

use alloy::{primitives::U64, transports::mock::Asserter};
use contract_caller::{
    config::{BaseHttpClientConfig, EtherscanConfig},
    engine::{ContractService, Nodes},
    explorer::EtherscanClient,
    http_server::{self, ApiState},
    persistence::SqliteAbiStore,
    providers::rpc::AlloyNodeConnector,
    test_helpers::{create_test_store, mock_chain_client},
};
use reqwest::Client;
use tokio::task;

use crate::fake_explorer::FakeExplorer;

pub const TOKEN: &str = "0xdAC17F958D2ee523a2206206994597C13D831ec7";
pub const OWNER: &str = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";

pub struct TestServer {
    pub address: SocketAddr,
    pub server_handle: task::JoinHandle<()>,
    pub client: Client,
    /// Queue of responses of the default node, after network detection.
    pub node: Asserter,
    pub store: Arc<SqliteAbiStore>,
    pub explorer: FakeExplorer,
}

impl TestServer {
    /// Starts a server whose default node reports `chain_id` and whose
    /// explorer knows `abis`.
    pub async fn new(chain_id: u64, abis: &[(&str, &str)]) -> Self {
        Self::with_explorer(chain_id, FakeExplorer::start(abis).await).await
    }

    pub async fn with_explorer(chain_id: u64, explorer: FakeExplorer) -> Self {
        let (client, node) = mock_chain_client();
        node.push_success(&U64::from(chain_id));
        let nodes = Nodes::new(
            "http://default.test:8545",
            client,
            HashMap::new(),
            Arc::new(AlloyNodeConnector),
        );

        let store = create_test_store().await;
        let etherscan =
            EtherscanConfig { api_key: Some("test-key".into()), base_url: explorer.base_url() };
        let fetcher = Arc::new(
            EtherscanClient::new(&etherscan, &BaseHttpClientConfig::default())
                .expect("Failed to build explorer client"),
        );
        let service = ContractService::new(nodes, store.clone(), fetcher)
            .await
            .expect("Failed to create contract service");

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("Failed to bind");
        let address = listener.local_addr().expect("Failed to get address");
        let app = http_server::router(ApiState { service: Arc::new(service) }, None);
        let server_handle = task::spawn(async move {
            http_server::run_server(listener, app).await.expect("Server failed");
        });

        Self { address, server_handle, client: Client::new(), node, store, explorer }
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        let url = format!("http://{}{}", self.address, path);
        self.client.get(&url).send().await.expect("Request failed")
    }

    pub async fn post(&self, path: &str) -> reqwest::RequestBuilder {
        let url = format!("http://{}{}", self.address, path);
        self.client.post(&url)
    }

    /// Posts `body` as JSON and returns the parsed response body.
    pub async fn post_json(&self, path: &str, body: serde_json::Value) -> serde_json::Value {
        let resp = self.post(path).await.json(&body).send().await.expect("Request failed");
        assert_eq!(resp.status(), 200);
        resp.json().await.expect("Failed to parse JSON")
    }

    pub fn cleanup(self) {
        self.server_handle.abort();
    }
}

/// A 32-byte ABI word holding `value`.
pub fn word(value: u64) -> alloy::primitives::Bytes {
    alloy::primitives::U256::from(value).to_be_bytes::<32>().to_vec().into()
}
