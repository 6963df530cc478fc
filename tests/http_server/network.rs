use serde_json::json;

use crate::{fake_node::FakeNode, helpers::*};

async fn network_info(server: &TestServer, query: &str) -> serde_json::Value {
    let resp = server.get(&format!("/contract/network-info{query}")).await;
    assert_eq!(resp.status(), 200);
    resp.json().await.expect("Failed to parse JSON")
}

#[tokio::test]
async fn network_info_of_default_node() {
    let server = TestServer::new(97, &[]).await;

    assert_eq!(network_info(&server, "").await, json!({ "data": "bsc-testnet" }));
    assert_eq!(network_info(&server, "?node=").await, json!({ "data": "bsc-testnet" }));

    server.cleanup();
}

#[tokio::test]
async fn network_info_of_unknown_chain() {
    let server = TestServer::new(31337, &[]).await;

    assert_eq!(network_info(&server, "").await, json!({ "data": "unknown" }));

    server.cleanup();
}

#[tokio::test]
async fn network_info_of_custom_node() {
    let server = TestServer::new(1, &[]).await;
    let node = FakeNode::start(137, "0x").await;

    let body = network_info(&server, &format!("?node={}", node.url())).await;

    assert_eq!(body, json!({ "data": "polygon-mainnet" }));

    server.cleanup();
}

#[tokio::test]
async fn network_info_of_unreachable_node() {
    let server = TestServer::new(1, &[]).await;

    let body = network_info(&server, "?node=http://127.0.0.1:1").await;

    assert!(body["err"].as_str().unwrap().starts_with("cannot connect to given node"));

    server.cleanup();
}
