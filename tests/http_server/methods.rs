use alloy::primitives::{Address, Bytes, bytes};
use axum::http::StatusCode;
use contract_caller::{persistence::traits::AbiStore, test_helpers::erc20_abi_json};
use serde_json::json;

use crate::{fake_explorer::FakeExplorer, helpers::*};

fn method_names(body: &serde_json::Value) -> Vec<String> {
    body["data"]
        .as_array()
        .expect("data should be an array")
        .iter()
        .map(|m| m["name"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn methods_fetched_from_explorer() {
    let server = TestServer::new(1, &[(TOKEN, erc20_abi_json())]).await;

    let body = server.post_json("/contract/methods", json!({ "contract": TOKEN })).await;

    assert_eq!(
        method_names(&body),
        vec!["allowance", "balanceOf", "decimals", "name", "symbol", "totalSupply"]
    );
    let balance_of = &body["data"][1];
    assert_eq!(balance_of["arguments"], json!([{ "name": "_owner", "type": "address" }]));
    assert_eq!(server.explorer.hits(), 1);

    // not remembered, so the next listing asks the explorer again
    server.post_json("/contract/methods", json!({ "contract": TOKEN })).await;
    assert_eq!(server.explorer.hits(), 2);

    server.cleanup();
}

#[tokio::test]
async fn methods_remembered_abi_is_served_from_cache() {
    let server = TestServer::new(1, &[(TOKEN, erc20_abi_json())]).await;
    let request = json!({ "contract": TOKEN.to_lowercase(), "rememberABI": true });

    let first = server.post_json("/contract/methods", request.clone()).await;
    let second = server.post_json("/contract/methods", request).await;

    assert_eq!(first, second);
    assert_eq!(server.explorer.hits(), 1);
    let contract: Address = TOKEN.parse().unwrap();
    assert_eq!(server.store.get_abi(contract).await.unwrap().as_deref(), Some(erc20_abi_json()));

    server.cleanup();
}

#[tokio::test]
async fn methods_with_network_without_explorer_uses_default_explorer() {
    let server = TestServer::new(1, &[(TOKEN, erc20_abi_json())]).await;

    let body = server
        .post_json("/contract/methods", json!({ "contract": TOKEN, "network": "local-devnet" }))
        .await;

    assert_eq!(method_names(&body).len(), 6);
    assert_eq!(server.explorer.hits(), 1);

    server.cleanup();
}

#[tokio::test]
async fn methods_with_supplied_abi_verifies_contract_code() {
    let server = TestServer::new(1, &[]).await;
    server.node.push_success(&bytes!("6080604052"));

    let body = server
        .post_json(
            "/contract/methods",
            json!({ "contract": TOKEN, "abi": erc20_abi_json(), "rememberABI": true }),
        )
        .await;

    assert_eq!(method_names(&body).len(), 6);
    assert_eq!(server.explorer.hits(), 0);
    // supplied ABIs are never cached
    let contract: Address = TOKEN.parse().unwrap();
    assert!(server.store.get_abi(contract).await.unwrap().is_none());

    server.cleanup();
}

#[tokio::test]
async fn methods_with_supplied_abi_for_address_without_code() {
    let server = TestServer::new(1, &[]).await;
    server.node.push_success(&Bytes::new());

    let body = server
        .post_json("/contract/methods", json!({ "contract": TOKEN, "abi": erc20_abi_json() }))
        .await;

    let err = body["err"].as_str().unwrap();
    assert!(err.contains("no code at given contract"), "{err}");
    assert!(body.get("data").is_none());

    server.cleanup();
}

#[tokio::test]
async fn methods_with_supplied_invalid_abi() {
    let server = TestServer::new(1, &[]).await;
    server.node.push_success(&bytes!("6080"));

    let body = server
        .post_json("/contract/methods", json!({ "contract": TOKEN, "abi": "{not an abi" }))
        .await;

    assert!(body["err"].as_str().unwrap().starts_with("cannot read abi, err:"));

    server.cleanup();
}

#[tokio::test]
async fn methods_for_unverified_contract() {
    let server = TestServer::new(1, &[]).await;

    let body = server.post_json("/contract/methods", json!({ "contract": TOKEN })).await;

    let err = body["err"].as_str().unwrap();
    assert!(err.starts_with("cannot get contract ABI, err:"), "{err}");
    assert!(err.contains("Contract source code not verified"), "{err}");

    server.cleanup();
}

#[tokio::test]
async fn methods_when_explorer_is_down() {
    let explorer = FakeExplorer::failing(StatusCode::SERVICE_UNAVAILABLE).await;
    let server = TestServer::with_explorer(1, explorer).await;

    let body = server.post_json("/contract/methods", json!({ "contract": TOKEN })).await;

    assert!(body["err"].as_str().unwrap().contains("HTTP 503"));

    server.cleanup();
}

#[tokio::test]
async fn methods_rejects_invalid_contract() {
    let server = TestServer::new(1, &[]).await;

    for contract in ["0x1234", "not an address", ""] {
        let body = server.post_json("/contract/methods", json!({ "contract": contract })).await;
        assert_eq!(body, json!({ "err": "contract is not a valid ethereum address" }));
    }
    assert_eq!(server.explorer.hits(), 0);

    server.cleanup();
}

#[tokio::test]
async fn methods_rejects_malformed_body() {
    let server = TestServer::new(1, &[]).await;

    let resp = server
        .post("/contract/methods")
        .await
        .header("content-type", "application/json")
        .body("{\"contract\":")
        .send()
        .await
        .expect("Request failed");

    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = resp.json().await.expect("Failed to parse JSON");
    assert!(!body["err"].as_str().unwrap().is_empty());

    server.cleanup();
}

#[tokio::test]
async fn methods_requires_contract_field() {
    let server = TestServer::new(1, &[]).await;

    let body = server.post_json("/contract/methods", json!({ "abi": "[]" })).await;

    assert!(body["err"].as_str().unwrap().contains("contract"));

    server.cleanup();
}
