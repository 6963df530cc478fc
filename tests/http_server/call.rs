use alloy::{dyn_abi::DynSolValue, primitives::Address};
use contract_caller::{persistence::traits::AbiStore, test_helpers::erc20_abi_json};
use serde_json::json;

use crate::{fake_node::FakeNode, helpers::*};

fn balance_of(extra: serde_json::Value) -> serde_json::Value {
    let mut body = json!({
        "contract": TOKEN,
        "abi": erc20_abi_json(),
        "method": "balanceOf",
        "params": { "_owner": OWNER }
    });
    if let (Some(body), Some(extra)) = (body.as_object_mut(), extra.as_object()) {
        body.extend(extra.clone());
    }
    body
}

#[tokio::test]
async fn call_with_supplied_abi() {
    let server = TestServer::new(1, &[]).await;
    server.node.push_success(&word(0));

    let body = server.post_json("/contract/call", balance_of(json!({}))).await;

    assert_eq!(body, json!({ "data": [0] }));
    assert_eq!(server.explorer.hits(), 0);

    server.cleanup();
}

#[tokio::test]
async fn call_with_cached_abi() {
    let server = TestServer::new(1, &[]).await;
    let contract: Address = TOKEN.parse().unwrap();
    server.store.store_abi(contract, erc20_abi_json()).await.unwrap();
    server.node.push_success(&word(1_000_000));

    let body = server.post_json("/contract/call", balance_of(json!({ "abi": "" }))).await;

    assert_eq!(body, json!({ "data": [1_000_000] }));
    assert_eq!(server.explorer.hits(), 0);

    server.cleanup();
}

#[tokio::test]
async fn call_fetches_abi_without_caching_it() {
    // A local chain id, so the lookup goes to the configured explorer.
    let server = TestServer::new(31337, &[(TOKEN, erc20_abi_json())]).await;
    server.node.push_success(&word(6));

    let body = server
        .post_json(
            "/contract/call",
            json!({ "contract": TOKEN, "method": "decimals", "blockNumber": "" }),
        )
        .await;

    assert_eq!(body, json!({ "data": [6] }));
    assert_eq!(server.explorer.hits(), 1);
    let contract: Address = TOKEN.parse().unwrap();
    assert!(server.store.get_abi(contract).await.unwrap().is_none());

    server.cleanup();
}

#[tokio::test]
async fn call_renders_large_integers_as_strings() {
    let server = TestServer::new(1, &[]).await;
    server.node.push_success(&word(u64::MAX));

    let body = server.post_json("/contract/call", balance_of(json!({}))).await;

    assert_eq!(body, json!({ "data": ["18446744073709551615"] }));

    server.cleanup();
}

#[tokio::test]
async fn call_returning_string() {
    let server = TestServer::new(1, &[]).await;
    let output =
        DynSolValue::Tuple(vec![DynSolValue::String("Tether USD".into())]).abi_encode_params();
    server.node.push_success(&alloy::primitives::Bytes::from(output));

    let body = server
        .post_json(
            "/contract/call",
            json!({ "contract": TOKEN, "abi": erc20_abi_json(), "method": "name" }),
        )
        .await;

    assert_eq!(body, json!({ "data": ["Tether USD"] }));

    server.cleanup();
}

#[tokio::test]
async fn call_at_block_number() {
    let server = TestServer::new(1, &[]).await;
    server.node.push_success(&word(42));

    let body =
        server.post_json("/contract/call", balance_of(json!({ "blockNumber": "0xf4240" }))).await;
    assert_eq!(body, json!({ "data": [42] }));

    server.node.push_success(&word(43));
    let body =
        server.post_json("/contract/call", balance_of(json!({ "blockNumber": "1000000" }))).await;
    assert_eq!(body, json!({ "data": [43] }));

    server.cleanup();
}

#[tokio::test]
async fn call_rejects_invalid_block_number() {
    let server = TestServer::new(1, &[]).await;

    let body = server.post_json("/contract/call", balance_of(json!({ "blockNumber": "abc" }))).await;

    assert_eq!(body, json!({ "err": "wrong data type block number, input=abc" }));

    server.cleanup();
}

#[tokio::test]
async fn call_unknown_method() {
    let server = TestServer::new(1, &[]).await;

    let body = server.post_json("/contract/call", balance_of(json!({ "method": "mint" }))).await;

    assert_eq!(body, json!({ "err": "method is not available in this contract, method = mint" }));

    server.cleanup();
}

#[tokio::test]
async fn call_write_method_is_not_available() {
    let server = TestServer::new(1, &[]).await;

    let body =
        server.post_json("/contract/call", balance_of(json!({ "method": "transfer" }))).await;

    assert_eq!(
        body,
        json!({ "err": "method is not available in this contract, method = transfer" })
    );

    server.cleanup();
}

#[tokio::test]
async fn call_rejects_non_string_param() {
    let server = TestServer::new(1, &[]).await;

    let body =
        server.post_json("/contract/call", balance_of(json!({ "params": { "_owner": 7 } }))).await;

    assert_eq!(body, json!({ "err": "wrong data type, method = balanceOf, arg name = _owner" }));

    server.cleanup();
}

#[tokio::test]
async fn call_rejects_invalid_argument() {
    let server = TestServer::new(1, &[]).await;

    let body = server
        .post_json("/contract/call", balance_of(json!({ "params": { "_owner": "0x12" } })))
        .await;

    assert_eq!(
        body,
        json!({ "err": "wrong data type, arg=_owner, expected type=address, actual value=0x12" })
    );

    server.cleanup();
}

#[tokio::test]
async fn call_reverted_by_node() {
    let server = TestServer::new(1, &[]).await;
    server.node.push_failure_msg("execution reverted");

    let body = server.post_json("/contract/call", balance_of(json!({}))).await;

    let err = body["err"].as_str().unwrap();
    assert!(err.starts_with("cannot get data from contract, err="), "{err}");
    assert!(err.contains("execution reverted"), "{err}");

    server.cleanup();
}

#[tokio::test]
async fn call_on_custom_node() {
    let server = TestServer::new(1, &[]).await;
    let node = FakeNode::start(
        137,
        "0x000000000000000000000000000000000000000000000000000000000000002a",
    )
    .await;

    let body =
        server.post_json("/contract/call", balance_of(json!({ "customNode": node.url() }))).await;

    assert_eq!(body, json!({ "data": [42] }));

    server.cleanup();
}

#[tokio::test]
async fn call_on_unreachable_custom_node() {
    let server = TestServer::new(1, &[]).await;

    let body = server
        .post_json("/contract/call", balance_of(json!({ "customNode": "http://127.0.0.1:1" })))
        .await;

    let err = body["err"].as_str().unwrap();
    assert!(err.starts_with("cannot connect to given node, node=http://127.0.0.1:1"), "{err}");

    server.cleanup();
}

#[tokio::test]
async fn call_rejects_invalid_contract() {
    let server = TestServer::new(1, &[]).await;

    let body =
        server.post_json("/contract/call", balance_of(json!({ "contract": "0xnothex" }))).await;

    assert_eq!(body, json!({ "err": "contract is not a valid ethereum address" }));

    server.cleanup();
}
