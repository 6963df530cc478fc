//! Handlers for the `/contract` endpoints.

use std::collections::HashMap;

use alloy::primitives::Address;
use axum::{
    extract::{Query, State, rejection::JsonRejection},
    response::{IntoResponse, Json},
};
use serde::Deserialize;
use serde_json::{Map, Value, json};

use super::{ApiError, ApiState};
use crate::{
    abi::{dyn_sol_values_to_json, parse_address},
    models::{ContractCall, MethodsQuery, Network},
};

/// Body of `POST /contract/methods`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodsInput {
    contract: String,
    #[serde(default)]
    abi: Option<String>,
    #[serde(default, rename = "rememberABI")]
    remember_abi: bool,
    #[serde(default)]
    network: Option<String>,
}

/// Body of `POST /contract/call`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallInput {
    contract: String,
    #[serde(default)]
    abi: Option<String>,
    method: String,
    #[serde(default)]
    block_number: Option<String>,
    #[serde(default)]
    params: Option<Map<String, Value>>,
    #[serde(default)]
    custom_node: Option<String>,
}

/// Query of `GET /contract/network-info`.
#[derive(Debug, Deserialize)]
pub struct NetworkInfoQuery {
    #[serde(default)]
    node: Option<String>,
}

fn parse_contract(raw: &str) -> Result<Address, ApiError> {
    parse_address(raw).ok_or(ApiError::InvalidContract)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Keeps string parameters, drops `null` ones and rejects anything else.
fn string_params(
    method: &str,
    params: Option<Map<String, Value>>,
) -> Result<HashMap<String, String>, ApiError> {
    let mut out = HashMap::new();
    for (arg, value) in params.unwrap_or_default() {
        match value {
            Value::String(s) => {
                out.insert(arg, s);
            }
            Value::Null => {}
            _ => return Err(ApiError::WrongParamType { method: method.to_string(), arg }),
        }
    }
    Ok(out)
}

/// Lists the read-only methods of a contract.
pub async fn methods(
    State(state): State<ApiState>,
    payload: Result<Json<MethodsInput>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(input) = payload?;
    let query = MethodsQuery {
        contract: parse_contract(&input.contract)?,
        abi: non_empty(input.abi),
        remember_abi: input.remember_abi,
        network: non_empty(input.network).map(|name| Network::from_name(&name)),
    };
    let methods = state.service.contract_methods(&query).await?;
    Ok(Json(json!({ "data": methods })))
}

/// Calls a read-only method of a contract.
pub async fn call(
    State(state): State<ApiState>,
    payload: Result<Json<CallInput>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(input) = payload?;
    let contract = parse_contract(&input.contract)?;
    let params = string_params(&input.method, input.params)?;
    let call = ContractCall {
        contract,
        abi: non_empty(input.abi),
        method: input.method,
        block_number: non_empty(input.block_number),
        params,
        custom_node: non_empty(input.custom_node),
    };
    let values = state.service.call_contract(&call).await?;
    Ok(Json(json!({ "data": dyn_sol_values_to_json(&values) })))
}

/// Reports the network of the given node, or of the default node.
pub async fn network_info(
    State(state): State<ApiState>,
    Query(query): Query<NetworkInfoQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let network = state.service.network_info(query.node.as_deref()).await?;
    Ok(Json(json!({ "data": network })))
}
