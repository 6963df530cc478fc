//! Defines the custom `ApiError` type for the HTTP server.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::json;

use crate::engine::ContractError;

/// A custom error type for the API that can be converted into an HTTP response.
///
/// Clients of this API read the outcome from the body, not the status code,
/// so every variant is answered with `200 OK` and an `err` field.
#[derive(Debug)]
pub enum ApiError {
    /// The request body could not be read as the expected JSON.
    BadRequest(String),

    /// The `contract` field is not a 20-byte hex address.
    InvalidContract,

    /// A call parameter is not a JSON string.
    WrongParamType {
        /// The method being called.
        method: String,
        /// The name of the offending parameter.
        arg: String,
    },

    /// The contract operation failed.
    Contract(ContractError),
}

/// Converts a `ContractError` into an `ApiError`.
///
/// This allows for the convenient use of the `?` operator in handlers
/// on functions that return `Result<_, ContractError>`.
impl From<ContractError> for ApiError {
    fn from(err: ContractError) -> Self {
        ApiError::Contract(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl ApiError {
    /// The message sent back to the client.
    pub fn message(&self) -> String {
        match self {
            ApiError::BadRequest(message) => message.clone(),
            ApiError::InvalidContract => "contract is not a valid ethereum address".to_string(),
            ApiError::WrongParamType { method, arg } => {
                format!("wrong data type, method = {method}, arg name = {arg}")
            }
            ApiError::Contract(err) => err.to_string(),
        }
    }
}

/// Implements the conversion from `ApiError` into an `axum` response.
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let message = self.message();
        match &self {
            ApiError::Contract(err) => tracing::warn!(error = %err, "Contract request failed."),
            _ => tracing::debug!(error = %message, "Rejected request."),
        }
        (StatusCode::OK, Json(json!({ "err": message }))).into_response()
    }
}
