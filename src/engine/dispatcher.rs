//! Invocation of a single side-effect free contract method.

use std::sync::Arc;

use alloy::{
    dyn_abi::{DynSolValue, FunctionExt, JsonAbiExt},
    primitives::Bytes,
};

use super::{error::ContractError, nodes::Nodes};
use crate::{
    abi::{AbiDefinition, marshal_inputs},
    models::ContractCall,
};

/// Encodes a call, executes it with `eth_call` and decodes the result.
pub struct CallDispatcher {
    nodes: Arc<Nodes>,
}

impl CallDispatcher {
    /// Creates a new `CallDispatcher`.
    pub fn new(nodes: Arc<Nodes>) -> Self {
        Self { nodes }
    }

    /// Calls `call.method` of `call.contract` as declared in `abi`.
    ///
    /// Arguments are looked up in `call.params` by their declared name and
    /// encoded in declaration order. Missing arguments are marshalled from
    /// the empty string.
    #[tracing::instrument(
        skip(self, abi, call),
        fields(contract = %call.contract, method = %call.method),
        level = "debug"
    )]
    pub async fn call(
        &self,
        abi: &AbiDefinition,
        call: &ContractCall,
    ) -> Result<Vec<DynSolValue>, ContractError> {
        let function = abi.constant_method(&call.method).ok_or_else(|| {
            tracing::debug!("Method is not available in this contract.");
            ContractError::MethodNotFound(call.method.clone())
        })?;

        let args = marshal_inputs(function, &call.params)?;
        let block = parse_block_reference(call.block_number.as_deref())?;
        let (client, node) = self.nodes.resolve(call.custom_node.as_deref()).await?;

        let input = function.abi_encode_input(&args).map_err(|source| {
            ContractError::EncodingFailed { method: call.method.clone(), source }
        })?;

        tracing::debug!(node = %node, ?block, "Calling contract.");
        let output = client.call(call.contract, Bytes::from(input), block).await.map_err(|e| {
            tracing::error!(error = %e, node = %node, "Cannot get contract data.");
            ContractError::CallExecutionFailed(e)
        })?;

        function.abi_decode_output(&output).map_err(|source| ContractError::DecodingFailed {
            method: call.method.clone(),
            source,
        })
    }
}

/// Parses an optional block reference.
///
/// Absent or empty means the latest block. `0x`-prefixed references are hex,
/// anything else decimal. Block numbers must fit in 64 bits.
pub fn parse_block_reference(raw: Option<&str>) -> Result<Option<u64>, ContractError> {
    let raw = match raw.map(str::trim) {
        None | Some("") => return Ok(None),
        Some(raw) => raw,
    };
    let invalid = || ContractError::InvalidBlockReference(raw.to_string());
    // Digits only: the std parsers would also take a leading `+`.
    let parsed = match raw.strip_prefix("0x") {
        Some(hex) if hex.bytes().all(|b| b.is_ascii_hexdigit()) => u64::from_str_radix(hex, 16),
        None if raw.bytes().all(|b| b.is_ascii_digit()) => raw.parse::<u64>(),
        _ => return Err(invalid()),
    };
    parsed.map(Some).map_err(|_| invalid())
}
