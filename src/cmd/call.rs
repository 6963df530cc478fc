//! The `call` command: one-shot invocation from the command line.

use std::collections::HashMap;

use alloy::primitives::Address;
use clap::Parser;

use super::{Error, build_service};
use crate::{abi::dyn_sol_values_to_json, config::AppConfig, models::ContractCall};

/// Arguments of the `call` command.
#[derive(Parser, Debug)]
pub struct CallArgs {
    /// Directory holding `app.yaml`.
    #[arg(long, default_value = "configs")]
    config_dir: String,
    /// The contract address.
    #[arg(short, long)]
    contract: Address,
    /// The method to call.
    #[arg(short, long)]
    method: String,
    /// A method argument as `name=value`. May be repeated.
    #[arg(short, long = "param", value_parser = parse_param)]
    params: Vec<(String, String)>,
    /// Block number to call at, decimal or `0x` hex. Defaults to latest.
    #[arg(short, long)]
    block: Option<String>,
    /// Node to call instead of the configured one.
    #[arg(short, long)]
    node: Option<String>,
    /// File with the contract ABI. Looked up in the cache or on the explorer
    /// when omitted.
    #[arg(short, long)]
    abi_file: Option<String>,
}

fn parse_param(raw: &str) -> Result<(String, String), Error> {
    raw.split_once('=')
        .map(|(name, value)| (name.trim().to_string(), value.to_string()))
        .filter(|(name, _)| !name.is_empty())
        .ok_or_else(|| Error::InvalidParam(raw.to_string()))
}

/// Calls a single method and prints the decoded outputs as JSON.
pub async fn execute(args: CallArgs) -> Result<(), Error> {
    let config = AppConfig::new(Some(&args.config_dir))?;
    let abi = args.abi_file.as_deref().map(std::fs::read_to_string).transpose()?;

    let (service, store) = build_service(&config).await?;
    let call = ContractCall {
        contract: args.contract,
        abi,
        method: args.method,
        block_number: args.block,
        params: args.params.into_iter().collect::<HashMap<_, _>>(),
        custom_node: args.node,
    };
    let result = service.call_contract(&call).await;
    store.close().await;

    let values = result?;
    println!("{}", serde_json::to_string_pretty(&dyn_sol_values_to_json(&values))?);
    Ok(())
}
