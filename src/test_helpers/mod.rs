//! A set of helpers for testing

mod abi;
mod provider;
mod store;

pub use abi::erc20_abi_json;
pub use provider::{mock_chain_client, mock_provider};
pub use store::create_test_store;
