use std::sync::Arc;

use alloy::{
    providers::{Provider, ProviderBuilder},
    transports::mock::Asserter,
};

use crate::providers::{rpc::EvmRpcClient, traits::ChainClient};

/// Creates a mock provider and an asserter for testing purposes.
pub fn mock_provider() -> (impl Provider + Clone + 'static, Asserter) {
    let asserter = Asserter::new();
    let provider = ProviderBuilder::new().connect_mocked_client(asserter.clone());
    (provider, asserter)
}

/// Creates a `ChainClient` answering from the returned asserter's queue.
pub fn mock_chain_client() -> (Arc<dyn ChainClient>, Asserter) {
    let (provider, asserter) = mock_provider();
    (Arc::new(EvmRpcClient::new(provider)), asserter)
}
