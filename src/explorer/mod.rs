//! This module contains the remote ABI lookup used when an ABI is neither
//! supplied by the caller nor cached.

use alloy::primitives::Address;
use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use thiserror::Error;

use crate::models::Network;

mod etherscan;

pub use etherscan::EtherscanClient;

/// Errors that can occur while fetching an ABI from a block explorer.
#[derive(Error, Debug)]
pub enum ExplorerError {
    /// The request could not be sent or its body could not be read.
    #[error("explorer request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The explorer answered with a non-success HTTP status.
    #[error("explorer returned HTTP {status}: {body}")]
    UnexpectedStatus {
        /// The HTTP status code.
        status: u16,
        /// The response body.
        body: String,
    },

    /// The explorer answered, but reported a failure.
    #[error("explorer error: {message}, {result}")]
    Api {
        /// The `message` field of the response.
        message: String,
        /// The `result` field of the response.
        result: String,
    },

    /// The explorer base URL is invalid.
    #[error("invalid explorer url: {0}")]
    Url(#[from] url::ParseError),
}

/// A remote source of verified contract ABIs.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AbiFetcher: Send + Sync {
    /// Fetches the raw ABI JSON text of `contract`, looking it up on the
    /// explorer serving `network` when given.
    async fn fetch_abi(
        &self,
        contract: Address,
        network: Option<Network>,
    ) -> Result<String, ExplorerError>;
}
