#![warn(missing_docs)]
//! Contract caller lists and invokes the read-only methods of EVM smart
//! contracts from human-readable string arguments.

pub mod abi;
pub mod cmd;
pub mod config;
pub mod engine;
pub mod explorer;
pub mod http_server;
pub mod models;
pub mod persistence;
pub mod providers;
pub mod test_helpers;
