//! This module contains the clients used to talk to EVM nodes.

pub mod rpc;
pub mod traits;
