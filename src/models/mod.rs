//! This module contains the data models for the contract caller.

pub mod contract;
pub mod method;
pub mod network;

pub use contract::{ContractCall, MethodsQuery};
pub use method::{Argument, Method};
pub use network::Network;
