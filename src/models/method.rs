//! Data models describing the callable methods of a contract.

use serde::{Deserialize, Serialize};

/// A side-effect free contract method that can be invoked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Method {
    /// The name the method is registered under.
    pub name: String,
    /// The declared arguments, in calling order.
    pub arguments: Vec<Argument>,
}

/// A single declared method argument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Argument {
    /// The declared argument name.
    pub name: String,
    /// The canonical ABI type, e.g. `uint256` or `address[]`.
    #[serde(rename = "type")]
    pub ty: String,
}
