//! Known networks and their identification from a chain id.

use std::fmt;

use serde::{Serialize, Serializer};

/// A blockchain network known to the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Network {
    /// Ethereum mainnet (chain id 1).
    EthereumMainnet,
    /// Ethereum Ropsten testnet (chain id 3).
    EthereumRopsten,
    /// Ethereum Goerli testnet (chain id 5).
    EthereumGoerli,
    /// Ethereum Kovan testnet (chain id 42).
    EthereumKovan,
    /// Ethereum Sepolia testnet (chain id 11155111).
    EthereumSepolia,
    /// BNB Smart Chain mainnet (chain id 56).
    BscMainnet,
    /// BNB Smart Chain testnet (chain id 97).
    BscTestnet,
    /// Polygon PoS mainnet (chain id 137).
    PolygonMainnet,
    /// Any chain not listed above.
    Unknown,
}

const KNOWN: [(Network, u64, &str); 8] = [
    (Network::EthereumMainnet, 1, "ethereum-mainnet"),
    (Network::EthereumRopsten, 3, "ethereum-ropsten"),
    (Network::EthereumGoerli, 5, "ethereum-goerli"),
    (Network::EthereumKovan, 42, "ethereum-kovan"),
    (Network::EthereumSepolia, 11_155_111, "ethereum-sepolia"),
    (Network::BscMainnet, 56, "bsc-mainnet"),
    (Network::BscTestnet, 97, "bsc-testnet"),
    (Network::PolygonMainnet, 137, "polygon-mainnet"),
];

impl Network {
    /// Identifies the network for a chain id. Unmapped ids resolve to
    /// [`Network::Unknown`].
    pub fn from_chain_id(chain_id: u64) -> Self {
        KNOWN
            .iter()
            .find(|(_, id, _)| *id == chain_id)
            .map(|(network, _, _)| *network)
            .unwrap_or(Self::Unknown)
    }

    /// Resolves a network from its name, e.g. `bsc-testnet`. Unrecognised
    /// names resolve to [`Network::Unknown`].
    pub fn from_name(name: &str) -> Self {
        KNOWN
            .iter()
            .find(|(_, _, known)| known.eq_ignore_ascii_case(name.trim()))
            .map(|(network, _, _)| *network)
            .unwrap_or(Self::Unknown)
    }

    /// The human-readable network name.
    pub fn as_str(&self) -> &'static str {
        KNOWN
            .iter()
            .find(|(network, _, _)| network == self)
            .map(|(_, _, name)| *name)
            .unwrap_or("unknown")
    }

    /// The block explorer API endpoint serving this network, if any.
    pub fn explorer_api_url(&self) -> Option<&'static str> {
        match self {
            Self::EthereumMainnet => Some("https://api.etherscan.io"),
            Self::EthereumRopsten => Some("https://api-ropsten.etherscan.io"),
            Self::EthereumGoerli => Some("https://api-goerli.etherscan.io"),
            Self::EthereumKovan => Some("https://api-kovan.etherscan.io"),
            Self::EthereumSepolia => Some("https://api-sepolia.etherscan.io"),
            Self::BscMainnet => Some("https://api.bscscan.com"),
            Self::BscTestnet => Some("https://api-testnet.bscscan.com"),
            Self::PolygonMainnet => Some("https://api.polygonscan.com"),
            Self::Unknown => None,
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Network {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
