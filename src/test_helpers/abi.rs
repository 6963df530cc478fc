//! Test helpers for ABI-related functionality.

/// A standard ERC-20 ABI JSON for testing purposes.
pub fn erc20_abi_json() -> &'static str {
    include_str!("../../abis/erc20.json")
}
