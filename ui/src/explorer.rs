//! Block-explorer links and address formatting.

use alloy_primitives::Address;
use alloy_primitives::ChainId;
use std::str::FromStr;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExplorerDataType {
    Transaction,
    Token,
    Address,
    Block,
}

impl ExplorerDataType {
    fn path(self) -> &'static str {
        match self {
            Self::Transaction => "tx",
            Self::Token => "token",
            Self::Address => "address",
            Self::Block => "block",
        }
    }
}

fn explorer_prefix(chain_id: ChainId) -> Option<&'static str> {
    match chain_id {
        1 => Some("https://etherscan.io"),
        3 => Some("https://ropsten.etherscan.io"),
        4 => Some("https://rinkeby.etherscan.io"),
        5 => Some("https://goerli.etherscan.io"),
        42 => Some("https://kovan.etherscan.io"),
        137 => Some("https://polygonscan.com"),
        80001 => Some("https://mumbai.polygonscan.com"),
        _ => None,
    }
}

/// Link to `data` on the explorer for `chain_id`. Unknown chains use the
/// Ethereum mainnet explorer.
pub fn explorer_link(chain_id: ChainId, data: &str, kind: ExplorerDataType) -> String {
    let prefix = explorer_prefix(chain_id).unwrap_or("https://etherscan.io");
    format!("{prefix}/{}/{data}", kind.path())
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error("invalid address: {0}")]
    Invalid(String),
}

pub fn parse_address(input: &str) -> Result<Address, AddressError> {
    Address::from_str(input.trim()).map_err(|_| AddressError::Invalid(input.to_string()))
}

/// EIP-55 checksummed address reduced to `0x` plus the first and last
/// `chars` hex digits.
pub fn shorten_address(address: &Address, chars: usize) -> String {
    let checksummed = address.to_checksum(None);
    let chars = chars.min(20);
    format!(
        "{}...{}",
        &checksummed[..chars + 2],
        &checksummed[42 - chars..]
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const VITALIK: &str = "0xd8da6bf26964af9d7eed9e03e53415d37aa96045";

    #[test]
    fn links_use_chain_prefix() {
        assert_eq!(
            explorer_link(137, VITALIK, ExplorerDataType::Address),
            format!("https://polygonscan.com/address/{VITALIK}")
        );
        assert_eq!(
            explorer_link(80001, "0xabc", ExplorerDataType::Transaction),
            "https://mumbai.polygonscan.com/tx/0xabc"
        );
        assert_eq!(
            explorer_link(5, "123", ExplorerDataType::Block),
            "https://goerli.etherscan.io/block/123"
        );
    }

    #[test]
    fn unknown_chain_falls_back_to_mainnet() {
        assert_eq!(
            explorer_link(999_999, "vitalik.eth", ExplorerDataType::Address),
            "https://etherscan.io/address/vitalik.eth"
        );
    }

    #[test]
    fn shortens_with_checksum() {
        let address = parse_address(VITALIK).expect("valid");
        assert_eq!(shorten_address(&address, 4), "0xd8dA...6045");
        assert_eq!(shorten_address(&address, 6), "0xd8dA6B...A96045");
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(
            parse_address("not an address"),
            Err(AddressError::Invalid("not an address".to_string()))
        );
    }
}
