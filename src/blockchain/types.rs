//! Chain-specific types and error definitions.

use alloy::primitives::{Address, TxHash};
use thiserror::Error;

/// Errors that can occur during blockchain operations.
#[derive(Debug, Error)]
pub enum BlockchainError {
    /// RPC connection or request failed.
    #[error("RPC error: {0}")]
    Rpc(String),

    /// RPC request timed out.
    #[error("RPC timeout after {0} seconds")]
    Timeout(u64),

    /// Keystore could not be opened or decrypted, or a key was malformed.
    #[error("Wallet error: {0}")]
    Wallet(String),

    /// A string could not be parsed as an address.
    #[error("Invalid address '{input}': {reason}")]
    InvalidAddress { input: String, reason: String },

    /// Creation bytecode missing or not valid hex.
    #[error("Bytecode error: {0}")]
    Bytecode(String),

    /// A contract call or transaction was rejected.
    #[error("Contract error: {0}")]
    Contract(String),
}

/// Result type for blockchain operations.
pub type BlockchainResult<T> = Result<T, BlockchainError>;

/// Read-only call parameters attached to every contract call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallOptions {
    /// Caller address; the contract keys its leaderboard by `msg.sender`.
    pub from: Address,
}

/// Outcome of submitting a deployment transaction.
#[derive(Debug)]
pub struct Deployment<C> {
    /// Address the contract will live at once the transaction is mined.
    pub address: Address,
    /// Hash of the deployment transaction.
    pub tx_hash: TxHash,
    /// Handle bound to `address`.
    pub contract: C,
}

/// Parse a hex address, accepting it with or without the `0x` prefix.
pub fn parse_address(input: &str) -> BlockchainResult<Address> {
    input
        .trim()
        .parse::<Address>()
        .map_err(|e| BlockchainError::InvalidAddress {
            input: input.to_string(),
            reason: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_address() {
        let with_prefix = parse_address("0x5FbDB2315678afecb367f032d93F642f64180aa3").unwrap();
        let without_prefix = parse_address("5fbdb2315678afecb367f032d93f642f64180aa3").unwrap();
        assert_eq!(with_prefix, without_prefix);
    }

    #[test]
    fn test_parse_malformed_address() {
        let err = parse_address("0xABC").unwrap_err();
        assert!(matches!(err, BlockchainError::InvalidAddress { .. }));
        assert!(err.to_string().contains("0xABC"));
    }

    #[test]
    fn test_error_display() {
        let err = BlockchainError::Timeout(10);
        assert_eq!(err.to_string(), "RPC timeout after 10 seconds");
    }
}
