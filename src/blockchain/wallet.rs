//! Signing identity loaded from an encrypted keystore.
//!
//! # Security
//! - The keystore password is only used for decryption and never stored
//! - Keys are never logged or serialized

use alloy::network::EthereumWallet;
use alloy::primitives::Address;
use alloy::signers::local::PrivateKeySigner;
use std::path::Path;

use crate::blockchain::types::{parse_address, BlockchainError, BlockchainResult};

/// Account address plus the capability to sign transactions for it.
#[derive(Debug, Clone)]
pub struct Wallet {
    signer: PrivateKeySigner,
}

impl Wallet {
    /// Decrypt a JSON keystore file with `password`.
    ///
    /// A missing file, unreadable file or wrong password is an error; there
    /// is no fallback identity.
    pub fn from_keystore(path: &Path, password: &str) -> BlockchainResult<Self> {
        if !path.is_file() {
            return Err(BlockchainError::Wallet(format!(
                "Keystore file '{}' not found",
                path.display()
            )));
        }

        let signer = PrivateKeySigner::decrypt_keystore(path, password).map_err(|e| {
            BlockchainError::Wallet(format!(
                "Could not decrypt keystore '{}': {}",
                path.display(),
                e
            ))
        })?;

        tracing::info!(address = %signer.address(), "Wallet unlocked from keystore");
        Ok(Self { signer })
    }

    /// Create a wallet from a hex-encoded private key string.
    ///
    /// # Arguments
    /// * `private_key_hex` - Hex string (with or without 0x prefix)
    pub fn from_private_key(private_key_hex: &str) -> BlockchainResult<Self> {
        let key_hex = private_key_hex.strip_prefix("0x").unwrap_or(private_key_hex);

        let signer: PrivateKeySigner = key_hex
            .parse()
            .map_err(|e| BlockchainError::Wallet(format!("Invalid private key format: {}", e)))?;

        Ok(Self { signer })
    }

    /// Get the wallet's address.
    pub fn address(&self) -> Address {
        self.signer.address()
    }

    /// Signer wrapper consumed by alloy's provider filler.
    pub fn ethereum_wallet(&self) -> EthereumWallet {
        EthereumWallet::from(self.signer.clone())
    }

    /// Compare against the `PUBLICKEY` setting. Mismatches are only logged.
    ///
    /// Returns true when `expected` is empty or names this wallet's address.
    pub fn verify_expected_address(&self, expected: &str) -> bool {
        if expected.trim().is_empty() {
            return true;
        }

        match parse_address(expected) {
            Ok(address) if address == self.address() => true,
            Ok(address) => {
                tracing::warn!(
                    expected = %address,
                    actual = %self.address(),
                    "Keystore account differs from PUBLICKEY"
                );
                false
            }
            Err(e) => {
                tracing::warn!(error = %e, "PUBLICKEY is not a valid address");
                false
            }
        }
    }
}
