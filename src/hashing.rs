//! Answer digests.
//!
//! Correctness is decided on-chain by comparing digests; nothing is verified
//! locally.

use alloy::primitives::{keccak256, B256};

/// Keccak-256 of the UTF-8 bytes of `plaintext`.
pub fn answer_digest(plaintext: &str) -> B256 {
    keccak256(plaintext.as_bytes())
}
