//! Blockchain integration subsystem.
//!
//! # Data Flow
//! ```text
//! KEYSTORE + KEYSTOREPASS
//!     → wallet.rs (decrypt keystore, signing identity)
//!     → client.rs (signing provider, RPC with timeouts, deploy/load)
//!     → contract.rs (Quiz binding: question, sendAnswer, checkBoard)
//! ```
//!
//! # Security Constraints
//! - Never log private keys, passwords or plaintext answers
//! - All RPC calls have configurable timeouts
//!
//! `QuizNetwork` and `QuizContract` are the seams the rest of the crate is
//! written against; `QuizClient` and `QuizHandle` are their alloy-backed
//! implementations.

pub mod client;
pub mod contract;
pub mod types;
pub mod wallet;

pub use client::{QuizClient, QuizNetwork};
pub use contract::{QuizContract, QuizHandle};
pub use types::{parse_address, BlockchainError, BlockchainResult, CallOptions, Deployment};
pub use wallet::Wallet;
