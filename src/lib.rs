//! Command-line client for an on-chain quiz.
//!
//! # Architecture Overview
//!
//! ```text
//!   .env ──▶ config ──▶ blockchain::wallet ──▶ session (Unbound)
//!                  │                               │
//!                  └──▶ blockchain::client ──▶ provisioner ──▶ session (Bound)
//!                                                                  │
//!                                   stdin ──▶ cli ──▶ interaction ─┘
//! ```
//!
//! The provisioner deploys a new `Quiz` contract when no address is
//! configured, otherwise it binds to the configured one. The CLI then loops
//! over three calls: read the question, send an answer digest, check whether
//! the account answered correctly.

pub mod blockchain;
pub mod cli;
pub mod config;
pub mod error;
pub mod hashing;
pub mod interaction;
pub mod observability;
pub mod provisioner;
pub mod session;

pub use config::{EnvStore, QuizConfig};
pub use error::QuizError;
pub use session::Session;
