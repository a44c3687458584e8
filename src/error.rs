//! Application error taxonomy and the fatal/recoverable policy.

use std::fmt;
use thiserror::Error;

use crate::blockchain::BlockchainError;
use crate::config::{ConfigError, ValidationError};

/// Which interaction failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionKind {
    Read,
    Send,
    Check,
}

impl fmt::Display for InteractionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let action = match self {
            InteractionKind::Read => "read question from contract",
            InteractionKind::Send => "send answer to contract",
            InteractionKind::Check => "check leaderboard",
        };
        f.write_str(action)
    }
}

/// Everything that can go wrong between startup and exit.
#[derive(Debug, Error)]
pub enum QuizError {
    /// Env file could not be read or written.
    #[error("configuration store error: {0}")]
    ConfigIo(#[source] ConfigError),

    /// Configuration present but unusable.
    #[error("invalid configuration: {}", join(.0))]
    InvalidConfig(Vec<ValidationError>),

    /// Keystore missing, unreadable or wrong password.
    #[error("could not load credentials: {0}")]
    Credential(#[source] BlockchainError),

    /// Gateway unreachable or invalid.
    #[error("could not connect to gateway: {0}")]
    Connection(#[source] BlockchainError),

    /// Deployment could not be submitted.
    #[error("could not deploy contract: {0}")]
    Deployment(#[source] BlockchainError),

    /// Configured contract address could not be turned into a handle.
    #[error("could not load contract: {0}")]
    ContractResolution(#[source] BlockchainError),

    /// A menu action failed.
    #[error("could not {kind}: {source}")]
    Interaction {
        kind: InteractionKind,
        #[source]
        source: BlockchainError,
    },

    /// Contract call attempted before a handle was bound.
    #[error("no contract has been provisioned for this session")]
    NotProvisioned,

    /// A second handle was offered to an already bound session.
    #[error("session is already bound to contract {0}")]
    AlreadyProvisioned(alloy::primitives::Address),

    /// Reading the menu input or writing its output failed.
    #[error("terminal I/O error: {0}")]
    Terminal(#[from] std::io::Error),
}

impl QuizError {
    /// Whether the process must stop after this error.
    pub fn is_fatal(&self) -> bool {
        match self {
            QuizError::InvalidConfig(_)
            | QuizError::Credential(_)
            | QuizError::Connection(_)
            | QuizError::Deployment(_)
            | QuizError::ContractResolution(_)
            | QuizError::AlreadyProvisioned(_)
            | QuizError::Terminal(_) => true,
            QuizError::ConfigIo(_) | QuizError::Interaction { .. } | QuizError::NotProvisioned => {
                false
            }
        }
    }

    /// Whether the failure may just be an unconfirmed earlier transaction.
    pub fn may_be_unconfirmed(&self) -> bool {
        matches!(
            self,
            QuizError::Interaction {
                kind: InteractionKind::Read | InteractionKind::Check,
                ..
            }
        )
    }
}

impl From<ConfigError> for QuizError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Validation(errors) => QuizError::InvalidConfig(errors),
            other => QuizError::ConfigIo(other),
        }
    }
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
