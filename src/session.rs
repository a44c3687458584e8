//! Call/transact session over one quiz contract.
//!
//! A session starts `Unbound` and becomes `Bound` exactly once, when the
//! provisioner hands it a contract handle. Contract calls on an unbound
//! session fail with [`QuizError::NotProvisioned`] without touching the
//! network.

use alloy::primitives::{Address, TxHash, B256};

use crate::blockchain::{CallOptions, QuizContract, Wallet};
use crate::error::{InteractionKind, QuizError};

/// Binding state of a session.
#[derive(Debug)]
pub enum Binding<C> {
    Unbound,
    Bound(C),
}

/// Signing identity, call options and (once provisioned) a contract handle.
#[derive(Debug)]
pub struct Session<C> {
    wallet: Wallet,
    call_opts: CallOptions,
    binding: Binding<C>,
}

impl<C: QuizContract> Session<C> {
    /// Create an unbound session for `wallet`.
    pub fn new(wallet: Wallet) -> Self {
        let call_opts = CallOptions {
            from: wallet.address(),
        };
        Self {
            wallet,
            call_opts,
            binding: Binding::Unbound,
        }
    }

    /// Attach the contract handle. Only the first call succeeds.
    pub fn bind(&mut self, contract: C) -> Result<(), QuizError> {
        if let Binding::Bound(existing) = &self.binding {
            return Err(QuizError::AlreadyProvisioned(existing.address()));
        }
        tracing::debug!(contract = %contract.address(), "Session bound");
        self.binding = Binding::Bound(contract);
        Ok(())
    }

    pub fn is_bound(&self) -> bool {
        matches!(self.binding, Binding::Bound(_))
    }

    /// Address of the bound contract, if any.
    pub fn contract_address(&self) -> Option<Address> {
        match &self.binding {
            Binding::Bound(contract) => Some(contract.address()),
            Binding::Unbound => None,
        }
    }

    pub fn wallet(&self) -> &Wallet {
        &self.wallet
    }

    pub fn call_options(&self) -> &CallOptions {
        &self.call_opts
    }

    fn contract(&self) -> Result<&C, QuizError> {
        match &self.binding {
            Binding::Bound(contract) => Ok(contract),
            Binding::Unbound => Err(QuizError::NotProvisioned),
        }
    }

    /// Read the question stored in the contract.
    pub async fn question(&self) -> Result<String, QuizError> {
        self.contract()?
            .question(&self.call_opts)
            .await
            .map_err(|source| QuizError::Interaction {
                kind: InteractionKind::Read,
                source,
            })
    }

    /// Submit an answer digest.
    pub async fn send_answer(&self, answer_hash: B256) -> Result<TxHash, QuizError> {
        self.contract()?
            .send_answer(&self.call_opts, answer_hash)
            .await
            .map_err(|source| QuizError::Interaction {
                kind: InteractionKind::Send,
                source,
            })
    }

    /// Whether this session's account has answered correctly.
    pub async fn check_board(&self) -> Result<bool, QuizError> {
        self.contract()?
            .check_board(&self.call_opts)
            .await
            .map_err(|source| QuizError::Interaction {
                kind: InteractionKind::Check,
                source,
            })
    }
}
