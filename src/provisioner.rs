//! Deploy-or-load decision for the session's contract.
//!
//! # Data Flow
//! ```text
//! CONTRACTADDR empty?
//!     yes → validate QUESTION/ANSWER → digest(ANSWER) → deploy
//!           → bind handle → persist CONTRACTADDR
//!     no  → parse address → load → bind handle
//! ```
//!
//! Exactly one path runs per call. Failures on either path are fatal, except
//! for persisting the new address, which is only logged.

use alloy::primitives::{Address, TxHash};
use std::io::Write;

use crate::blockchain::{parse_address, QuizNetwork};
use crate::config::validation::validate_deployment;
use crate::config::{keys, EnvStore, QuizConfig};
use crate::error::QuizError;
use crate::hashing::answer_digest;
use crate::session::Session;

/// Which path provisioning took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provisioned {
    Deployed { address: Address, tx_hash: TxHash },
    Loaded { address: Address },
}

impl Provisioned {
    pub fn address(&self) -> Address {
        match self {
            Provisioned::Deployed { address, .. } | Provisioned::Loaded { address } => *address,
        }
    }
}

/// Bind `session` to a freshly deployed or an existing quiz contract.
///
/// On deployment, `config.contract_address` and the `CONTRACTADDR` store
/// entry are set to the new address, and a confirmation notice is written to
/// `out`.
pub async fn provision<N, W>(
    network: &N,
    session: &mut Session<N::Contract>,
    config: &mut QuizConfig,
    store: &mut EnvStore,
    out: &mut W,
) -> Result<Provisioned, QuizError>
where
    N: QuizNetwork,
    W: Write,
{
    if config.needs_deployment() {
        deploy(network, session, config, store, out).await
    } else {
        load(network, session, config).await
    }
}

async fn deploy<N, W>(
    network: &N,
    session: &mut Session<N::Contract>,
    config: &mut QuizConfig,
    store: &mut EnvStore,
    out: &mut W,
) -> Result<Provisioned, QuizError>
where
    N: QuizNetwork,
    W: Write,
{
    tracing::info!("No contract address configured, deploying a new quiz");
    validate_deployment(config).map_err(QuizError::InvalidConfig)?;

    let answer_hash = answer_digest(&config.answer);
    let deployment = network
        .deploy(session.call_options().from, &config.question, answer_hash)
        .await
        .map_err(QuizError::Deployment)?;

    let address = deployment.address;
    let tx_hash = deployment.tx_hash;
    session.bind(deployment.contract)?;

    if let Err(e) = writeln!(
        out,
        "Contract deployed! Wait for tx {} to be confirmed.",
        tx_hash
    ) {
        tracing::warn!(tx_hash = %tx_hash, error = %e, "Failed to print deployment notice");
    }

    let address_hex = address.to_string();
    config.contract_address = address_hex.clone();
    if let Err(e) = store.update(keys::CONTRACTADDR, &address_hex) {
        tracing::warn!(
            path = %store.path().display(),
            error = %e,
            "Failed to persist contract address; it will be deployed again next run"
        );
    }

    Ok(Provisioned::Deployed { address, tx_hash })
}

async fn load<N>(
    network: &N,
    session: &mut Session<N::Contract>,
    config: &QuizConfig,
) -> Result<Provisioned, QuizError>
where
    N: QuizNetwork,
{
    tracing::info!(contract = %config.contract_address, "Loading existing quiz");
    let address = parse_address(&config.contract_address).map_err(QuizError::ContractResolution)?;

    let contract = network
        .load(address)
        .await
        .map_err(QuizError::ContractResolution)?;
    session.bind(contract)?;

    match network.code_exists(address).await {
        Ok(true) => {}
        Ok(false) => tracing::warn!(
            contract = %address,
            "No code at contract address yet; the deployment may still be pending"
        ),
        Err(e) => tracing::warn!(contract = %address, error = %e, "Could not check contract code"),
    }

    Ok(Provisioned::Loaded { address })
}
