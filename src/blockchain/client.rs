//! Blockchain RPC client with timeout and error handling.
//!
//! # Responsibilities
//! - Connect to the JSON-RPC gateway and verify it answers
//! - Query chain state (chain id, balances, contract code)
//! - Deploy the quiz contract or bind a handle to an existing one
//! - Bound every RPC call with the configured timeout

use alloy::network::TransactionBuilder;
use alloy::primitives::{Address, Bytes, B256, U256};
use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use alloy::rpc::types::TransactionRequest;
use alloy::sol_types::SolConstructor;
use std::future::IntoFuture;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::time::timeout;

use crate::blockchain::contract::{Quiz, QuizContract, QuizHandle};
use crate::blockchain::types::{BlockchainError, BlockchainResult, Deployment};
use crate::blockchain::wallet::Wallet;
use crate::config::QuizConfig;

/// Network operations the provisioner relies on.
#[allow(async_fn_in_trait)]
pub trait QuizNetwork {
    type Contract: QuizContract;

    /// Balance of `address` in wei.
    async fn balance(&self, address: Address) -> BlockchainResult<U256>;

    /// Submit a deployment of a new quiz. Does not wait for it to be mined.
    async fn deploy(
        &self,
        from: Address,
        question: &str,
        answer_hash: B256,
    ) -> BlockchainResult<Deployment<Self::Contract>>;

    /// Bind a handle to an already deployed quiz.
    async fn load(&self, address: Address) -> BlockchainResult<Self::Contract>;

    /// Whether any code is deployed at `address` yet.
    async fn code_exists(&self, address: Address) -> BlockchainResult<bool>;
}

/// Run an RPC future under a timeout, mapping its error with `wrap`.
pub(crate) async fn timed<F, T, E>(
    timeout_secs: u64,
    fut: F,
    wrap: fn(String) -> BlockchainError,
) -> BlockchainResult<T>
where
    F: IntoFuture<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    match timeout(Duration::from_secs(timeout_secs), fut).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(e)) => Err(wrap(e.to_string())),
        Err(_) => Err(BlockchainError::Timeout(timeout_secs)),
    }
}

/// Unsent creation transaction and the address it will deploy to.
#[derive(Debug)]
struct PreparedDeployment {
    nonce: u64,
    address: Address,
    request: TransactionRequest,
}

/// Quiz client over a single signing HTTP provider.
#[derive(Clone)]
pub struct QuizClient {
    provider: DynProvider,
    gateway: String,
    timeout_secs: u64,
    bytecode_path: PathBuf,
}

impl QuizClient {
    /// Build a signing provider for `wallet` and check the gateway answers.
    ///
    /// # Returns
    /// A connected client, or an error if the URL is invalid or the gateway
    /// does not report a chain id in time.
    pub async fn connect(config: &QuizConfig, wallet: &Wallet) -> BlockchainResult<Self> {
        let gateway = config.gateway.trim();
        let url: url::Url = gateway
            .parse()
            .map_err(|e| BlockchainError::Rpc(format!("Invalid RPC URL '{}': {}", gateway, e)))?;

        let provider = ProviderBuilder::new()
            .wallet(wallet.ethereum_wallet())
            .connect_http(url)
            .erased();

        let client = Self {
            provider,
            gateway: gateway.to_string(),
            timeout_secs: config.rpc_timeout_secs,
            bytecode_path: config.bytecode_path.clone(),
        };

        let chain_id = client.chain_id().await?;
        tracing::info!(gateway = %client.gateway, chain_id, "Connected to gateway");

        Ok(client)
    }

    /// Get the chain ID from the RPC.
    pub async fn chain_id(&self) -> BlockchainResult<u64> {
        timed(
            self.timeout_secs,
            self.provider.get_chain_id(),
            BlockchainError::Rpc,
        )
        .await
    }

    /// Build the creation transaction with a pinned pending nonce.
    ///
    /// The address is fixed by (sender, nonce), so it is known before the
    /// transaction is mined.
    async fn prepare_deployment(
        &self,
        from: Address,
        question: &str,
        answer_hash: B256,
    ) -> BlockchainResult<PreparedDeployment> {
        let bytecode = load_bytecode(&self.bytecode_path)?;
        let constructor_args = Quiz::constructorCall {
            _qn: question.to_string(),
            _ans: answer_hash,
        }
        .abi_encode();

        let mut init_code = bytecode.to_vec();
        init_code.extend_from_slice(&constructor_args);

        let nonce = timed(
            self.timeout_secs,
            self.provider.get_transaction_count(from).pending(),
            BlockchainError::Rpc,
        )
        .await?;

        let request = TransactionRequest::default()
            .with_from(from)
            .with_nonce(nonce)
            .with_deploy_code(init_code);

        Ok(PreparedDeployment {
            nonce,
            address: from.create(nonce),
            request,
        })
    }

    fn handle(&self, address: Address) -> QuizHandle {
        QuizHandle::new(address, self.provider.clone(), self.timeout_secs)
    }
}

impl QuizNetwork for QuizClient {
    type Contract = QuizHandle;

    async fn balance(&self, address: Address) -> BlockchainResult<U256> {
        timed(
            self.timeout_secs,
            self.provider.get_balance(address),
            BlockchainError::Rpc,
        )
        .await
    }

    async fn deploy(
        &self,
        from: Address,
        question: &str,
        answer_hash: B256,
    ) -> BlockchainResult<Deployment<QuizHandle>> {
        let prepared = self.prepare_deployment(from, question, answer_hash).await?;

        let pending = timed(
            self.timeout_secs,
            self.provider.send_transaction(prepared.request),
            BlockchainError::Contract,
        )
        .await?;

        let tx_hash = *pending.tx_hash();
        tracing::info!(
            address = %prepared.address,
            tx_hash = %tx_hash,
            nonce = prepared.nonce,
            "Deployment submitted"
        );

        Ok(Deployment {
            address: prepared.address,
            tx_hash,
            contract: self.handle(prepared.address),
        })
    }

    async fn load(&self, address: Address) -> BlockchainResult<QuizHandle> {
        Ok(self.handle(address))
    }

    async fn code_exists(&self, address: Address) -> BlockchainResult<bool> {
        let code = timed(
            self.timeout_secs,
            self.provider.get_code_at(address),
            BlockchainError::Rpc,
        )
        .await?;
        Ok(!code.is_empty())
    }
}

impl std::fmt::Debug for QuizClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuizClient")
            .field("gateway", &self.gateway)
            .field("timeout_secs", &self.timeout_secs)
            .field("bytecode_path", &self.bytecode_path)
            .finish()
    }
}

/// Read hex-encoded creation bytecode, as written by `solc --bin`.
pub fn load_bytecode(path: &Path) -> BlockchainResult<Bytes> {
    let raw = std::fs::read_to_string(path).map_err(|e| {
        BlockchainError::Bytecode(format!("Could not read '{}': {}", path.display(), e))
    })?;

    let trimmed = raw.trim();
    let hex = trimmed.strip_prefix("0x").unwrap_or(trimmed);
    if hex.is_empty() {
        return Err(BlockchainError::Bytecode(format!(
            "'{}' is empty",
            path.display()
        )));
    }

    alloy::hex::decode(hex).map(Bytes::from).map_err(|e| {
        BlockchainError::Bytecode(format!("'{}' is not valid hex: {}", path.display(), e))
    })
}
