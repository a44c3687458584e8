//! `Quiz` contract binding.
//!
//! The ABI mirrors `contracts/Quiz.sol`. Creation bytecode is not embedded;
//! the client reads it from disk when a deployment is requested.

use alloy::contract::SolCallBuilder;
use alloy::primitives::{Address, TxHash, B256};
use alloy::providers::DynProvider;
use alloy::sol;

use crate::blockchain::client::timed;
use crate::blockchain::types::{BlockchainError, BlockchainResult, CallOptions};

sol! {
    /// One question, the keccak-256 digest of its answer, and a per-sender
    /// record of whether the last submitted answer matched.
    #[sol(rpc)]
    contract Quiz {
        constructor(string _qn, bytes32 _ans);

        function question() external view returns (string memory);
        function sendAnswer(bytes32 _ans) external returns (bool);
        function checkBoard() external view returns (bool);
    }
}

/// Operations available on a bound quiz contract.
#[allow(async_fn_in_trait)]
pub trait QuizContract {
    /// Address this handle is bound to.
    fn address(&self) -> Address;

    /// Read the stored question text.
    async fn question(&self, opts: &CallOptions) -> BlockchainResult<String>;

    /// Submit an answer digest; returns the pending transaction hash.
    async fn send_answer(&self, opts: &CallOptions, answer_hash: B256) -> BlockchainResult<TxHash>;

    /// Whether `opts.from` has answered correctly.
    async fn check_board(&self, opts: &CallOptions) -> BlockchainResult<bool>;
}

/// Handle to a deployed `Quiz` instance reached through the shared provider.
#[derive(Clone)]
pub struct QuizHandle {
    instance: Quiz::QuizInstance<DynProvider>,
    timeout_secs: u64,
}

impl QuizHandle {
    pub(crate) fn new(address: Address, provider: DynProvider, timeout_secs: u64) -> Self {
        Self {
            instance: Quiz::new(address, provider),
            timeout_secs,
        }
    }

    fn question_call(
        &self,
        opts: &CallOptions,
    ) -> SolCallBuilder<&DynProvider, Quiz::questionCall> {
        self.instance.question().from(opts.from)
    }

    fn send_answer_call(
        &self,
        opts: &CallOptions,
        answer_hash: B256,
    ) -> SolCallBuilder<&DynProvider, Quiz::sendAnswerCall> {
        self.instance.sendAnswer(answer_hash).from(opts.from)
    }

    /// The contract keys results on `msg.sender`, so the caller must be set.
    fn check_board_call(
        &self,
        opts: &CallOptions,
    ) -> SolCallBuilder<&DynProvider, Quiz::checkBoardCall> {
        self.instance.checkBoard().from(opts.from)
    }
}

impl QuizContract for QuizHandle {
    fn address(&self) -> Address {
        *self.instance.address()
    }

    async fn question(&self, opts: &CallOptions) -> BlockchainResult<String> {
        let call = self.question_call(opts);
        timed(self.timeout_secs, call.call(), BlockchainError::Contract).await
    }

    async fn send_answer(&self, opts: &CallOptions, answer_hash: B256) -> BlockchainResult<TxHash> {
        let call = self.send_answer_call(opts, answer_hash);
        let pending = timed(self.timeout_secs, call.send(), BlockchainError::Contract).await?;
        let tx_hash = *pending.tx_hash();
        tracing::debug!(tx_hash = %tx_hash, "Answer transaction submitted");
        Ok(tx_hash)
    }

    async fn check_board(&self, opts: &CallOptions) -> BlockchainResult<bool> {
        let call = self.check_board_call(opts);
        timed(self.timeout_secs, call.call(), BlockchainError::Contract).await
    }
}

impl std::fmt::Debug for QuizHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuizHandle")
            .field("address", self.instance.address())
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}
