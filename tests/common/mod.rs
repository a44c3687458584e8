//! Shared mocks for provisioning, session and CLI tests.

#![allow(dead_code)]

use alloy::primitives::{address, Address, TxHash, B256, U256};
use std::sync::{Arc, Mutex};

use quiz_dapp::blockchain::{
    BlockchainError, BlockchainResult, CallOptions, Deployment, QuizContract, QuizNetwork, Wallet,
};
use quiz_dapp::Session;

/// Anvil's first account.
pub const TEST_PRIVATE_KEY: &str =
    "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

/// Address a fresh anvil deployment from the first account lands at.
pub const DEPLOYED_ADDRESS: Address = address!("5FbDB2315678afecb367f032d93F642f64180aa3");

pub const ANSWER_TX: TxHash = B256::repeat_byte(0x11);
pub const DEPLOY_TX: TxHash = B256::repeat_byte(0x22);

pub fn test_wallet() -> Wallet {
    Wallet::from_private_key(TEST_PRIVATE_KEY).unwrap()
}

/// A contract call as seen by the mock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Question { from: Address },
    SendAnswer { from: Address, answer_hash: B256 },
    CheckBoard { from: Address },
}

/// Call record shared between a mock and the test holding it.
#[derive(Debug, Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<Call>>>);

impl CallLog {
    fn push(&self, call: Call) {
        self.0.lock().unwrap().push(call);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.0.lock().unwrap().clone()
    }

    pub fn len(&self) -> usize {
        self.0.lock().unwrap().len()
    }
}

/// In-memory quiz contract.
#[derive(Debug, Clone)]
pub struct MockContract {
    pub address: Address,
    pub question: String,
    pub correct: bool,
    pub fail: bool,
    pub log: CallLog,
}

impl MockContract {
    pub fn new(address: Address) -> Self {
        Self {
            address,
            question: "2+2?".to_string(),
            correct: true,
            fail: false,
            log: CallLog::default(),
        }
    }

    pub fn failing(address: Address) -> Self {
        Self {
            fail: true,
            ..Self::new(address)
        }
    }

    fn check_failure(&self) -> BlockchainResult<()> {
        if self.fail {
            Err(BlockchainError::Contract("execution reverted".to_string()))
        } else {
            Ok(())
        }
    }
}

impl QuizContract for MockContract {
    fn address(&self) -> Address {
        self.address
    }

    async fn question(&self, opts: &CallOptions) -> BlockchainResult<String> {
        self.log.push(Call::Question { from: opts.from });
        self.check_failure()?;
        Ok(self.question.clone())
    }

    async fn send_answer(&self, opts: &CallOptions, answer_hash: B256) -> BlockchainResult<TxHash> {
        self.log.push(Call::SendAnswer {
            from: opts.from,
            answer_hash,
        });
        self.check_failure()?;
        Ok(ANSWER_TX)
    }

    async fn check_board(&self, opts: &CallOptions) -> BlockchainResult<bool> {
        self.log.push(Call::CheckBoard { from: opts.from });
        self.check_failure()?;
        Ok(self.correct)
    }
}

/// A submitted deployment as seen by the mock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployRequest {
    pub from: Address,
    pub question: String,
    pub answer_hash: B256,
}

/// In-memory network recording deploy and load requests.
#[derive(Debug, Default)]
pub struct MockNetwork {
    pub deploys: Mutex<Vec<DeployRequest>>,
    pub loads: Mutex<Vec<Address>>,
    pub fail_deploy: bool,
    pub has_code: bool,
}

impl MockNetwork {
    pub fn new() -> Self {
        Self {
            has_code: true,
            ..Self::default()
        }
    }

    pub fn deploy_count(&self) -> usize {
        self.deploys.lock().unwrap().len()
    }

    pub fn load_count(&self) -> usize {
        self.loads.lock().unwrap().len()
    }
}

impl QuizNetwork for MockNetwork {
    type Contract = MockContract;

    async fn balance(&self, _address: Address) -> BlockchainResult<U256> {
        Ok(U256::from(10).pow(U256::from(18)))
    }

    async fn deploy(
        &self,
        from: Address,
        question: &str,
        answer_hash: B256,
    ) -> BlockchainResult<Deployment<MockContract>> {
        self.deploys.lock().unwrap().push(DeployRequest {
            from,
            question: question.to_string(),
            answer_hash,
        });
        if self.fail_deploy {
            return Err(BlockchainError::Contract("insufficient funds for gas".to_string()));
        }
        Ok(Deployment {
            address: DEPLOYED_ADDRESS,
            tx_hash: DEPLOY_TX,
            contract: MockContract::new(DEPLOYED_ADDRESS),
        })
    }

    async fn load(&self, address: Address) -> BlockchainResult<MockContract> {
        self.loads.lock().unwrap().push(address);
        Ok(MockContract::new(address))
    }

    async fn code_exists(&self, _address: Address) -> BlockchainResult<bool> {
        Ok(self.has_code)
    }
}

/// Session already bound to `contract`.
pub fn bound_session(contract: MockContract) -> Session<MockContract> {
    let mut session = Session::new(test_wallet());
    session.bind(contract).unwrap();
    session
}
