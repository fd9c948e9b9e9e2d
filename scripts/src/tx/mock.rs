//! In-memory chain client recording every call it receives

use std::{collections::VecDeque, sync::Mutex};

use alloy::primitives::{Address, Bytes, TxHash, B256, U256};

use crate::{
    errors::ScriptError,
    tx::{abi::LockInitParams, ChainClient},
};

/// Hash returned for every init tx
pub const INIT_TX_HASH: TxHash = B256::repeat_byte(0x11);

/// A call received by the mock
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    /// Signer lookup
    SignerAddress,
    /// Balance read
    Balance(Address),
    /// Contract creation
    Deploy(Bytes),
    /// Lock initialization
    InitializeLock(Address, LockInitParams),
}

/// Mock chain, handing out the queued deployment addresses in order
pub struct MockChain {
    /// Configured signer, if any
    signer: Option<Address>,
    /// Addresses returned by the next deployments
    deployments: Mutex<VecDeque<Address>>,
    /// Index of the deployment getting rejected, if any
    reject_deploy_at: Option<usize>,
    /// Whether the lock init gets reverted
    reject_init: bool,
    /// Every call received, in order
    calls: Mutex<Vec<Call>>,
}

impl MockChain {
    /// Mock signing with `signer` and deploying at the `deployments` addresses
    pub fn new(signer: Address, deployments: impl IntoIterator<Item = Address>) -> Self {
        Self {
            signer: Some(signer),
            deployments: Mutex::new(deployments.into_iter().collect()),
            reject_deploy_at: None,
            reject_init: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Drop the signer
    pub fn without_signer(mut self) -> Self {
        self.signer = None;
        self
    }

    /// Reject the deployment at `index`, counting from 0
    pub fn rejecting_deploy_at(mut self, index: usize) -> Self {
        self.reject_deploy_at = Some(index);
        self
    }

    /// Revert the lock init
    pub fn rejecting_init(mut self) -> Self {
        self.reject_init = true;
        self
    }

    /// Calls received so far
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    /// Record a call
    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

impl ChainClient for MockChain {
    async fn signer_address(&self) -> Result<Address, ScriptError> {
        self.record(Call::SignerAddress);
        self.signer.ok_or(ScriptError::ClientInitialization(String::from(
            "no signer configured",
        )))
    }

    async fn balance(&self, account: Address) -> Result<U256, ScriptError> {
        self.record(Call::Balance(account));
        Ok(U256::from(10_000_000_000_000_000_000u128))
    }

    async fn deploy(&self, bytecode: Bytes) -> Result<Address, ScriptError> {
        let index = self
            .calls()
            .iter()
            .filter(|call| matches!(call, Call::Deploy(_)))
            .count();
        self.record(Call::Deploy(bytecode));
        if self.reject_deploy_at == Some(index) {
            return Err(ScriptError::ContractDeployment(String::from(
                "insufficient funds for gas * price + value",
            )));
        }
        self.deployments
            .lock()
            .unwrap()
            .pop_front()
            .ok_or(ScriptError::ContractDeployment(String::from(
                "no deployment queued",
            )))
    }

    async fn initialize_lock(
        &self,
        lock: Address,
        params: &LockInitParams,
    ) -> Result<TxHash, ScriptError> {
        self.record(Call::InitializeLock(lock, params.clone()));
        if self.reject_init {
            return Err(ScriptError::ContractInteraction(String::from(
                "execution reverted: already initialized",
            )));
        }
        Ok(INIT_TX_HASH)
    }
}
