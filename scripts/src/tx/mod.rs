//! Chain access for the deploy scripts

use alloy::primitives::{Address, Bytes, TxHash, U256};

use crate::{errors::ScriptError, tx::abi::LockInitParams};

pub mod abi;
pub mod client;
pub mod reader;
pub mod sender;

#[cfg(test)]
pub(crate) mod mock;

/// The chain operations the deploy commands are built on.
///
/// Every call resolves once the node answered, and for transactions once the
/// receipt is in, so the commands can run their steps strictly in order.
#[allow(async_fn_in_trait)]
pub trait ChainClient {
    /// Address of the account signing our transactions
    async fn signer_address(&self) -> Result<Address, ScriptError>;

    /// Native balance of the `account`, in wei
    async fn balance(&self, account: Address) -> Result<U256, ScriptError>;

    /// Send a contract creation tx with the given `bytecode`, returning the new contract address
    async fn deploy(&self, bytecode: Bytes) -> Result<Address, ScriptError>;

    /// Call `initialize` on the `lock` contract, returning the confirmed tx hash
    async fn initialize_lock(
        &self,
        lock: Address,
        params: &LockInitParams,
    ) -> Result<TxHash, ScriptError>;
}
