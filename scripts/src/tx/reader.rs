use alloy::{
    primitives::{Address, U256},
    providers::Provider,
};

use crate::{errors::ScriptError, tx::client::RpcProvider};

/// Get the native balance of the `account`
pub async fn get_balance(account: Address, client: &RpcProvider) -> Result<U256, ScriptError> {
    client
        .get_balance(account)
        .await
        .map_err(|e| ScriptError::RpcRequest(e.to_string()))
}

/// Get the next nonce of the `account`
pub async fn get_nonce(account: Address, client: &RpcProvider) -> Result<u64, ScriptError> {
    client
        .get_transaction_count(account)
        .await
        .map_err(|e| ScriptError::NonceFetching(e.to_string()))
}
