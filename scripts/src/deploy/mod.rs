//! Contract creation transactions

use alloy::{
    network::TransactionBuilder,
    primitives::{Address, Bytes},
    providers::{Provider, WalletProvider},
    rpc::types::eth::TransactionRequest,
};
use ethers::{types::H160, utils::get_contract_address};
use tracing::{info, warn};

use crate::{
    errors::ScriptError,
    tx::{client::RpcProvider, reader::get_nonce},
};

/// Deploy the given creation `bytecode`, without constructor args
pub async fn deploy_contract(bytecode: Bytes, client: &RpcProvider) -> Result<Address, ScriptError> {
    let deployer = client.default_signer_address();

    // Predict the contract address
    let nonce = get_nonce(deployer, client).await?;
    let expected_address = predict_contract_address(deployer, nonce);
    info!("Deploying contract, expected at {expected_address}");

    // Build the creation tx
    let tx_request = TransactionRequest::default()
        .with_from(deployer)
        .with_deploy_code(bytecode);

    // Send it
    let pending_tx = client
        .send_transaction(tx_request)
        .await
        .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?;
    info!("Pending deploy transaction... {}", pending_tx.tx_hash());

    // Wait for the transaction to be included.
    let receipt = pending_tx
        .get_receipt()
        .await
        .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?;
    if !receipt.status() {
        return Err(ScriptError::ContractDeployment(format!(
            "deploy tx {} reverted",
            receipt.transaction_hash
        )));
    }

    let contract_address = receipt
        .contract_address
        .ok_or(ScriptError::ContractDeployment(format!(
            "no contract address in receipt of {}",
            receipt.transaction_hash
        )))?;
    if contract_address != expected_address {
        warn!("Contract landed at {contract_address} instead of {expected_address}, was the nonce consumed meanwhile?");
    }

    Ok(contract_address)
}

/// Predict the address of a contract created by `deployer` at `nonce`
fn predict_contract_address(deployer: Address, nonce: u64) -> Address {
    let predicted = get_contract_address(H160::from_slice(deployer.as_slice()), nonce);
    Address::from_slice(predicted.as_bytes())
}
