//! The deploy scripts: each command runs its steps strictly in order and stops at the first error

use alloy::primitives::{Address, TxHash};
use tracing::info;

use crate::{
    build::artifact::ArtifactStore,
    cli::LockSettings,
    constants::{LOCK_CONTRACT, LOCK_OUTPUT_KEY, TOKEN_CONTRACT, TOKEN_OUTPUT_KEY},
    errors::ScriptError,
    output_writer::{read_output_file, reset_output_file, write_output_file, OutputKeys},
    tx::ChainClient,
};

/// What a full deployment produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentReport {
    /// Account that signed every tx, and owner of the lock
    pub signer: Address,
    /// Address of the LifePoint token
    pub token: Address,
    /// Address of the token lock
    pub lock: Address,
    /// Hash of the lock init tx
    pub init_tx: TxHash,
}

/// Deploy the LifePoint token and its lock, then initialize the lock over the token.
///
/// `clock` gives the current unix time, read once right before building the init params.
/// The output file is reset once the new token is deployed, so it never mixes two runs.
pub async fn deploy_contracts<C: ChainClient>(
    settings: &LockSettings,
    client: &C,
    artifacts: &ArtifactStore,
    output_file: &str,
    clock: impl Fn() -> Result<u64, ScriptError>,
) -> Result<DeploymentReport, ScriptError> {
    let signer = client.signer_address().await?;
    info!("Deploying contracts with the account: {signer}");
    let balance = client.balance(signer).await?;
    info!("Account balance: {balance}");

    // Deploy LifePoint token
    let token = deploy_artifact(client, artifacts, TOKEN_CONTRACT).await?;
    reset_output_file(output_file)?;
    write_output_file(output_file, OutputKeys::Deployment { key: TOKEN_OUTPUT_KEY }, token)?;
    info!("LifePoint deployed to: {token}");

    // Deploy TokenLock
    let lock = deploy_artifact(client, artifacts, LOCK_CONTRACT).await?;
    write_output_file(output_file, OutputKeys::Deployment { key: LOCK_OUTPUT_KEY }, lock)?;
    info!("TokenLock deployed to: {lock}");

    let init_tx = initialize(settings, client, signer, token, lock, output_file, clock).await?;

    Ok(DeploymentReport {
        signer,
        token,
        lock,
        init_tx,
    })
}

/// Initialize a lock deployed by a previous run, reading both addresses from the `output_file`
pub async fn init_lock<C: ChainClient>(
    settings: &LockSettings,
    client: &C,
    output_file: &str,
    clock: impl Fn() -> Result<u64, ScriptError>,
) -> Result<TxHash, ScriptError> {
    let token = read_address(output_file, TOKEN_OUTPUT_KEY)?;
    let lock = read_address(output_file, LOCK_OUTPUT_KEY)?;
    info!("Found LifePoint at {token} and TokenLock at {lock}");

    let signer = client.signer_address().await?;
    info!("Initializing with the account: {signer}");

    initialize(settings, client, signer, token, lock, output_file, clock).await
}

/// Load the `contract` artifact and deploy it
async fn deploy_artifact<C: ChainClient>(
    client: &C,
    artifacts: &ArtifactStore,
    contract: &str,
) -> Result<Address, ScriptError> {
    let bytecode = artifacts.bytecode(contract)?;
    info!("Deploying {contract} ({} bytes)...", bytecode.len());

    client.deploy(bytecode).await
}

/// Initialize the `lock` over the `token`, owned by the `signer`
async fn initialize<C: ChainClient>(
    settings: &LockSettings,
    client: &C,
    signer: Address,
    token: Address,
    lock: Address,
    output_file: &str,
    clock: impl Fn() -> Result<u64, ScriptError>,
) -> Result<TxHash, ScriptError> {
    let params = settings.init_params(signer, token, clock()?);
    info!(
        "Initializing TokenLock, deposits until {} then locked for {}s",
        params.deposit_deadline, params.lock_duration
    );

    let init_tx = client.initialize_lock(lock, &params).await?;
    write_output_file(output_file, OutputKeys::Init { key: LOCK_OUTPUT_KEY }, init_tx)?;
    info!("TokenLock initialized.");

    Ok(init_tx)
}

/// Read a contract address from the `output_file`
fn read_address(output_file: &str, key: &'static str) -> Result<Address, ScriptError> {
    read_output_file(output_file, OutputKeys::Deployment { key })?
        .parse::<Address>()
        .map_err(|e| ScriptError::JsonOutputError(format!("invalid {key} address: {e}")))
}
