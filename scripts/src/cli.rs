//! Definitions of CLI arguments and commands for deploy scripts

use std::path::PathBuf;

use alloy::primitives::Address;
use clap::{Args, Parser, Subcommand};
use tracing::info;

use crate::{
    build::artifact::ArtifactStore,
    commands::{deploy_contracts, init_lock},
    constants::{
        DEFAULT_ARTIFACTS_DIR, DEFAULT_OUTPUT_FILE, DEFAULT_RPC, DEPOSIT_WINDOW_SECS,
        LOCKED_TOKEN_NAME, LOCKED_TOKEN_SYMBOL, LOCK_DURATION_SECS,
    },
    errors::ScriptError,
    tx::{abi::LockInitParams, client::create_rpc_provider, ChainClient},
    utils::unix_timestamp,
};

/// Scripts for deploying the LifePoint token and its TokenLock
#[derive(Parser)]
pub struct Cli {
    /// Private key of the deployer
    #[arg(short, long, env = "PRIVATE_KEY", hide_env_values = true)]
    pub priv_key: Option<String>,

    /// Network RPC URL
    #[arg(short, long, env = "RPC_URL", default_value = DEFAULT_RPC)]
    pub rpc_url: String,

    /// Directory holding the compiled contract artifacts
    #[arg(short, long, env = "ARTIFACTS_DIR", default_value = DEFAULT_ARTIFACTS_DIR)]
    pub artifacts: PathBuf,

    /// File receiving the deployed addresses
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    pub output: String,

    /// The command to run
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Build the RPC client, then run the command against it
    pub async fn run(self) -> Result<(), ScriptError> {
        let Cli {
            priv_key,
            rpc_url,
            artifacts,
            output,
            command,
        } = self;

        // Build our RPC client with signer
        let client = create_rpc_provider(&rpc_url, priv_key.as_deref()).await?;

        command
            .run(&client, &ArtifactStore::new(artifacts), &output)
            .await
    }
}

/// Exit status for a failed argument parsing, help and version requests are no failure
pub fn parse_failure_status(err: &clap::Error) -> u8 {
    if err.use_stderr() {
        1
    } else {
        0
    }
}

/// The possible CLI commands
#[derive(Subcommand)]
pub enum Command {
    /// Deploy the token and the lock, then initialize the lock
    DeployContracts(DeployContractsArgs),
    /// Initialize an already deployed lock, reading the addresses from the output file
    InitLock(InitLockArgs),
}

impl Command {
    /// Run the command
    pub async fn run<C: ChainClient>(
        self,
        client: &C,
        artifacts: &ArtifactStore,
        output_file: &str,
    ) -> Result<(), ScriptError> {
        match self {
            Command::DeployContracts(args) => {
                info!("Deploying contracts...");
                let report =
                    deploy_contracts(&args.lock, client, artifacts, output_file, unix_timestamp)
                        .await?;
                info!(
                    "Deployed LifePoint at {} and TokenLock at {}, owned by {}, init tx {}",
                    report.token, report.lock, report.signer, report.init_tx
                );
                Ok(())
            }
            Command::InitLock(args) => {
                info!("Initializing lock...");
                init_lock(&args.lock, client, output_file, unix_timestamp).await?;
                Ok(())
            }
        }
    }
}

/// Deploy contracts
#[derive(Args)]
pub struct DeployContractsArgs {
    /// Settings of the lock initialization
    #[command(flatten)]
    pub lock: LockSettings,
}

/// Initialize the deployed lock
#[derive(Args)]
pub struct InitLockArgs {
    /// Settings of the lock initialization
    #[command(flatten)]
    pub lock: LockSettings,
}

/// Parameters of the lock initialization that don't come from the chain
#[derive(Args, Debug, Clone)]
pub struct LockSettings {
    /// Seconds from now until the deposit deadline
    #[arg(long, default_value_t = DEPOSIT_WINDOW_SECS)]
    pub deposit_window: u64,
    /// Seconds the deposits stay locked
    #[arg(long, default_value_t = LOCK_DURATION_SECS)]
    pub lock_duration: u64,
    /// Name of the locked token representation
    #[arg(long, default_value = LOCKED_TOKEN_NAME)]
    pub lock_name: String,
    /// Symbol of the locked token representation
    #[arg(long, default_value = LOCKED_TOKEN_SYMBOL)]
    pub lock_symbol: String,
}

impl LockSettings {
    /// Build the `initialize` params, with the deposit deadline counted from `now`
    pub fn init_params(&self, owner: Address, token: Address, now: u64) -> LockInitParams {
        LockInitParams {
            owner,
            token,
            deposit_deadline: now.saturating_add(self.deposit_window),
            lock_duration: self.lock_duration,
            name: self.lock_name.clone(),
            symbol: self.lock_symbol.clone(),
        }
    }
}

impl Default for LockSettings {
    fn default() -> Self {
        Self {
            deposit_window: DEPOSIT_WINDOW_SECS,
            lock_duration: LOCK_DURATION_SECS,
            lock_name: LOCKED_TOKEN_NAME.to_string(),
            lock_symbol: LOCKED_TOKEN_SYMBOL.to_string(),
        }
    }
}
