//! Constants used in the deploy scripts

/// Default RPC endpoint, a local Hardhat node
pub const DEFAULT_RPC: &str = "http://127.0.0.1:8545";

/// Default directory holding the compiled contract artifacts
pub const DEFAULT_ARTIFACTS_DIR: &str = "artifacts";

/// Default file receiving the deployed addresses
pub const DEFAULT_OUTPUT_FILE: &str = "deployed.json";

/// Name of the LifePoint token contract artifact
pub const TOKEN_CONTRACT: &str = "CustomToken";

/// Name of the lock contract artifact
pub const LOCK_CONTRACT: &str = "TokenLock";

/// Key of the token in the output file
pub const TOKEN_OUTPUT_KEY: &str = "token";

/// Key of the lock in the output file
pub const LOCK_OUTPUT_KEY: &str = "lock";

/// Seconds between the lock initialization and the deposit deadline (1 hour)
pub const DEPOSIT_WINDOW_SECS: u64 = 3600;

/// Seconds the deposited tokens stay locked (1 day)
pub const LOCK_DURATION_SECS: u64 = 3600 * 24;

/// Display name of the locked token representation
pub const LOCKED_TOKEN_NAME: &str = "Locked LifePoint";

/// Display symbol of the locked token representation
pub const LOCKED_TOKEN_SYMBOL: &str = "LLP";
