//! Utilities for the deploy scripts.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::errors::ScriptError;

/// Current wall-clock time, in seconds since the unix epoch
pub fn unix_timestamp() -> Result<u64, ScriptError> {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .map_err(|e| ScriptError::Clock(e.to_string()))
}

/// Process exit status for the outcome of a script run
pub fn exit_status<T>(result: &Result<T, ScriptError>) -> u8 {
    match result {
        Ok(_) => 0,
        Err(_) => 1,
    }
}
