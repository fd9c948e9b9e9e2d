use std::{fmt::LowerHex, fs, path::PathBuf};

use json::JsonValue;

use crate::errors::ScriptError;

/// Entries of the output file, each grouped under a contract key
pub enum OutputKeys {
    /// Address a contract got deployed at
    Deployment {
        /// Contract key
        key: &'static str,
    },
    /// Hash of the init tx of a contract
    Init {
        /// Contract key
        key: &'static str,
    },
}

impl OutputKeys {
    /// Path of this entry inside the json document
    fn path(&self) -> (&'static str, &'static str) {
        match self {
            OutputKeys::Deployment { key } => (*key, "deploy"),
            OutputKeys::Init { key } => (*key, "init"),
        }
    }
}

/// Read an entry from the output file
pub fn read_output_file(file_path: &str, key: OutputKeys) -> Result<String, ScriptError> {
    if !PathBuf::from(file_path).exists() {
        return Err(ScriptError::JsonOutputError(format!(
            "deployed addresses file {file_path} not found"
        )));
    }

    // Parse it's json content into objects
    let parsed_json = get_json_from_file(file_path)?;
    let (contract, field) = key.path();

    parsed_json[contract][field]
        .as_str()
        .map(str::to_string)
        .ok_or(ScriptError::JsonOutputError(format!(
            "no {contract}.{field} entry in {file_path}"
        )))
}

/// Empty the output file, dropping every entry of a previous run
pub fn reset_output_file(file_path: &str) -> Result<(), ScriptError> {
    fs::write(file_path, "{}").map_err(|e| ScriptError::JsonOutputError(e.to_string()))
}

/// Writes the given value in the output file, creating it if needed
pub fn write_output_file<T: LowerHex>(
    file_path: &str,
    key: OutputKeys,
    value: T,
) -> Result<(), ScriptError> {
    // If the file doesn't exist, create it
    if !PathBuf::from(file_path).exists() {
        fs::write(file_path, "{}").map_err(|e| ScriptError::JsonOutputError(e.to_string()))?;
    }

    let mut parsed_json = get_json_from_file(file_path)?;

    // Update the right key
    let (contract, field) = key.path();
    parsed_json[contract][field] = JsonValue::String(format!("{value:#x}"));

    // Write the updated json back to the file
    fs::write(file_path, json::stringify_pretty(parsed_json, 4))
        .map_err(|e| ScriptError::JsonOutputError(e.to_string()))?;

    Ok(())
}

/// Parses the JSON file at the given path
fn get_json_from_file(file_path: &str) -> Result<JsonValue, ScriptError> {
    let file_contents =
        fs::read_to_string(file_path).map_err(|e| ScriptError::JsonOutputError(e.to_string()))?;

    json::parse(&file_contents).map_err(|e| ScriptError::JsonOutputError(e.to_string()))
}
