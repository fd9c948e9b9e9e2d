//! Lookup and decoding of Hardhat contract artifacts

use std::{
    fs,
    path::{Path, PathBuf},
};

use alloy::{hex, primitives::Bytes};

use crate::errors::ScriptError;

/// Directory Hardhat uses for compiler metadata, never holding contract artifacts
const BUILD_INFO_DIR: &str = "build-info";

/// Read access to a Hardhat `artifacts` directory
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    /// Root of the artifacts directory
    root: PathBuf,
}

impl ArtifactStore {
    /// Build a store over the given artifacts directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Creation bytecode of the `contract` artifact
    pub fn bytecode(&self, contract: &str) -> Result<Bytes, ScriptError> {
        let artifact_path = self.find_artifact(contract)?;

        let content = fs::read_to_string(&artifact_path)
            .map_err(|e| ScriptError::ArtifactLoading(format!("{artifact_path:?}: {e}")))?;
        let parsed = json::parse(&content)
            .map_err(|e| ScriptError::ArtifactLoading(format!("{artifact_path:?}: {e}")))?;

        let bytecode = parsed["bytecode"].as_str().ok_or_else(|| {
            ScriptError::ArtifactLoading(format!("{contract} artifact has no bytecode field"))
        })?;
        // Library placeholders (`__$...$__`) are not hex, so unlinked bytecode fails here
        let bytes = hex::decode(bytecode)
            .map_err(|e| ScriptError::ArtifactLoading(format!("{contract} bytecode: {e}")))?;
        if bytes.is_empty() {
            return Err(ScriptError::ArtifactLoading(format!(
                "{contract} has empty bytecode, is it abstract or an interface?"
            )));
        }

        Ok(Bytes::from(bytes))
    }

    /// Find the artifact file of the `contract`
    fn find_artifact(&self, contract: &str) -> Result<PathBuf, ScriptError> {
        let file_name = format!("{contract}.json");

        // Hardhat default layout, for contracts sitting at the root of `contracts/`
        let default_path = self
            .root
            .join("contracts")
            .join(format!("{contract}.sol"))
            .join(&file_name);
        if default_path.is_file() {
            return Ok(default_path);
        }

        let mut found = Vec::new();
        search_dir(&self.root, &file_name, &mut found)?;

        match found.len() {
            0 => Err(ScriptError::ArtifactLoading(format!(
                "no {file_name} artifact under {:?}",
                self.root
            ))),
            1 => Ok(found.remove(0)),
            _ => Err(ScriptError::ArtifactLoading(format!(
                "{contract} is ambiguous, found {found:?}"
            ))),
        }
    }
}

/// Recursively collect the files named `file_name` under `dir`, without following symlinks
fn search_dir(dir: &Path, file_name: &str, found: &mut Vec<PathBuf>) -> Result<(), ScriptError> {
    let entries = fs::read_dir(dir)
        .map_err(|e| ScriptError::ArtifactLoading(format!("{dir:?}: {e}")))?;

    for entry in entries {
        let entry = entry.map_err(|e| ScriptError::ArtifactLoading(e.to_string()))?;
        let file_type = entry
            .file_type()
            .map_err(|e| ScriptError::ArtifactLoading(e.to_string()))?;
        let path = entry.path();

        if file_type.is_dir() {
            if path.file_name().is_some_and(|name| name == BUILD_INFO_DIR) {
                continue;
            }
            search_dir(&path, file_name, found)?;
        } else if file_type.is_file() && path.file_name().is_some_and(|name| name == file_name) {
            found.push(path);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Write an artifact with the given bytecode at `dir/relative`
    fn write_artifact(dir: &Path, relative: &str, bytecode: &str) {
        let path = dir.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(
            path,
            format!(r#"{{"contractName": "X", "abi": [], "bytecode": "{bytecode}"}}"#),
        )
        .unwrap();
    }

    #[test]
    fn reads_bytecode_from_default_layout() {
        let dir = tempfile::tempdir().unwrap();
        write_artifact(
            dir.path(),
            "contracts/CustomToken.sol/CustomToken.json",
            "0x6080604052",
        );

        let store = ArtifactStore::new(dir.path());
        let bytecode = store.bytecode("CustomToken").unwrap();

        assert_eq!(bytecode.to_vec(), vec![0x60, 0x80, 0x60, 0x40, 0x52]);
    }

    #[test]
    fn finds_nested_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        write_artifact(
            dir.path(),
            "contracts/lock/TokenLock.sol/TokenLock.json",
            "0x60016002",
        );

        let store = ArtifactStore::new(dir.path());

        assert_eq!(store.bytecode("TokenLock").unwrap().len(), 4);
    }

    #[test]
    fn ignores_build_info() {
        let dir = tempfile::tempdir().unwrap();
        write_artifact(dir.path(), "build-info/TokenLock.json", "0x6001");

        let err = ArtifactStore::new(dir.path()).bytecode("TokenLock");

        assert!(matches!(err, Err(ScriptError::ArtifactLoading(_))));
    }

    #[test]
    fn rejects_ambiguous_names() {
        let dir = tempfile::tempdir().unwrap();
        write_artifact(dir.path(), "contracts/a/Lock.sol/TokenLock.json", "0x6001");
        write_artifact(dir.path(), "contracts/b/Lock.sol/TokenLock.json", "0x6002");

        let err = ArtifactStore::new(dir.path()).bytecode("TokenLock").unwrap_err();

        assert!(err.to_string().contains("ambiguous"));
    }

    #[cfg(unix)]
    #[test]
    fn does_not_follow_symlinked_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let contracts = dir.path().join("contracts");
        fs::create_dir_all(&contracts).unwrap();
        std::os::unix::fs::symlink(dir.path(), contracts.join("loop")).unwrap();

        let err = ArtifactStore::new(dir.path()).bytecode("TokenLock");

        assert!(matches!(err, Err(ScriptError::ArtifactLoading(_))));
    }

    #[test]
    fn rejects_interfaces() {
        let dir = tempfile::tempdir().unwrap();
        write_artifact(dir.path(), "contracts/IToken.sol/IToken.json", "0x");

        let err = ArtifactStore::new(dir.path()).bytecode("IToken").unwrap_err();

        assert!(err.to_string().contains("empty bytecode"));
    }

    #[test]
    fn rejects_unlinked_libraries() {
        let dir = tempfile::tempdir().unwrap();
        write_artifact(
            dir.path(),
            "contracts/TokenLock.sol/TokenLock.json",
            "0x6080__$4f1d7c3e1a$__6040",
        );

        let err = ArtifactStore::new(dir.path()).bytecode("TokenLock");

        assert!(matches!(err, Err(ScriptError::ArtifactLoading(_))));
    }
}
