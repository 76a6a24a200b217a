use crate::state::AppState;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage io error: {0}")]
    Io(String),

    #[error("storage serialization error: {0}")]
    Serialization(String),
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        StorageError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::Serialization(err.to_string())
    }
}

/// The serialization boundary between the app state and wherever it
/// lives. The UI shell substitutes its own implementation (browser
/// storage); the default is a JSON file.
pub trait StateStore: Send + Sync {
    fn load(&self) -> Result<Option<AppState>, StorageError>;
    fn save(&self, state: &AppState) -> Result<(), StorageError>;
}

/// JSON-file store with atomic writes.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl StateStore for JsonFileStore {
    fn load(&self) -> Result<Option<AppState>, StorageError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(&self.path)?;
        let state = serde_json::from_str(&raw)?;
        Ok(Some(state))
    }

    fn save(&self, state: &AppState) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        // Write-then-rename keeps a crash from truncating the state file
        let tmp_path = self.path.with_extension("json.tmp");
        let raw = serde_json::to_string_pretty(state)?;
        std::fs::write(&tmp_path, raw)?;
        std::fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}
