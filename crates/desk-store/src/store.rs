// ABOUTME: Key-value stores backing workspace persistence.
// ABOUTME: MemoryStore for tests/embedding, FileStore for a JSON state file.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// The persistence medium contract. The workspace only ever reads and
/// writes string key-value pairs; what sits behind them is the
/// embedder's business.
pub trait StateStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid state file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("could not determine state directory")]
    NoStatePath,
}

/// In-memory store, dropped with the process
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// Store backed by a single JSON object file. Mutations stay in memory
/// until `save` is called; the embedding shell decides when to flush.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Default state file location (~/.local/state/study-desk/state.json)
    pub fn default_path() -> Option<PathBuf> {
        dirs::state_dir()
            .or_else(dirs::data_local_dir)
            .map(|p| p.join("study-desk").join("state.json"))
    }

    /// Load a store from disk. A missing file yields an empty store;
    /// an unreadable or malformed one is an error.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let entries = if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            serde_json::from_str(&content)?
        } else {
            BTreeMap::new()
        };
        Ok(Self { path, entries })
    }

    /// Load from disk, starting over with an empty store if the file
    /// cannot be read or parsed. Corrupt state is recoverable, never fatal.
    pub fn load_or_default(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        match Self::load(path.clone()) {
            Ok(store) => store,
            Err(err) => {
                tracing::warn!("Discarding unreadable state file: {err}");
                Self {
                    path,
                    entries: BTreeMap::new(),
                }
            }
        }
    }

    /// Load from the default path
    pub fn load_default() -> Result<Self, StoreError> {
        let path = Self::default_path().ok_or(StoreError::NoStatePath)?;
        Ok(Self::load_or_default(path))
    }

    /// Write the store to its file, creating parent directories as needed
    pub fn save(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&self.entries)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StateStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}
