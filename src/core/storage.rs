//! Key-value store implementations

use crate::core::traits::KeyValueStore;
use crate::utils::error::{AppError, AppResult};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Name of the preference file inside the data directory
pub const PREFERENCES_FILE: &str = "preferences.json";

/// Store backed by a single JSON object file, rewritten on every mutation
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store at `path`. A missing or unreadable file starts empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = read_entries(&path).unwrap_or_default();

        tracing::debug!(path = %path.display(), keys = entries.len(), "opened preference store");
        Self { path, entries }
    }

    /// Open `preferences.json` inside `data_dir`
    pub fn in_dir(data_dir: &Path) -> Self {
        Self::open(data_dir.join(PREFERENCES_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Change one key on top of the current file contents
    ///
    /// Other processes may have written their own keys since this store was
    /// opened; those are picked up and kept.
    fn update(&mut self, key: &str, value: Option<&str>) -> AppResult<()> {
        if let Some(on_disk) = read_entries(&self.path) {
            self.entries = on_disk;
        }

        match value {
            Some(value) => {
                self.entries.insert(key.to_string(), value.to_string());
                self.flush()
            }
            None => {
                if self.entries.remove(key).is_some() {
                    self.flush()
                } else {
                    Ok(())
                }
            }
        }
    }

    fn flush(&self) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::Io(format!("Failed to create data directory {}: {}", parent.display(), e))
            })?;
        }

        let content = serde_json::to_string_pretty(&self.entries)
            .map_err(|e| AppError::System(format!("Failed to serialize preferences: {}", e)))?;

        std::fs::write(&self.path, content).map_err(|e| {
            AppError::Io(format!("Failed to write preference file {}: {}", self.path.display(), e))
        })
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.update(key, Some(value))
    }

    fn remove(&mut self, key: &str) -> AppResult<()> {
        self.update(key, None)
    }

    fn keys(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }
}

/// Entries stored at `path`; `None` when the file is missing or unreadable
fn read_entries(path: &Path) -> Option<BTreeMap<String, String>> {
    match std::fs::read_to_string(path) {
        Ok(content) if content.trim().is_empty() => Some(BTreeMap::new()),
        Ok(content) => match serde_json::from_str(&content) {
            Ok(entries) => Some(entries),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable preference file");
                None
            }
        },
        Err(e) => {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(path = %path.display(), error = %e, "failed to read preference file");
            }
            None
        }
    }
}

/// Non-durable store, used for tests and throwaway sessions
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> AppResult<()> {
        self.entries.remove(key);
        Ok(())
    }

    fn keys(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }
}
