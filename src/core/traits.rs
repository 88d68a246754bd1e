//! Core trait definitions
//!
//! Preferences are persisted through a small string key-value interface so the
//! same store logic runs against a file on disk or an in-memory map.

use crate::utils::error::AppResult;

/// Durable key-value storage for preference domains
///
/// Keys and values are plain strings; each preference domain owns its own key
/// and encodes its value independently.
pub trait KeyValueStore {
    /// Read the raw value stored under `key`
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: &str) -> AppResult<()>;

    /// Remove `key` if present
    fn remove(&mut self, key: &str) -> AppResult<()>;

    /// All keys currently stored
    fn keys(&self) -> Vec<String>;
}
