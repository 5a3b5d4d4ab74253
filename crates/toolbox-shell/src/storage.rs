//! Key-value storage backends for session state.
//!
//! The shell never talks to a concrete store. It goes through [`KeyValueStore`],
//! so the browser build can plug in `window.localStorage`, the server can plug in a
//! per-request snapshot of its session, and tests can use [`MemoryStore`].

use crate::error::{Error, Result};
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A string key-value store scoped to one origin or one user session.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn write(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}

/// In-memory store. Never fails.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<BTreeMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `entries`.
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let entries = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            entries: RwLock::new(entries),
        }
    }

    /// Current value under `key` without going through the trait.
    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.read().get(key).cloned()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// True when nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.get(key))
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .write()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.write().remove(key);
        Ok(())
    }
}

/// JSON-file backed store.
///
/// The whole map lives in one JSON object on disk. Every write rewrites the file,
/// which is fine for the handful of keys a shell keeps. A missing file reads as
/// an empty store.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    lock: RwLock<()>,
}

impl FileStore {
    /// Open a store at `path`. The file is created lazily on first write.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: RwLock::new(()),
        }
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let raw = fs::read_to_string(&self.path)?;
        if raw.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        Ok(serde_json::from_str(&raw)?)
    }

    fn save(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, json)?;
        debug!(path = ?self.path, keys = entries.len(), "Saved key-value store");
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let _guard = self.lock.read();
        Ok(self.load()?.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        let _guard = self.lock.write();
        let mut entries = self.load()?;
        entries.insert(key.to_string(), value.to_string());
        self.save(&entries)
    }

    fn remove(&self, key: &str) -> Result<()> {
        let _guard = self.lock.write();
        let mut entries = self.load()?;
        if entries.remove(key).is_none() {
            return Ok(());
        }
        self.save(&entries)
    }
}

/// A store whose every operation fails. Stands in for a disabled or
/// quota-exhausted backend.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableStore;

impl KeyValueStore for UnavailableStore {
    fn read(&self, _key: &str) -> Result<Option<String>> {
        Err(Error::Storage("store unavailable".to_string()))
    }

    fn write(&self, _key: &str, _value: &str) -> Result<()> {
        Err(Error::Storage("store unavailable".to_string()))
    }

    fn remove(&self, _key: &str) -> Result<()> {
        Err(Error::Storage("store unavailable".to_string()))
    }
}

/// Memory store that rejects removals, like a read-only session file.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct NoRemoveStore(MemoryStore);

#[cfg(test)]
impl KeyValueStore for NoRemoveStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        self.0.read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        self.0.write(key, value)
    }

    fn remove(&self, _key: &str) -> Result<()> {
        Err(Error::Storage("read-only".to_string()))
    }
}
