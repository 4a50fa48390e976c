//! Typed load/save over a [`StorageBackend`]

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::backend::{FileBackend, MemoryBackend, StorageBackend};
use super::keys::StoreKey;

/// The only path to persisted state. Views receive a repository instead of touching storage.
#[derive(Debug)]
pub struct Repository<B: StorageBackend> {
    backend: B,
}

impl<B: StorageBackend> Repository<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Load the document for `key`.
    ///
    /// Missing, unreadable or corrupt documents load as `T::default()`; the anomaly is
    /// logged and never propagated.
    pub fn load<T>(&self, key: &StoreKey<T>) -> T
    where
        T: DeserializeOwned + Default,
    {
        let raw = match self.backend.read(key.name()) {
            Ok(Some(raw)) => raw,
            Ok(None) => return T::default(),
            Err(e) => {
                let error = format!("{:#}", e);
                warn!(key = key.name(), %error, "Store read failed, using empty value");
                return T::default();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                warn!(key = key.name(), error = %e, "Corrupt store document, using empty value");
                T::default()
            }
        }
    }

    /// Replace the document for `key`
    pub fn save<T>(&self, key: &StoreKey<T>, value: &T) -> Result<()>
    where
        T: Serialize,
    {
        let json = serde_json::to_string_pretty(value)
            .with_context(|| format!("Failed to serialize '{}'", key.name()))?;
        self.backend
            .write(key.name(), &json)
            .with_context(|| format!("Failed to save '{}'", key.name()))?;

        debug!(key = key.name(), bytes = json.len(), "Saved store document");
        Ok(())
    }

    /// Read-modify-write: load the whole document, let `f` edit it, write it back
    pub fn update<T, R>(&self, key: &StoreKey<T>, f: impl FnOnce(&mut T) -> R) -> Result<R>
    where
        T: DeserializeOwned + Serialize + Default,
    {
        let mut value = self.load(key);
        let result = f(&mut value);
        self.save(key, &value)?;
        Ok(result)
    }
}

impl Repository<FileBackend> {
    /// Open a file-backed repository rooted at `dir`
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        Ok(Self::new(FileBackend::open(dir)?))
    }
}

impl Repository<MemoryBackend> {
    pub fn in_memory() -> Self {
        Self::new(MemoryBackend::new())
    }
}
