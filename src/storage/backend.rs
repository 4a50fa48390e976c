//! Raw document backends: one JSON document per key

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tempfile::NamedTempFile;

/// Key/value document storage. Documents are replaced whole, never patched.
pub trait StorageBackend {
    /// Read the raw document for `key`, `None` when it was never written
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Replace the document for `key`
    fn write(&self, key: &str, contents: &str) -> Result<()>;
}

/// Stores each key as `<key>.json` inside a directory
#[derive(Debug, Clone)]
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    /// Open (and create if missing) a storage directory
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        if !dir.exists() {
            fs::create_dir_all(&dir)
                .with_context(|| format!("Failed to create data directory {}", dir.display()))?;
        }
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the document backing `key`
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl StorageBackend for FileBackend {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Ok(Some(contents))
    }

    /// Atomic replace: uniquely named temp file in the same directory, then rename.
    /// Concurrent writers never share a temp file; the last rename wins.
    fn write(&self, key: &str, contents: &str) -> Result<()> {
        let path = self.path_for(key);

        let mut temp = NamedTempFile::with_prefix_in(format!(".{}.", key), &self.dir)
            .with_context(|| format!("Failed to create temp file in {}", self.dir.display()))?;
        temp.write_all(contents.as_bytes())
            .with_context(|| format!("Failed to write temp file {}", temp.path().display()))?;
        temp.persist(&path)
            .map_err(|err| err.error)
            .with_context(|| format!("Failed to rename temp file to {}", path.display()))?;

        Ok(())
    }
}

/// In-memory backend for tests and ephemeral sessions
#[derive(Debug, Default)]
pub struct MemoryBackend {
    documents: RefCell<HashMap<String, String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw document contents, if any
    pub fn raw(&self, key: &str) -> Option<String> {
        self.documents.borrow().get(key).cloned()
    }

    /// Seed a raw document, bypassing serialization
    pub fn insert_raw(&self, key: &str, contents: &str) {
        self.documents.borrow_mut().insert(key.to_string(), contents.to_string());
    }
}

impl StorageBackend for MemoryBackend {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.raw(key))
    }

    fn write(&self, key: &str, contents: &str) -> Result<()> {
        self.insert_raw(key, contents);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_file_backend_missing_key() {
        let temp = TempDir::new().unwrap();
        let backend = FileBackend::open(temp.path()).unwrap();
        assert_eq!(backend.read("savedProperties").unwrap(), None);
    }

    #[test]
    fn test_file_backend_write_then_read() {
        let temp = TempDir::new().unwrap();
        let backend = FileBackend::open(temp.path()).unwrap();

        backend.write("savedProperties", "[]").unwrap();
        assert_eq!(backend.read("savedProperties").unwrap().as_deref(), Some("[]"));
        assert!(temp.path().join("savedProperties.json").exists());
        assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_file_backend_overwrites() {
        let temp = TempDir::new().unwrap();
        let backend = FileBackend::open(temp.path()).unwrap();

        backend.write("k", "[1]").unwrap();
        backend.write("k", "[2]").unwrap();
        assert_eq!(backend.read("k").unwrap().as_deref(), Some("[2]"));
    }

    #[test]
    fn test_file_backend_concurrent_writers_leave_valid_document() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().to_path_buf();

        let writers: Vec<_> = (0..8)
            .map(|n| {
                let dir = dir.clone();
                std::thread::spawn(move || {
                    let backend = FileBackend::open(dir).unwrap();
                    let document = format!("[{}]", vec![n.to_string(); 2000].join(","));
                    for _ in 0..20 {
                        backend.write("savedProperties", &document).unwrap();
                    }
                })
            })
            .collect();
        for writer in writers {
            writer.join().unwrap();
        }

        let backend = FileBackend::open(&dir).unwrap();
        let contents = backend.read("savedProperties").unwrap().unwrap();
        let values: Vec<u32> = serde_json::from_str(&contents).unwrap();
        assert_eq!(values.len(), 2000);
        assert!(values.iter().all(|v| *v == values[0]));
        assert_eq!(fs::read_dir(&dir).unwrap().count(), 1);
    }

    #[test]
    fn test_file_backend_creates_directory() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("a").join("b");
        let backend = FileBackend::open(&nested).unwrap();
        assert!(nested.exists());
        assert_eq!(backend.dir(), nested.as_path());
    }

    #[test]
    fn test_memory_backend_roundtrip() {
        let backend = MemoryBackend::new();
        assert_eq!(backend.read("k").unwrap(), None);
        backend.write("k", "{}").unwrap();
        assert_eq!(backend.read("k").unwrap().as_deref(), Some("{}"));
    }
}
