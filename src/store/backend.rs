//! Storage backends - where the serialized collection lives.
//!
//! The tracker treats storage as a keyed text store: one key holds the
//! whole serialized collection, rewritten on every mutation. The trait
//! keeps the store testable without touching a filesystem and lets
//! embedders supply whatever keyed storage they have.
//!
//! ## Backends
//!
//! - `MemoryBackend`: plain in-memory map, for tests and throwaway sessions
//! - `FileBackend`: one file per key under a root directory, the desktop
//!   analog of browser-local storage

use std::fs;
use std::io;
use std::path::PathBuf;

use rustc_hash::FxHashMap;

use crate::error::StorageError;

/// A keyed text store.
///
/// Reads distinguish "key absent" (`Ok(None)`) from actual failure;
/// writes overwrite whatever was there before.
pub trait StorageBackend {
    /// Read the payload stored under `key`, if any.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite the payload stored under `key`.
    fn write(&mut self, key: &str, payload: &str) -> Result<(), StorageError>;
}

/// In-memory backend.
///
/// Never fails. Useful for tests and for sessions that don't need to
/// outlive the process.
#[derive(Clone, Debug, Default)]
pub struct MemoryBackend {
    entries: FxHashMap<String, String>,
}

impl MemoryBackend {
    /// Create a new empty backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, payload: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), payload.to_string());
        Ok(())
    }
}

/// File-per-key backend rooted at a directory.
///
/// Each key maps to `<root>/<key>.json`, written whole on every persist.
/// The root directory is created lazily on first write.
#[derive(Clone, Debug)]
pub struct FileBackend {
    root: PathBuf,
}

impl FileBackend {
    /// Create a backend rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }
}

impl StorageBackend for FileBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(payload) => Ok(Some(payload)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn write(&mut self, key: &str, payload: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.root)?;
        fs::write(self.path_for(key), payload)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_read_absent_key() {
        let backend = MemoryBackend::new();
        assert_eq!(backend.read("missing").unwrap(), None);
    }

    #[test]
    fn test_memory_write_then_read() {
        let mut backend = MemoryBackend::new();
        backend.write("k", "payload").unwrap();
        assert_eq!(backend.read("k").unwrap().as_deref(), Some("payload"));

        backend.write("k", "replaced").unwrap();
        assert_eq!(backend.read("k").unwrap().as_deref(), Some("replaced"));
    }
}
