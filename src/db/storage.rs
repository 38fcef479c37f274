use crate::libs::data_storage::DataStorage;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by a [`Storage`] backend.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing a namespace failed.
    #[error("Storage I/O error: {0}")]
    Io(#[from] io::Error),

    /// A stored value could not be encoded or decoded.
    #[error("Failed to (de)serialize stored value: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Namespace-keyed string store holding whole snapshots.
///
/// Every write replaces the full value of its namespace.
pub trait Storage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Stores each namespace as `<key>.json` in the data directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    data_storage: DataStorage,
}

impl FileStorage {
    pub fn new() -> Self {
        Self {
            data_storage: DataStorage::new(),
        }
    }

    pub fn at(dir: impl Into<PathBuf>) -> Self {
        Self {
            data_storage: DataStorage::at(dir),
        }
    }

    fn path(&self, key: &str) -> io::Result<PathBuf> {
        self.data_storage.get_path(&format!("{}.json", key))
    }
}

impl Default for FileStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl Storage for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path(key)?;
        // Write next to the target and rename so readers never see a partial snapshot.
        let tmp_path = path.with_extension("json.tmp");
        fs::write(&tmp_path, value)?;
        fs::rename(&tmp_path, &path)?;
        tracing::debug!(key, path = %path.display(), "namespace written");
        Ok(())
    }
}

/// In-process storage, used by tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    values: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl<S: Storage + ?Sized> Storage for Box<S> {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).read(key)
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).write(key, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_storage_returns_none_for_missing_key() {
        let storage = MemoryStorage::new();
        assert!(storage.read("tasks").unwrap().is_none());
    }

    #[test]
    fn file_storage_overwrites_whole_value() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = FileStorage::at(dir.path());

        storage.write("tasks", "[1,2,3]").unwrap();
        storage.write("tasks", "[]").unwrap();

        assert_eq!(storage.read("tasks").unwrap().as_deref(), Some("[]"));
        assert!(!dir.path().join("tasks.json.tmp").exists());
    }
}
