//! Client-local key-value storage
//!
//! The preference store never reaches for ambient storage; a `KeyValueStore`
//! is handed to it at construction instead.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use thiserror::Error;

/// Errors raised by a storage backend
#[derive(Debug, Error)]
pub enum StorageError {
    /// IO error
    #[error("Storage IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Backing file exists but is not a key-value document
    #[error("Storage is corrupt: {0}")]
    Corrupt(String),

    /// Serialization error
    #[error("Storage serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Synchronous string key-value capability
pub trait KeyValueStore {
    /// Read the value stored under `key`, if any
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Write `value` under `key`, replacing any previous entry
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Remove the entry under `key`; removing a missing key is not an error
    fn remove(&self, key: &str) -> StorageResult<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        (**self).remove(key)
    }
}
