//! JSON-file storage backend

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{KeyValueStore, StorageError, StorageResult};
use crate::util::compact_text;

/// Storage backed by a single JSON object file on disk.
///
/// The file holds `{"key": "value", ...}` and is rewritten on every change.
/// A missing file reads as empty; it is created on first write. Reads of a
/// file that does not parse fail with [`StorageError::Corrupt`]; writes move
/// such a file aside as `<name>.corrupt-<millis>` and start from empty.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> StorageResult<BTreeMap<String, String>> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(error) if error.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(error) => return Err(error.into()),
        };

        if raw.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&raw).map_err(|error| {
            StorageError::Corrupt(format!(
                "{}: {}",
                self.path.display(),
                compact_text(&error.to_string())
            ))
        })
    }

    fn entries_for_write(&self) -> StorageResult<BTreeMap<String, String>> {
        match self.read_entries() {
            Err(StorageError::Corrupt(reason)) => {
                self.quarantine(&reason)?;
                Ok(BTreeMap::new())
            }
            result => result,
        }
    }

    fn quarantine(&self, reason: &str) -> StorageResult<()> {
        let file_name = self
            .path
            .file_name()
            .map_or_else(|| "preferences".into(), |name| name.to_string_lossy());
        let timestamp = chrono::Utc::now().timestamp_millis();
        let backup_path = self
            .path
            .with_file_name(format!("{file_name}.corrupt-{timestamp}"));

        std::fs::rename(&self.path, &backup_path)?;
        tracing::warn!(
            %reason,
            "Moved corrupted preference file from {} to {}",
            self.path.display(),
            backup_path.display()
        );
        Ok(())
    }

    fn write_entries(&self, entries: &BTreeMap<String, String>) -> StorageResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let serialized = serde_json::to_string_pretty(entries)?;
        std::fs::write(&self.path, serialized)?;
        tracing::debug!(path = %self.path.display(), entries = entries.len(), "Wrote preference file");
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.read_entries()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let mut entries = self.entries_for_write()?;
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries)
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        let mut entries = self.entries_for_write()?;
        if entries.remove(key).is_some() {
            self.write_entries(&entries)?;
        }
        Ok(())
    }
}
