//! File-based Key-Value Store Adapter
//!
//! Stores all entries as one JSON object on disk, the local stand-in for
//! browser storage. Writes go to a sibling temp file that is then renamed
//! over the original, so a crash never leaves a half-written file.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;

use crate::ports::{KeyValueStore, KeyValueStoreError};

type Entries = BTreeMap<String, String>;

/// File-backed key-value storage
#[derive(Debug)]
pub struct FileKeyValueStore {
    path: PathBuf,
    /// Serializes read-modify-write cycles within this process.
    write_lock: Mutex<()>,
}

impl FileKeyValueStore {
    /// Create a store backed by the JSON file at `path`
    ///
    /// The file and its parent directory are created on first write.
    ///
    /// # Example
    /// ```ignore
    /// let store = FileKeyValueStore::new("./data/portal-storage.json");
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    /// Read all entries. A missing file is an empty store.
    async fn read_entries(&self) -> Result<Entries, KeyValueStoreError> {
        let raw = match fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Entries::new()),
            Err(e) => return Err(KeyValueStoreError::IoError(e.to_string())),
        };

        if raw.trim().is_empty() {
            return Ok(Entries::new());
        }

        serde_json::from_str(&raw).map_err(|e| KeyValueStoreError::Corrupt(e.to_string()))
    }

    /// Entries to modify on write. A corrupt file is replaced rather than
    /// blocking every later write.
    async fn entries_for_write(&self) -> Result<Entries, KeyValueStoreError> {
        match self.read_entries().await {
            Err(KeyValueStoreError::Corrupt(reason)) => {
                tracing::warn!(
                    path = %self.path.display(),
                    %reason,
                    "Discarding corrupt storage file"
                );
                Ok(Entries::new())
            }
            other => other,
        }
    }

    async fn write_entries(&self, entries: &Entries) -> Result<(), KeyValueStoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| KeyValueStoreError::IoError(e.to_string()))?;
        }

        let json = serde_json::to_string_pretty(entries)
            .map_err(|e| KeyValueStoreError::SerializationFailed(e.to_string()))?;

        let temp = self.temp_path();
        fs::write(&temp, json)
            .await
            .map_err(|e| KeyValueStoreError::IoError(e.to_string()))?;
        fs::rename(&temp, &self.path)
            .await
            .map_err(|e| KeyValueStoreError::IoError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for FileKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, KeyValueStoreError> {
        let entries = self.read_entries().await?;
        Ok(entries.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), KeyValueStoreError> {
        let _guard = self.write_lock.lock().await;

        let mut entries = self.entries_for_write().await?;
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries).await
    }

    async fn remove(&self, key: &str) -> Result<(), KeyValueStoreError> {
        let _guard = self.write_lock.lock().await;

        let mut entries = self.entries_for_write().await?;
        if entries.remove(key).is_none() {
            return Ok(());
        }
        self.write_entries(&entries).await
    }
}
