use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{debug, instrument};

use super::KeyValueStore;
use crate::error::AppError;

/// Store backed by a single JSON object file.
///
/// The file is created on first write. A missing file reads as empty.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    // Serializes read-modify-write cycles.
    write_lock: Mutex<()>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_all(&self) -> Result<BTreeMap<String, String>, AppError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) if contents.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    async fn write_all(&self, entries: &BTreeMap<String, String>) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        let contents = serde_json::to_string_pretty(entries)?;
        tokio::fs::write(&self.path, contents).await?;
        debug!(path = %self.path.display(), entries = entries.len(), "Store flushed");
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    #[instrument(skip(self))]
    async fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        let entries = self.read_all().await?;
        Ok(entries.get(key).cloned())
    }

    #[instrument(skip(self, value))]
    async fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        let _guard = self.write_lock.lock().await;
        let mut entries = self.read_all().await?;
        entries.insert(key.to_string(), value.to_string());
        self.write_all(&entries).await
    }

    #[instrument(skip(self))]
    async fn remove(&self, key: &str) -> Result<bool, AppError> {
        let _guard = self.write_lock.lock().await;
        let mut entries = self.read_all().await?;
        let removed = entries.remove(key).is_some();
        if removed {
            self.write_all(&entries).await?;
        }
        Ok(removed)
    }
}
