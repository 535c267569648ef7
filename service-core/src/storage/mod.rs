//! Small key/value storage used for durable client-side preferences.

mod file;
mod memory;

use async_trait::async_trait;

use crate::error::AppError;

pub use file::FileStore;
pub use memory::MemoryStore;

/// String key/value store.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, AppError>;
    async fn set(&self, key: &str, value: &str) -> Result<(), AppError>;
    /// Returns whether the key was present.
    async fn remove(&self, key: &str) -> Result<bool, AppError>;
}
