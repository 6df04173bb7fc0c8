use anyhow::Result;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Two namespaced string maps: forward (short URL -> long URL) and
/// reverse (long URL -> short URL). Callers keep them as mirror images;
/// the backend itself treats them as independent key spaces.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Verify the backend is reachable.
    async fn ping(&self) -> StorageResult<()>;

    /// Get the long URL stored under a short URL.
    async fn forward_get(&self, short_url: &str) -> StorageResult<Option<String>>;

    /// Store a short URL -> long URL entry. Overwrites any existing entry.
    async fn forward_set(&self, short_url: &str, long_url: &str) -> StorageResult<()>;

    /// Remove a forward entry. Returns whether an entry existed.
    async fn forward_del(&self, short_url: &str) -> StorageResult<bool>;

    /// Get the short URL stored under a long URL.
    async fn reverse_get(&self, long_url: &str) -> StorageResult<Option<String>>;

    /// Store a long URL -> short URL entry. Overwrites any existing entry.
    async fn reverse_set(&self, long_url: &str, short_url: &str) -> StorageResult<()>;

    /// Remove a reverse entry. Returns whether an entry existed.
    async fn reverse_del(&self, long_url: &str) -> StorageResult<bool>;
}
