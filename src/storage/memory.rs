use crate::storage::{Storage, StorageResult};
use async_trait::async_trait;
use dashmap::DashMap;

/// In-memory storage backed by two DashMaps, one per namespace.
///
/// DashMap uses sharded locks, so concurrent requests hitting different
/// keys do not serialize on a single lock. Used by tests and as a
/// development backend; nothing survives process restart.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    forward: DashMap<String, String>,
    reverse: DashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn ping(&self) -> StorageResult<()> {
        Ok(())
    }

    async fn forward_get(&self, short_url: &str) -> StorageResult<Option<String>> {
        Ok(self.forward.get(short_url).map(|v| v.clone()))
    }

    async fn forward_set(&self, short_url: &str, long_url: &str) -> StorageResult<()> {
        self.forward
            .insert(short_url.to_owned(), long_url.to_owned());
        Ok(())
    }

    async fn forward_del(&self, short_url: &str) -> StorageResult<bool> {
        Ok(self.forward.remove(short_url).is_some())
    }

    async fn reverse_get(&self, long_url: &str) -> StorageResult<Option<String>> {
        Ok(self.reverse.get(long_url).map(|v| v.clone()))
    }

    async fn reverse_set(&self, long_url: &str, short_url: &str) -> StorageResult<()> {
        self.reverse
            .insert(long_url.to_owned(), short_url.to_owned());
        Ok(())
    }

    async fn reverse_del(&self, long_url: &str) -> StorageResult<bool> {
        Ok(self.reverse.remove(long_url).is_some())
    }
}
