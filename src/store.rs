use std::sync::Arc;

use uuid::Uuid;

use crate::storage::{Storage, StorageResult};

/// Number of characters taken from a freshly generated UUID to form the
/// short identifier.
const SHORT_ID_LEN: usize = 8;

/// Result of a shorten call: either a brand new mapping or the short URL
/// that already existed for the given long URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShortenOutcome {
    Created(String),
    Existing(String),
}

impl ShortenOutcome {
    pub fn short_url(&self) -> &str {
        match self {
            ShortenOutcome::Created(s) | ShortenOutcome::Existing(s) => s,
        }
    }
}

/// The URL mapping store: alias generation plus CRUD over the mirrored
/// forward (short -> long) and reverse (long -> short) maps.
///
/// The two maps are written independently, in forward-then-reverse order.
/// A storage fault between the two writes of [`shorten`](Self::shorten) or
/// [`delete`](Self::delete) leaves the maps inconsistent; there is no
/// reconciliation path.
#[derive(Clone)]
pub struct UrlMapStore {
    storage: Arc<dyn Storage>,
    host_prefix: String,
}

impl UrlMapStore {
    pub fn new(storage: Arc<dyn Storage>, host_prefix: impl Into<String>) -> Self {
        Self {
            storage,
            host_prefix: host_prefix.into(),
        }
    }

    pub fn host_prefix(&self) -> &str {
        &self.host_prefix
    }

    /// Mint a new short URL from the host prefix and a random identifier.
    ///
    /// No check is made against existing forward entries; a colliding
    /// identifier overwrites the previous mapping.
    fn generate_short_url(&self) -> String {
        let id = Uuid::new_v4().to_string();
        format!("{}{}", self.host_prefix, &id[..SHORT_ID_LEN])
    }

    /// Shorten a long URL. Idempotent: if the long URL was already
    /// shortened, the existing short URL is returned and nothing is
    /// written.
    pub async fn shorten(&self, long_url: &str) -> StorageResult<ShortenOutcome> {
        if let Some(existing) = self.storage.reverse_get(long_url).await? {
            return Ok(ShortenOutcome::Existing(existing));
        }

        let short_url = self.generate_short_url();
        self.storage.forward_set(&short_url, long_url).await?;
        self.storage.reverse_set(long_url, &short_url).await?;

        tracing::debug!(short_url = %short_url, "created new url mapping");
        Ok(ShortenOutcome::Created(short_url))
    }

    /// Look up the long URL for a short URL.
    pub async fn resolve_short(&self, short_url: &str) -> StorageResult<Option<String>> {
        self.storage.forward_get(short_url).await
    }

    /// Look up the short URL for a long URL.
    pub async fn resolve_long(&self, long_url: &str) -> StorageResult<Option<String>> {
        self.storage.reverse_get(long_url).await
    }

    /// Delete a mapping by its short URL, removing both directions.
    /// Returns `false` (and mutates nothing) if the short URL is unknown.
    pub async fn delete(&self, short_url: &str) -> StorageResult<bool> {
        let Some(long_url) = self.storage.forward_get(short_url).await? else {
            return Ok(false);
        };

        self.storage.forward_del(short_url).await?;
        self.storage.reverse_del(&long_url).await?;

        tracing::debug!(short_url = %short_url, "deleted url mapping");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    const PREFIX: &str = "http://sho.rt/";

    fn store() -> UrlMapStore {
        UrlMapStore::new(Arc::new(MemoryStorage::new()), PREFIX)
    }

    #[tokio::test]
    async fn shorten_produces_prefixed_short_url() {
        let store = store();

        let outcome = store.shorten("https://example.com").await.unwrap();
        let short = outcome.short_url();

        assert!(short.starts_with(PREFIX));
        assert_eq!(short.len(), PREFIX.len() + 8);
        assert!(matches!(outcome, ShortenOutcome::Created(_)));
    }

    #[tokio::test]
    async fn shorten_is_idempotent() {
        let store = store();

        let first = store.shorten("https://example.com").await.unwrap();
        let second = store.shorten("https://example.com").await.unwrap();

        assert!(matches!(second, ShortenOutcome::Existing(_)));
        assert_eq!(first.short_url(), second.short_url());
    }

    #[tokio::test]
    async fn round_trip() {
        let store = store();

        let short = store
            .shorten("https://example.com/page")
            .await
            .unwrap()
            .short_url()
            .to_string();

        assert_eq!(
            store.resolve_short(&short).await.unwrap(),
            Some("https://example.com/page".to_string())
        );
        assert_eq!(
            store.resolve_long("https://example.com/page").await.unwrap(),
            Some(short)
        );
    }

    #[tokio::test]
    async fn mirror_invariant_after_shorten() {
        let store = store();

        for i in 0..5 {
            let long = format!("https://example.com/{}", i);
            let short = store.shorten(&long).await.unwrap().short_url().to_string();

            assert_eq!(store.resolve_short(&short).await.unwrap(), Some(long.clone()));
            assert_eq!(store.resolve_long(&long).await.unwrap(), Some(short));
        }
    }

    #[tokio::test]
    async fn distinct_urls_get_distinct_codes() {
        let store = store();

        let a = store.shorten("https://example.com/a").await.unwrap();
        let b = store.shorten("https://example.com/b").await.unwrap();

        assert_ne!(a.short_url(), b.short_url());
    }

    #[tokio::test]
    async fn delete_removes_both_directions() {
        let store = store();

        let short = store
            .shorten("https://example.com")
            .await
            .unwrap()
            .short_url()
            .to_string();

        assert!(store.delete(&short).await.unwrap());
        assert!(store.resolve_short(&short).await.unwrap().is_none());
        assert!(store.resolve_long("https://example.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn delete_unknown_is_a_noop() {
        let store = store();

        store.shorten("https://example.com").await.unwrap();

        assert!(!store.delete("http://sho.rt/unknown1").await.unwrap());
        // The existing mapping is untouched.
        assert!(store
            .resolve_long("https://example.com")
            .await
            .unwrap()
            .is_some());
    }

    #[tokio::test]
    async fn shorten_after_delete_creates_fresh_mapping() {
        let store = store();

        let first = store
            .shorten("https://example.com")
            .await
            .unwrap()
            .short_url()
            .to_string();
        store.delete(&first).await.unwrap();

        let second = store.shorten("https://example.com").await.unwrap();
        assert!(matches!(second, ShortenOutcome::Created(_)));
    }

    #[tokio::test]
    async fn resolve_unknown_returns_none() {
        let store = store();

        assert!(store.resolve_short("http://sho.rt/missing1").await.unwrap().is_none());
        assert!(store.resolve_long("https://nowhere.example").await.unwrap().is_none());
    }
}
