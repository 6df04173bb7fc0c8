use crate::storage::{Storage, StorageError, StorageResult};
use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Client, IntoConnectionInfo};
use tracing::info;

/// Redis database index holding short URL -> long URL entries.
const FORWARD_DB: i64 = 0;
/// Redis database index holding long URL -> short URL entries.
const REVERSE_DB: i64 = 1;

fn unavailable(e: redis::RedisError) -> StorageError {
    StorageError::Unavailable(e.to_string())
}

/// Redis-backed storage. The two namespaces live in separate Redis
/// databases (SELECT 0 / SELECT 1), each behind its own multiplexed
/// `ConnectionManager` so a request never has to switch databases on a
/// shared connection.
pub struct RedisStorage {
    forward: ConnectionManager,
    reverse: ConnectionManager,
}

impl RedisStorage {
    /// Connect to Redis and validate both databases with a PING.
    pub async fn connect(redis_url: &str) -> StorageResult<Self> {
        info!("Connecting to Redis at {}", redis_url);

        let forward = Self::open_db(redis_url, FORWARD_DB).await?;
        let reverse = Self::open_db(redis_url, REVERSE_DB).await?;

        info!("Connected to Redis (forward db {}, reverse db {})", FORWARD_DB, REVERSE_DB);

        Ok(Self { forward, reverse })
    }

    async fn open_db(redis_url: &str, db: i64) -> StorageResult<ConnectionManager> {
        let conn_info = redis_url.into_connection_info().map_err(unavailable)?;
        let redis_settings = conn_info.redis_settings().clone().set_db(db);
        let conn_info = conn_info.set_redis_settings(redis_settings);

        let client = Client::open(conn_info).map_err(unavailable)?;
        let mut manager = ConnectionManager::new(client).await.map_err(unavailable)?;
        manager.ping::<()>().await.map_err(unavailable)?;

        Ok(manager)
    }
}

#[async_trait]
impl Storage for RedisStorage {
    async fn ping(&self) -> StorageResult<()> {
        let mut forward = self.forward.clone();
        forward.ping::<()>().await.map_err(unavailable)?;

        let mut reverse = self.reverse.clone();
        reverse.ping::<()>().await.map_err(unavailable)?;

        Ok(())
    }

    async fn forward_get(&self, short_url: &str) -> StorageResult<Option<String>> {
        let mut conn = self.forward.clone();
        conn.get(short_url).await.map_err(unavailable)
    }

    async fn forward_set(&self, short_url: &str, long_url: &str) -> StorageResult<()> {
        let mut conn = self.forward.clone();
        conn.set::<_, _, ()>(short_url, long_url)
            .await
            .map_err(unavailable)
    }

    async fn forward_del(&self, short_url: &str) -> StorageResult<bool> {
        let mut conn = self.forward.clone();
        let deleted: i64 = conn.del(short_url).await.map_err(unavailable)?;
        Ok(deleted > 0)
    }

    async fn reverse_get(&self, long_url: &str) -> StorageResult<Option<String>> {
        let mut conn = self.reverse.clone();
        conn.get(long_url).await.map_err(unavailable)
    }

    async fn reverse_set(&self, long_url: &str, short_url: &str) -> StorageResult<()> {
        let mut conn = self.reverse.clone();
        conn.set::<_, _, ()>(long_url, short_url)
            .await
            .map_err(unavailable)
    }

    async fn reverse_del(&self, long_url: &str) -> StorageResult<bool> {
        let mut conn = self.reverse.clone();
        let deleted: i64 = conn.del(long_url).await.map_err(unavailable)?;
        Ok(deleted > 0)
    }
}
