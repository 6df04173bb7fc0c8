use anyhow::Result;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

use shorty::config::{Config, StorageBackend};
use shorty::storage::{MemoryStorage, RedisStorage, Storage};
use shorty::store::UrlMapStore;
use shorty::{api, redirect};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let config = Config::from_env()?;
    info!("Loaded configuration");

    // Initialize storage
    let storage: Arc<dyn Storage> = match config.storage.backend {
        StorageBackend::Memory => {
            info!("Using in-memory storage (mappings do not survive restart)");
            Arc::new(MemoryStorage::new())
        }
        StorageBackend::Redis => {
            info!("Using Redis storage: {}", config.storage.url);
            Arc::new(RedisStorage::connect(&config.storage.url).await?)
        }
    };

    storage.ping().await?;
    info!("Storage backend is reachable");

    let store = UrlMapStore::new(storage, config.host_prefix.clone());
    info!("Short URL host prefix: {}", config.host_prefix);

    // API routes are registered before the redirect catch-all, so static
    // paths like /shorturl always win over the /{code} capture.
    let app = api::create_api_router(store.clone())
        .merge(redirect::create_redirect_router(store))
        .layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("🚀 Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
