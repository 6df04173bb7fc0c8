use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub storage: StorageConfig,
    pub server: ServerConfig,
    /// Prefix prepended to generated short codes to form full short URLs.
    /// The redirect handler uses the same value to rebuild the lookup key.
    pub host_prefix: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Memory,
    Redis,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let backend_str =
            std::env::var("STORAGE_BACKEND").unwrap_or_else(|_| "memory".to_string());

        let backend = match backend_str.to_lowercase().as_str() {
            "redis" => StorageBackend::Redis,
            "memory" => StorageBackend::Memory,
            other => {
                tracing::warn!(
                    "Unknown STORAGE_BACKEND '{other}', falling back to 'memory'. Supported values: memory, redis"
                );
                StorageBackend::Memory
            }
        };

        let storage_url =
            std::env::var("REDIS_URL").unwrap_or_else(|_| "redis://127.0.0.1:6379".to_string());

        let host = std::env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = std::env::var("SERVER_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()?;

        let host_prefix =
            std::env::var("HOST_PREFIX").unwrap_or_else(|_| "http://localhost:8080/".to_string());

        Ok(Config {
            storage: StorageConfig {
                backend,
                url: storage_url,
            },
            server: ServerConfig { host, port },
            host_prefix,
        })
    }
}
