pub mod memory;
pub mod redis;
pub mod trait_def;

pub use memory::MemoryStorage;
pub use redis::RedisStorage;
pub use trait_def::{Storage, StorageError, StorageResult};
