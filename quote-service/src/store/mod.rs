//! Key-value store seam.
//!
//! The service owns no persistence engine of its own: everything lives in an
//! external store offering atomic single-key get/set/delete plus prefix
//! scans, and nothing more (in particular, no multi-key transactions).
//! Production uses Redis; tests use the in-memory implementation.

mod memory;
mod redis;

pub use memory::MemoryStore;
pub use redis::RedisStore;

use async_trait::async_trait;

/// Key prefixes partitioning the store into categories. Keys are structured
/// paths of the form `category:identifier`.
pub const QUOTE_PREFIX: &str = "quote:";
pub const INVITE_PREFIX: &str = "invite:";
pub const SESSION_PREFIX: &str = "session:";
pub const META_SEEDED_KEY: &str = "meta:seeded";

#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, anyhow::Error>;
    async fn set(&self, key: &str, value: &str) -> Result<(), anyhow::Error>;
    /// Idempotent: deleting an absent key succeeds.
    async fn delete(&self, key: &str) -> Result<(), anyhow::Error>;
    /// Every `(key, value)` pair under `prefix`, in the store's natural
    /// iteration order. Each call restarts the scan; entries written
    /// concurrently may or may not be observed.
    async fn scan(&self, prefix: &str) -> Result<Vec<(String, String)>, anyhow::Error>;
    async fn health_check(&self) -> Result<(), anyhow::Error>;
}
