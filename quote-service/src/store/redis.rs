use async_trait::async_trait;
use redis::{Client, aio::ConnectionManager};

use super::KeyValueStore;

/// Redis-backed store. `ConnectionManager` reconnects automatically, so a
/// dropped connection shows up as request-scoped errors rather than a dead
/// process.
#[derive(Clone)]
pub struct RedisStore {
    _client: Client,
    manager: ConnectionManager,
}

impl RedisStore {
    pub async fn connect(url: &str) -> Result<Self, anyhow::Error> {
        tracing::info!(url = %url, "Connecting to Redis store");
        let client = Client::open(url.to_string())?;

        let manager = client.get_connection_manager().await.map_err(|e| {
            tracing::error!("Failed to get Redis connection manager: {}", e);
            anyhow::anyhow!("Failed to connect to Redis: {}", e)
        })?;

        tracing::info!("Successfully connected to Redis store");

        Ok(Self {
            _client: client,
            manager,
        })
    }
}

#[async_trait]
impl KeyValueStore for RedisStore {
    async fn get(&self, key: &str) -> Result<Option<String>, anyhow::Error> {
        let mut conn = self.manager.clone();
        redis::cmd("GET")
            .arg(key)
            .query_async(&mut conn)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to get {}: {}", key, e))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), anyhow::Error> {
        let mut conn = self.manager.clone();
        redis::cmd("SET")
            .arg(key)
            .arg(value)
            .query_async(&mut conn)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to set {}: {}", key, e))
    }

    async fn delete(&self, key: &str) -> Result<(), anyhow::Error> {
        let mut conn = self.manager.clone();
        redis::cmd("DEL")
            .arg(key)
            .query_async::<_, ()>(&mut conn)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to delete {}: {}", key, e))
    }

    async fn scan(&self, prefix: &str) -> Result<Vec<(String, String)>, anyhow::Error> {
        let mut conn = self.manager.clone();
        let pattern = format!("{}*", prefix);
        let mut pairs = Vec::new();
        let mut cursor: u64 = 0;

        // SCAN pages through matching keys without blocking the server the
        // way KEYS would. Values are fetched per page; a key deleted between
        // the two steps is skipped.
        loop {
            let (next, keys): (u64, Vec<String>) = redis::cmd("SCAN")
                .arg(cursor)
                .arg("MATCH")
                .arg(&pattern)
                .arg("COUNT")
                .arg(100)
                .query_async(&mut conn)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to scan {}: {}", prefix, e))?;

            for key in keys {
                let value: Option<String> = redis::cmd("GET")
                    .arg(&key)
                    .query_async(&mut conn)
                    .await
                    .map_err(|e| anyhow::anyhow!("Failed to get {}: {}", key, e))?;
                if let Some(value) = value {
                    pairs.push((key, value));
                }
            }

            cursor = next;
            if cursor == 0 {
                break;
            }
        }

        Ok(pairs)
    }

    async fn health_check(&self) -> Result<(), anyhow::Error> {
        let mut conn = self.manager.clone();
        redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .map_err(|e| anyhow::anyhow!("Redis health check failed: {}", e))
    }
}
