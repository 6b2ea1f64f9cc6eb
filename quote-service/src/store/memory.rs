use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Mutex;

use super::KeyValueStore;

/// In-memory store used by tests and local development. The ordered map
/// gives deterministic scan order.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, anyhow::Error> {
        let entries = self
            .entries
            .lock()
            .map_err(|e| anyhow::anyhow!("Memory store mutex poisoned: {}", e))?;
        Ok(entries.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), anyhow::Error> {
        self.entries
            .lock()
            .map_err(|e| anyhow::anyhow!("Memory store mutex poisoned: {}", e))?
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), anyhow::Error> {
        self.entries
            .lock()
            .map_err(|e| anyhow::anyhow!("Memory store mutex poisoned: {}", e))?
            .remove(key);
        Ok(())
    }

    async fn scan(&self, prefix: &str) -> Result<Vec<(String, String)>, anyhow::Error> {
        let entries = self
            .entries
            .lock()
            .map_err(|e| anyhow::anyhow!("Memory store mutex poisoned: {}", e))?;
        Ok(entries
            .range(prefix.to_string()..)
            .take_while(|(k, _)| k.starts_with(prefix))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect())
    }

    async fn health_check(&self) -> Result<(), anyhow::Error> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn set_get_delete_round_trip() {
        let store = MemoryStore::new();
        store.set("quote:a", "1").await.unwrap();
        assert_eq!(store.get("quote:a").await.unwrap(), Some("1".to_string()));

        store.delete("quote:a").await.unwrap();
        assert_eq!(store.get("quote:a").await.unwrap(), None);
        // deleting again is not an error
        store.delete("quote:a").await.unwrap();
    }

    #[tokio::test]
    async fn scan_is_bounded_by_prefix() {
        let store = MemoryStore::new();
        store.set("invite:k1", "a").await.unwrap();
        store.set("quote:q1", "b").await.unwrap();
        store.set("quote:q2", "c").await.unwrap();
        store.set("session:s1", "d").await.unwrap();

        let quotes = store.scan("quote:").await.unwrap();
        assert_eq!(
            quotes,
            vec![
                ("quote:q1".to_string(), "b".to_string()),
                ("quote:q2".to_string(), "c".to_string()),
            ]
        );
        assert!(store.scan("missing:").await.unwrap().is_empty());
    }
}
