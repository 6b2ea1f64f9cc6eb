//! Duplicate guard: detects and removes content-identical quotes.

use std::collections::HashMap;
use std::sync::Arc;

use crate::models::Quote;
use crate::store::{KeyValueStore, QUOTE_PREFIX};

use super::{ServiceError, decode};

#[derive(Clone)]
pub struct DedupService {
    store: Arc<dyn KeyValueStore>,
}

impl DedupService {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// True when a quote with the same trimmed `(message, author)` already
    /// exists. One linear scan; the dataset is small and this runs once per
    /// public submission.
    pub async fn is_duplicate(&self, message: &str, author: &str) -> Result<bool, ServiceError> {
        let message = message.trim();
        let author = author.trim();

        let pairs = self
            .store
            .scan(QUOTE_PREFIX)
            .await
            .map_err(ServiceError::Store)?;

        for (key, raw) in &pairs {
            let quote: Quote = decode(key, raw)?;
            if quote.message == message && quote.author == author {
                return Ok(true);
            }
        }

        Ok(false)
    }

    /// Remove every quote whose `(message, author)` pair was already seen
    /// earlier in the scan. The scan completes before any delete runs -
    /// never mutate the range being iterated. Returns the number deleted.
    ///
    /// Survivor selection is first-seen-in-iteration-order, which is the
    /// store's order, not creation order. A quote added concurrently with
    /// the scan may be missed by this pass and caught by the next.
    pub async fn remove_duplicates(&self) -> Result<usize, ServiceError> {
        tracing::info!("Starting duplicate sweep");

        let pairs = self
            .store
            .scan(QUOTE_PREFIX)
            .await
            .map_err(ServiceError::Store)?;

        let mut first_seen: HashMap<String, String> = HashMap::new();
        let mut to_delete: Vec<String> = Vec::new();

        for (key, raw) in &pairs {
            let quote: Quote = decode(key, raw)?;
            let content = quote.content_key();
            if first_seen.contains_key(&content) {
                tracing::debug!(key = %key, author = %quote.author, "Marking duplicate for deletion");
                to_delete.push(key.clone());
            } else {
                first_seen.insert(content, key.clone());
            }
        }

        let mut deleted = 0;
        for key in &to_delete {
            self.store.delete(key).await.map_err(ServiceError::Store)?;
            deleted += 1;
        }

        tracing::info!(deleted, "Duplicate sweep finished");
        Ok(deleted)
    }
}
