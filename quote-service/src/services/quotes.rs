//! Typed read/write/scan access to quote records.

use std::sync::Arc;

use rand::Rng;

use crate::models::Quote;
use crate::store::{KeyValueStore, QUOTE_PREFIX};

use super::{ServiceError, decode, encode};

#[derive(Clone)]
pub struct QuoteService {
    store: Arc<dyn KeyValueStore>,
}

impl QuoteService {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    fn storage_key(id: &str) -> String {
        format!("{}{}", QUOTE_PREFIX, id)
    }

    /// Both fields must survive trimming; whitespace-only input slips past
    /// the boundary's length check.
    fn trimmed(message: &str, author: &str) -> Result<(String, String), ServiceError> {
        let message = message.trim();
        let author = author.trim();
        if message.is_empty() || author.is_empty() {
            return Err(ServiceError::Validation(
                "message and author are required".to_string(),
            ));
        }
        Ok((message.to_string(), author.to_string()))
    }

    /// All stored quotes, in the store's iteration order. Each call restarts
    /// the underlying scan.
    pub async fn list_all(&self) -> Result<Vec<Quote>, ServiceError> {
        let pairs = self
            .store
            .scan(QUOTE_PREFIX)
            .await
            .map_err(ServiceError::Store)?;

        pairs
            .iter()
            .map(|(key, raw)| decode::<Quote>(key, raw))
            .collect()
    }

    /// Create a new quote from trimmed fields and persist it.
    pub async fn create(&self, message: &str, author: &str) -> Result<Quote, ServiceError> {
        let (message, author) = Self::trimmed(message, author)?;
        let quote = Quote::new(message, author);

        self.store
            .set(&Self::storage_key(&quote.id), &encode(&quote)?)
            .await
            .map_err(ServiceError::Store)?;

        tracing::info!(id = %quote.id, "Quote created");
        Ok(quote)
    }

    /// Overwrite the record at `id` with fresh content. No existence check:
    /// writing to an unknown id creates it, matching the store's
    /// overwrite-or-create semantics. The previous `created_at` is dropped
    /// and `updated_at` stamped.
    pub async fn update(
        &self,
        id: &str,
        message: &str,
        author: &str,
    ) -> Result<Quote, ServiceError> {
        let (message, author) = Self::trimmed(message, author)?;
        let quote = Quote::replacement(id.to_string(), message, author);

        self.store
            .set(&Self::storage_key(id), &encode(&quote)?)
            .await
            .map_err(ServiceError::Store)?;

        tracing::info!(id = %id, "Quote updated");
        Ok(quote)
    }

    /// Idempotent delete; removing a missing id is not an error.
    pub async fn delete(&self, id: &str) -> Result<(), ServiceError> {
        self.store
            .delete(&Self::storage_key(id))
            .await
            .map_err(ServiceError::Store)?;

        tracing::info!(id = %id, "Quote deleted");
        Ok(())
    }

    /// A uniformly random quote plus the total count, or `None` when the
    /// store holds no quotes.
    pub async fn random(&self) -> Result<Option<(Quote, usize)>, ServiceError> {
        let quotes = self.list_all().await?;
        if quotes.is_empty() {
            return Ok(None);
        }

        let total = quotes.len();
        let index = rand::thread_rng().gen_range(0..total);
        Ok(quotes.into_iter().nth(index).map(|q| (q, total)))
    }
}
