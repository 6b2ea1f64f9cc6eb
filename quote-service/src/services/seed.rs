//! One-time seeding of starter quotes on first boot.

use std::sync::Arc;

use crate::store::{KeyValueStore, META_SEEDED_KEY};

use super::{QuoteService, ServiceError};

/// The starter set written to an empty store so the public endpoint has
/// something to serve from day one.
const DEFAULT_QUOTES: &[(&str, &str)] = &[
    ("Hello, world!", "System"),
    ("Talk is cheap. Show me the code.", "Linus Torvalds"),
    ("Simplicity is prerequisite for reliability.", "Edsger W. Dijkstra"),
    (
        "Programs must be written for people to read, and only incidentally for machines to execute.",
        "Harold Abelson",
    ),
    ("Premature optimization is the root of all evil.", "Donald Knuth"),
];

/// Insert the default quotes unless a previous boot already did. The seeded
/// flag is a plain store record, so wiping the store re-seeds. Returns the
/// number of quotes inserted.
pub async fn seed_default_quotes(
    store: &Arc<dyn KeyValueStore>,
    quotes: &QuoteService,
) -> Result<usize, ServiceError> {
    let already = store
        .get(META_SEEDED_KEY)
        .await
        .map_err(ServiceError::Store)?;
    if already.is_some() {
        return Ok(0);
    }

    tracing::info!("Empty store detected; seeding default quotes");
    let mut inserted = 0;
    for (message, author) in DEFAULT_QUOTES {
        quotes.create(message, author).await?;
        inserted += 1;
    }

    store
        .set(META_SEEDED_KEY, "true")
        .await
        .map_err(ServiceError::Store)?;

    tracing::info!(inserted, "Default quotes seeded");
    Ok(inserted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[tokio::test]
    async fn seeds_once_and_only_once() {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let quotes = QuoteService::new(store.clone());

        let first = seed_default_quotes(&store, &quotes).await.unwrap();
        assert_eq!(first, DEFAULT_QUOTES.len());
        assert_eq!(quotes.list_all().await.unwrap().len(), DEFAULT_QUOTES.len());

        let second = seed_default_quotes(&store, &quotes).await.unwrap();
        assert_eq!(second, 0);
        assert_eq!(quotes.list_all().await.unwrap().len(), DEFAULT_QUOTES.len());
    }

    #[tokio::test]
    async fn seeding_skips_when_flag_present_even_if_quotes_deleted() {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let quotes = QuoteService::new(store.clone());

        seed_default_quotes(&store, &quotes).await.unwrap();
        for quote in quotes.list_all().await.unwrap() {
            quotes.delete(&quote.id).await.unwrap();
        }

        assert_eq!(seed_default_quotes(&store, &quotes).await.unwrap(), 0);
        assert!(quotes.list_all().await.unwrap().is_empty());
    }
}
