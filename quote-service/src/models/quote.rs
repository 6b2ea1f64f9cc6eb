//! Quote model - the message/author records served to the public endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A stored quote. Identity is the `id`; content uniqueness on the trimmed
/// `(message, author)` pair is soft and enforced by the dedup pass, not the
/// store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Quote {
    pub id: String,
    pub message: String,
    pub author: String,
    /// Set on creation. An admin edit replaces the whole record, so an
    /// updated quote carries `updated_at` instead.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Quote {
    /// Create a new quote with a fresh id. Fields arrive pre-trimmed from the
    /// service layer.
    pub fn new(message: String, author: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            message,
            author,
            created_at: Some(Utc::now()),
            updated_at: None,
        }
    }

    /// Build the replacement record an admin edit writes over `id`.
    pub fn replacement(id: String, message: String, author: String) -> Self {
        Self {
            id,
            message,
            author,
            created_at: None,
            updated_at: Some(Utc::now()),
        }
    }

    /// Content key used for duplicate detection.
    pub fn content_key(&self) -> String {
        format!("{}|{}", self.message, self.author)
    }
}
