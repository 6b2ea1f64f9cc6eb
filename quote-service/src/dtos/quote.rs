use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::Quote;

/// Public submission. The key is only consulted while the wall is in gated
/// mode (at least one invitation key outstanding).
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AddQuoteRequest {
    #[validate(length(min = 1, message = "message is required"))]
    #[schema(example = "Talk is cheap. Show me the code.")]
    pub message: String,
    #[validate(length(min = 1, message = "author is required"))]
    #[schema(example = "Linus Torvalds")]
    pub author: String,
    pub key: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateQuoteRequest {
    #[validate(length(min = 1, message = "message is required"))]
    pub message: String,
    #[validate(length(min = 1, message = "author is required"))]
    pub author: String,
}

/// What `GET /api/reply` serves. `created_at` is omitted for records that
/// have been edited since creation.
#[derive(Debug, Serialize, ToSchema)]
pub struct RandomQuoteResponse {
    pub message: String,
    pub author: String,
    pub total_quotes: usize,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl RandomQuoteResponse {
    pub fn from_quote(quote: Quote, total_quotes: usize) -> Self {
        Self {
            message: quote.message,
            author: quote.author,
            total_quotes,
            timestamp: Utc::now(),
            created_at: quote.created_at,
        }
    }

    /// Served when the store holds no quotes at all; not an error.
    pub fn empty_wall() -> Self {
        Self {
            message: "No quotes yet - add the first one!".to_string(),
            author: "System".to_string(),
            total_quotes: 0,
            timestamp: Utc::now(),
            created_at: None,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct QuoteListResponse {
    pub total: usize,
    pub quotes: Vec<Quote>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DedupResponse {
    pub deleted: usize,
}
