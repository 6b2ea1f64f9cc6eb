//! Services layer for quote-service.
//!
//! Business logic over the key-value store: quote access, duplicate
//! detection, invitation-key lifecycle, admin sessions, and the access gate
//! composing the last two.

pub mod dedup;
pub mod error;
pub mod gate;
pub mod keys;
pub mod quotes;
pub mod seed;
pub mod sessions;

pub use dedup::DedupService;
pub use error::ServiceError;
pub use gate::AccessGate;
pub use keys::KeyService;
pub use quotes::QuoteService;
pub use sessions::SessionService;

/// Decode a stored JSON record, tagging failures with the offending key.
pub(crate) fn decode<T: serde::de::DeserializeOwned>(
    key: &str,
    raw: &str,
) -> Result<T, ServiceError> {
    serde_json::from_str(raw).map_err(|e| ServiceError::Corrupt {
        key: key.to_string(),
        source: e,
    })
}

pub(crate) fn encode<T: serde::Serialize>(value: &T) -> Result<String, ServiceError> {
    serde_json::to_string(value).map_err(|e| ServiceError::Store(anyhow::Error::new(e)))
}
