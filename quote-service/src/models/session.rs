//! Admin session model - short-lived bearer tokens proving a password login.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// An admin session. Valid iff looked up by its token and not past `expires`;
/// expired sessions are deleted lazily on first access, never by a sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminSession {
    pub token: String,
    pub expires: DateTime<Utc>,
}

impl AdminSession {
    pub fn new(token: String, ttl_minutes: i64) -> Self {
        Self {
            token,
            expires: Utc::now() + Duration::minutes(ttl_minutes),
        }
    }

    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires
    }
}
