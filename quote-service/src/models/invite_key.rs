//! Invitation key model - consumable secrets gating public quote submission.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A single- or multi-use invitation key. Invariant: `used <= max_uses`; the
/// record is deleted the moment `used` reaches `max_uses`, so no exhausted
/// key persists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct InviteKey {
    pub key: String,
    pub created_at: DateTime<Utc>,
    pub used: u32,
    pub max_uses: u32,
}

impl InviteKey {
    pub fn new(key: String, max_uses: u32) -> Self {
        Self {
            key,
            created_at: Utc::now(),
            used: 0,
            max_uses,
        }
    }

    pub fn remaining_uses(&self) -> u32 {
        self.max_uses.saturating_sub(self.used)
    }

    pub fn is_exhausted(&self) -> bool {
        self.used >= self.max_uses
    }
}
