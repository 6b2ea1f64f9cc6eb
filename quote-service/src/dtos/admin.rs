use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::InviteKey;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub token: String,
    pub expires: DateTime<Utc>,
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct CreateKeyRequest {
    /// How many submissions the key admits before it self-destructs.
    /// Defaults to 1 (single use).
    #[validate(range(min = 1))]
    #[schema(example = 5)]
    pub max_uses: Option<u32>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct KeyInfo {
    pub key: String,
    pub created_at: DateTime<Utc>,
    pub used: u32,
    pub max_uses: u32,
    pub remaining_uses: u32,
}

impl From<InviteKey> for KeyInfo {
    fn from(k: InviteKey) -> Self {
        let remaining_uses = k.remaining_uses();
        Self {
            key: k.key,
            created_at: k.created_at,
            used: k.used,
            max_uses: k.max_uses,
            remaining_uses,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct KeyListResponse {
    pub total: usize,
    pub keys: Vec<KeyInfo>,
}
