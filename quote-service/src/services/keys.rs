//! Invitation-key lifecycle: issue, consume, list, revoke.

use std::sync::Arc;

use crate::models::InviteKey;
use crate::store::{INVITE_PREFIX, KeyValueStore};
use crate::utils::alphanumeric_token;

use super::{ServiceError, decode, encode};

/// Length of a generated invitation key.
pub const INVITE_KEY_LEN: usize = 24;

#[derive(Clone)]
pub struct KeyService {
    store: Arc<dyn KeyValueStore>,
}

impl KeyService {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    fn storage_key(key: &str) -> String {
        format!("{}{}", INVITE_PREFIX, key)
    }

    /// The global write-gate switch: true iff at least one invitation key
    /// record exists. Derived from current inventory on every call - no
    /// persisted flag. No keys means open mode; any key means gated mode.
    pub async fn any_keys_exist(&self) -> Result<bool, ServiceError> {
        let pairs = self
            .store
            .scan(INVITE_PREFIX)
            .await
            .map_err(ServiceError::Store)?;
        Ok(!pairs.is_empty())
    }

    /// Generate and persist a fresh key allowing `max_uses` consumptions.
    pub async fn issue(&self, max_uses: u32) -> Result<InviteKey, ServiceError> {
        if max_uses == 0 {
            return Err(ServiceError::Validation(
                "max_uses must be at least 1".to_string(),
            ));
        }

        let key = InviteKey::new(alphanumeric_token(INVITE_KEY_LEN), max_uses);

        self.store
            .set(&Self::storage_key(&key.key), &encode(&key)?)
            .await
            .map_err(ServiceError::Store)?;

        tracing::info!(max_uses, "Invitation key issued");
        Ok(key)
    }

    /// Spend one use of `key`. The read-modify-write here is not atomic:
    /// two concurrent consumptions of a one-use key can both observe
    /// `used = 0` and both succeed. Accepted weak-consistency property of
    /// the store contract (single-key atomicity, no transactions).
    pub async fn consume(&self, key: &str) -> Result<(), ServiceError> {
        let storage_key = Self::storage_key(key);

        let raw = self
            .store
            .get(&storage_key)
            .await
            .map_err(ServiceError::Store)?
            .ok_or(ServiceError::KeyNotFound)?;

        let mut record: InviteKey = decode(&storage_key, &raw)?;

        if record.is_exhausted() {
            // stale record - should have been deleted when it ran out
            self.store
                .delete(&storage_key)
                .await
                .map_err(ServiceError::Store)?;
            return Err(ServiceError::KeyExhausted);
        }

        record.used += 1;
        self.store
            .set(&storage_key, &encode(&record)?)
            .await
            .map_err(ServiceError::Store)?;

        // exhaustion-on-use: the key disappears with the consumption that
        // spends its last use, not on the next lookup
        if record.is_exhausted() {
            self.store
                .delete(&storage_key)
                .await
                .map_err(ServiceError::Store)?;
            tracing::info!("Invitation key exhausted and removed");
        }

        Ok(())
    }

    /// All current keys. `remaining_uses` is derived per record.
    pub async fn list(&self) -> Result<Vec<InviteKey>, ServiceError> {
        let pairs = self
            .store
            .scan(INVITE_PREFIX)
            .await
            .map_err(ServiceError::Store)?;

        pairs
            .iter()
            .map(|(key, raw)| decode::<InviteKey>(key, raw))
            .collect()
    }

    /// Idempotent delete of a key, used or not.
    pub async fn revoke(&self, key: &str) -> Result<(), ServiceError> {
        self.store
            .delete(&Self::storage_key(key))
            .await
            .map_err(ServiceError::Store)?;

        tracing::info!("Invitation key revoked");
        Ok(())
    }
}
