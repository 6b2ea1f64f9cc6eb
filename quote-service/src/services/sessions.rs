//! Admin sessions: password login and bearer-token validation.

use std::sync::Arc;

use subtle::ConstantTimeEq;

use crate::models::AdminSession;
use crate::store::{KeyValueStore, SESSION_PREFIX};
use crate::utils::alphanumeric_token;

use super::{ServiceError, decode, encode};

/// Length of a generated session token.
const SESSION_TOKEN_LEN: usize = 32;

#[derive(Clone)]
pub struct SessionService {
    store: Arc<dyn KeyValueStore>,
    admin_password: String,
    ttl_minutes: i64,
}

impl SessionService {
    pub fn new(store: Arc<dyn KeyValueStore>, admin_password: String, ttl_minutes: i64) -> Self {
        Self {
            store,
            admin_password,
            ttl_minutes,
        }
    }

    fn storage_key(token: &str) -> String {
        format!("{}{}", SESSION_PREFIX, token)
    }

    /// Check the supplied password against the configured administrator
    /// secret and mint a session on success. Comparison is constant-time.
    pub async fn login(&self, password: &str) -> Result<AdminSession, ServiceError> {
        let matches: bool = password
            .as_bytes()
            .ct_eq(self.admin_password.as_bytes())
            .into();
        if !matches {
            tracing::warn!("Failed admin login attempt");
            return Err(ServiceError::InvalidCredentials);
        }

        let session = AdminSession::new(alphanumeric_token(SESSION_TOKEN_LEN), self.ttl_minutes);

        self.store
            .set(&Self::storage_key(&session.token), &encode(&session)?)
            .await
            .map_err(ServiceError::Store)?;

        tracing::info!(expires = %session.expires, "Admin session created");
        Ok(session)
    }

    /// True iff `token` names a live session. Expired sessions are deleted
    /// here, on first access past their expiry - there is no background
    /// sweep, so a session nobody revisits stays in the store.
    pub async fn validate(&self, token: &str) -> Result<bool, ServiceError> {
        let storage_key = Self::storage_key(token);

        let raw = match self
            .store
            .get(&storage_key)
            .await
            .map_err(ServiceError::Store)?
        {
            Some(raw) => raw,
            None => return Ok(false),
        };

        let session: AdminSession = decode(&storage_key, &raw)?;

        if session.is_expired() {
            self.store
                .delete(&storage_key)
                .await
                .map_err(ServiceError::Store)?;
            tracing::debug!("Expired admin session removed");
            return Ok(false);
        }

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use chrono::{Duration, Utc};

    const PASSWORD: &str = "correct horse battery staple";

    fn service() -> (SessionService, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        (
            SessionService::new(store.clone(), PASSWORD.to_string(), 10),
            store,
        )
    }

    #[tokio::test]
    async fn wrong_password_is_rejected() {
        let (sessions, _) = service();
        assert!(matches!(
            sessions.login("wrong").await,
            Err(ServiceError::InvalidCredentials)
        ));
    }

    #[tokio::test]
    async fn login_yields_a_validating_token() {
        let (sessions, _) = service();
        let session = sessions.login(PASSWORD).await.unwrap();
        assert_eq!(session.token.len(), SESSION_TOKEN_LEN);
        assert!(sessions.validate(&session.token).await.unwrap());
    }

    #[tokio::test]
    async fn unknown_token_does_not_validate() {
        let (sessions, _) = service();
        assert!(!sessions.validate("nope").await.unwrap());
    }

    #[tokio::test]
    async fn expired_session_is_lazily_deleted() {
        let (sessions, store) = service();

        let expired = AdminSession {
            token: "stale-token".to_string(),
            expires: Utc::now() - Duration::seconds(1),
        };
        store
            .set(
                "session:stale-token",
                &serde_json::to_string(&expired).unwrap(),
            )
            .await
            .unwrap();

        assert!(!sessions.validate("stale-token").await.unwrap());
        // first failed access removed the record
        assert_eq!(store.get("session:stale-token").await.unwrap(), None);
    }
}
