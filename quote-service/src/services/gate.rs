//! Access gate: the single decision point for public writes and admin
//! actions. Stateless - it only composes the key and session services.

use super::{KeyService, ServiceError, SessionService};

#[derive(Clone)]
pub struct AccessGate {
    keys: KeyService,
    sessions: SessionService,
}

impl AccessGate {
    pub fn new(keys: KeyService, sessions: SessionService) -> Self {
        Self { keys, sessions }
    }

    /// Decide whether a public quote submission may proceed. With no keys in
    /// inventory the wall is in open mode and anyone may write; as soon as
    /// any key exists, a valid key must be presented and is consumed here.
    pub async fn authorize_public_write(
        &self,
        provided_key: Option<&str>,
    ) -> Result<(), ServiceError> {
        if !self.keys.any_keys_exist().await? {
            tracing::debug!("No invitation keys exist; submission allowed without key");
            return Ok(());
        }

        match provided_key {
            Some(key) => self.keys.consume(key).await,
            None => Err(ServiceError::KeyRequired),
        }
    }

    /// Decide whether an admin action may proceed: a bearer token must be
    /// present and name a live session.
    pub async fn authorize_admin(&self, token: Option<&str>) -> Result<(), ServiceError> {
        let token = token.ok_or(ServiceError::Unauthorized)?;

        if !self.sessions.validate(token).await? {
            return Err(ServiceError::Forbidden);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{KeyValueStore, MemoryStore};
    use std::sync::Arc;

    const PASSWORD: &str = "hunter2";

    fn gate() -> (AccessGate, KeyService, SessionService) {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let keys = KeyService::new(store.clone());
        let sessions = SessionService::new(store, PASSWORD.to_string(), 10);
        (AccessGate::new(keys.clone(), sessions.clone()), keys, sessions)
    }

    #[tokio::test]
    async fn open_mode_allows_keyless_writes() {
        let (gate, _, _) = gate();
        gate.authorize_public_write(None).await.unwrap();
        // a key nobody asked for is ignored in open mode
        gate.authorize_public_write(Some("anything")).await.unwrap();
    }

    #[tokio::test]
    async fn issuing_a_key_switches_to_gated_mode() {
        let (gate, keys, _) = gate();
        let key = keys.issue(1).await.unwrap();

        assert!(matches!(
            gate.authorize_public_write(None).await,
            Err(ServiceError::KeyRequired)
        ));
        assert!(matches!(
            gate.authorize_public_write(Some("wrong")).await,
            Err(ServiceError::KeyNotFound)
        ));
        gate.authorize_public_write(Some(&key.key)).await.unwrap();

        // that consumption exhausted the only key, so the wall reopens
        gate.authorize_public_write(None).await.unwrap();
    }

    #[tokio::test]
    async fn admin_gate_distinguishes_missing_and_invalid_tokens() {
        let (gate, _, sessions) = gate();

        assert!(matches!(
            gate.authorize_admin(None).await,
            Err(ServiceError::Unauthorized)
        ));
        assert!(matches!(
            gate.authorize_admin(Some("bogus")).await,
            Err(ServiceError::Forbidden)
        ));

        let session = sessions.login(PASSWORD).await.unwrap();
        gate.authorize_admin(Some(&session.token)).await.unwrap();
    }
}
