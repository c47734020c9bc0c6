//! Check Session Use Case
//!
//! Resolves a session cookie value to a live session.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::session_token;
use crate::domain::entity::auth_session::AuthSession;
use crate::domain::repository::AuthSessionRepository;
use crate::error::AuthResult;

/// Check session use case
pub struct CheckSessionUseCase<S>
where
    S: AuthSessionRepository,
{
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<S> CheckSessionUseCase<S>
where
    S: AuthSessionRepository,
{
    pub fn new(session_repo: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            session_repo,
            config,
        }
    }

    /// Look up the session behind `token`
    ///
    /// A missing, forged, unknown or expired token is `Ok(None)`. Only a
    /// store failure is an error. Expired sessions are removed on sight.
    pub async fn lookup(&self, token: Option<&str>) -> AuthResult<Option<AuthSession>> {
        let Some(token) = token else {
            return Ok(None);
        };

        let Ok(session_id) = session_token::verify(&self.config.session_secret, token) else {
            tracing::debug!("Rejected session cookie with bad signature");
            return Ok(None);
        };

        let Some(session) = self.session_repo.find_by_id(session_id).await? else {
            return Ok(None);
        };

        if session.is_expired() {
            self.session_repo.delete(session_id).await?;
            tracing::debug!(session_id = %session_id, "Removed expired session");
            return Ok(None);
        }

        Ok(Some(session))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::user_name::UserName;
    use crate::infra::memory::MemorySessionStore;
    use chrono::Duration;
    use kernel::id::SessionId;

    fn setup() -> (
        Arc<MemorySessionStore>,
        Arc<AuthConfig>,
        CheckSessionUseCase<MemorySessionStore>,
    ) {
        let store = Arc::new(MemorySessionStore::new());
        let config = Arc::new(AuthConfig::development());
        let use_case = CheckSessionUseCase::new(store.clone(), config.clone());
        (store, config, use_case)
    }

    fn session(ttl: Duration) -> AuthSession {
        AuthSession::new(UserName::new("alice").unwrap(), ttl)
    }

    #[tokio::test]
    async fn test_valid_session_found() {
        let (store, config, use_case) = setup();
        let s = session(Duration::hours(1));
        store.create(&s).await.unwrap();

        let token = session_token::issue(&config.session_secret, s.session_id);
        let found = use_case.lookup(Some(&token)).await.unwrap().unwrap();
        assert_eq!(found.session_id, s.session_id);
    }

    #[tokio::test]
    async fn test_missing_and_forged_tokens() {
        let (store, _, use_case) = setup();
        let s = session(Duration::hours(1));
        store.create(&s).await.unwrap();

        assert!(use_case.lookup(None).await.unwrap().is_none());
        assert!(use_case.lookup(Some("garbage")).await.unwrap().is_none());

        let other_secret = AuthConfig::development();
        let forged = session_token::issue(&other_secret.session_secret, s.session_id);
        assert!(use_case.lookup(Some(&forged)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_unknown_session() {
        let (_, config, use_case) = setup();
        let token = session_token::issue(&config.session_secret, SessionId::new());
        assert!(use_case.lookup(Some(&token)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_expired_session_is_removed() {
        let (store, config, use_case) = setup();
        let s = session(Duration::seconds(-1));
        store.create(&s).await.unwrap();

        let token = session_token::issue(&config.session_secret, s.session_id);
        assert!(use_case.lookup(Some(&token)).await.unwrap().is_none());
        assert!(store.find_by_id(s.session_id).await.unwrap().is_none());
    }
}
