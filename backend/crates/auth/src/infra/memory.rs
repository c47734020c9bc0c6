//! In-Memory Repository Implementations
//!
//! `MemorySessionStore` is the production session store: sessions live as
//! long as the process. `MemoryUserRepository` backs tests and local runs
//! without a database.

use chrono::Utc;
use kernel::id::SessionId;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entity::{auth_session::AuthSession, user::User};
use crate::domain::repository::{AuthSessionRepository, UserRepository};
use crate::domain::value_object::user_name::UserName;
use crate::error::{AuthError, AuthResult};

// ============================================================================
// Session Store
// ============================================================================

/// Process-held session store
#[derive(Clone, Default)]
pub struct MemorySessionStore {
    sessions: Arc<RwLock<HashMap<SessionId, AuthSession>>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live entries (expired ones included until cleanup)
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

impl AuthSessionRepository for MemorySessionStore {
    async fn create(&self, session: &AuthSession) -> AuthResult<()> {
        self.sessions
            .write()
            .await
            .insert(session.session_id, session.clone());
        Ok(())
    }

    async fn find_by_id(&self, session_id: SessionId) -> AuthResult<Option<AuthSession>> {
        Ok(self.sessions.read().await.get(&session_id).cloned())
    }

    async fn delete(&self, session_id: SessionId) -> AuthResult<bool> {
        Ok(self.sessions.write().await.remove(&session_id).is_some())
    }

    async fn cleanup_expired(&self) -> AuthResult<u64> {
        let now_ms = Utc::now().timestamp_millis();

        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, session| !session.is_expired_at(now_ms));
        let deleted = (before - sessions.len()) as u64;

        tracing::debug!(sessions_deleted = deleted, "Cleaned up expired auth sessions");

        Ok(deleted)
    }
}

// ============================================================================
// Credential Store
// ============================================================================

/// In-memory credential store with the same uniqueness rule as `users`
#[derive(Clone, Default)]
pub struct MemoryUserRepository {
    users: Arc<RwLock<HashMap<UserName, User>>>,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserRepository for MemoryUserRepository {
    async fn create(&self, user: &User) -> AuthResult<()> {
        let mut users = self.users.write().await;
        if users.contains_key(&user.user_name) {
            return Err(AuthError::UserNameTaken);
        }
        users.insert(user.user_name.clone(), user.clone());
        Ok(())
    }

    async fn find_by_user_name(&self, user_name: &UserName) -> AuthResult<Option<User>> {
        Ok(self.users.read().await.get(user_name).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::user_password::{RawPassword, UserPassword};
    use chrono::Duration;

    fn name(s: &str) -> UserName {
        UserName::new(s).unwrap()
    }

    fn user(s: &str) -> User {
        let raw = RawPassword::new("hunter2".to_string()).unwrap();
        User::new(name(s), UserPassword::from_raw(&raw).unwrap())
    }

    #[tokio::test]
    async fn test_session_create_find_delete() {
        let store = MemorySessionStore::new();
        let session = AuthSession::new(name("alice"), Duration::hours(1));

        store.create(&session).await.unwrap();
        let found = store.find_by_id(session.session_id).await.unwrap().unwrap();
        assert_eq!(found.user_name, name("alice"));

        assert!(store.delete(session.session_id).await.unwrap());
        assert!(!store.delete(session.session_id).await.unwrap());
        assert!(store.find_by_id(session.session_id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_cleanup_expired() {
        let store = MemorySessionStore::new();
        let live = AuthSession::new(name("alice"), Duration::hours(1));
        let stale = AuthSession::new(name("bob"), Duration::seconds(-5));

        store.create(&live).await.unwrap();
        store.create(&stale).await.unwrap();

        assert_eq!(store.cleanup_expired().await.unwrap(), 1);
        assert_eq!(store.len().await, 1);
        assert!(store.find_by_id(live.session_id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_user_uniqueness() {
        let repo = MemoryUserRepository::new();
        repo.create(&user("alice")).await.unwrap();

        let err = repo.create(&user("alice")).await.unwrap_err();
        assert!(matches!(err, AuthError::UserNameTaken));

        assert!(repo.find_by_user_name(&name("alice")).await.unwrap().is_some());
        assert!(repo.find_by_user_name(&name("carol")).await.unwrap().is_none());
    }
}
