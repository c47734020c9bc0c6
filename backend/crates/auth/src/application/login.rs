//! Login Use Case
//!
//! Checks credentials and creates a session.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::session_token;
use crate::domain::entity::auth_session::AuthSession;
use crate::domain::repository::{AuthSessionRepository, UserRepository};
use crate::domain::value_object::{user_name::UserName, user_password::RawPassword};
use crate::error::AuthResult;

/// Login input
pub struct LoginInput {
    pub user_name: String,
    pub password: String,
}

/// Login outcome
///
/// The two rejections are distinct because the pages treat them differently:
/// an unknown user is sent to registration, a wrong password stays on login.
#[derive(Debug)]
pub enum LoginOutcome {
    /// Session created; the token goes into the cookie
    SignedIn {
        session_token: String,
        user_name: UserName,
    },
    /// User exists but the password does not match
    IncorrectPassword,
    /// No user with that name
    UnknownUser,
}

/// Login use case
pub struct LoginUseCase<U, S>
where
    U: UserRepository,
    S: AuthSessionRepository,
{
    user_repo: Arc<U>,
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<U, S> LoginUseCase<U, S>
where
    U: UserRepository,
    S: AuthSessionRepository,
{
    pub fn new(user_repo: Arc<U>, session_repo: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            user_repo,
            session_repo,
            config,
        }
    }

    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutcome> {
        // A name that could never have been registered cannot exist
        let Ok(user_name) = UserName::new(&input.user_name) else {
            return Ok(LoginOutcome::UnknownUser);
        };

        let Some(user) = self.user_repo.find_by_user_name(&user_name).await? else {
            tracing::debug!(user_name = %user_name, "Login for unknown user");
            return Ok(LoginOutcome::UnknownUser);
        };

        let password_ok = match RawPassword::new(input.password) {
            Ok(raw) => user.password_hash.verify(&raw),
            Err(_) => false,
        };

        if !password_ok {
            tracing::info!(user_name = %user_name, "Login rejected: incorrect password");
            return Ok(LoginOutcome::IncorrectPassword);
        }

        let session = AuthSession::new(user.user_name.clone(), self.config.session_ttl_chrono());
        self.session_repo.create(&session).await?;

        let session_token = session_token::issue(&self.config.session_secret, session.session_id);

        tracing::info!(
            user_name = %user.user_name,
            session_id = %session.session_id,
            "User logged in"
        );

        Ok(LoginOutcome::SignedIn {
            session_token,
            user_name: user.user_name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::register::{RegisterInput, RegisterUseCase};
    use crate::infra::memory::{MemorySessionStore, MemoryUserRepository};

    struct Fixture {
        sessions: Arc<MemorySessionStore>,
        config: Arc<AuthConfig>,
        use_case: LoginUseCase<MemoryUserRepository, MemorySessionStore>,
    }

    async fn fixture() -> Fixture {
        let users = Arc::new(MemoryUserRepository::new());
        let sessions = Arc::new(MemorySessionStore::new());
        let config = Arc::new(AuthConfig::development());

        RegisterUseCase::new(users.clone())
            .execute(RegisterInput {
                user_name: "alice".to_string(),
                password: "hunter2".to_string(),
            })
            .await
            .unwrap();

        Fixture {
            sessions: sessions.clone(),
            config: config.clone(),
            use_case: LoginUseCase::new(users, sessions, config),
        }
    }

    fn input(user_name: &str, password: &str) -> LoginInput {
        LoginInput {
            user_name: user_name.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_login_success_creates_session() {
        let f = fixture().await;

        let outcome = f.use_case.execute(input("alice", "hunter2")).await.unwrap();
        let LoginOutcome::SignedIn {
            session_token,
            user_name,
        } = outcome
        else {
            panic!("expected SignedIn, got {outcome:?}");
        };

        assert_eq!(user_name.as_str(), "alice");
        let id = session_token::verify(&f.config.session_secret, &session_token).unwrap();
        let session = f.sessions.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(session.user_name.as_str(), "alice");
    }

    #[tokio::test]
    async fn test_wrong_password() {
        let f = fixture().await;

        let outcome = f.use_case.execute(input("alice", "wrong")).await.unwrap();
        assert!(matches!(outcome, LoginOutcome::IncorrectPassword));

        let outcome = f.use_case.execute(input("alice", "")).await.unwrap();
        assert!(matches!(outcome, LoginOutcome::IncorrectPassword));

        assert!(f.sessions.is_empty().await);
    }

    #[tokio::test]
    async fn test_unknown_user() {
        let f = fixture().await;

        let outcome = f.use_case.execute(input("ghost", "hunter2")).await.unwrap();
        assert!(matches!(outcome, LoginOutcome::UnknownUser));

        let outcome = f.use_case.execute(input("", "hunter2")).await.unwrap();
        assert!(matches!(outcome, LoginOutcome::UnknownUser));
    }
}
