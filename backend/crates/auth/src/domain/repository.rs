//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::SessionId;

use crate::domain::entity::{auth_session::AuthSession, user::User};
use crate::domain::value_object::user_name::UserName;
use crate::error::AuthResult;

/// Credential store
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Insert a new user
    ///
    /// Fails with `AuthError::UserNameTaken` when the store's uniqueness
    /// constraint rejects the row.
    async fn create(&self, user: &User) -> AuthResult<()>;

    /// Find the single user with this name
    ///
    /// `Ok(None)` for zero rows, `AuthError::AmbiguousUser` for more than one.
    async fn find_by_user_name(&self, user_name: &UserName) -> AuthResult<Option<User>>;
}

/// Session store
#[trait_variant::make(AuthSessionRepository: Send)]
pub trait LocalAuthSessionRepository {
    /// Create a new session
    async fn create(&self, session: &AuthSession) -> AuthResult<()>;

    /// Find session by ID
    async fn find_by_id(&self, session_id: SessionId) -> AuthResult<Option<AuthSession>>;

    /// Delete a session; returns whether it existed
    async fn delete(&self, session_id: SessionId) -> AuthResult<bool>;

    /// Clean up expired sessions
    async fn cleanup_expired(&self) -> AuthResult<u64>;
}
