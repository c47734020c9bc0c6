//! Logout Use Case
//!
//! Invalidates a user session.

use kernel::id::SessionId;
use std::sync::Arc;

use crate::domain::repository::AuthSessionRepository;
use crate::error::AuthResult;

/// Logout use case
pub struct LogoutUseCase<S>
where
    S: AuthSessionRepository,
{
    session_repo: Arc<S>,
}

impl<S> LogoutUseCase<S>
where
    S: AuthSessionRepository,
{
    pub fn new(session_repo: Arc<S>) -> Self {
        Self { session_repo }
    }

    /// Destroy the session; an already-gone session is not an error
    pub async fn execute(&self, session_id: SessionId) -> AuthResult<()> {
        let existed = self.session_repo.delete(session_id).await?;

        tracing::info!(session_id = %session_id, existed, "User logged out");
        Ok(())
    }
}
