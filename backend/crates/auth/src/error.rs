//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use std::borrow::Cow;

use axum::response::{IntoResponse, Response};
use kernel::error::{
    app_error::{AppError, GENERIC_SERVER_MESSAGE},
    kind::ErrorKind,
};
use thiserror::Error;

use crate::domain::value_object::user_name::UserNameError;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// User name failed validation
    #[error("{0}")]
    InvalidUserName(String),

    /// Password failed validation
    #[error("{0}")]
    PasswordValidation(String),

    /// User name already exists (store unique constraint)
    #[error("That username is already taken.")]
    UserNameTaken,

    /// More than one credential row matched a user name
    #[error("Multiple users matched the same user name")]
    AmbiguousUser,

    /// Stored password hash could not be parsed
    #[error("Stored password hash is invalid")]
    InvalidStoredHash,

    /// Session token missing, forged or expired
    #[error("Session not found or expired")]
    SessionInvalid,

    /// Session store failure
    #[error("Session store error: {0}")]
    SessionStore(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<UserNameError> for AuthError {
    fn from(e: UserNameError) -> Self {
        AuthError::InvalidUserName(e.to_string())
    }
}

impl AuthError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::InvalidUserName(_) | AuthError::PasswordValidation(_) => {
                ErrorKind::BadRequest
            }
            AuthError::UserNameTaken => ErrorKind::Conflict,
            AuthError::SessionInvalid => ErrorKind::Unauthorized,
            AuthError::AmbiguousUser
            | AuthError::InvalidStoredHash
            | AuthError::SessionStore(_)
            | AuthError::Database(_)
            | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Message safe to show on a rendered page
    ///
    /// Server-side failures collapse to one generic sentence.
    pub fn user_message(&self) -> Cow<'static, str> {
        if self.kind().is_server_error() {
            Cow::Borrowed(GENERIC_SERVER_MESSAGE)
        } else {
            Cow::Owned(self.to_string())
        }
    }

    /// Convert to AppError, keeping `self` as the source
    pub fn into_app_error(self) -> AppError {
        let kind = self.kind();
        let message = self.to_string();
        AppError::new(kind, message).with_source(self)
    }

    /// Log the error with appropriate level
    pub fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::SessionStore(msg) | AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::AmbiguousUser | AuthError::InvalidStoredHash => {
                tracing::error!(error = %self, "Credential store inconsistency");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.into_app_error().into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_mapping() {
        assert_eq!(AuthError::UserNameTaken.kind(), ErrorKind::Conflict);
        assert_eq!(
            AuthError::InvalidUserName("x".into()).kind(),
            ErrorKind::BadRequest
        );
        assert_eq!(AuthError::SessionInvalid.kind(), ErrorKind::Unauthorized);
        assert_eq!(
            AuthError::Database(sqlx::Error::PoolTimedOut).kind(),
            ErrorKind::InternalServerError
        );
    }

    #[test]
    fn test_user_message_hides_internal_detail() {
        let err = AuthError::Database(sqlx::Error::PoolTimedOut);
        assert_eq!(err.user_message(), GENERIC_SERVER_MESSAGE);

        let err = AuthError::Internal("argon2 exploded".into());
        assert!(!err.user_message().contains("argon2"));

        assert_eq!(
            AuthError::UserNameTaken.user_message(),
            "That username is already taken."
        );
    }

    #[test]
    fn test_into_response_status() {
        let response = AuthError::SessionStore("poisoned".into()).into_response();
        assert_eq!(response.status(), axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    }
}
