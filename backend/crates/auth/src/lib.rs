//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits
//! - `application/` - Use cases, session tokens, configuration
//! - `infra/` - PostgreSQL credential store, in-memory session store
//! - `presentation/` - HTML handlers, pages, auth gate, router
//!
//! ## Features
//! - Registration and login with username + password
//! - Server-side sessions referenced by a signed cookie
//! - A gate that redirects anonymous callers to `/login`
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, salted per user
//! - Session cookie is `HttpOnly` and HMAC-signed; the session itself never
//!   leaves the server
//! - Server-side failures render a generic message only

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use domain::entity::auth_session::AuthSession;
pub use error::{AuthError, AuthResult};
pub use infra::{MemorySessionStore, MemoryUserRepository, PgUserRepository};
pub use presentation::{AuthAppState, member_router, protect, public_router};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
