//! Presentation Layer
//!
//! HTTP handlers, page markup, form DTOs, router, and middleware.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod pages;
pub mod router;

pub use handlers::AuthAppState;
pub use middleware::{AuthGateState, require_session};
pub use router::{member_router, protect, public_router};
