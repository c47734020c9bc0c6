//! Presentation Layer
//!
//! HTTP handler, page markup, and router.

pub mod handlers;
pub mod pages;
pub mod router;

pub use handlers::DiscoverAppState;
pub use router::{discover_router, discover_router_generic};
