//! Discover (Event Lookup) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Event entity, upstream wire types, event source trait
//! - `application/` - Search use case and configuration
//! - `infra/` - Discovery API HTTP client
//! - `presentation/` - HTML handler, page, router
//!
//! One fixed search per page load. Upstream failures render the page with
//! an empty list and a message; they never surface as an error status.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::DiscoverConfig;
pub use domain::{Event, EventQuery, EventSource};
pub use error::{DiscoverError, DiscoverResult};
pub use infra::TicketmasterClient;
pub use presentation::{DiscoverAppState, discover_router, discover_router_generic};
