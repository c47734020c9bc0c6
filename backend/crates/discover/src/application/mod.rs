//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod search_events;

// Re-exports
pub use config::DiscoverConfig;
pub use search_events::{SearchEventsOutput, SearchEventsUseCase};
