//! Domain Layer
//!
//! Event entity, upstream wire types, and the event source trait.

pub mod event;
pub mod source;

// Re-exports
pub use event::{Event, EventQuery};
pub use source::EventSource;
