//! Event Source Trait
//!
//! Interface for the outbound event search. Implementation is in
//! infrastructure layer.

use crate::domain::event::{Event, EventQuery};
use crate::error::DiscoverResult;

/// Upstream event search
#[trait_variant::make(EventSource: Send)]
pub trait LocalEventSource {
    /// One search call; no retry, no caching
    async fn search(&self, query: &EventQuery) -> DiscoverResult<Vec<Event>>;
}
