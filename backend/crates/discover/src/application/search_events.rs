//! Search Events Use Case
//!
//! Runs the fixed upstream search. Failure is folded into the output so the
//! page always renders.

use std::sync::Arc;

use crate::application::config::DiscoverConfig;
use crate::domain::event::Event;
use crate::domain::source::EventSource;

pub const LOAD_FAILED_MESSAGE: &str = "Failed to load events. Please try again later.";

/// Search events output
#[derive(Debug, Default)]
pub struct SearchEventsOutput {
    pub events: Vec<Event>,
    /// Set only when the upstream call failed
    pub message: Option<&'static str>,
}

/// Search events use case
pub struct SearchEventsUseCase<E>
where
    E: EventSource,
{
    source: Arc<E>,
    config: Arc<DiscoverConfig>,
}

impl<E> SearchEventsUseCase<E>
where
    E: EventSource,
{
    pub fn new(source: Arc<E>, config: Arc<DiscoverConfig>) -> Self {
        Self { source, config }
    }

    pub async fn execute(&self) -> SearchEventsOutput {
        match self.source.search(&self.config.query()).await {
            Ok(events) => SearchEventsOutput {
                events,
                message: None,
            },
            Err(e) => {
                e.log();
                SearchEventsOutput {
                    events: Vec::new(),
                    message: Some(LOAD_FAILED_MESSAGE),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::event::EventQuery;
    use crate::error::{DiscoverError, DiscoverResult};
    use std::sync::Mutex;

    /// Records queries and answers from a fixed result
    struct StubSource {
        seen: Mutex<Vec<EventQuery>>,
        fail: bool,
    }

    impl StubSource {
        fn new(fail: bool) -> Self {
            Self {
                seen: Mutex::new(Vec::new()),
                fail,
            }
        }
    }

    impl EventSource for StubSource {
        async fn search(&self, query: &EventQuery) -> DiscoverResult<Vec<Event>> {
            self.seen.lock().unwrap().push(query.clone());
            if self.fail {
                return Err(DiscoverError::Status(503));
            }
            Ok(vec![Event {
                name: "Jazz at the Bowl".to_string(),
                url: None,
                start_date: None,
                start_time: None,
                venue: None,
                image_url: None,
            }])
        }
    }

    #[tokio::test]
    async fn test_success_passes_events_through() {
        let source = Arc::new(StubSource::new(false));
        let use_case = SearchEventsUseCase::new(source.clone(), Arc::new(DiscoverConfig::default()));

        let output = use_case.execute().await;
        assert_eq!(output.events.len(), 1);
        assert!(output.message.is_none());

        let seen = source.seen.lock().unwrap();
        assert_eq!(
            seen.as_slice(),
            &[EventQuery {
                keyword: "Los Angeles".to_string(),
                size: 10
            }]
        );
    }

    #[tokio::test]
    async fn test_failure_yields_empty_list_and_message() {
        let source = Arc::new(StubSource::new(true));
        let use_case = SearchEventsUseCase::new(source, Arc::new(DiscoverConfig::default()));

        let output = use_case.execute().await;
        assert!(output.events.is_empty());
        assert_eq!(output.message, Some(LOAD_FAILED_MESSAGE));
    }
}
