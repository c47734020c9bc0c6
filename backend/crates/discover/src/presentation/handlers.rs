//! HTTP Handlers

use axum::extract::State;
use axum::response::Html;
use std::sync::Arc;

use crate::application::{DiscoverConfig, SearchEventsUseCase};
use crate::domain::source::EventSource;
use crate::presentation::pages::render_discover_page;

/// Shared state for discover handlers
pub struct DiscoverAppState<E>
where
    E: EventSource + Send + Sync + 'static,
{
    pub source: Arc<E>,
    pub config: Arc<DiscoverConfig>,
}

// Manual impl: the source sits behind `Arc`, so `E` itself need not be `Clone`.
impl<E> Clone for DiscoverAppState<E>
where
    E: EventSource + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            config: self.config.clone(),
        }
    }
}

impl<E> DiscoverAppState<E>
where
    E: EventSource + Send + Sync + 'static,
{
    pub fn new(source: E, config: DiscoverConfig) -> Self {
        Self {
            source: Arc::new(source),
            config: Arc::new(config),
        }
    }
}

/// GET /discover
pub async fn discover<E>(State(state): State<DiscoverAppState<E>>) -> Html<String>
where
    E: EventSource + Send + Sync + 'static,
{
    let use_case = SearchEventsUseCase::new(state.source.clone(), state.config.clone());
    let output = use_case.execute().await;

    Html(render_discover_page(&output.events, output.message))
}
