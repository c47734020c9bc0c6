//! Discover Router

use axum::{Router, routing::get};

use crate::domain::source::EventSource;
use crate::infra::TicketmasterClient;
use crate::presentation::handlers::{self, DiscoverAppState};

/// Create the Discover router backed by the Discovery API client
///
/// Not gated here; the caller puts it behind the session gate.
pub fn discover_router(state: DiscoverAppState<TicketmasterClient>) -> Router {
    discover_router_generic(state)
}

/// Create a Discover router for any event source implementation
pub fn discover_router_generic<E>(state: DiscoverAppState<E>) -> Router
where
    E: EventSource + Send + Sync + 'static,
{
    Router::new()
        .route("/discover", get(handlers::discover::<E>))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::DiscoverConfig;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::json;
    use tower::ServiceExt;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn get_discover(app: Router) -> (StatusCode, String) {
        let res = app
            .oneshot(Request::builder().uri("/discover").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = res.status();
        let bytes = res.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    fn state_for(server: &MockServer) -> DiscoverAppState<TicketmasterClient> {
        let config = DiscoverConfig {
            base_url: server.uri(),
            api_key: "test-key".to_string(),
            ..Default::default()
        };
        let client = TicketmasterClient::new(&config.base_url, &config.api_key).unwrap();
        DiscoverAppState::new(client, config)
    }

    #[tokio::test]
    async fn test_discover_renders_events() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/discovery/v2/events.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "_embedded": { "events": [ { "name": "Griffith Observatory Tour" } ] }
            })))
            .mount(&server)
            .await;

        let (status, body) = get_discover(discover_router(state_for(&server))).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Griffith Observatory Tour"));
        assert!(!body.contains("Failed to load events"));
    }

    #[tokio::test]
    async fn test_upstream_failure_renders_message() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let (status, body) = get_discover(discover_router(state_for(&server))).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Failed to load events. Please try again later."));
        assert!(!body.contains(r#"class="event""#));
    }
}
