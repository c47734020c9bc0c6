//! Ticketmaster Discovery API Client

use reqwest::header::ACCEPT;

use crate::domain::event::{Event, EventQuery, SearchResponse};
use crate::domain::source::EventSource;
use crate::error::{DiscoverError, DiscoverResult};

/// Path of the event search endpoint under the configured base URL
pub const EVENTS_PATH: &str = "/discovery/v2/events.json";

/// Event source backed by the Discovery API
#[derive(Clone)]
pub struct TicketmasterClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl TicketmasterClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> DiscoverResult<Self> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| DiscoverError::ClientSetup(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    fn events_url(&self) -> String {
        format!("{}{}", self.base_url, EVENTS_PATH)
    }
}

impl EventSource for TicketmasterClient {
    async fn search(&self, query: &EventQuery) -> DiscoverResult<Vec<Event>> {
        let size = query.size.to_string();

        let response = self
            .http
            .get(self.events_url())
            .header(ACCEPT, "application/json")
            .query(&[
                ("apikey", self.api_key.as_str()),
                ("keyword", query.keyword.as_str()),
                ("size", size.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DiscoverError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        let page: SearchResponse =
            serde_json::from_slice(&body).map_err(|e| DiscoverError::Malformed(e.to_string()))?;

        let events = page.embedded.ok_or(DiscoverError::MissingEvents)?.events;

        tracing::debug!(
            keyword = %query.keyword,
            count = events.len(),
            "Fetched events"
        );

        Ok(events.into_iter().map(Event::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn query() -> EventQuery {
        EventQuery {
            keyword: "Los Angeles".to_string(),
            size: 10,
        }
    }

    #[tokio::test]
    async fn test_search_sends_query_and_parses_events() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(EVENTS_PATH))
            .and(query_param("apikey", "test-key"))
            .and(query_param("keyword", "Los Angeles"))
            .and(query_param("size", "10"))
            .and(header("accept", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "_embedded": {
                    "events": [
                        { "name": "Hollywood Bowl Night", "url": "https://example.com/1" },
                        { "name": "Dodgers Home Game" }
                    ]
                },
                "page": { "size": 10, "totalElements": 2 }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = TicketmasterClient::new(server.uri(), "test-key").unwrap();
        let events = client.search(&query()).await.unwrap();

        assert_eq!(events.len(), 2);
        assert_eq!(events[0].name, "Hollywood Bowl Night");
        assert_eq!(events[0].url.as_deref(), Some("https://example.com/1"));
        assert_eq!(events[1].name, "Dodgers Home Game");
    }

    #[tokio::test]
    async fn test_non_success_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let client = TicketmasterClient::new(server.uri(), "bad-key").unwrap();
        let err = client.search(&query()).await.unwrap_err();
        assert!(matches!(err, DiscoverError::Status(401)));
    }

    #[tokio::test]
    async fn test_malformed_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let client = TicketmasterClient::new(server.uri(), "k").unwrap();
        let err = client.search(&query()).await.unwrap_err();
        assert!(matches!(err, DiscoverError::Malformed(_)));
    }

    #[tokio::test]
    async fn test_missing_embedded_events() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "page": { "totalElements": 0 } })),
            )
            .mount(&server)
            .await;

        let client = TicketmasterClient::new(server.uri(), "k").unwrap();
        let err = client.search(&query()).await.unwrap_err();
        assert!(matches!(err, DiscoverError::MissingEvents));
    }

    #[tokio::test]
    async fn test_unreachable_host() {
        // Nothing listens on the discard port
        let client = TicketmasterClient::new("http://127.0.0.1:9", "k").unwrap();
        let err = client.search(&query()).await.unwrap_err();
        assert!(matches!(err, DiscoverError::Request(_)));
        assert!(!err.to_string().contains("apikey"));
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let client = TicketmasterClient::new("https://app.example.com/", "k").unwrap();
        assert_eq!(
            client.events_url(),
            "https://app.example.com/discovery/v2/events.json"
        );
    }
}
