//! Event Entity
//!
//! The flattened view of one upstream event, plus the upstream wire shapes
//! it is extracted from. Only the fields the page shows are read; everything
//! else in the payload is ignored.

use serde::Deserialize;

/// One event as shown on the discover page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub name: String,
    pub url: Option<String>,
    /// `YYYY-MM-DD` as sent upstream
    pub start_date: Option<String>,
    /// `HH:MM:SS` as sent upstream
    pub start_time: Option<String>,
    pub venue: Option<String>,
    pub image_url: Option<String>,
}

/// Search parameters sent upstream
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventQuery {
    pub keyword: String,
    pub size: u32,
}

// ============================================================================
// Upstream wire format
// ============================================================================

/// Top-level search response
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(rename = "_embedded")]
    pub embedded: Option<EmbeddedEvents>,
}

#[derive(Debug, Deserialize)]
pub struct EmbeddedEvents {
    pub events: Vec<RawEvent>,
}

#[derive(Debug, Deserialize)]
pub struct RawEvent {
    #[serde(default)]
    pub name: String,
    pub url: Option<String>,
    pub dates: Option<RawDates>,
    #[serde(default)]
    pub images: Vec<RawImage>,
    #[serde(rename = "_embedded")]
    pub embedded: Option<RawEventEmbedded>,
}

#[derive(Debug, Deserialize)]
pub struct RawDates {
    pub start: Option<RawStart>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawStart {
    pub local_date: Option<String>,
    pub local_time: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RawImage {
    pub url: String,
    pub width: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct RawEventEmbedded {
    #[serde(default)]
    pub venues: Vec<RawVenue>,
}

#[derive(Debug, Deserialize)]
pub struct RawVenue {
    pub name: Option<String>,
}

impl From<RawEvent> for Event {
    fn from(raw: RawEvent) -> Self {
        let start = raw.dates.and_then(|d| d.start);
        let (start_date, start_time) = match start {
            Some(s) => (s.local_date, s.local_time),
            None => (None, None),
        };

        let venue = raw
            .embedded
            .and_then(|e| e.venues.into_iter().find_map(|v| v.name));

        // Widest image gives the best thumbnail once scaled down
        let image_url = raw
            .images
            .into_iter()
            .max_by_key(|i| i.width.unwrap_or(0))
            .map(|i| i.url);

        Self {
            name: raw.name,
            url: raw.url,
            start_date,
            start_time,
            venue,
            image_url,
        }
    }
}
