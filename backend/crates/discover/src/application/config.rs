//! Application Configuration
//!
//! Configuration for the Discover application layer.

use crate::domain::event::EventQuery;

pub const DEFAULT_BASE_URL: &str = "https://app.ticketmaster.com";
pub const DEFAULT_KEYWORD: &str = "Los Angeles";
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Discover application configuration
#[derive(Debug, Clone)]
pub struct DiscoverConfig {
    /// Event API base URL (scheme + host)
    pub base_url: String,
    /// Event API key
    pub api_key: String,
    /// Fixed search keyword
    pub keyword: String,
    /// Events per page
    pub page_size: u32,
}

impl Default for DiscoverConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: String::new(),
            keyword: DEFAULT_KEYWORD.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl DiscoverConfig {
    /// The query every discover page load sends
    pub fn query(&self) -> EventQuery {
        EventQuery {
            keyword: self.keyword.clone(),
            size: self.page_size,
        }
    }
}
