//! Infrastructure Layer
//!
//! Outbound HTTP client for the event search API.

pub mod ticketmaster;

pub use ticketmaster::TicketmasterClient;
