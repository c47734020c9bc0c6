//! Infrastructure Layer
//!
//! Database and in-process store implementations.

pub mod memory;
pub mod postgres;

pub use memory::{MemorySessionStore, MemoryUserRepository};
pub use postgres::PgUserRepository;
