//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (SHA-256, HMAC, Base64)
//! - Password hashing (Argon2id)
//! - Cookie management
//! - HTML page shell for server-rendered pages

pub mod cookie;
pub mod crypto;
pub mod html;
pub mod password;
