//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::time::Duration;

use platform::cookie::CookieConfig;

/// Re-export SameSite from platform
pub use platform::cookie::SameSite;

/// Session cookie name
pub const SESSION_COOKIE_NAME: &str = "sid";

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Session cookie name
    pub session_cookie_name: String,
    /// Session secret key for HMAC signing (32 bytes)
    pub session_secret: [u8; 32],
    /// Session TTL (24 hours)
    pub session_ttl: Duration,
    /// Whether to require Secure cookie
    pub cookie_secure: bool,
    /// SameSite policy
    pub cookie_same_site: SameSite,
}

/// Same as [`AuthConfig::with_random_secret`]
impl Default for AuthConfig {
    fn default() -> Self {
        Self::with_random_secret()
    }
}

impl AuthConfig {
    fn with_signing_key(session_secret: [u8; 32]) -> Self {
        Self {
            session_cookie_name: SESSION_COOKIE_NAME.to_string(),
            session_secret,
            session_ttl: Duration::from_secs(24 * 3600), // 24 hours
            cookie_secure: false,
            cookie_same_site: SameSite::Lax,
        }
    }

    /// Derive the signing key from an operator-supplied secret string
    pub fn from_secret(secret: &str) -> Self {
        Self::with_signing_key(platform::crypto::sha256(secret.as_bytes()))
    }

    /// Create config with a random session secret
    ///
    /// Sessions signed with it do not survive a restart.
    pub fn with_random_secret() -> Self {
        let mut secret = [0u8; 32];
        secret.copy_from_slice(&platform::crypto::random_bytes(32));
        Self::with_signing_key(secret)
    }

    /// Create config for development (insecure cookie, random secret)
    pub fn development() -> Self {
        Self {
            cookie_secure: false,
            ..Self::with_random_secret()
        }
    }

    pub fn with_cookie_secure(mut self, secure: bool) -> Self {
        self.cookie_secure = secure;
        self
    }

    /// Session TTL as a chrono duration for entity construction
    pub fn session_ttl_chrono(&self) -> chrono::Duration {
        chrono::Duration::from_std(self.session_ttl).unwrap_or(chrono::Duration::hours(24))
    }

    /// Cookie attributes for the session cookie (Max-Age tracks the TTL)
    pub fn cookie_config(&self) -> CookieConfig {
        CookieConfig {
            name: self.session_cookie_name.clone(),
            secure: self.cookie_secure,
            http_only: true,
            same_site: self.cookie_same_site,
            path: "/".to_string(),
            max_age_secs: Some(self.session_ttl.as_secs() as i64),
        }
    }
}
