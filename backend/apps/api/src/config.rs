//! Server Configuration
//!
//! Read once at startup from the process environment (after `.env`).
//! Missing values fall back to defaults with a log line; unparsable values
//! abort startup.

use std::{env, fmt::Display, str::FromStr};

use anyhow::anyhow;
use sqlx::postgres::PgConnectOptions;
use tracing::{info, warn};

pub struct Config {
    pub port: u16,
    pub database: PgConnectOptions,
    /// `None` means a random per-process secret
    pub session_secret: Option<String>,
    pub api_key: String,
    pub events_api_url: String,
    pub events_keyword: String,
    pub cookie_secure: bool,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        Ok(Self {
            port: try_load("PORT", "3000")?,
            database: database_options()?,
            session_secret: var("SESSION_SECRET").ok().filter(|s| !s.is_empty()),
            api_key: var("API_KEY").unwrap_or_default(),
            events_api_url: try_load("EVENTS_API_URL", discover::application::config::DEFAULT_BASE_URL)?,
            events_keyword: try_load("EVENTS_KEYWORD", discover::application::config::DEFAULT_KEYWORD)?,
            cookie_secure: try_load("COOKIE_SECURE", "false")?,
        })
    }
}

fn var(key: &str) -> Result<String, ()> {
    env::var(key).map_err(|_| {
        warn!("Environment variable {key} not found, using default");
    })
}

fn try_load<T: FromStr>(key: &str, default: &str) -> anyhow::Result<T>
where
    T::Err: Display,
{
    var(key)
        .unwrap_or_else(|_| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| anyhow!("Invalid {key} value: {e}"))
}

/// `DATABASE_URL`, or options assembled from the `POSTGRES_*` variables
fn database_options() -> anyhow::Result<PgConnectOptions> {
    if let Ok(url) = env::var("DATABASE_URL") {
        return url
            .parse()
            .map_err(|e| anyhow!("Invalid DATABASE_URL value: {e}"));
    }

    let host: String = try_load("POSTGRES_HOST", "localhost")?;
    let port: u16 = try_load("POSTGRES_PORT", "5432")?;
    let db: String = try_load("POSTGRES_DB", "postgres")?;
    let user: String = try_load("POSTGRES_USER", "postgres")?;
    let password: String = try_load("POSTGRES_PASSWORD", "")?;

    Ok(build_database_options(&host, port, &db, &user, &password))
}

/// Each part is passed through as-is, so no URL escaping is involved
fn build_database_options(
    host: &str,
    port: u16,
    db: &str,
    user: &str,
    password: &str,
) -> PgConnectOptions {
    let options = PgConnectOptions::new()
        .host(host)
        .port(port)
        .database(db)
        .username(user);

    if password.is_empty() {
        options
    } else {
        options.password(password)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_database_options() {
        let options = build_database_options("localhost", 6543, "postgres", "postgres", "");
        assert_eq!(options.get_host(), "localhost");
        assert_eq!(options.get_port(), 6543);
        assert_eq!(options.get_database(), Some("postgres"));
        assert_eq!(options.get_username(), "postgres");
    }

    #[test]
    fn test_reserved_characters_in_password() {
        let options = build_database_options("db", 5432, "users_db", "app", "p@ss/w#rd:?");
        assert_eq!(options.get_host(), "db");
        assert_eq!(options.get_port(), 5432);
        assert_eq!(options.get_database(), Some("users_db"));
        assert_eq!(options.get_username(), "app");
    }

    #[test]
    fn test_database_url_is_parsed() {
        let options: PgConnectOptions = "postgres://app:p%40ss@db:5433/users_db".parse().unwrap();
        assert_eq!(options.get_host(), "db");
        assert_eq!(options.get_port(), 5433);
        assert_eq!(options.get_database(), Some("users_db"));
    }

    #[test]
    fn test_try_load_default_and_parse_error() {
        let port: u16 = try_load("API_TEST_UNSET_PORT_VARIABLE", "3000").unwrap();
        assert_eq!(port, 3000);

        let bad: anyhow::Result<u16> = try_load("API_TEST_UNSET_PORT_VARIABLE", "not-a-port");
        assert!(bad.is_err());
    }
}
