//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

mod app;
mod config;

use auth::domain::repository::AuthSessionRepository;
use auth::{AuthAppState, AuthConfig, MemorySessionStore, PgUserRepository};
use discover::{DiscoverAppState, DiscoverConfig, TicketmasterClient};
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;

/// Interval between sweeps of expired sessions
const SESSION_CLEANUP_INTERVAL: Duration = Duration::from_secs(5 * 60);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "api=info,auth=info,discover=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load()?;

    // Database connection
    // Lazy pool: an unreachable database is reported below but does not stop startup
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect_lazy_with(config.database.clone());

    let users = PgUserRepository::new(pool.clone());
    match users.check_connection().await {
        Ok(()) => tracing::info!("Database connection successful"),
        Err(e) => tracing::warn!(error = %e, "Database connection failed, continuing anyway"),
    }

    // Run migrations
    match sqlx::migrate!("../../../database/migrations").run(&pool).await {
        Ok(()) => tracing::info!("Migrations completed"),
        Err(e) => tracing::warn!(error = %e, "Migrations failed, continuing anyway"),
    }

    // Auth configuration
    let auth_config = match config.session_secret.as_deref() {
        Some(secret) => AuthConfig::from_secret(secret),
        None => {
            tracing::warn!("SESSION_SECRET not set; sessions will not survive a restart");
            AuthConfig::with_random_secret()
        }
    }
    .with_cookie_secure(config.cookie_secure);

    let sessions = MemorySessionStore::new();
    spawn_session_cleanup(sessions.clone());

    // Discover configuration
    if config.api_key.is_empty() {
        tracing::warn!("API_KEY not set; event lookups will fail");
    }

    let discover_config = DiscoverConfig {
        base_url: config.events_api_url,
        api_key: config.api_key,
        keyword: config.events_keyword,
        ..DiscoverConfig::default()
    };
    let event_client = TicketmasterClient::new(&discover_config.base_url, &discover_config.api_key)?;

    // Build router
    let app = app::build_router(
        AuthAppState::new(users, sessions, auth_config),
        DiscoverAppState::new(event_client, discover_config),
    );

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Periodically drop expired sessions from the in-memory store
///
/// Errors here are logged and the next tick tries again.
fn spawn_session_cleanup(sessions: MemorySessionStore) {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(SESSION_CLEANUP_INTERVAL);
        loop {
            ticker.tick().await;
            match sessions.cleanup_expired().await {
                Ok(deleted) if deleted > 0 => {
                    tracing::info!(sessions_deleted = deleted, "Auth session cleanup completed");
                }
                Ok(_) => {}
                Err(e) => {
                    tracing::warn!(error = %e, "Auth session cleanup failed, continuing anyway");
                }
            }
        }
    });
}
