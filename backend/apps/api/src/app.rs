//! Router Composition
//!
//! Public pages are merged with the gated group. The gate wraps the gated
//! group's fallback too, so unknown paths redirect to `/login` until the
//! caller has a session.

use auth::AuthAppState;
use auth::domain::repository::{AuthSessionRepository, UserRepository};
use axum::Router;
use discover::{DiscoverAppState, EventSource};
use kernel::error::app_error::AppError;
use tower_http::trace::TraceLayer;

pub fn build_router<U, S, E>(
    auth_state: AuthAppState<U, S>,
    discover_state: DiscoverAppState<E>,
) -> Router
where
    U: UserRepository + Clone + Send + Sync + 'static,
    S: AuthSessionRepository + Clone + Send + Sync + 'static,
    E: EventSource + Send + Sync + 'static,
{
    let gated = auth::member_router(auth_state.clone())
        .merge(discover::discover_router_generic(discover_state))
        .fallback(not_found);

    auth::public_router(auth_state.clone())
        .merge(auth::protect(gated, &auth_state))
        .layer(TraceLayer::new_for_http())
}

async fn not_found() -> AppError {
    AppError::not_found("Page not found")
}
