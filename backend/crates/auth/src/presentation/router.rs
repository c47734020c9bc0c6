//! Auth Router

use axum::{Router, middleware, routing::get};

use crate::domain::repository::{AuthSessionRepository, UserRepository};
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::{AuthGateState, require_session};

/// Routes open to anonymous callers: `/`, `/register`, `/login`
pub fn public_router<U, S>(state: AuthAppState<U, S>) -> Router
where
    U: UserRepository + Clone + Send + Sync + 'static,
    S: AuthSessionRepository + Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(handlers::index))
        .route(
            "/register",
            get(handlers::register_page).post(handlers::register::<U, S>),
        )
        .route(
            "/login",
            get(handlers::login_page).post(handlers::login::<U, S>),
        )
        .with_state(state)
}

/// Routes for signed-in callers; wrap with [`protect`]
pub fn member_router<U, S>(state: AuthAppState<U, S>) -> Router
where
    U: UserRepository + Clone + Send + Sync + 'static,
    S: AuthSessionRepository + Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/logout", get(handlers::logout::<U, S>))
        .with_state(state)
}

/// Put every route of `router`, its fallback included, behind the session gate
pub fn protect<U, S>(router: Router, state: &AuthAppState<U, S>) -> Router
where
    U: UserRepository + Clone + Send + Sync + 'static,
    S: AuthSessionRepository + Clone + Send + Sync + 'static,
{
    let gate = AuthGateState::new(state.sessions.clone(), state.config.clone());
    router.layer(middleware::from_fn_with_state(gate, require_session::<S>))
}
