//! Auth Middleware
//!
//! Gate for protected routes.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use std::sync::Arc;

use crate::application::CheckSessionUseCase;
use crate::application::config::AuthConfig;
use crate::domain::repository::AuthSessionRepository;

/// Middleware state
#[derive(Clone)]
pub struct AuthGateState<S>
where
    S: AuthSessionRepository + Clone + Send + Sync + 'static,
{
    pub sessions: Arc<S>,
    pub config: Arc<AuthConfig>,
}

impl<S> AuthGateState<S>
where
    S: AuthSessionRepository + Clone + Send + Sync + 'static,
{
    pub fn new(sessions: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self { sessions, config }
    }
}

/// Middleware that requires a live session
///
/// Without one the caller is sent to `/login`. With one, the `AuthSession`
/// is inserted into request extensions for the handler.
pub async fn require_session<S>(
    State(state): State<AuthGateState<S>>,
    mut req: Request,
    next: Next,
) -> Response
where
    S: AuthSessionRepository + Clone + Send + Sync + 'static,
{
    let token = platform::cookie::extract_cookie(req.headers(), &state.config.session_cookie_name);

    let use_case = CheckSessionUseCase::new(state.sessions.clone(), state.config.clone());

    match use_case.lookup(token.as_deref()).await {
        Ok(Some(session)) => {
            req.extensions_mut().insert(session);
            next.run(req).await
        }
        Ok(None) => Redirect::to("/login").into_response(),
        Err(e) => e.into_response(),
    }
}
