//! HTTP Handlers

use axum::Extension;
use axum::extract::State;
use axum::http::header;
use axum::response::{Html, IntoResponse, Redirect, Response};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{
    LoginInput, LoginOutcome, LoginUseCase, LogoutUseCase, RegisterInput, RegisterUseCase,
};
use crate::domain::entity::auth_session::AuthSession;
use crate::domain::repository::{AuthSessionRepository, UserRepository};
use crate::presentation::dto::Credentials;
use crate::presentation::pages::{
    INCORRECT_CREDENTIALS_MESSAGE, LOGGED_OUT_MESSAGE, LOGOUT_FAILED_MESSAGE, render_login_page,
    render_logout_page, render_register_page,
};
use kernel::error::app_error::GENERIC_SERVER_MESSAGE;

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<U, S>
where
    U: UserRepository + Clone + Send + Sync + 'static,
    S: AuthSessionRepository + Clone + Send + Sync + 'static,
{
    pub users: Arc<U>,
    pub sessions: Arc<S>,
    pub config: Arc<AuthConfig>,
}

impl<U, S> AuthAppState<U, S>
where
    U: UserRepository + Clone + Send + Sync + 'static,
    S: AuthSessionRepository + Clone + Send + Sync + 'static,
{
    pub fn new(users: U, sessions: S, config: AuthConfig) -> Self {
        Self {
            users: Arc::new(users),
            sessions: Arc::new(sessions),
            config: Arc::new(config),
        }
    }
}

// ============================================================================
// Index
// ============================================================================

/// GET /
pub async fn index() -> Redirect {
    Redirect::to("/login")
}

// ============================================================================
// Register
// ============================================================================

/// GET /register
pub async fn register_page() -> Html<String> {
    Html(render_register_page(None))
}

/// POST /register (form-urlencoded or JSON)
pub async fn register<U, S>(
    State(state): State<AuthAppState<U, S>>,
    Credentials(form): Credentials,
) -> Response
where
    U: UserRepository + Clone + Send + Sync + 'static,
    S: AuthSessionRepository + Clone + Send + Sync + 'static,
{
    let Some(form) = form else {
        return Html(render_register_page(Some(GENERIC_SERVER_MESSAGE))).into_response();
    };

    let use_case = RegisterUseCase::new(state.users.clone());

    let input = RegisterInput {
        user_name: form.username,
        password: form.password,
    };

    match use_case.execute(input).await {
        Ok(_) => Redirect::to("/login").into_response(),
        Err(e) => {
            e.log();
            let message = e.user_message();
            Html(render_register_page(Some(message.as_ref()))).into_response()
        }
    }
}

// ============================================================================
// Login
// ============================================================================

/// GET /login
pub async fn login_page() -> Html<String> {
    Html(render_login_page(None))
}

/// POST /login (form-urlencoded or JSON)
pub async fn login<U, S>(
    State(state): State<AuthAppState<U, S>>,
    Credentials(form): Credentials,
) -> Response
where
    U: UserRepository + Clone + Send + Sync + 'static,
    S: AuthSessionRepository + Clone + Send + Sync + 'static,
{
    let Some(form) = form else {
        return Html(render_login_page(Some(GENERIC_SERVER_MESSAGE))).into_response();
    };

    let use_case = LoginUseCase::new(
        state.users.clone(),
        state.sessions.clone(),
        state.config.clone(),
    );

    let input = LoginInput {
        user_name: form.username,
        password: form.password,
    };

    match use_case.execute(input).await {
        Ok(LoginOutcome::SignedIn { session_token, .. }) => {
            let cookie =
                platform::cookie::set_cookie_header(&state.config.cookie_config(), &session_token);

            ([(header::SET_COOKIE, cookie)], Redirect::to("/discover")).into_response()
        }
        Ok(LoginOutcome::IncorrectPassword) => {
            Html(render_login_page(Some(INCORRECT_CREDENTIALS_MESSAGE))).into_response()
        }
        Ok(LoginOutcome::UnknownUser) => Redirect::to("/register").into_response(),
        Err(e) => {
            e.log();
            let message = e.user_message();
            Html(render_login_page(Some(message.as_ref()))).into_response()
        }
    }
}

// ============================================================================
// Logout (requires session)
// ============================================================================

/// GET /logout
pub async fn logout<U, S>(
    State(state): State<AuthAppState<U, S>>,
    Extension(session): Extension<AuthSession>,
) -> Response
where
    U: UserRepository + Clone + Send + Sync + 'static,
    S: AuthSessionRepository + Clone + Send + Sync + 'static,
{
    let use_case = LogoutUseCase::new(state.sessions.clone());

    match use_case.execute(session.session_id).await {
        Ok(()) => {
            let cookie = platform::cookie::delete_cookie_header(&state.config.cookie_config());

            (
                [(header::SET_COOKIE, cookie)],
                Html(render_logout_page(LOGGED_OUT_MESSAGE)),
            )
                .into_response()
        }
        Err(e) => {
            e.log();
            Html(render_logout_page(LOGOUT_FAILED_MESSAGE)).into_response()
        }
    }
}
