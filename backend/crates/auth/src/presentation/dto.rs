//! Request DTOs

use axum::extract::{Form, FromRequest, Json, Request};
use axum::http::header;
use serde::Deserialize;
use std::convert::Infallible;

/// Body of the register and login forms
///
/// Missing fields deserialize as empty strings and are rejected by
/// validation instead of by the extractor.
#[derive(Clone, Default, Deserialize)]
pub struct CredentialsForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

impl std::fmt::Debug for CredentialsForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsForm")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Credentials from either an `application/json` or a form-urlencoded body
///
/// The decoder is picked from `Content-Type`. A body that fails to decode
/// yields `None` so the handler can re-render its page.
#[derive(Debug)]
pub struct Credentials(pub Option<CredentialsForm>);

impl<S> FromRequest<S> for Credentials
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let decoded = if is_json(&req) {
            Json::<CredentialsForm>::from_request(req, state)
                .await
                .map(|Json(form)| form)
                .map_err(|e| e.body_text())
        } else {
            Form::<CredentialsForm>::from_request(req, state)
                .await
                .map(|Form(form)| form)
                .map_err(|e| e.body_text())
        };

        match decoded {
            Ok(form) => Ok(Self(Some(form))),
            Err(reason) => {
                tracing::debug!(reason = %reason, "Credentials body rejected");
                Ok(Self(None))
            }
        }
    }
}

fn is_json(req: &Request) -> bool {
    req.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .is_some_and(|mime| mime.trim().eq_ignore_ascii_case("application/json"))
}
