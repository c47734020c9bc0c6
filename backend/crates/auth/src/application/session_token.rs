//! Session Token
//!
//! Cookie value format: `<session_id>.<base64url(HMAC-SHA256(session_id))>`.
//! The signature binds the cookie to this server's secret; the session itself
//! stays server-side.

use kernel::id::SessionId;
use platform::crypto::{from_base64_url, hmac_sha256, to_base64_url, verify_hmac_sha256};

use crate::error::{AuthError, AuthResult};

/// Sign a session ID for the cookie
pub fn issue(secret: &[u8], session_id: SessionId) -> String {
    let id = session_id.to_string();
    let signature = hmac_sha256(secret, id.as_bytes());
    format!("{}.{}", id, to_base64_url(&signature))
}

/// Verify a cookie value and recover the session ID
pub fn verify(secret: &[u8], token: &str) -> AuthResult<SessionId> {
    let (id, signature_b64) = token.split_once('.').ok_or(AuthError::SessionInvalid)?;

    let signature = from_base64_url(signature_b64).map_err(|_| AuthError::SessionInvalid)?;

    if !verify_hmac_sha256(secret, id.as_bytes(), &signature) {
        return Err(AuthError::SessionInvalid);
    }

    SessionId::parse_str(id).ok_or(AuthError::SessionInvalid)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"0123456789abcdef0123456789abcdef";

    #[test]
    fn test_issue_then_verify() {
        let id = SessionId::new();
        let token = issue(SECRET, id);
        assert!(token.starts_with(&id.to_string()));
        assert_eq!(verify(SECRET, &token).unwrap(), id);
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = issue(SECRET, SessionId::new());
        let err = verify(b"some other secret", &token).unwrap_err();
        assert!(matches!(err, AuthError::SessionInvalid));
    }

    #[test]
    fn test_tampered_id_rejected() {
        let token = issue(SECRET, SessionId::new());
        let (_, sig) = token.split_once('.').unwrap();
        let forged = format!("{}.{}", SessionId::new(), sig);
        assert!(verify(SECRET, &forged).is_err());
    }

    #[test]
    fn test_malformed_tokens_rejected() {
        for token in ["", "abc", "abc.", ".abc", "not-a-uuid.!!!", "a.b.c"] {
            assert!(verify(SECRET, token).is_err(), "{token:?}");
        }
    }
}
