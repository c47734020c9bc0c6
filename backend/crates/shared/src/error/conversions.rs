//! Error conversions - framework integration for [`AppError`]

#[cfg(feature = "axum")]
use super::app_error::AppError;

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

/// 状態ページを plain text で返す
///
/// 5xx系では内部の詳細を出さず、固定文言のみを返します。
#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let body = format!("{}\n\n{}", self.kind().as_str(), self.public_message());

        (status, body).into_response()
    }
}

#[cfg(all(test, feature = "axum"))]
mod tests {
    use super::*;
    use axum::response::IntoResponse;

    #[test]
    fn test_into_response_status() {
        let response = AppError::not_found("Page not found").into_response();
        assert_eq!(response.status(), http::StatusCode::NOT_FOUND);

        let response = AppError::internal("secret detail").into_response();
        assert_eq!(response.status(), http::StatusCode::INTERNAL_SERVER_ERROR);
    }
}
