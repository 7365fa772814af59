//! API response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use ecommerce_core::ErrorResponse;

/// Application error type for Axum.
///
/// Renders as `{"error": "<status text>", "message": "<message>"}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    /// Creates an error with an explicit status.
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// 400 Bad Request.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// 404 Not Found.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    /// 405 Method Not Allowed.
    #[must_use]
    pub fn method_not_allowed() -> Self {
        Self::new(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
    }

    /// 500 Internal Server Error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    /// Returns the response body.
    #[must_use]
    pub fn body(&self) -> ErrorResponse {
        ErrorResponse::new(
            self.status.canonical_reason().unwrap_or("Unknown"),
            self.message.clone(),
        )
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body())).into_response()
    }
}

/// Result type for Axum handlers.
pub type ApiResult<T> = Result<T, AppError>;

/// Helper to create a created (201) response.
pub fn created<T>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::CREATED, Json(data))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_uses_status_text() {
        let body = AppError::not_found("User not found").body();
        assert_eq!(body.error, "Not Found");
        assert_eq!(body.message, "User not found");

        let body = AppError::method_not_allowed().body();
        assert_eq!(body.error, "Method Not Allowed");
        assert_eq!(body.message, "Method not allowed");
    }

    #[test]
    fn test_error_status() {
        assert_eq!(AppError::bad_request("x").status, StatusCode::BAD_REQUEST);
        assert_eq!(AppError::internal("x").status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
