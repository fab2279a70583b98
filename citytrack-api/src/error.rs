//! Error types for citytrack-api
//!
//! Every handler failure surfaces as `{"error": <message>}` with the matching
//! HTTP status.

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use citytrack_common::api::ErrorResponse;
use thiserror::Error;
use tracing::warn;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed or missing required input (400)
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Referenced resource not found (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Key already taken, e.g. duplicate route number (409)
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Internal server error (500)
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message placed in the response body
    pub fn message(&self) -> &str {
        match self {
            ApiError::BadRequest(msg)
            | ApiError::NotFound(msg)
            | ApiError::Conflict(msg)
            | ApiError::Internal(msg) => msg,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(ErrorResponse::new(self.message()));
        (status, body).into_response()
    }
}

impl From<citytrack_common::Error> for ApiError {
    fn from(err: citytrack_common::Error) -> Self {
        use citytrack_common::Error;

        match err {
            Error::NotFound(msg) => ApiError::NotFound(msg),
            Error::Conflict(msg) => ApiError::Conflict(msg),
            Error::InvalidInput(msg) => ApiError::BadRequest(msg),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

/// Unparseable or wrongly-typed JSON bodies are client errors
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        warn!("Rejected request body: {}", rejection.body_text());
        ApiError::BadRequest(rejection.body_text())
    }
}

/// Undecodable query strings (e.g. a repeated `route`) are client errors
impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        warn!("Rejected query string: {}", rejection.body_text());
        ApiError::BadRequest(rejection.body_text())
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ApiError::BadRequest(String::new()).status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::NotFound(String::new()).status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::Conflict(String::new()).status(), StatusCode::CONFLICT);
        assert_eq!(
            ApiError::Internal(String::new()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_common_error_conversion_keeps_message() {
        let err: ApiError = citytrack_common::Error::NotFound("Bus not found".to_string()).into();
        assert!(matches!(err, ApiError::NotFound(_)));
        assert_eq!(err.message(), "Bus not found");

        let err: ApiError =
            citytrack_common::Error::Conflict("Route number already exists".to_string()).into();
        assert_eq!(err.status(), StatusCode::CONFLICT);
        assert_eq!(err.message(), "Route number already exists");
    }

    #[test]
    fn test_config_error_maps_to_internal() {
        let err: ApiError = citytrack_common::Error::Config("bad".to_string()).into();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_into_response_body_shape() {
        let response = ApiError::BadRequest("Route query param required".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, serde_json::json!({ "error": "Route query param required" }));
    }
}
