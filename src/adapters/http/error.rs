//! Uniform JSON error body for every endpoint.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Error body returned by all API endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: serde_json::Value,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details),
        }
    }

    /// Pairs the body with a status code.
    pub fn into_response_with(self, status: StatusCode) -> Response {
        (status, Json(self)).into_response()
    }

    /// Body for a rejected request field.
    pub fn invalid_field(field: &str, message: impl Into<String>) -> Self {
        Self::with_details(
            "VALIDATION_FAILED",
            message,
            serde_json::json!({ "field": field }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn details_are_omitted_when_absent() {
        let json = serde_json::to_value(ErrorResponse::new("NOT_FOUND", "gone")).unwrap();
        assert_eq!(json["code"], "NOT_FOUND");
        assert!(json.get("details").is_none());
    }

    #[test]
    fn invalid_field_carries_field_name() {
        let body = ErrorResponse::invalid_field("sort_by", "bad sort");
        assert_eq!(body.code, "VALIDATION_FAILED");
        assert_eq!(body.details, Some(serde_json::json!({ "field": "sort_by" })));
    }

    #[test]
    fn into_response_with_sets_status() {
        let response = ErrorResponse::new("X", "y").into_response_with(StatusCode::CONFLICT);
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }
}
