//! Request error types for the conversion API.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Errors surfaced to HTTP clients.
///
/// Every variant renders as HTTP 400 with a JSON `{"error": "..."}` body.
#[derive(Error, Debug)]
pub enum RequestError {
    /// Query string could not be deserialized (missing or malformed parameter).
    #[error("{0}")]
    MalformedQuery(String),

    /// The `temp` parameter was present but not a number.
    #[error("temp must be a number")]
    NonNumericTemp,

    /// The `(scale, target_scale)` pair is not convertible.
    #[error("Invalid scale or target scale")]
    InvalidScalePair,
}

/// JSON body for error responses.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}

impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_scale_pair_message_is_fixed() {
        assert_eq!(
            RequestError::InvalidScalePair.to_string(),
            "Invalid scale or target scale"
        );
    }

    #[test]
    fn renders_as_bad_request() {
        let response = RequestError::NonNumericTemp.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
