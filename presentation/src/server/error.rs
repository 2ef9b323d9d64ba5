//! JSON error responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use deepthink_application::AnswerQueryError;
use serde_json::json;
use tracing::error;

pub const NO_USER_MESSAGE: &str = "No user message supplied";
pub const GENERATION_FAILED: &str = "Failed to generate response";
pub const INVALID_BODY: &str = "Invalid request body";

/// Error body `{"error": "..."}` with its status code
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: &'static str,
}

impl ApiError {
    pub fn bad_request(message: &'static str) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message,
        }
    }

    pub fn internal() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: GENERATION_FAILED,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        self.message
    }
}

impl From<AnswerQueryError> for ApiError {
    fn from(err: AnswerQueryError) -> Self {
        if err.is_client_error() {
            return Self::bad_request(NO_USER_MESSAGE);
        }
        // Detail stays in the log
        error!("chat api error: {}", err);
        Self::internal()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deepthink_application::SearchError;

    #[test]
    fn test_client_error_maps_to_400() {
        let err = ApiError::from(AnswerQueryError::NoUserMessage);
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message(), NO_USER_MESSAGE);
    }

    #[test]
    fn test_upstream_error_is_opaque() {
        let err = ApiError::from(AnswerQueryError::Search(SearchError::Decode(
            "expected value at line 1".to_string(),
        )));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message(), GENERATION_FAILED);
    }
}
