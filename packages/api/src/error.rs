//! # Error taxonomy for backend calls
//!
//! Three ways a call can fail, mirrored by the [`ApiError`] variants:
//!
//! - the backend was unreachable (transport failure),
//! - the backend answered with a non-success status and, usually, a JSON body
//!   whose `"error"` field explains why (validation rejection, authorization
//!   failure, business errors like a full course),
//! - the backend answered 2xx but the body did not decode into the expected
//!   shape.
//!
//! Views surface [`backend_message`](ApiError::backend_message) verbatim when
//! present and fall back to an action-specific generic string otherwise. There
//! is no retry anywhere; every failure is terminal for that one user action.

use serde::Deserialize;

/// Shape of the backend's error bodies: `{"error": "...", "details": ...}`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The backend rejected the request.
    #[error("{message}")]
    Backend { status: u16, message: String },

    /// A success response carried a body we could not decode.
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// Build a `Backend` error from a response status and raw body, pulling
    /// the message out of the backend's `"error"` field when there is one.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .map(|b| b.error)
            .unwrap_or_else(|_| format!("Request failed with status {status}"));
        ApiError::Backend { status, message }
    }

    /// The backend's own message, if this failure carried one.
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            ApiError::Backend { message, .. } => Some(message),
            _ => None,
        }
    }

    /// Message to show the user: the backend's own words, or `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        self.backend_message().unwrap_or(fallback).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_backend_error_field() {
        let err = ApiError::from_response(400, r#"{"error": "Course is full"}"#);
        assert_eq!(err.backend_message(), Some("Course is full"));
        assert_eq!(err.to_string(), "Course is full");
    }

    #[test]
    fn ignores_extra_body_fields() {
        let err = ApiError::from_response(
            422,
            r#"{"error": "Invalid token", "details": "signature mismatch"}"#,
        );
        assert_eq!(err.backend_message(), Some("Invalid token"));
    }

    #[test]
    fn falls_back_when_body_is_not_json() {
        let err = ApiError::from_response(502, "<html>Bad Gateway</html>");
        assert_eq!(
            err.backend_message(),
            Some("Request failed with status 502")
        );
    }

    #[test]
    fn user_message_prefers_backend_words() {
        let err = ApiError::from_response(400, r#"{"error": "Already enrolled in this course"}"#);
        assert_eq!(
            err.user_message("Failed to enroll in course"),
            "Already enrolled in this course"
        );

        let decode: ApiError = serde_json::from_str::<i32>("oops").unwrap_err().into();
        assert_eq!(
            decode.user_message("Failed to enroll in course"),
            "Failed to enroll in course"
        );
    }

    #[test]
    fn keeps_the_status_code() {
        let err = ApiError::from_response(403, r#"{"error": "Unauthorized"}"#);
        match err {
            ApiError::Backend { status, .. } => assert_eq!(status, 403),
            other => panic!("unexpected variant: {other:?}"),
        }
    }
}
