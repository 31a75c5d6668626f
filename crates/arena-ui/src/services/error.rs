//! Typed failure taxonomy for the arena API.
//!
//! # Design
//! - Classification from status code + structured body is pure so the table
//!   can be tested without a browser.
//! - Server detail is carried verbatim only where the UI may show it
//!   (conflicts and validation); 5xx detail is deliberately dropped.

use arena_api_models::ErrorBody;
use thiserror::Error;

/// Failure of one API operation.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The target entity vanished server-side.
    #[error("not found")]
    NotFound,
    /// The request collided with existing state, e.g. a duplicate bot name.
    #[error("{0}")]
    Conflict(String),
    /// The server rejected the input, e.g. a malformed filter expression.
    #[error("{0}")]
    Validation(String),
    /// The server failed internally; detail is not surfaced.
    #[error("internal server error")]
    ServerFault,
    /// No usable response arrived at all.
    #[error("network failure: {0}")]
    NetworkFailure(String),
}

/// Classify a non-2xx response into the taxonomy.
#[must_use]
pub fn classify(status: u16, body: Option<&ErrorBody>) -> ApiError {
    let detail = || {
        body.and_then(|body| body.message.clone())
            .unwrap_or_else(|| "request rejected".to_string())
    };
    match status {
        404 => ApiError::NotFound,
        409 => ApiError::Conflict(detail()),
        400..=499 => ApiError::Validation(detail()),
        _ => ApiError::ServerFault,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(message: &str) -> ErrorBody {
        ErrorBody {
            error_code: "x".to_string(),
            message: Some(message.to_string()),
        }
    }

    #[test]
    fn not_found_ignores_the_body() {
        assert_eq!(classify(404, Some(&body("gone"))), ApiError::NotFound);
        assert_eq!(classify(404, None), ApiError::NotFound);
    }

    #[test]
    fn conflict_carries_the_server_message_verbatim() {
        assert_eq!(
            classify(409, Some(&body("Bot with the same name already exists"))),
            ApiError::Conflict("Bot with the same name already exists".to_string())
        );
    }

    #[test]
    fn other_client_errors_are_validation_failures() {
        assert_eq!(
            classify(400, Some(&body("bad filter"))),
            ApiError::Validation("bad filter".to_string())
        );
        assert_eq!(
            classify(422, None),
            ApiError::Validation("request rejected".to_string())
        );
    }

    #[test]
    fn server_errors_drop_their_detail() {
        assert_eq!(classify(500, Some(&body("stack trace"))), ApiError::ServerFault);
        assert_eq!(classify(503, None), ApiError::ServerFault);
    }

    #[test]
    fn display_is_fit_for_a_dialog() {
        assert_eq!(ApiError::ServerFault.to_string(), "internal server error");
        assert_eq!(
            ApiError::Conflict("duplicate".to_string()).to_string(),
            "duplicate"
        );
    }
}
