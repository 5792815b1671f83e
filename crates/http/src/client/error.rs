//! Client error types

use serde::Deserialize;
use thiserror::Error;
use zaplink_core::FetchError;

/// Client error types
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or request error
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned an error status
    #[error("Server error {status}: {message}")]
    ServerError { status: u16, message: String },

    /// The bearer token is missing or no longer valid
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Resource not found
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Bad request, e.g. an invalid URL or a taken alias
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Forbidden
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

/// Error body shapes the backend produces
#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
    message: Option<String>,
}

impl ClientError {
    /// Create error from HTTP status code
    pub fn from_status(status: reqwest::StatusCode, message: String) -> Self {
        match status.as_u16() {
            400 => Self::BadRequest(message),
            401 => Self::Unauthorized(message),
            403 => Self::Forbidden(message),
            404 => Self::NotFound(message),
            _ => Self::ServerError {
                status: status.as_u16(),
                message,
            },
        }
    }

    /// Build the error for a failed response body.
    ///
    /// Prefers the `error` or `message` field of a JSON body, then the raw text, then the
    /// status reason.
    pub fn from_body(status: reqwest::StatusCode, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|body| body.error.or(body.message))
            .or_else(|| {
                let text = body.trim();
                (!text.is_empty()).then(|| text.to_string())
            })
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .map_or_else(|| status.to_string(), str::to_string)
            });

        Self::from_status(status, message)
    }

    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized(_))
    }

    /// Message suitable for showing to the user.
    ///
    /// Backend messages are passed through unchanged so the user sees e.g. why an alias
    /// was rejected.
    pub fn user_message(&self) -> String {
        match self {
            Self::BadRequest(message)
            | Self::Unauthorized(message)
            | Self::Forbidden(message)
            | Self::NotFound(message)
            | Self::ServerError { message, .. } => message.clone(),
            Self::Request(_) => "Unable to reach the server. Please try again later.".to_string(),
            Self::Serialization(_) => "Unexpected response from the server.".to_string(),
            Self::Configuration(message) => message.clone(),
        }
    }
}

impl From<ClientError> for FetchError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Unauthorized(message) => Self::Unauthorized(message),
            other => Self::Failed(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_from_body_prefers_error_field() {
        let err = ClientError::from_body(
            StatusCode::BAD_REQUEST,
            r#"{"error":"Alias already in use"}"#,
        );
        assert!(matches!(&err, ClientError::BadRequest(m) if m == "Alias already in use"));
        assert_eq!(err.user_message(), "Alias already in use");
    }

    #[test]
    fn test_from_body_falls_back_to_message_text_and_reason() {
        let err = ClientError::from_body(StatusCode::NOT_FOUND, r#"{"message":"URL not found"}"#);
        assert_eq!(err.user_message(), "URL not found");

        let err = ClientError::from_body(StatusCode::BAD_GATEWAY, "upstream down");
        assert!(matches!(err, ClientError::ServerError { status: 502, .. }));
        assert_eq!(err.user_message(), "upstream down");

        let err = ClientError::from_body(StatusCode::FORBIDDEN, "");
        assert_eq!(err.user_message(), "Forbidden");
    }

    #[test]
    fn test_fetch_error_conversion_keeps_unauthorized() {
        let err = ClientError::from_status(StatusCode::UNAUTHORIZED, "expired".into());
        assert!(err.is_unauthorized());
        assert_eq!(FetchError::from(err), FetchError::Unauthorized("expired".into()));

        let err = ClientError::from_status(StatusCode::INTERNAL_SERVER_ERROR, "boom".into());
        assert!(!FetchError::from(err).is_unauthorized());
    }
}
