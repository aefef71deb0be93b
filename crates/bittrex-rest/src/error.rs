//! Error types for REST API operations

use bittrex_auth::AuthError;
use bittrex_types::ApiResponse;
use reqwest::StatusCode;

/// Message carried by every transport-level failure
pub const URL_REQUEST_ERROR: &str = "URL request error";

/// Discriminant of [`RestError`], for callers that only need to branch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidArgument,
    AuthRequired,
    Transport,
    Upstream,
    Decode,
    InvalidCredentials,
}

/// Errors that can occur during REST API operations
#[derive(Debug, thiserror::Error)]
pub enum RestError {
    /// A required argument was empty
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Missing API credentials for private endpoint
    #[error("Authentication required for this endpoint")]
    AuthRequired,

    /// Request never produced a usable HTTP response
    ///
    /// Covers network failures, non-200 statuses and empty bodies.
    #[error("{message}: {}", transport_cause(.status, .source))]
    Transport {
        message: String,
        status: Option<StatusCode>,
        #[source]
        source: Option<reqwest::Error>,
    },

    /// API answered with `success: false`
    #[error("API error: {message}")]
    Upstream {
        /// Message reported by the API
        message: String,
        /// The envelope exactly as received
        response: ApiResponse<serde_json::Value>,
    },

    /// Response body could not be decoded
    #[error("Decode error: {message}")]
    Decode {
        message: String,
        /// Raw response body
        body: String,
    },

    /// Credentials could not be loaded
    #[error(transparent)]
    InvalidCredentials(#[from] AuthError),
}

fn transport_cause(status: &Option<StatusCode>, source: &Option<reqwest::Error>) -> String {
    match (source, status) {
        (Some(err), _) => err.to_string(),
        (None, Some(status)) if *status != StatusCode::OK => format!("HTTP status {}", status),
        _ => "empty response body".to_string(),
    }
}

impl RestError {
    /// Transport error from a failed `reqwest` call
    pub(crate) fn transport(source: reqwest::Error) -> Self {
        Self::Transport {
            message: URL_REQUEST_ERROR.to_string(),
            status: source.status(),
            source: Some(source),
        }
    }

    /// Transport error from an unusable HTTP status or an empty body
    pub(crate) fn bad_response(status: StatusCode) -> Self {
        Self::Transport {
            message: URL_REQUEST_ERROR.to_string(),
            status: Some(status),
            source: None,
        }
    }

    /// Get the kind of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Self::AuthRequired => ErrorKind::AuthRequired,
            Self::Transport { .. } => ErrorKind::Transport,
            Self::Upstream { .. } => ErrorKind::Upstream,
            Self::Decode { .. } => ErrorKind::Decode,
            Self::InvalidCredentials(_) => ErrorKind::InvalidCredentials,
        }
    }

    /// HTTP status of the failed response, if one was received
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Transport { status, .. } => *status,
            _ => None,
        }
    }

    /// Message reported by the API for an upstream failure
    pub fn upstream_message(&self) -> Option<&str> {
        match self {
            Self::Upstream { message, .. } => Some(message),
            _ => None,
        }
    }

    /// Render this error as a failed envelope
    ///
    /// Upstream failures return the envelope exactly as received. Transport
    /// failures carry `"URL request error"` with the cause in `error`.
    pub fn into_envelope(self) -> ApiResponse<serde_json::Value> {
        match self {
            Self::Upstream { response, .. } => response,
            Self::Transport {
                message,
                status,
                source,
            } => ApiResponse::failure(message, Some(transport_cause(&status, &source))),
            Self::Decode { message, .. } => ApiResponse::failure("Decode error", Some(message)),
            other => ApiResponse::failure(other.to_string(), None),
        }
    }
}

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind() {
        assert_eq!(RestError::AuthRequired.kind(), ErrorKind::AuthRequired);
        assert_eq!(
            RestError::InvalidArgument("market".into()).kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(
            RestError::from(AuthError::EnvVarNotSet("BITTREX_API_KEY".into())).kind(),
            ErrorKind::InvalidCredentials
        );
    }

    #[test]
    fn test_transport_envelope() {
        let err = RestError::bad_response(StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(err.status(), Some(StatusCode::SERVICE_UNAVAILABLE));

        let envelope = err.into_envelope();
        assert!(!envelope.success);
        assert_eq!(envelope.message, URL_REQUEST_ERROR);
        assert_eq!(envelope.result, None);
        assert!(envelope.error.unwrap().contains("503"));
    }

    #[test]
    fn test_empty_body_cause() {
        let err = RestError::bad_response(StatusCode::OK);
        assert_eq!(err.to_string(), "URL request error: empty response body");
    }

    #[test]
    fn test_upstream_envelope_is_verbatim() {
        let response = ApiResponse::failure("INVALID_MARKET", None);
        let err = RestError::Upstream {
            message: "INVALID_MARKET".to_string(),
            response: response.clone(),
        };

        assert_eq!(err.upstream_message(), Some("INVALID_MARKET"));
        assert_eq!(err.into_envelope(), response);
    }

    #[test]
    fn test_auth_required_envelope() {
        let envelope = RestError::AuthRequired.into_envelope();
        assert!(!envelope.success);
        assert!(envelope.message.contains("Authentication required"));
    }
}
