//! Response envelope shared by every endpoint

use serde::{Deserialize, Serialize};

/// Standard Bittrex API response wrapper
///
/// `result` is only meaningful when `success` is true; `error` only when it
/// is false.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the call succeeded
    pub success: bool,
    /// Status message from the API (empty on most successful calls)
    #[serde(default)]
    pub message: String,
    /// Result data (present if successful)
    #[serde(default = "Option::default")]
    pub result: Option<T>,
    /// Cause of the failure, for errors raised on the client side
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Build a successful envelope
    pub fn ok(result: T) -> Self {
        Self {
            success: true,
            message: String::new(),
            result: Some(result),
            error: None,
        }
    }

    /// Build a failed envelope
    pub fn failure(message: impl Into<String>, error: Option<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            result: None,
            error,
        }
    }

    /// Check if the response indicates success
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get the result, returning the message if the API reported a failure
    pub fn into_result(self) -> Result<T, String> {
        if self.success {
            self.result
                .ok_or_else(|| "No result in response".to_string())
        } else {
            Err(self.error.unwrap_or(self.message))
        }
    }

    /// Transform the result, keeping the rest of the envelope
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiResponse<U> {
        ApiResponse {
            success: self.success,
            message: self.message,
            result: self.result.map(f),
            error: self.error,
        }
    }
}
