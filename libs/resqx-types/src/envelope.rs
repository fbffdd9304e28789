use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard wrapper returned by every ResQ-X API endpoint.
///
/// `data` may be null even on success (e.g. "no active subscription"), so it is
/// always modelled as absent-capable. A missing `success` flag is a malformed
/// envelope and fails deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,

    pub data: Option<T>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// The API answered, but reported failure.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EnvelopeError {
    #[error("API reported failure: {message}")]
    Unsuccessful { message: String },
}

impl<T> ApiResponse<T> {
    pub fn ok(data: Option<T>) -> Self {
        Self {
            success: true,
            data,
            message: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
        }
    }

    /// Turns the envelope into a tagged result.
    ///
    /// - `success=true` with data: `Ok(Some(data))`
    /// - `success=true` with null/absent data: `Ok(None)`
    /// - `success=false`: `Err`, any `data` is discarded
    pub fn into_result(self) -> Result<Option<T>, EnvelopeError> {
        if self.success {
            Ok(self.data)
        } else {
            Err(EnvelopeError::Unsuccessful {
                message: self
                    .message
                    .unwrap_or_else(|| "request was not successful".to_string()),
            })
        }
    }
}
