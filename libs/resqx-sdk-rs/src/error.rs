use reqwest::StatusCode;
use resqx_types::EnvelopeError;
use thiserror::Error;

/// SDK-specific errors.
///
/// Nothing in the SDK retries or swallows these; callers decide what a
/// status code means for them.
#[derive(Debug, Error)]
pub enum ResqxError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network or HTTP-layer failure
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Server answered with a non-2xx status
    #[error("HTTP {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// Request body could not be serialized; nothing was sent
    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// 2xx body was not a valid envelope
    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Envelope reported `success: false`
    #[error("API error: {message}")]
    Api { message: String },

    /// A request transform refused the request
    #[error("Request transform failed: {0}")]
    Transform(String),
}

impl From<EnvelopeError> for ResqxError {
    fn from(e: EnvelopeError) -> Self {
        match e {
            EnvelopeError::Unsuccessful { message } => ResqxError::Api { message },
        }
    }
}

impl ResqxError {
    /// The upstream HTTP status, if the server answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ResqxError::Status { status, .. } => Some(*status),
            ResqxError::Network(e) => e.status(),
            _ => None,
        }
    }
}
