use resqx_sdk::ResqxError;
use thiserror::Error;

/// Infrastructure errors that can occur during application startup.
///
/// SECURITY: Display messages are sanitized and safe for logs/console output.
/// Use Display (%e) not Debug (?e) in logs; the source chain may echo config.
#[derive(Error, Debug)]
pub enum InfraError {
    #[error("API client setup failed. Check RESQX_API_BASE_URL and RESQX_API_KEY.")]
    ApiClient(#[source] ResqxError),

    #[error("TCP bind failed")]
    TcpBind(#[source] std::io::Error),

    #[error("Server error")]
    Server(#[source] std::io::Error),
}

impl From<ResqxError> for InfraError {
    fn from(e: ResqxError) -> Self {
        InfraError::ApiClient(e)
    }
}
