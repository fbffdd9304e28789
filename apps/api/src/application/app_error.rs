use resqx_sdk::ResqxError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<ResqxError> for AppError {
    fn from(e: ResqxError) -> Self {
        match e.status() {
            Some(status) if status.as_u16() == 401 => AppError::Unauthorized,
            _ => AppError::Upstream(e.to_string()),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
