use crate::app_error::AppError;
use axum::Json;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use resqx_types::ErrorCode;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log the error before it gets converted into a status response.
        tracing::error!(error = ?self, "Request failed");

        match self {
            AppError::InvalidInput(msg) => {
                error_resp(StatusCode::BAD_REQUEST, ErrorCode::InvalidInput, Some(msg))
            }
            AppError::NotFound(msg) => {
                error_resp(StatusCode::NOT_FOUND, ErrorCode::NotFound, Some(msg))
            }
            AppError::Unauthorized => error_resp(
                StatusCode::UNAUTHORIZED,
                ErrorCode::Unauthorized,
                Some("Unauthorized".into()),
            ),
            AppError::Upstream(_) => error_resp(
                StatusCode::BAD_GATEWAY,
                ErrorCode::UpstreamError,
                Some("Upstream service unavailable".into()),
            ),
            AppError::Internal(_) => {
                error_resp(StatusCode::INTERNAL_SERVER_ERROR, ErrorCode::InternalError, None)
            }
        }
    }
}

fn error_resp(status: StatusCode, code: ErrorCode, message: Option<String>) -> Response {
    let body = match message {
        Some(msg) => serde_json::json!({ "ok": false, "code": code.as_str(), "error": msg }),
        None => serde_json::json!({ "ok": false, "code": code.as_str() }),
    };
    (status, Json(body)).into_response()
}
