use axum::{
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::app_error::AppError;
use crate::export::Download;

impl IntoResponse for Download {
    fn into_response(self) -> Response {
        let content_type = HeaderValue::from_str(&self.mime_type);
        let disposition = HeaderValue::from_str(&self.content_disposition());

        match (content_type, disposition) {
            (Ok(content_type), Ok(disposition)) => (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, content_type),
                    (header::CONTENT_DISPOSITION, disposition),
                ],
                self.contents,
            )
                .into_response(),
            _ => AppError::Internal("Failed to build download headers".into()).into_response(),
        }
    }
}
