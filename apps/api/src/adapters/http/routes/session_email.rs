//! Same-origin endpoints carrying the signup email across the redirect-based
//! signup flow.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    response::IntoResponse,
    routing::{get, post},
};
use axum_extra::extract::cookie::CookieJar;
use serde::{Deserialize, Serialize};

use crate::{
    adapters::http::{app_state::AppState, session},
    app_error::{AppError, AppResult},
};

#[derive(Deserialize)]
struct SetResetEmailPayload {
    email: Option<String>,
}

#[derive(Serialize)]
struct OkResponse {
    ok: bool,
}

#[derive(Serialize)]
struct EmailResponse {
    ok: bool,
    email: String,
}

/// POST /api/set-reset-email
/// Stores `email` in an HTTP-only cookie for the configured lifetime
async fn set_reset_email(
    State(app_state): State<AppState>,
    jar: CookieJar,
    payload: Result<Json<SetResetEmailPayload>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(payload) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Rejected set-reset-email body");
        AppError::InvalidInput("Request body must be JSON with an email field".into())
    })?;

    let jar = session::set_pending_signup_email(
        jar,
        payload.email.as_deref(),
        app_state.config.signup_email_ttl,
        app_state.config.cookie_secure,
    )?;

    Ok((jar, Json(OkResponse { ok: true })))
}

/// GET /api/get-reset-email
/// Reads the pending signup email back; 404 once the cookie is gone
async fn get_reset_email(jar: CookieJar) -> AppResult<impl IntoResponse> {
    let email = session::get_pending_signup_email(&jar)?;
    Ok(Json(EmailResponse { ok: true, email }))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/set-reset-email", post(set_reset_email))
        .route("/get-reset-email", get(get_reset_email))
}
