pub mod export;
pub mod session_email;
pub mod subscription;

use axum::{Json, Router, routing::get};
use serde_json::{Value, json};

use crate::adapters::http::app_state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(session_email::router())
        .nest("/subscription", subscription::router())
        .merge(export::router())
        .route("/health", get(health))
}

async fn health() -> Json<Value> {
    Json(json!({ "ok": true }))
}
