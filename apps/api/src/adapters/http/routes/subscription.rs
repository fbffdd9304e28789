//! Proxy for the caller's subscription, authenticated with their cookie token.

use axum::{Json, Router, extract::State, response::IntoResponse, routing::get};
use axum_extra::extract::cookie::CookieJar;
use resqx_types::Subscription;
use serde::Serialize;

use crate::{
    adapters::http::{app_state::AppState, session},
    app_error::AppResult,
};

#[derive(Serialize)]
struct CurrentSubscriptionResponse {
    ok: bool,
    subscription: Option<Subscription>,
}

/// GET /api/subscription/current
/// `subscription: null` means no active subscription, not a failure
async fn current(
    State(app_state): State<AppState>,
    jar: CookieJar,
) -> AppResult<impl IntoResponse> {
    let subscription = app_state
        .subscription_use_cases
        .current_subscription(session::access_token(&jar))
        .await?;

    Ok(Json(CurrentSubscriptionResponse {
        ok: true,
        subscription,
    }))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/current", get(current))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use axum::http::StatusCode;
    use axum_extra::extract::cookie::Cookie;
    use axum_test::TestServer;
    use serde_json::{Value, json};

    use crate::adapters::http::session::ACCESS_TOKEN_COOKIE;
    use crate::app_error::AppError;
    use crate::test_utils::{
        StubSubscriptionGateway, TestAppStateBuilder, create_test_subscription,
    };

    fn build_test_server(gateway: Arc<StubSubscriptionGateway>) -> TestServer {
        let app_state = TestAppStateBuilder::new()
            .with_subscription_gateway(gateway)
            .build();
        TestServer::new(router().with_state(app_state)).unwrap()
    }

    #[tokio::test]
    async fn current_returns_subscription_using_cookie_token() {
        let gateway = Arc::new(StubSubscriptionGateway::returning(Ok(Some(
            create_test_subscription(|s| s.id = "sub_42".into()),
        ))));
        let server = build_test_server(gateway.clone());

        let response = server
            .get("/current")
            .add_cookie(Cookie::new(ACCESS_TOKEN_COOKIE, "tok_cookie"))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["ok"], true);
        assert_eq!(body["subscription"]["id"], "sub_42");
        assert_eq!(gateway.seen_tokens(), vec![Some("tok_cookie".to_string())]);
    }

    #[tokio::test]
    async fn current_without_subscription_returns_null() {
        let gateway = Arc::new(StubSubscriptionGateway::returning(Ok(None)));
        let server = build_test_server(gateway.clone());

        let response = server.get("/current").await;

        response.assert_status_ok();
        response.assert_json(&json!({ "ok": true, "subscription": null }));
        assert_eq!(gateway.seen_tokens(), vec![None]);
    }

    #[tokio::test]
    async fn current_upstream_unauthorized_returns_401() {
        let gateway = Arc::new(StubSubscriptionGateway::returning(Err(AppError::Unauthorized)));
        let server = build_test_server(gateway);

        let response = server.get("/current").await;

        response.assert_status(StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn current_upstream_failure_returns_502() {
        let gateway = Arc::new(StubSubscriptionGateway::returning(Err(AppError::Upstream(
            "HTTP 503: maintenance".into(),
        ))));
        let server = build_test_server(gateway);

        let response = server.get("/current").await;

        response.assert_status(StatusCode::BAD_GATEWAY);
        let body: Value = response.json();
        assert_eq!(body["ok"], false);
    }
}
