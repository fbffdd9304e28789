//! CSV export of tabular rows the dashboard already holds.

use axum::{Json, Router, routing::post};
use serde::Deserialize;

use crate::{
    adapters::http::app_state::AppState,
    export::{Download, Row, serialize},
};

#[derive(Deserialize)]
struct ExportPayload {
    filename: Option<String>,
    headers: Option<Vec<String>>,
    rows: Vec<Row>,
}

/// POST /api/export
/// Returns the rows as a CSV attachment
async fn export_csv(Json(payload): Json<ExportPayload>) -> Download {
    let csv = serialize(&payload.rows, payload.headers.as_deref());
    tracing::info!(rows = payload.rows.len(), "Exporting rows as CSV");

    Download::csv(payload.filename.as_deref().unwrap_or("export.csv"), csv)
}

pub fn router() -> Router<AppState> {
    Router::new().route("/export", post(export_csv))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::json;

    use crate::test_utils::TestAppStateBuilder;

    fn build_test_server() -> TestServer {
        let app_state = TestAppStateBuilder::new().build();
        TestServer::new(router().with_state(app_state)).unwrap()
    }

    #[tokio::test]
    async fn export_returns_csv_attachment() {
        let server = build_test_server();

        let response = server
            .post("/export")
            .json(&json!({
                "filename": "orders.csv",
                "rows": [
                    { "order": "ORD-1", "customer": "Okafor, Ada", "amount": 15000, "paid": true },
                    { "order": "ORD-2", "customer": "Bello", "amount": null, "paid": false }
                ]
            }))
            .await;

        response.assert_status_ok();
        assert_eq!(
            response.header("content-type"),
            "text/csv;charset=utf-8"
        );
        assert_eq!(
            response.header("content-disposition"),
            "attachment; filename=\"orders.csv\""
        );
        response.assert_text(
            "order,customer,amount,paid\nORD-1,\"Okafor, Ada\",15000,true\nORD-2,Bello,,false",
        );
    }

    #[tokio::test]
    async fn export_with_no_rows_is_empty_file() {
        let server = build_test_server();

        let response = server
            .post("/export")
            .json(&json!({ "headers": ["a", "b"], "rows": [] }))
            .await;

        response.assert_status_ok();
        response.assert_text("");
        assert_eq!(
            response.header("content-disposition"),
            "attachment; filename=\"export.csv\""
        );
    }

    #[tokio::test]
    async fn export_without_rows_field_is_rejected() {
        let server = build_test_server();

        let response = server.post("/export").json(&json!({})).await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    }
}
