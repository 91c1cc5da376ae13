use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: &'static str,
}

pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// Browsers ask for this on every visit; it never reaches the
/// identifier parser.
pub async fn favicon_handler() -> StatusCode {
    StatusCode::NO_CONTENT
}
