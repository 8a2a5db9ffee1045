//! Health check handler.

use axum::Json;

use crate::models::HealthResponse;

/// `GET /healthz` — liveness probe.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".into(),
        version: shelf_core::version().into(),
    })
}
