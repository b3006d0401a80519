use axum::Json;

use shared_http::api::HealthResponse;

/// GET /api/health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse { ok: true })
}
