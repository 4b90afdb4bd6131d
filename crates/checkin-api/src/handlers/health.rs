//! Health check handler.

use axum::Json;
use axum::extract::State;

use crate::dto::response::HealthResponse;
use crate::state::AppState;

/// GET /health
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let healthy = state.sink.health_check().await.unwrap_or(false);

    Json(HealthResponse {
        status: if healthy { "ok" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        sink: state.sink.sink_type().to_string(),
        uptime_seconds: state.started_at.elapsed().as_secs(),
    })
}
