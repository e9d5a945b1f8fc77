use crate::state::AppState;

use exam_core::health::AggregatedHealth;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use log::warn;

/// Handle `GET /health`.
///
/// 200 when every dependency is up, 503 otherwise; the body always
/// carries the per-service breakdown.
pub async fn get_health(State(state): State<AppState>) -> (StatusCode, Json<AggregatedHealth>) {
    let health = state.health_indicator.health().await;

    let status = if health.is_up() {
        StatusCode::OK
    } else {
        warn!("Health check degraded: {:?}", health.status);
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(health))
}
