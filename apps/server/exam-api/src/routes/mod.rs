pub mod exam;
pub mod health;

use crate::state::AppState;

use axum::Router;
use axum::routing::get;

/// Assemble the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/exam/{id}", get(exam::get_exam))
        .route("/health", get(health::get_health))
        .with_state(state)
}
