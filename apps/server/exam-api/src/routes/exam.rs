use crate::error::ApiError;
use crate::resources::{ExamResource, exam_resource};
use crate::state::AppState;

use axum::Json;
use axum::extract::{Path, State};
use log::debug;
use uuid::Uuid;

/// Handle `GET /exam/{id}`.
///
/// The path parameter is taken as a raw string so a malformed id maps to
/// our own 400 body instead of the framework's default rejection.
pub async fn get_exam(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ExamResource>, ApiError> {
    let exam_id = Uuid::parse_str(&id).map_err(|_| ApiError::InvalidExamId { id: id.clone() })?;

    debug!("Exam lookup requested for {exam_id}");

    let exam = state
        .exam_service
        .get_exam_by_id(exam_id)
        .await?
        .ok_or(ApiError::ExamNotFound { id })?;

    Ok(Json(exam_resource(exam)))
}
