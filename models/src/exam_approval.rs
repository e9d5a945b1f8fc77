use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Approval outcome for opening an exam.
///
/// Returned inside a [`crate::Response`]: on success it identifies the
/// exam the caller may now fetch, on failure the response carries the
/// validation errors instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamApproval {
    pub exam_id: Uuid,
}

impl ExamApproval {
    pub fn new(exam_id: Uuid) -> Self {
        Self { exam_id }
    }
}
