//! Thin façade between the API layer and the repository.

use crate::error::repository::RepositoryError;
use crate::repository::ExamRepository;

use models::Exam;

use uuid::Uuid;

/// Exam lookup service.
///
/// Exists so the API layer depends on one seam rather than on the
/// repository directly; any per-lookup policy (caching, authorization)
/// would land here without touching handlers or storage.
#[derive(Debug, Clone)]
pub struct ExamService<R: ExamRepository> {
    repository: R,
}

impl<R: ExamRepository> ExamService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Look up one exam by id. `Ok(None)` means no such exam.
    pub async fn get_exam_by_id(&self, id: Uuid) -> Result<Option<Exam>, RepositoryError> {
        self.repository.get_exam_by_id(id).await
    }
}
