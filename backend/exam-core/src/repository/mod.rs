//! The persistence seam for exam lookups.

use crate::error::repository::RepositoryError;

use models::Exam;

use log::debug;
use uuid::Uuid;

/// Id-keyed exam lookup.
///
/// Not-found is an explicit `Ok(None)`, never a fabricated record or an
/// error. Storage strategy is entirely the implementor's concern.
pub trait ExamRepository {
    fn get_exam_by_id(
        &self,
        id: Uuid,
    ) -> impl Future<Output = Result<Option<Exam>, RepositoryError>> + Send;
}

/// Placeholder repository with no backing store.
///
/// Answers every lookup with an exam carrying the requested id,
/// regardless of whether such an exam exists anywhere. Kept until a real
/// persistence adapter lands; callers must not read existence semantics
/// into its answers.
#[derive(Debug, Clone, Copy, Default)]
pub struct StubExamRepository;

impl ExamRepository for StubExamRepository {
    async fn get_exam_by_id(&self, id: Uuid) -> Result<Option<Exam>, RepositoryError> {
        debug!("Stub exam lookup for {id}");
        Ok(Some(Exam::new(id)))
    }
}
