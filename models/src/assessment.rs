use serde::{Deserialize, Serialize};

/// External description of a test definition.
///
/// Carries the per-assessment behavioral knobs that flow into an
/// [`crate::ExamConfiguration`] when an exam starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    /// Number of items to prefetch ahead of the student's position.
    pub prefetch: u32,

    /// Whether item completeness is validated before exam completion.
    pub validate_completeness: bool,
}
