pub mod builder;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle status of an exam attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExamStatus {
    Started,
    Paused,
    Completed,
    Failed,
}

/// Immutable snapshot of the timing and behavioral parameters governing
/// one exam attempt.
///
/// Every field is set exactly once, by
/// [`builder::ExamConfigurationBuilder`], and never mutated afterwards.
/// Ownership passes to whichever caller persists or transmits it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamConfiguration {
    pub exam_id: Uuid,
    pub content_load_timeout_minutes: u32,
    pub interface_timeout_minutes: u32,
    pub exam_restart_window_minutes: u32,
    pub request_interface_timeout_minutes: u32,
    pub prefetch: u32,
    pub validate_completeness: bool,
    pub attempt: u32,
    pub start_position: u32,
    pub status: ExamStatus,
    pub test_length: u32,
    pub failure_message: Option<String>,
}
