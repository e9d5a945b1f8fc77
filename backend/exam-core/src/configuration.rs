//! Factory for the configuration snapshot taken when an exam starts.

use models::{
    Assessment, ExamConfiguration, ExamConfigurationBuilder, ExamStatus, ModelError,
    TimeLimitConfiguration,
};

use uuid::Uuid;

/// Minutes allowed for content to load, fixed for every exam.
pub const CONTENT_LOAD_TIMEOUT_MINUTES: u32 = 120;

/// Attempt counter at exam start.
const INITIAL_ATTEMPT: u32 = 0;

/// Position of the first item, 1-based.
const INITIAL_START_POSITION: u32 = 1;

/// Build the configuration for a freshly started exam.
///
/// Pure and deterministic: the fixed constants are applied, the timing
/// fields are copied verbatim from `time_limits`, the behavioral flags
/// verbatim from `assessment`, and `test_length` passes through
/// unchanged. The failure message is left unset.
#[track_caller]
pub fn new_exam_configuration(
    exam_id: Uuid,
    assessment: &Assessment,
    time_limits: &TimeLimitConfiguration,
    test_length: u32,
) -> Result<ExamConfiguration, ModelError> {
    ExamConfigurationBuilder::default()
        .with_exam_id(exam_id)
        .with_content_load_timeout_minutes(CONTENT_LOAD_TIMEOUT_MINUTES)
        .with_interface_timeout_minutes(time_limits.interface_timeout_minutes)
        .with_exam_restart_window_minutes(time_limits.exam_restart_window_minutes)
        .with_request_interface_timeout_minutes(time_limits.request_interface_timeout_minutes)
        .with_prefetch(assessment.prefetch)
        .with_validate_completeness(assessment.validate_completeness)
        .with_attempt(INITIAL_ATTEMPT)
        .with_start_position(INITIAL_START_POSITION)
        .with_status(ExamStatus::Started)
        .with_test_length(test_length)
        .build()
}
