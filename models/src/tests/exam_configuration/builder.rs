use crate::{ExamConfigurationBuilder, ExamStatus, ModelError};

use uuid::Uuid;

fn complete_builder() -> ExamConfigurationBuilder {
    ExamConfigurationBuilder::default()
        .with_exam_id(Uuid::new_v4())
        .with_content_load_timeout_minutes(120)
        .with_interface_timeout_minutes(10)
        .with_exam_restart_window_minutes(20)
        .with_request_interface_timeout_minutes(15)
        .with_prefetch(2)
        .with_validate_completeness(true)
        .with_attempt(0)
        .with_start_position(1)
        .with_status(ExamStatus::Started)
        .with_test_length(50)
}

/// **VALUE**: Verifies that a fully-specified builder produces a configuration
/// with every field carried through unchanged.
///
/// **WHY THIS MATTERS**: ExamConfiguration is the immutable snapshot that
/// governs a whole exam attempt. A silently dropped or swapped field here
/// corrupts every downstream timing decision.
///
/// **BUG THIS CATCHES**: Would catch if:
/// - A builder setter writes to the wrong field
/// - build() reorders fields when assembling the struct
/// - A field is defaulted instead of taken from the builder
#[test]
fn given_complete_builder_when_building_then_all_fields_match() {
    // GIVEN: Builder with every field set
    let exam_id = Uuid::new_v4();
    let builder = complete_builder().with_exam_id(exam_id);

    // WHEN: Building
    let configuration = builder.build().expect("complete builder should build");

    // THEN: Every field matches its input
    assert_eq!(configuration.exam_id, exam_id);
    assert_eq!(configuration.content_load_timeout_minutes, 120);
    assert_eq!(configuration.interface_timeout_minutes, 10);
    assert_eq!(configuration.exam_restart_window_minutes, 20);
    assert_eq!(configuration.request_interface_timeout_minutes, 15);
    assert_eq!(configuration.prefetch, 2);
    assert!(configuration.validate_completeness);
    assert_eq!(configuration.attempt, 0);
    assert_eq!(configuration.start_position, 1);
    assert_eq!(configuration.status, ExamStatus::Started);
    assert_eq!(configuration.test_length, 50);
    assert_eq!(configuration.failure_message, None);
}

/// **VALUE**: Verifies that builder validation rejects a missing exam id.
///
/// **WHY THIS MATTERS**: Every configuration must be tied to exactly one exam.
/// A configuration without an exam id would be unroutable and unpersistable.
///
/// **BUG THIS CATCHES**: Would catch if:
/// - Required field validation is removed
/// - Builder allows incomplete construction
/// - Exam id accidentally becomes optional
#[test]
fn given_missing_exam_id_when_building_then_returns_validation_error() {
    // GIVEN: Builder without an exam id
    let builder = ExamConfigurationBuilder::default()
        .with_content_load_timeout_minutes(120)
        .with_interface_timeout_minutes(10)
        .with_exam_restart_window_minutes(20)
        .with_request_interface_timeout_minutes(15)
        .with_prefetch(2)
        .with_validate_completeness(true)
        .with_attempt(0)
        .with_start_position(1)
        .with_status(ExamStatus::Started)
        .with_test_length(50);

    // WHEN: Attempting to build
    let result = builder.build();

    // THEN: Should return validation error
    assert!(result.is_err());
    match result.unwrap_err() {
        ModelError::Validation { message, .. } => {
            assert_eq!(message, "Exam id is required");
        }
    }
}

/// **VALUE**: Verifies that builder validation rejects a zero start position.
///
/// **WHY THIS MATTERS**: Start positions are 1-based. Position zero would
/// point one item before the test and break every position calculation
/// downstream.
///
/// **BUG THIS CATCHES**: Would catch if:
/// - The lower-bound check is deleted during refactoring
/// - The field silently becomes 0-based
#[test]
fn given_zero_start_position_when_building_then_returns_validation_error() {
    // GIVEN: Builder with start position zero
    let builder = complete_builder().with_start_position(0);

    // WHEN: Attempting to build
    let result = builder.build();

    // THEN: Should return validation error
    assert!(result.is_err());
    match result.unwrap_err() {
        ModelError::Validation { message, .. } => {
            assert_eq!(message, "Start position must be at least 1");
        }
    }
}

/// **VALUE**: Verifies that the failure message stays optional.
///
/// **WHY THIS MATTERS**: A freshly started exam has no failure. Requiring the
/// field would force callers to invent placeholder failure text.
///
/// **BUG THIS CATCHES**: Would catch if the optional field is promoted to
/// required, or if an unset failure message is populated with a default.
#[test]
fn given_no_failure_message_when_building_then_field_is_none() {
    // GIVEN: Complete builder, no failure message
    let builder = complete_builder();

    // WHEN: Building
    let configuration = builder.build().expect("complete builder should build");

    // THEN: Failure message is absent
    assert!(configuration.failure_message.is_none());
}

/// **VALUE**: Verifies that builder validation rejects a missing test length.
///
/// **WHY THIS MATTERS**: Test length drives prefetch and completion logic; a
/// missing value would have to be guessed at, which is exactly the class of
/// bug construction-time validation exists to prevent.
///
/// **BUG THIS CATCHES**: Would catch if test length validation is removed or
/// the field gains a silent default.
#[test]
fn given_missing_test_length_when_building_then_returns_validation_error() {
    // GIVEN: Builder with every field except test length
    let builder = ExamConfigurationBuilder::default()
        .with_exam_id(Uuid::new_v4())
        .with_content_load_timeout_minutes(120)
        .with_interface_timeout_minutes(10)
        .with_exam_restart_window_minutes(20)
        .with_request_interface_timeout_minutes(15)
        .with_prefetch(2)
        .with_validate_completeness(true)
        .with_attempt(0)
        .with_start_position(1)
        .with_status(ExamStatus::Started);

    // WHEN: Attempting to build
    let result = builder.build();

    // THEN: Should return validation error
    assert!(result.is_err());
    match result.unwrap_err() {
        ModelError::Validation { message, .. } => {
            assert_eq!(message, "Test length is required");
        }
    }
}
