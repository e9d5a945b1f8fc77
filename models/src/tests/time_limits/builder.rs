use crate::{ModelError, TimeLimitConfigurationBuilder};

/// **VALUE**: Verifies that a fully-specified builder carries every timing
/// field through unchanged.
///
/// **WHY THIS MATTERS**: These three values gate pause, restart and request
/// behavior for live exams. A swapped field would misapply one limit as
/// another without any type error.
///
/// **BUG THIS CATCHES**: Would catch if a setter writes to the wrong field or
/// build() crosses the values when assembling the struct.
#[test]
fn given_complete_builder_when_building_then_all_fields_match() {
    // GIVEN: Builder with all three timeouts set to distinct values
    let builder = TimeLimitConfigurationBuilder::default()
        .with_interface_timeout_minutes(4)
        .with_exam_restart_window_minutes(8)
        .with_request_interface_timeout_minutes(15);

    // WHEN: Building
    let limits = builder.build().expect("complete builder should build");

    // THEN: Each field holds its own value
    assert_eq!(limits.interface_timeout_minutes, 4);
    assert_eq!(limits.exam_restart_window_minutes, 8);
    assert_eq!(limits.request_interface_timeout_minutes, 15);
}

/// **VALUE**: Verifies that builder validation rejects a missing interface
/// timeout.
///
/// **WHY THIS MATTERS**: Required-field validation at construction is what
/// keeps half-populated timing rules out of the system.
///
/// **BUG THIS CATCHES**: Would catch if the required check is removed or the
/// field gains a silent default.
#[test]
fn given_missing_interface_timeout_when_building_then_returns_validation_error() {
    // GIVEN: Builder without the interface timeout
    let builder = TimeLimitConfigurationBuilder::default()
        .with_exam_restart_window_minutes(8)
        .with_request_interface_timeout_minutes(15);

    // WHEN: Attempting to build
    let result = builder.build();

    // THEN: Should return validation error
    assert!(result.is_err());
    match result.unwrap_err() {
        ModelError::Validation { message, .. } => {
            assert_eq!(message, "Interface timeout is required");
        }
    }
}
