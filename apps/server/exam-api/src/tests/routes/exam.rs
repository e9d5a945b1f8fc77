use crate::error::ApiError;
use crate::routes::exam::get_exam;
use crate::state::AppState;

use exam_core::config::AppConfig;

use axum::extract::{Path, State};
use uuid::Uuid;

fn test_state() -> AppState {
    AppState::from_config(&AppConfig::default()).expect("default config wires")
}

/// **VALUE**: Verifies the success path of the exam handler: a well-formed id
/// yields a resource whose id matches the request.
///
/// **WHY THIS MATTERS**: This is the service's one lookup endpoint; the id
/// round-trip is the only observable correctness property the stub-backed
/// path has.
///
/// **BUG THIS CATCHES**: Would catch the handler parsing into the wrong type,
/// dropping the parsed id, or wrapping a different exam.
#[tokio::test]
async fn given_valid_id_when_getting_exam_then_resource_matches_id() {
    // GIVEN: A well-formed exam id
    let id = Uuid::new_v4();

    // WHEN: Calling the handler
    let response = get_exam(State(test_state()), Path(id.to_string()))
        .await
        .expect("valid id should succeed");

    // THEN: The resource carries the requested id and a self link
    assert_eq!(response.0.exam.id, id);
    assert_eq!(response.0.links[0].href, format!("/exam/{id}"));
}

/// **VALUE**: Verifies that a malformed id is rejected as InvalidExamId.
///
/// **WHY THIS MATTERS**: The path parameter is the only client input; mapping
/// garbage to a clean 400 instead of a 500 (or a fabricated lookup) is the
/// endpoint's whole validation story.
///
/// **BUG THIS CATCHES**: Would catch the handler passing unparsed strings to
/// the service or misclassifying the parse failure.
#[tokio::test]
async fn given_malformed_id_when_getting_exam_then_invalid_id_error() {
    // GIVEN: A string that is not a UUID
    let response = get_exam(State(test_state()), Path(String::from("not-a-uuid"))).await;

    // THEN: InvalidExamId carrying the offending input
    match response {
        Err(ApiError::InvalidExamId { id }) => assert_eq!(id, "not-a-uuid"),
        other => panic!("Expected InvalidExamId, got {other:?}"),
    }
}
