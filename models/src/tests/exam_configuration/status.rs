use crate::ExamStatus;

/// **VALUE**: Verifies the lowercase wire names of the exam statuses.
///
/// **WHY THIS MATTERS**: The serde rename is the only source of the status
/// strings persisted and transmitted for every exam attempt; "started" in
/// particular is the fixed status every new configuration carries.
///
/// **BUG THIS CATCHES**: Would catch the rename_all attribute being dropped
/// or a variant being renamed without a wire-compatibility shim.
#[test]
fn given_statuses_when_serializing_then_lowercase_wire_names() {
    let cases = [
        (ExamStatus::Started, "\"started\""),
        (ExamStatus::Paused, "\"paused\""),
        (ExamStatus::Completed, "\"completed\""),
        (ExamStatus::Failed, "\"failed\""),
    ];

    for (status, expected) in cases {
        let serialized = serde_json::to_string(&status).expect("statuses serialize");
        assert_eq!(serialized, expected);
    }
}
