use crate::health::{HealthStatus, aggregate};

/// **VALUE**: Verifies that four healthy dependencies aggregate to Up.
///
/// **WHY THIS MATTERS**: This is the steady-state answer load balancers see.
/// A spurious non-Up here would pull a healthy instance out of rotation.
///
/// **BUG THIS CATCHES**: Would catch an inverted severity comparison or a
/// wrong empty/default branch in the aggregation.
#[test]
fn given_all_up_when_aggregating_then_up() {
    let statuses = [
        HealthStatus::Up,
        HealthStatus::Up,
        HealthStatus::Up,
        HealthStatus::Up,
    ];

    assert_eq!(aggregate(&statuses), HealthStatus::Up);
}

/// **VALUE**: Verifies that a single Down dependency makes the aggregate Down.
///
/// **WHY THIS MATTERS**: Worst-status-wins is the whole contract: one broken
/// dependency means this service cannot do its job, wherever that dependency
/// sits in the list.
///
/// **BUG THIS CATCHES**: Would catch order-dependent aggregation or an early
/// return on the first Up.
#[test]
fn given_one_down_when_aggregating_then_down() {
    for position in 0..4 {
        let mut statuses = [HealthStatus::Up; 4];
        statuses[position] = HealthStatus::Down;

        assert_eq!(
            aggregate(&statuses),
            HealthStatus::Down,
            "Down at position {position} must win"
        );
    }
}

/// **VALUE**: Verifies the full severity ordering Down > Degraded > Unknown > Up.
///
/// **WHY THIS MATTERS**: The ranking table is the documented contract for
/// mixed outcomes. Swapping Degraded and Unknown would misreport a known-bad
/// dependency as merely unreachable.
///
/// **BUG THIS CATCHES**: Would catch any permutation of the severity values.
#[test]
fn given_mixed_statuses_when_aggregating_then_severity_order_decides() {
    assert_eq!(
        aggregate(&[HealthStatus::Up, HealthStatus::Unknown]),
        HealthStatus::Unknown
    );
    assert_eq!(
        aggregate(&[HealthStatus::Unknown, HealthStatus::Degraded]),
        HealthStatus::Degraded
    );
    assert_eq!(
        aggregate(&[HealthStatus::Degraded, HealthStatus::Down]),
        HealthStatus::Down
    );
    assert_eq!(
        aggregate(&[
            HealthStatus::Down,
            HealthStatus::Degraded,
            HealthStatus::Unknown,
            HealthStatus::Up,
        ]),
        HealthStatus::Down
    );
}

/// **VALUE**: Verifies that aggregating nothing reports Unknown, not Up.
///
/// **WHY THIS MATTERS**: An empty probe set means we know nothing. Defaulting
/// to Up would report healthy with zero evidence.
///
/// **BUG THIS CATCHES**: Would catch `unwrap_or(Up)` sneaking into the
/// aggregation.
#[test]
fn given_no_statuses_when_aggregating_then_unknown() {
    assert_eq!(aggregate(&[]), HealthStatus::Unknown);
}
