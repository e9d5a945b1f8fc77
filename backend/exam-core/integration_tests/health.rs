use exam_core::config::ServicesConfig;
use exam_core::health::{HealthStatus, ServicesHealthIndicator};

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn healthy_server() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;
    server
}

async fn failing_server(status: u16) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(status))
        .mount(&server)
        .await;
    server
}

fn services_for(
    assessment: &MockServer,
    student: &MockServer,
    config: &MockServer,
    session: &MockServer,
) -> ServicesConfig {
    ServicesConfig {
        assessment_url: assessment.uri(),
        student_url: student.uri(),
        config_url: config.uri(),
        session_url: session.uri(),
    }
}

/// **VALUE**: Verifies the all-healthy end-to-end path: four live downstream
/// health endpoints produce an Up aggregate with an Up entry per service.
///
/// **WHY THIS MATTERS**: This is the wiring test for the whole indicator:
/// URL construction, concurrent dispatch, response mapping and aggregation
/// together against real HTTP.
///
/// **BUG THIS CATCHES**: Would catch a malformed probe path (`//health`), a
/// dropped service entry, or response mapping inverted.
#[tokio::test]
async fn given_all_services_healthy_when_checking_then_aggregate_up() {
    // GIVEN: Four downstream servers answering 200 on /health
    let assessment = healthy_server().await;
    let student = healthy_server().await;
    let config = healthy_server().await;
    let session = healthy_server().await;

    let indicator =
        ServicesHealthIndicator::new(services_for(&assessment, &student, &config, &session))
            .expect("indicator builds");

    // WHEN: Running the health check
    let health = indicator.health().await;

    // THEN: Aggregate and every service report Up
    assert!(health.is_up());
    assert_eq!(health.services.len(), 4);
    for (name, status) in &health.services {
        assert_eq!(*status, HealthStatus::Up, "service {name} should be up");
    }
}

/// **VALUE**: Verifies that one downstream answering 5xx degrades the
/// aggregate to Down while the other services still report Up.
///
/// **WHY THIS MATTERS**: Partial-outage reporting is the point of the
/// per-service breakdown; operators need to see which dependency broke, not
/// just that something did.
///
/// **BUG THIS CATCHES**: Would catch a probe failure leaking into other
/// services' statuses, or non-2xx being treated as success.
#[tokio::test]
async fn given_one_service_erroring_when_checking_then_aggregate_down() {
    // GIVEN: Student service answering 500, the rest healthy
    let assessment = healthy_server().await;
    let student = failing_server(500).await;
    let config = healthy_server().await;
    let session = healthy_server().await;

    let indicator =
        ServicesHealthIndicator::new(services_for(&assessment, &student, &config, &session))
            .expect("indicator builds");

    // WHEN: Running the health check
    let health = indicator.health().await;

    // THEN: Aggregate is Down, only the student entry is Down
    assert_eq!(health.status, HealthStatus::Down);
    assert_eq!(health.services["student"], HealthStatus::Down);
    assert_eq!(health.services["assessment"], HealthStatus::Up);
    assert_eq!(health.services["config"], HealthStatus::Up);
    assert_eq!(health.services["session"], HealthStatus::Up);
}

/// **VALUE**: Verifies that an unreachable downstream maps to Unknown and the
/// check still completes.
///
/// **WHY THIS MATTERS**: Connection failures are the common outage mode. They
/// must be caught and downgraded to a status, never propagated as a hard
/// failure of the whole health check.
///
/// **BUG THIS CATCHES**: Would catch a transport error aborting the check or
/// being misreported as Down/Up.
#[tokio::test]
async fn given_unreachable_service_when_checking_then_status_unknown() {
    // GIVEN: Session service pointing at a closed port
    let assessment = healthy_server().await;
    let student = healthy_server().await;
    let config = healthy_server().await;
    // A bare (non-pooled) server so dropping it actually closes the port;
    // pooled servers from `MockServer::start` keep listening after drop.
    let unreachable = MockServer::builder().start().await;
    let dead_uri = unreachable.uri();
    drop(unreachable);

    let indicator = ServicesHealthIndicator::new(ServicesConfig {
        assessment_url: assessment.uri(),
        student_url: student.uri(),
        config_url: config.uri(),
        session_url: dead_uri,
    })
    .expect("indicator builds");

    // WHEN: Running the health check
    let health = indicator.health().await;

    // THEN: The dead service is Unknown and the aggregate is non-Up
    assert_eq!(health.services["session"], HealthStatus::Unknown);
    assert_eq!(health.status, HealthStatus::Unknown);
    assert!(!health.is_up());
}
