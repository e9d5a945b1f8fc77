use exam_api::routes::router;
use exam_api::state::AppState;

use exam_core::config::{AppConfig, ServicesConfig};

use std::net::SocketAddr;

use tokio::net::TcpListener;
use uuid::Uuid;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Start the full application on an ephemeral port and return its address.
async fn start_server(services: ServicesConfig) -> SocketAddr {
    let config = AppConfig {
        services,
        ..AppConfig::default()
    };
    let state = AppState::from_config(&config).expect("state wires");
    let app = router(state);

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("ephemeral port binds");
    let address = listener.local_addr().expect("local addr available");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("server runs");
    });

    address
}

async fn downstream(status: u16) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(status))
        .mount(&server)
        .await;
    server
}

fn services_from(servers: &[&MockServer; 4]) -> ServicesConfig {
    ServicesConfig {
        assessment_url: servers[0].uri(),
        student_url: servers[1].uri(),
        config_url: servers[2].uri(),
        session_url: servers[3].uri(),
    }
}

/// **VALUE**: Verifies the exam endpoint over real HTTP: routing, extraction,
/// serialization and link building together.
///
/// **WHY THIS MATTERS**: Handler unit tests bypass axum's routing and JSON
/// layers. Only a real request proves the route pattern and the wire shape
/// clients actually see.
///
/// **BUG THIS CATCHES**: Would catch a route pattern mismatch, a broken
/// extractor, or the resource serializing with an unexpected shape.
#[tokio::test]
async fn given_running_server_when_getting_exam_then_200_with_id_and_self_link() {
    // GIVEN: The server and a known exam id
    let address = start_server(ServicesConfig::default()).await;
    let id = Uuid::new_v4();

    // WHEN: Fetching the exam over HTTP
    let response = reqwest::get(format!("http://{address}/exam/{id}"))
        .await
        .expect("request succeeds");

    // THEN: 200 with the id and a self link in the body
    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.expect("body is JSON");
    assert_eq!(body["id"], serde_json::json!(id));
    assert_eq!(body["links"][0]["rel"], "self");
    assert_eq!(body["links"][0]["href"], format!("/exam/{id}"));
}

/// **VALUE**: Verifies that a malformed exam id yields 400 over real HTTP.
///
/// **WHY THIS MATTERS**: The explicit 400 mapping is this service's own
/// behavior, distinct from axum's default rejections; it must survive the
/// full middleware stack.
///
/// **BUG THIS CATCHES**: Would catch the handler switching to a typed Path
/// extractor whose rejection shape differs from our error body.
#[tokio::test]
async fn given_running_server_when_getting_malformed_exam_id_then_400() {
    let address = start_server(ServicesConfig::default()).await;

    let response = reqwest::get(format!("http://{address}/exam/not-a-uuid"))
        .await
        .expect("request succeeds");

    assert_eq!(response.status().as_u16(), 400);
    let body: serde_json::Value = response.json().await.expect("body is JSON");
    assert!(
        body["error"]
            .as_str()
            .expect("error message present")
            .contains("not-a-uuid")
    );
}

/// **VALUE**: Verifies the health endpoint end-to-end with healthy
/// dependencies: 200 and a full per-service breakdown.
///
/// **WHY THIS MATTERS**: This exercises config-to-probe-to-response as one
/// path, exactly what a load balancer exercises in production.
///
/// **BUG THIS CATCHES**: Would catch the endpoint serializing the breakdown
/// under the wrong keys or reporting a wrong status code on the happy path.
#[tokio::test]
async fn given_healthy_downstreams_when_getting_health_then_200_up() {
    // GIVEN: Four healthy downstream services
    let assessment = downstream(200).await;
    let student = downstream(200).await;
    let config = downstream(200).await;
    let session = downstream(200).await;
    let address = start_server(services_from(&[&assessment, &student, &config, &session])).await;

    // WHEN: Fetching health
    let response = reqwest::get(format!("http://{address}/health"))
        .await
        .expect("request succeeds");

    // THEN: 200 with UP everywhere
    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.expect("body is JSON");
    assert_eq!(body["status"], "UP");
    for service in ["assessment", "student", "config", "session"] {
        assert_eq!(body["services"][service], "UP", "{service} should be UP");
    }
}

/// **VALUE**: Verifies that a broken dependency turns the health endpoint
/// into 503 with the culprit named in the breakdown.
///
/// **WHY THIS MATTERS**: The 503 is what takes an instance out of rotation;
/// the named culprit is what makes the resulting page actionable.
///
/// **BUG THIS CATCHES**: Would catch the endpoint returning 200 despite a
/// down dependency, or the breakdown losing the failing entry.
#[tokio::test]
async fn given_one_down_downstream_when_getting_health_then_503_with_detail() {
    // GIVEN: The config service answering 500
    let assessment = downstream(200).await;
    let student = downstream(200).await;
    let config = downstream(500).await;
    let session = downstream(200).await;
    let address = start_server(services_from(&[&assessment, &student, &config, &session])).await;

    // WHEN: Fetching health
    let response = reqwest::get(format!("http://{address}/health"))
        .await
        .expect("request succeeds");

    // THEN: 503, aggregate DOWN, culprit marked DOWN
    assert_eq!(response.status().as_u16(), 503);
    let body: serde_json::Value = response.json().await.expect("body is JSON");
    assert_eq!(body["status"], "DOWN");
    assert_eq!(body["services"]["config"], "DOWN");
    assert_eq!(body["services"]["student"], "UP");
}
