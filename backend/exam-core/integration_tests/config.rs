use exam_core::config::AppConfig;
use exam_core::error::config::ConfigError;

use tempfile::tempdir;

/// **VALUE**: Verifies the save/load round trip through a real directory,
/// including URL normalization on the way back in.
///
/// **WHY THIS MATTERS**: Load and save are separate code paths; only a round
/// trip proves they agree on the file format and that normalization runs on
/// load.
///
/// **BUG THIS CATCHES**: Would catch a renamed field breaking the format, or
/// normalization being skipped for file-sourced config.
#[test]
fn given_saved_config_when_loading_then_round_trips_normalized() {
    // GIVEN: A config with a trailing slash saved to disk
    let dir = tempdir().expect("tempdir creates");
    let mut config = AppConfig::default();
    config.services.student_url = String::from("http://host/students/");
    config.save(dir.path()).expect("config saves");

    // WHEN: Loading it back
    let loaded = AppConfig::load(dir.path()).expect("config loads");

    // THEN: The URL comes back normalized, the rest unchanged
    assert_eq!(loaded.services.student_url, "http://host/students");
    assert_eq!(loaded.server.port, config.server.port);
    assert_eq!(loaded.version, config.version);
}

/// **VALUE**: Verifies that a config file omitting a service URL fails to
/// load.
///
/// **WHY THIS MATTERS**: This is the fail-fast contract for missing URLs: a
/// half-configured instance must refuse to start rather than probe defaults
/// it was never given.
///
/// **BUG THIS CATCHES**: Would catch a serde default quietly appearing on the
/// service URL fields.
#[test]
fn given_config_missing_service_url_when_loading_then_parse_error() {
    // GIVEN: A services section without a session URL
    let dir = tempdir().expect("tempdir creates");
    let contents = r#"{
        "version": 1,
        "services": {
            "assessment_url": "http://host/assessments",
            "student_url": "http://host/students",
            "config_url": "http://host/configs"
        }
    }"#;
    std::fs::write(dir.path().join("config.json"), contents).expect("file writes");

    // WHEN: Loading
    let result = AppConfig::load(dir.path());

    // THEN: Parse error naming the problem
    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
}

/// **VALUE**: Verifies that a config file with an empty service URL fails
/// validation at load time.
///
/// **WHY THIS MATTERS**: Empty is distinct from missing: the field parses but
/// must still be rejected before any probe is attempted.
///
/// **BUG THIS CATCHES**: Would catch normalization being applied without its
/// emptiness check.
#[test]
fn given_config_with_empty_service_url_when_loading_then_validation_error() {
    // GIVEN: A services section with an empty config URL
    let dir = tempdir().expect("tempdir creates");
    let contents = r#"{
        "version": 1,
        "services": {
            "assessment_url": "http://host/assessments",
            "student_url": "http://host/students",
            "config_url": "",
            "session_url": "http://host/sessions"
        }
    }"#;
    std::fs::write(dir.path().join("config.json"), contents).expect("file writes");

    // WHEN: Loading
    let result = AppConfig::load(dir.path());

    // THEN: Validation error
    assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
}

/// **VALUE**: Verifies that a missing config file yields working defaults.
///
/// **WHY THIS MATTERS**: Local development and fresh deployments run without a
/// config file; that path must produce a valid, normalized configuration.
///
/// **BUG THIS CATCHES**: Would catch defaults failing their own validation.
#[test]
fn given_no_config_file_when_loading_then_defaults_returned() {
    let dir = tempdir().expect("tempdir creates");

    let loaded = AppConfig::load(dir.path()).expect("defaults load");

    assert_eq!(loaded.version, 1);
    assert_eq!(loaded.server.port, 8080);
    assert!(loaded.services.assessment_url.starts_with("http://"));
}
