use exam_api::error::ServerError;
use exam_api::logger::initialize as logger_initialize;
use exam_api::routes::router;
use exam_api::state::AppState;

use exam_core::config::AppConfig;

use common::ErrorLocation;

use std::env;
use std::fs::create_dir_all;
use std::panic::Location;
use std::path::PathBuf;

use log::info;
use tokio::net::TcpListener;

const CONFIG_DIR_ENV: &str = "EXAM_API_CONFIG_DIR";
const LOG_DIR_ENV: &str = "EXAM_API_LOG_DIR";

fn env_dir(key: &str, default: &str) -> PathBuf {
    env::var(key).map_or_else(|_| PathBuf::from(default), PathBuf::from)
}

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    // Initialize logger FIRST
    let log_dir = env_dir(LOG_DIR_ENV, "logs");
    create_dir_all(&log_dir).map_err(|e| ServerError::Server {
        message: format!("Failed to create log directory: {e}"),
        location: ErrorLocation::from(Location::caller()),
    })?;
    logger_initialize(&log_dir)?;

    info!("Exam API server starting");
    info!("Log directory: {}", log_dir.display());

    // Load configuration; invalid config fails startup
    let config_dir = env_dir(CONFIG_DIR_ENV, ".");
    let config = AppConfig::load(&config_dir)?;

    // Wire services and routes
    let state = AppState::from_config(&config)?;
    let app = router(state);

    let bind_address = format!("{}:{}", config.server.bind_address, config.server.port);
    let listener = TcpListener::bind(&bind_address)
        .await
        .map_err(|e| ServerError::Server {
            message: format!("Failed to bind {bind_address}: {e}"),
            location: ErrorLocation::from(Location::caller()),
        })?;

    info!("Listening on {bind_address}");

    axum::serve(listener, app)
        .await
        .map_err(|e| ServerError::Server {
            message: format!("Server failed: {e}"),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(())
}
