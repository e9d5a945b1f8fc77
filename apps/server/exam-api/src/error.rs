use common::ErrorLocation;

use exam_core::error::config::ConfigError;
use exam_core::error::health::HealthError;
use exam_core::error::repository::RepositoryError;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response as AxumResponse};
use log::error;
use serde::Serialize;
use thiserror::Error as ThisError;

/// Failures during server startup.
#[derive(Debug, ThisError)]
pub enum ServerError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Health(#[from] HealthError),

    #[error("Server Error: {message} {location}")]
    Server {
        message: String,
        location: ErrorLocation,
    },
}

/// Failures a request handler can surface to the client.
#[derive(Debug, ThisError)]
pub enum ApiError {
    #[error("Invalid exam id: {id}")]
    InvalidExamId { id: String },

    #[error("Exam not found: {id}")]
    ExamNotFound { id: String },

    #[error(transparent)]
    Lookup(#[from] RepositoryError),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> AxumResponse {
        let status = match &self {
            ApiError::InvalidExamId { .. } => StatusCode::BAD_REQUEST,
            ApiError::ExamNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Lookup(e) => {
                error!("Exam lookup failed: {e}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = ErrorBody {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
