use common::ErrorLocation;

use std::panic::Location;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum HealthError {
    #[error("Health Client Error: {message} {location}")]
    Client {
        message: String,
        location: ErrorLocation,
    },
}

impl From<reqwest::Error> for HealthError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        HealthError::Client {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
