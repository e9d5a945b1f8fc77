use common::ErrorLocation;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum RepositoryError {
    #[error("Repository Lookup Error: {message} {location}")]
    Lookup {
        message: String,
        location: ErrorLocation,
    },
}
