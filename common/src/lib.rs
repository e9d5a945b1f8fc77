//! Shared leaf types for the exam service.
//!
//! This crate holds the small pieces every other crate needs and none
//! should own: error source locations and HTTP status categorization.
//! It has no business logic and no async code.

pub mod error;
pub mod http_status;

pub use error::error_location::ErrorLocation;
pub use http_status::HttpStatusCode;
