//! Domain models for the exam service.
//!
//! This crate contains pure data structures representing the core
//! concepts in our application. Models have no business logic - they're
//! just data that can be passed between layers.
//!
//! ## Architecture
//!
//! - **models** (this crate): Pure data structures
//! - **exam-core**: Business logic operating on models
//! - **exam-api**: Application wiring everything together
//!
//! This layered architecture keeps concerns separated and makes testing easier.

pub mod assessment;
pub mod error;
pub mod exam;
pub mod exam_approval;
pub mod exam_configuration;
pub mod links;
pub mod response;
pub mod time_limits;

#[cfg(test)]
mod tests;

pub use assessment::Assessment;
pub use error::model_error::ModelError;
pub use exam::Exam;
pub use exam_approval::ExamApproval;
pub use exam_configuration::builder::ExamConfigurationBuilder;
pub use exam_configuration::{ExamConfiguration, ExamStatus};
pub use links::Link;
pub use response::{Response, ValidationError, ValidationErrorCode};
pub use time_limits::TimeLimitConfiguration;
pub use time_limits::builder::TimeLimitConfigurationBuilder;
