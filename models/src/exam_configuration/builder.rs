use crate::exam_configuration::{ExamConfiguration, ExamStatus};
use crate::ModelError;

use common::ErrorLocation;

use std::panic::Location;

use uuid::Uuid;

/// Builder for creating validated ExamConfiguration instances.
///
/// Provides a fluent API for constructing ExamConfiguration with every
/// required field checked once, at build time.
#[derive(Debug, Default)]
pub struct ExamConfigurationBuilder {
    exam_id: Option<Uuid>,
    content_load_timeout_minutes: Option<u32>,
    interface_timeout_minutes: Option<u32>,
    exam_restart_window_minutes: Option<u32>,
    request_interface_timeout_minutes: Option<u32>,
    prefetch: Option<u32>,
    validate_completeness: Option<bool>,
    attempt: Option<u32>,
    start_position: Option<u32>,
    status: Option<ExamStatus>,
    test_length: Option<u32>,
    failure_message: Option<String>,
}

impl ExamConfigurationBuilder {
    pub fn with_exam_id(mut self, exam_id: Uuid) -> Self {
        self.exam_id = Some(exam_id);
        self
    }

    pub fn with_content_load_timeout_minutes(mut self, minutes: u32) -> Self {
        self.content_load_timeout_minutes = Some(minutes);
        self
    }

    pub fn with_interface_timeout_minutes(mut self, minutes: u32) -> Self {
        self.interface_timeout_minutes = Some(minutes);
        self
    }

    pub fn with_exam_restart_window_minutes(mut self, minutes: u32) -> Self {
        self.exam_restart_window_minutes = Some(minutes);
        self
    }

    pub fn with_request_interface_timeout_minutes(mut self, minutes: u32) -> Self {
        self.request_interface_timeout_minutes = Some(minutes);
        self
    }

    pub fn with_prefetch(mut self, prefetch: u32) -> Self {
        self.prefetch = Some(prefetch);
        self
    }

    pub fn with_validate_completeness(mut self, validate: bool) -> Self {
        self.validate_completeness = Some(validate);
        self
    }

    pub fn with_attempt(mut self, attempt: u32) -> Self {
        self.attempt = Some(attempt);
        self
    }

    pub fn with_start_position(mut self, position: u32) -> Self {
        self.start_position = Some(position);
        self
    }

    pub fn with_status(mut self, status: ExamStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_test_length(mut self, length: u32) -> Self {
        self.test_length = Some(length);
        self
    }

    pub fn with_failure_message(mut self, message: impl Into<String>) -> Self {
        self.failure_message = Some(message.into());
        self
    }

    /// Build the ExamConfiguration with validation.
    ///
    /// `failure_message` is the only optional field; everything else is
    /// required and missing fields are reported by name.
    #[track_caller]
    pub fn build(self) -> Result<ExamConfiguration, ModelError> {
        let exam_id = self.exam_id.ok_or_else(|| ModelError::Validation {
            message: String::from("Exam id is required"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let content_load_timeout_minutes =
            self.content_load_timeout_minutes
                .ok_or_else(|| ModelError::Validation {
                    message: String::from("Content load timeout is required"),
                    location: ErrorLocation::from(Location::caller()),
                })?;

        let interface_timeout_minutes =
            self.interface_timeout_minutes
                .ok_or_else(|| ModelError::Validation {
                    message: String::from("Interface timeout is required"),
                    location: ErrorLocation::from(Location::caller()),
                })?;

        let exam_restart_window_minutes =
            self.exam_restart_window_minutes
                .ok_or_else(|| ModelError::Validation {
                    message: String::from("Exam restart window is required"),
                    location: ErrorLocation::from(Location::caller()),
                })?;

        let request_interface_timeout_minutes = self
            .request_interface_timeout_minutes
            .ok_or_else(|| ModelError::Validation {
                message: String::from("Request interface timeout is required"),
                location: ErrorLocation::from(Location::caller()),
            })?;

        let prefetch = self.prefetch.ok_or_else(|| ModelError::Validation {
            message: String::from("Prefetch is required"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let validate_completeness =
            self.validate_completeness
                .ok_or_else(|| ModelError::Validation {
                    message: String::from("Validate completeness is required"),
                    location: ErrorLocation::from(Location::caller()),
                })?;

        let attempt = self.attempt.ok_or_else(|| ModelError::Validation {
            message: String::from("Attempt is required"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let start_position = self.start_position.ok_or_else(|| ModelError::Validation {
            message: String::from("Start position is required"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        if start_position == 0 {
            return Err(ModelError::Validation {
                message: String::from("Start position must be at least 1"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let status = self.status.ok_or_else(|| ModelError::Validation {
            message: String::from("Status is required"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let test_length = self.test_length.ok_or_else(|| ModelError::Validation {
            message: String::from("Test length is required"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        Ok(ExamConfiguration {
            exam_id,
            content_load_timeout_minutes,
            interface_timeout_minutes,
            exam_restart_window_minutes,
            request_interface_timeout_minutes,
            prefetch,
            validate_completeness,
            attempt,
            start_position,
            status,
            test_length,
            failure_message: self.failure_message,
        })
    }
}
