use crate::{ModelError, TimeLimitConfiguration};

use common::ErrorLocation;

use std::panic::Location;

/// Builder for creating validated TimeLimitConfiguration instances.
#[derive(Debug, Default)]
pub struct TimeLimitConfigurationBuilder {
    interface_timeout_minutes: Option<u32>,
    exam_restart_window_minutes: Option<u32>,
    request_interface_timeout_minutes: Option<u32>,
}

impl TimeLimitConfigurationBuilder {
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

    /// Build the TimeLimitConfiguration with validation.
    #[track_caller]
    pub fn build(self) -> Result<TimeLimitConfiguration, ModelError> {
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

        Ok(TimeLimitConfiguration {
            interface_timeout_minutes,
            exam_restart_window_minutes,
            request_interface_timeout_minutes,
        })
    }
}
