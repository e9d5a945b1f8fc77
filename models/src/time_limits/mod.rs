pub mod builder;

use serde::{Deserialize, Serialize};

/// External description of the timing rules for an assessment.
///
/// All values are minutes. Instances are built through
/// [`builder::TimeLimitConfigurationBuilder`] so that required fields are
/// validated once, at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeLimitConfiguration {
    /// Minutes of interface inactivity before the exam is paused.
    pub interface_timeout_minutes: u32,

    /// Minutes within which a paused exam may be restarted in place.
    pub exam_restart_window_minutes: u32,

    /// Minutes allowed for an interface request before it is abandoned.
    pub request_interface_timeout_minutes: u32,
}
