// Events and commands exchanged with the workflow guide overlay

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::workflow::StepStatus;

/// Page the guide sends the supervisor to when it is dismissed
pub const EMPLOYEE_PATH: &str = "/employee";
/// Page where activities are created and auditors assigned
pub const ACTIVITIES_PATH: &str = "/activities";

/// Step whose action always leads to the activities page
pub const ASSIGN_AUDITOR_STEP_ID: u32 = 3;

/// Why the guide was closed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CloseReason {
    /// Close button, escape key or click outside the overlay
    Canceled,
    /// A step action link was followed
    Navigated,
    /// The assign-auditor step action was followed
    NavigatedToActivities,
    /// "Start Again" after finishing every step
    ResetWorkflow,
}

impl fmt::Display for CloseReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CloseReason::Canceled => "canceled",
            CloseReason::Navigated => "navigated",
            CloseReason::NavigatedToActivities => "navigated-to-activities",
            CloseReason::ResetWorkflow => "reset-workflow",
        };
        f.write_str(name)
    }
}

/// Input to the guide session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuideEvent {
    Show,
    Cancel,
    SelectStep {
        step_id: u32,
        status: StepStatus,
        path: String,
    },
    StartAgain,
}

/// Side effects requested by the guide session
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GuideCommand {
    Navigate(String),
    ResetWorkflow,
}
