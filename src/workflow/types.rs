// Core types for the supervisor onboarding workflow

use serde::{Deserialize, Serialize};
use std::fmt;

/// Storage key the workflow state is persisted under
pub const WORKFLOW_STEPS_KEY: &str = "workflowSteps";

/// Status of a single workflow step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StepStatus {
    /// Not reached yet
    Pending,
    /// The step the supervisor should work on next
    InProgress,
    /// Finished
    Completed,
}

impl StepStatus {
    /// Human readable label shown next to a step in the guide
    pub fn label(&self) -> &'static str {
        match self {
            StepStatus::Pending => "Pending",
            StepStatus::InProgress => "In Progress",
            StepStatus::Completed => "Completed",
        }
    }
}

impl fmt::Display for StepStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let wire = match self {
            StepStatus::Pending => "pending",
            StepStatus::InProgress => "in-progress",
            StepStatus::Completed => "completed",
        };
        f.write_str(wire)
    }
}

/// One stage of the onboarding workflow
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowStep {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub status: StepStatus,
    pub path: String,
}

impl WorkflowStep {
    pub fn new(id: u32, title: &str, description: &str, status: StepStatus, path: &str) -> Self {
        Self {
            id,
            title: title.to_string(),
            description: description.to_string(),
            status,
            path: path.to_string(),
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status == StepStatus::Completed
    }

    pub fn is_in_progress(&self) -> bool {
        self.status == StepStatus::InProgress
    }

    pub fn is_pending(&self) -> bool {
        self.status == StepStatus::Pending
    }
}

/// Fresh copy of the default three-step configuration.
///
/// Step 1 starts in progress, the rest are pending.
pub fn default_steps() -> Vec<WorkflowStep> {
    vec![
        WorkflowStep::new(
            1,
            "Create Client",
            "Add a new client to the system",
            StepStatus::InProgress,
            "/employee",
        ),
        WorkflowStep::new(
            2,
            "Create Activity",
            "Create a new activity",
            StepStatus::Pending,
            "/activities",
        ),
        WorkflowStep::new(
            3,
            "Assign Auditor",
            "Assign an auditor to an activity",
            StepStatus::Pending,
            "/activities",
        ),
    ]
}

/// What changed in the workflow, delivered to subscribers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowChange {
    Completed { step_id: u32 },
    Reset,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serializes_to_wire_strings() {
        assert_eq!(serde_json::to_string(&StepStatus::Pending).unwrap(), "\"pending\"");
        assert_eq!(
            serde_json::to_string(&StepStatus::InProgress).unwrap(),
            "\"in-progress\""
        );
        assert_eq!(
            serde_json::to_string(&StepStatus::Completed).unwrap(),
            "\"completed\""
        );
        assert_eq!(StepStatus::InProgress.to_string(), "in-progress");
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let result: Result<StepStatus, _> = serde_json::from_str("\"done\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_default_steps_layout() {
        let steps = default_steps();
        assert_eq!(steps.len(), 3);
        assert_eq!(
            steps.iter().map(|s| s.id).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        assert_eq!(steps[0].title, "Create Client");
        assert_eq!(steps[0].path, "/employee");
        assert!(steps[0].is_in_progress());
        assert_eq!(steps[1].title, "Create Activity");
        assert_eq!(steps[1].path, "/activities");
        assert!(steps[1].is_pending());
        assert_eq!(steps[2].title, "Assign Auditor");
        assert_eq!(steps[2].path, "/activities");
        assert!(steps[2].is_pending());
    }

    #[test]
    fn test_step_record_field_names() {
        let value = serde_json::to_value(&default_steps()[0]).unwrap();
        let object = value.as_object().unwrap();
        let mut keys: Vec<_> = object.keys().cloned().collect();
        keys.sort();
        assert_eq!(keys, vec!["description", "id", "path", "status", "title"]);
        assert_eq!(object["status"], "in-progress");
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(StepStatus::Pending.label(), "Pending");
        assert_eq!(StepStatus::InProgress.label(), "In Progress");
        assert_eq!(StepStatus::Completed.label(), "Completed");
    }
}
