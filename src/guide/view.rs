use serde::Serialize;
use std::fmt;

use crate::workflow::{StepStatus, WorkflowStep};

/// One row of the guide overlay
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepView {
    pub id: u32,
    pub title: String,
    pub status: StepStatus,
    pub status_label: &'static str,
    /// Present only for the step the supervisor should start next
    pub action_label: Option<String>,
    /// Whether the line towards the next step is lit
    pub connector_active: Option<bool>,
}

/// Everything the guide overlay needs to render
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuideView {
    pub steps: Vec<StepView>,
    pub all_completed: bool,
}

impl GuideView {
    pub fn from_steps(steps: &[WorkflowStep]) -> Self {
        let views = steps
            .iter()
            .enumerate()
            .map(|(index, step)| StepView {
                id: step.id,
                title: step.title.clone(),
                status: step.status,
                status_label: step.status.label(),
                action_label: step
                    .is_in_progress()
                    .then(|| format!("Start {}", step.title)),
                connector_active: steps.get(index + 1).map(|next| !next.is_pending()),
            })
            .collect();

        Self {
            steps: views,
            all_completed: steps.iter().all(WorkflowStep::is_completed),
        }
    }
}

impl fmt::Display for GuideView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Supervisor Workflow Guide")?;
        for step in &self.steps {
            let marker = match step.status {
                StepStatus::Completed => "[x]",
                StepStatus::InProgress => "[>]",
                StepStatus::Pending => "[ ]",
            };
            write!(
                f,
                "  {} Step {}: {} ({})",
                marker, step.id, step.title, step.status_label
            )?;
            if let Some(action) = &step.action_label {
                write!(f, "  -> {}", action)?;
            }
            writeln!(f)?;
        }
        if self.all_completed {
            writeln!(f, "All steps completed!")?;
            writeln!(f, "You have successfully completed all the workflow steps.")?;
            writeln!(f, "Run 'guide start-again' to start again.")?;
        }
        Ok(())
    }
}
