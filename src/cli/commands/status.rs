use anyhow::Result;
use std::fmt::Write;

use crate::workflow::{StepStatus, WorkflowStore};

pub struct StatusCommand;

impl Default for StatusCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusCommand {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self, store: &WorkflowStore) -> Result<()> {
        print!("{}", self.render(store)?);
        Ok(())
    }

    pub fn render(&self, store: &WorkflowStore) -> Result<String> {
        let mut out = String::new();
        writeln!(out, "📋 SUPERVISOR WORKFLOW STATUS")?;
        writeln!(out, "=============================")?;

        for step in store.steps() {
            let icon = match step.status {
                StepStatus::Completed => "✅",
                StepStatus::InProgress => "🔄",
                StepStatus::Pending => "⏳",
            };
            writeln!(
                out,
                "{} Step {}: {} - {} ({})",
                icon,
                step.id,
                step.title,
                step.status.label(),
                step.path
            )?;
        }
        writeln!(out)?;

        match store.current_step() {
            Some(step) => writeln!(out, "🎯 Current step: {} ({})", step.title, step.description)?,
            None if store.all_steps_completed() => {
                writeln!(out, "🎉 All steps completed!")?
            }
            None => writeln!(out, "⚠️  No step is in progress")?,
        }

        Ok(out)
    }
}
