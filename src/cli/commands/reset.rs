use anyhow::Result;

use super::report_persistence;
use crate::workflow::WorkflowStore;

pub struct ResetCommand;

impl Default for ResetCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl ResetCommand {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self, store: &mut WorkflowStore) -> Result<()> {
        println!("🔄 Resetting workflow to its initial state");
        let persistence = store.reset_workflow();
        report_persistence(&persistence);

        if let Some(step) = store.current_step() {
            println!("🎯 Start with: {}", step.title);
        }
        Ok(())
    }
}
