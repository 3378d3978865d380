use anyhow::Result;

use super::report_persistence;
use crate::guide::GuideView;
use crate::workflow::{TriggerOutcome, WorkflowStore, WorkflowTrigger};

pub struct EventCommand {
    pub trigger: WorkflowTrigger,
}

impl EventCommand {
    pub fn new(trigger: WorkflowTrigger) -> Self {
        Self { trigger }
    }

    pub fn execute(&self, store: &mut WorkflowStore) -> Result<()> {
        match store.apply_trigger(self.trigger) {
            TriggerOutcome::Advanced {
                step_id,
                persistence,
            } => {
                report_persistence(&persistence);
                println!("✅ Workflow step {} completed", step_id);
                println!();
                // The guide pops up again after each completed step
                print!("{}", GuideView::from_steps(store.steps()));
            }
            TriggerOutcome::NotInWorkflow => {
                println!("ℹ️  Not part of the current workflow step; progress unchanged");
            }
        }
        Ok(())
    }
}
