use anyhow::Result;

use super::report_persistence;
use crate::workflow::WorkflowStore;

pub struct CompleteCommand {
    pub step_id: u32,
}

impl CompleteCommand {
    pub fn new(step_id: u32) -> Self {
        Self { step_id }
    }

    pub fn execute(&self, store: &mut WorkflowStore) -> Result<()> {
        if store.step(self.step_id).is_none() {
            println!("ℹ️  There is no step {}; nothing changed", self.step_id);
            return Ok(());
        }

        let persistence = store.complete_step(self.step_id);
        report_persistence(&persistence);

        match store.current_step() {
            Some(next) => println!("✅ Step {} done. Next: {}", self.step_id, next.title),
            None if store.all_steps_completed() => println!("🎉 All steps completed!"),
            None => println!("✅ Step {} done", self.step_id),
        }
        Ok(())
    }
}
