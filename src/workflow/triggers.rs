// Domain events raised by the admin screens that advance the workflow

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::store::{Persistence, WorkflowStore};

/// Something the supervisor did elsewhere in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WorkflowTrigger {
    /// A client was added from the clients screen
    ClientCreated,
    /// An activity was created or saved
    ActivitySaved,
    /// An auditor was assigned to a client activity
    AuditorAssigned,
}

impl WorkflowTrigger {
    /// Step this event completes
    pub fn step_id(&self) -> u32 {
        match self {
            WorkflowTrigger::ClientCreated => 1,
            WorkflowTrigger::ActivitySaved => 2,
            WorkflowTrigger::AuditorAssigned => 3,
        }
    }

    /// Whether the screen raising this event is part of the guided flow
    pub fn applies_to(&self, store: &WorkflowStore) -> bool {
        match self {
            WorkflowTrigger::ClientCreated => store.is_step_in_progress(1),
            // The activities screen is also where step 3 starts
            WorkflowTrigger::ActivitySaved => {
                store.is_step_in_progress(2) || store.is_step_in_progress(3)
            }
            WorkflowTrigger::AuditorAssigned => store.is_step_in_progress(3),
        }
    }
}

/// Outcome of feeding a trigger to the store
#[derive(Debug)]
pub enum TriggerOutcome {
    /// The step was completed; the guide should be shown again
    Advanced {
        step_id: u32,
        persistence: Persistence,
    },
    /// The user is not at a step this event completes
    NotInWorkflow,
}

impl TriggerOutcome {
    pub fn should_show_guide(&self) -> bool {
        matches!(self, TriggerOutcome::Advanced { .. })
    }
}

impl WorkflowStore {
    /// Complete the step matching `trigger` when the user is in the workflow
    pub fn apply_trigger(&mut self, trigger: WorkflowTrigger) -> TriggerOutcome {
        if !trigger.applies_to(self) {
            debug!(trigger = ?trigger, "Trigger outside of workflow, ignoring");
            return TriggerOutcome::NotInWorkflow;
        }

        let step_id = trigger.step_id();
        let persistence = self.complete_step(step_id);
        TriggerOutcome::Advanced {
            step_id,
            persistence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use crate::workflow::types::StepStatus;
    use std::sync::Arc;

    fn fresh_store() -> WorkflowStore {
        WorkflowStore::load(Arc::new(MemoryStore::new()))
    }

    #[test]
    fn test_full_flow_through_triggers() {
        let mut store = fresh_store();

        assert!(store
            .apply_trigger(WorkflowTrigger::ClientCreated)
            .should_show_guide());
        assert!(store
            .apply_trigger(WorkflowTrigger::ActivitySaved)
            .should_show_guide());
        assert!(store
            .apply_trigger(WorkflowTrigger::AuditorAssigned)
            .should_show_guide());

        assert!(store.all_steps_completed());
    }

    #[test]
    fn test_assignment_before_step_three_is_ignored() {
        let mut store = fresh_store();

        let outcome = store.apply_trigger(WorkflowTrigger::AuditorAssigned);

        assert!(matches!(outcome, TriggerOutcome::NotInWorkflow));
        assert_eq!(store.current_step().map(|step| step.id), Some(1));
    }

    #[test]
    fn test_activity_saved_during_step_three_recompletes_step_two() {
        let mut store = fresh_store();
        let _ = store.complete_step(1);
        let _ = store.complete_step(2);

        let outcome = store.apply_trigger(WorkflowTrigger::ActivitySaved);

        assert!(matches!(outcome, TriggerOutcome::Advanced { step_id: 2, .. }));
        assert_eq!(store.step(2).map(|step| step.status), Some(StepStatus::Completed));
        assert_eq!(store.step(3).map(|step| step.status), Some(StepStatus::InProgress));
    }

    #[test]
    fn test_client_created_after_completion_is_ignored() {
        let mut store = fresh_store();
        let _ = store.complete_step(1);

        let outcome = store.apply_trigger(WorkflowTrigger::ClientCreated);

        assert!(!outcome.should_show_guide());
        assert_eq!(store.current_step().map(|step| step.id), Some(2));
    }

    #[test]
    fn test_trigger_names_parse_from_kebab_case() {
        let trigger: WorkflowTrigger = serde_json::from_str("\"auditor-assigned\"").unwrap();
        assert_eq!(trigger, WorkflowTrigger::AuditorAssigned);
    }
}
