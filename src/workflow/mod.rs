// Supervisor onboarding workflow
//
// Three linear steps (create client, create activity, assign auditor) whose
// progress is owned by a WorkflowStore and persisted after every change.

pub mod store;
pub mod triggers;
pub mod types;

pub use store::{Persistence, Subscription, WorkflowError, WorkflowStore};
pub use triggers::{TriggerOutcome, WorkflowTrigger};
pub use types::{default_steps, StepStatus, WorkflowChange, WorkflowStep, WORKFLOW_STEPS_KEY};
