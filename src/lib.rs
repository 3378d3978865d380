// Supervisor Workflow Library - onboarding guide for the audit admin tool
// This exposes the core components for testing and integration

pub mod cli;
pub mod config;
pub mod guide;
pub mod storage;
pub mod telemetry;
pub mod workflow;

// Re-export key types for easy access
pub use config::SupervisorWorkflowConfig;
pub use guide::{CloseReason, GuideCommand, GuideController, GuideView, Navigator};
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError};
pub use telemetry::init_telemetry;
pub use workflow::{
    Persistence, StepStatus, Subscription, TriggerOutcome, WorkflowChange, WorkflowStep,
    WorkflowStore, WorkflowTrigger,
};
