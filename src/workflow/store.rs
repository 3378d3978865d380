// Workflow store - single owner of onboarding progress

use std::sync::{Arc, Mutex, Weak};

use thiserror::Error;
use tracing::{debug, info, warn};

use super::types::{default_steps, StepStatus, WorkflowChange, WorkflowStep, WORKFLOW_STEPS_KEY};
use crate::storage::{KeyValueStore, StorageError};

/// Errors that can occur while restoring workflow state
#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("Persisted workflow state is invalid: {0}")]
    Deserialization(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Result of writing the workflow state after a mutation.
///
/// The in-memory state is updated either way; `InMemoryOnly` means progress
/// will not survive a reload.
#[must_use]
#[derive(Debug)]
pub enum Persistence {
    Saved,
    InMemoryOnly(StorageError),
}

impl Persistence {
    pub fn is_saved(&self) -> bool {
        matches!(self, Persistence::Saved)
    }
}

type Callback = Arc<dyn Fn(&WorkflowChange, &[WorkflowStep]) + Send + Sync>;

#[derive(Default)]
struct Observers {
    next_id: u64,
    callbacks: Vec<(u64, Callback)>,
}

/// Handle returned by [`WorkflowStore::subscribe`].
///
/// The callback stays registered until the handle is dropped or
/// [`Subscription::unsubscribe`] is called.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    id: u64,
    observers: Weak<Mutex<Observers>>,
}

impl Subscription {
    pub fn unsubscribe(self) {
        // Drop does the work
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(observers) = self.observers.upgrade() {
            let mut observers = observers
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            observers.callbacks.retain(|(id, _)| *id != self.id);
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

/// Source of truth for workflow progress, durable across reloads
pub struct WorkflowStore {
    store: Arc<dyn KeyValueStore>,
    key: String,
    steps: Vec<WorkflowStep>,
    observers: Arc<Mutex<Observers>>,
    last_persistence_error: Option<String>,
}

impl WorkflowStore {
    /// Restore the workflow from `store` under the default key
    pub fn load(store: Arc<dyn KeyValueStore>) -> Self {
        Self::load_with_key(store, WORKFLOW_STEPS_KEY)
    }

    /// Restore the workflow from `store` under `key`.
    ///
    /// Missing, unreadable or unparseable state falls back to the default
    /// configuration. Parsed state is used as-is.
    pub fn load_with_key(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        let key = key.into();
        let steps = match read_persisted(store.as_ref(), &key) {
            Ok(Some(steps)) => {
                info!(key = %key, steps = steps.len(), "Restored workflow state");
                steps
            }
            Ok(None) => {
                debug!(key = %key, "No persisted workflow state, using defaults");
                default_steps()
            }
            Err(e) => {
                warn!(key = %key, error = %e, "Discarding persisted workflow state");
                default_steps()
            }
        };

        Self {
            store,
            key,
            steps,
            observers: Arc::new(Mutex::new(Observers::default())),
            last_persistence_error: None,
        }
    }

    /// Current steps in ascending id order
    pub fn steps(&self) -> &[WorkflowStep] {
        &self.steps
    }

    pub fn step(&self, step_id: u32) -> Option<&WorkflowStep> {
        self.steps.iter().find(|step| step.id == step_id)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// True when every step is completed
    pub fn all_steps_completed(&self) -> bool {
        self.steps.iter().all(WorkflowStep::is_completed)
    }

    /// First in-progress step, if any
    pub fn current_step(&self) -> Option<&WorkflowStep> {
        self.steps.iter().find(|step| step.is_in_progress())
    }

    pub fn is_step_in_progress(&self, step_id: u32) -> bool {
        self.steps
            .iter()
            .any(|step| step.id == step_id && step.is_in_progress())
    }

    /// Message of the last failed write, cleared by the next successful one
    pub fn last_persistence_error(&self) -> Option<&str> {
        self.last_persistence_error.as_deref()
    }

    /// Mark `step_id` completed and move its successor to in progress.
    ///
    /// Ids that match no step leave every status unchanged. Completing the
    /// last step leaves no step in progress.
    pub fn complete_step(&mut self, step_id: u32) -> Persistence {
        let successor = step_id.checked_add(1);
        for step in self.steps.iter_mut() {
            if step.id == step_id {
                step.status = StepStatus::Completed;
            } else if Some(step.id) == successor {
                step.status = StepStatus::InProgress;
            }
        }

        info!(
            step_id = %step_id,
            current_step = ?self.current_step().map(|step| step.id),
            all_completed = %self.all_steps_completed(),
            "Workflow step completed"
        );

        self.commit(WorkflowChange::Completed { step_id })
    }

    /// Replace the state with a fresh copy of the defaults
    pub fn reset_workflow(&mut self) -> Persistence {
        self.steps = default_steps();
        info!("Workflow reset to initial state");
        self.commit(WorkflowChange::Reset)
    }

    /// Register `callback` to run after every mutation
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&WorkflowChange, &[WorkflowStep]) + Send + Sync + 'static,
    {
        let mut observers = self
            .observers
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        observers.next_id += 1;
        let id = observers.next_id;
        observers.callbacks.push((id, Arc::new(callback)));

        Subscription {
            id,
            observers: Arc::downgrade(&self.observers),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.observers
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .callbacks
            .len()
    }

    fn commit(&mut self, change: WorkflowChange) -> Persistence {
        let persistence = self.persist();
        self.notify(&change);
        persistence
    }

    fn persist(&mut self) -> Persistence {
        let result = serde_json::to_string(&self.steps)
            .map_err(StorageError::from)
            .and_then(|serialized| self.store.set(&self.key, &serialized));

        match result {
            Ok(()) => {
                self.last_persistence_error = None;
                debug!(key = %self.key, "Workflow state persisted");
                Persistence::Saved
            }
            Err(e) => {
                warn!(
                    key = %self.key,
                    error = %e,
                    "Failed to persist workflow state, progress is in memory only"
                );
                self.last_persistence_error = Some(e.to_string());
                Persistence::InMemoryOnly(e)
            }
        }
    }

    fn notify(&self, change: &WorkflowChange) {
        // Snapshot so callbacks may subscribe or unsubscribe while running
        let callbacks: Vec<Callback> = self
            .observers
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .callbacks
            .iter()
            .map(|(_, callback)| Arc::clone(callback))
            .collect();

        for callback in callbacks {
            callback(change, &self.steps);
        }
    }
}

impl std::fmt::Debug for WorkflowStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkflowStore")
            .field("key", &self.key)
            .field("steps", &self.steps)
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

fn read_persisted(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<Option<Vec<WorkflowStep>>, WorkflowError> {
    match store.get(key)? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}
