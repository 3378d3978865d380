use anyhow::{Context, Result};
use statig::prelude::*;
use tracing::{debug, warn};

use super::navigation::Navigator;
use super::session::GuideSession;
use super::types::{CloseReason, GuideCommand, GuideEvent};
use super::view::GuideView;
use crate::workflow::WorkflowStore;

/// Drives a guide session and carries out the commands it issues
pub struct GuideController<N: Navigator> {
    machine: StateMachine<GuideSession>,
    navigator: N,
    executed: usize,
}

impl<N: Navigator> GuideController<N> {
    pub fn new(navigator: N) -> Self {
        Self {
            machine: GuideSession::new().state_machine(),
            navigator,
            executed: 0,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.machine.inner().is_visible()
    }

    pub fn last_close_reason(&self) -> Option<CloseReason> {
        self.machine.inner().last_close_reason()
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    /// Open the guide and return what it shows
    pub fn show(&mut self, store: &WorkflowStore) -> GuideView {
        self.machine.handle(&GuideEvent::Show);
        GuideView::from_steps(store.steps())
    }

    /// Dismiss the guide without picking a step
    pub fn cancel(&mut self, store: &mut WorkflowStore) -> Result<Vec<GuideCommand>> {
        self.dispatch(store, GuideEvent::Cancel)
    }

    /// Follow the action of `step_id`; only the in-progress step reacts
    pub fn select_step(
        &mut self,
        store: &mut WorkflowStore,
        step_id: u32,
    ) -> Result<Vec<GuideCommand>> {
        let Some(step) = store.step(step_id) else {
            debug!(step_id = %step_id, "Selected step does not exist");
            return Ok(Vec::new());
        };

        let event = GuideEvent::SelectStep {
            step_id: step.id,
            status: step.status,
            path: step.path.clone(),
        };
        self.dispatch(store, event)
    }

    /// Restart the workflow from the completion screen
    pub fn start_again(&mut self, store: &mut WorkflowStore) -> Result<Vec<GuideCommand>> {
        self.dispatch(store, GuideEvent::StartAgain)
    }

    fn dispatch(&mut self, store: &mut WorkflowStore, event: GuideEvent) -> Result<Vec<GuideCommand>> {
        self.machine.handle(&event);

        let commands = self.machine.inner().commands_since(self.executed).to_vec();
        self.executed += commands.len();

        for command in &commands {
            self.execute(store, command)?;
        }
        Ok(commands)
    }

    fn execute(&self, store: &mut WorkflowStore, command: &GuideCommand) -> Result<()> {
        match command {
            GuideCommand::Navigate(path) => self
                .navigator
                .navigate(path)
                .with_context(|| format!("Failed to navigate to {}", path)),
            GuideCommand::ResetWorkflow => {
                if !store.reset_workflow().is_saved() {
                    warn!("Workflow reset is not persisted and will be lost on reload");
                }
                Ok(())
            }
        }
    }
}
