use statig::prelude::*;

use super::types::{
    CloseReason, GuideCommand, GuideEvent, ACTIVITIES_PATH, ASSIGN_AUDITOR_STEP_ID, EMPLOYEE_PATH,
};
use crate::workflow::StepStatus;

/// Workflow guide overlay lifecycle.
///
/// The session never touches the workflow store or the router itself. It
/// appends [`GuideCommand`]s to a log which the caller reads and executes.
#[derive(Debug, Default)]
pub struct GuideSession {
    visible: bool,
    last_close_reason: Option<CloseReason>,
    issued: Vec<GuideCommand>,
}

impl GuideSession {
    pub fn new() -> Self {
        Self::default()
    }

    fn close(&mut self, reason: CloseReason, commands: Vec<GuideCommand>) {
        self.visible = false;
        self.last_close_reason = Some(reason);
        self.issued.extend(commands);
        tracing::info!(reason = %reason, "Workflow guide closed");
    }
}

#[state_machine(initial = "State::hidden()")]
impl GuideSession {
    #[state]
    fn hidden(&mut self, event: &GuideEvent) -> Outcome<State> {
        match event {
            GuideEvent::Show => {
                self.visible = true;
                tracing::info!("Workflow guide shown");
                Transition(State::open())
            }
            _ => Handled,
        }
    }

    #[state]
    fn open(&mut self, event: &GuideEvent) -> Outcome<State> {
        match event {
            GuideEvent::Cancel => {
                self.close(
                    CloseReason::Canceled,
                    vec![GuideCommand::Navigate(EMPLOYEE_PATH.to_string())],
                );
                Transition(State::hidden())
            }
            GuideEvent::SelectStep {
                step_id,
                status,
                path,
            } => {
                if *status != StepStatus::InProgress {
                    tracing::debug!(step_id = %step_id, status = %status, "Ignoring inactive step");
                    return Handled;
                }
                if *step_id == ASSIGN_AUDITOR_STEP_ID {
                    self.close(
                        CloseReason::NavigatedToActivities,
                        vec![GuideCommand::Navigate(ACTIVITIES_PATH.to_string())],
                    );
                } else {
                    self.close(
                        CloseReason::Navigated,
                        vec![GuideCommand::Navigate(path.clone())],
                    );
                }
                Transition(State::hidden())
            }
            GuideEvent::StartAgain => {
                self.close(
                    CloseReason::ResetWorkflow,
                    vec![
                        GuideCommand::ResetWorkflow,
                        GuideCommand::Navigate(EMPLOYEE_PATH.to_string()),
                    ],
                );
                Transition(State::hidden())
            }
            GuideEvent::Show => Handled,
        }
    }
}

impl GuideSession {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn last_close_reason(&self) -> Option<CloseReason> {
        self.last_close_reason
    }

    /// Every command issued so far, oldest first
    pub fn commands(&self) -> &[GuideCommand] {
        &self.issued
    }

    /// Commands issued after the first `cursor` entries
    pub fn commands_since(&self, cursor: usize) -> &[GuideCommand] {
        self.issued.get(cursor..).unwrap_or(&[])
    }
}
