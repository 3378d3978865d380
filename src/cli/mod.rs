use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::workflow::WorkflowTrigger;

pub mod commands;

#[derive(Parser)]
#[command(name = "supervisor-workflow")]
#[command(about = "Supervisor onboarding workflow guide")]
#[command(long_about = "Tracks the three supervisor onboarding steps (create a client, create an \
                       activity, assign an auditor) and remembers progress between runs. Start with \
                       'supervisor-workflow guide' to see what to do next.")]
pub struct Cli {
    /// Override the file workflow progress is stored in
    #[arg(long, global = true, help = "Path of the JSON store holding workflow progress")]
    pub state_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show every step, the current step and overall completion
    Status,
    /// Mark a step completed and start the next one
    Complete {
        /// Step to complete
        #[arg(help = "Id of the step to complete (1-3)")]
        step_id: u32,
    },
    /// Start the workflow again from the first step
    Reset,
    /// Report something done elsewhere in the admin tool
    Event {
        #[arg(value_enum, help = "What happened")]
        trigger: TriggerArg,
    },
    /// Open the workflow guide
    Guide {
        #[command(subcommand)]
        action: Option<GuideAction>,
    },
}

#[derive(Subcommand, Clone, Debug, PartialEq, Eq)]
pub enum GuideAction {
    /// Follow the action of the current step
    Select {
        #[arg(help = "Id of the step whose action to follow")]
        step_id: u32,
    },
    /// Dismiss the guide
    Cancel,
    /// Restart the workflow once every step is completed
    StartAgain,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum TriggerArg {
    ClientCreated,
    ActivitySaved,
    AuditorAssigned,
}

impl From<TriggerArg> for WorkflowTrigger {
    fn from(arg: TriggerArg) -> Self {
        match arg {
            TriggerArg::ClientCreated => WorkflowTrigger::ClientCreated,
            TriggerArg::ActivitySaved => WorkflowTrigger::ActivitySaved,
            TriggerArg::AuditorAssigned => WorkflowTrigger::AuditorAssigned,
        }
    }
}
