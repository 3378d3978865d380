use anyhow::Result;
use clap::Parser;
use std::sync::Arc;

use supervisor_workflow::cli::commands::{
    complete::CompleteCommand, event::EventCommand, guide::ShowGuideCommand,
    reset::ResetCommand, status::StatusCommand,
};
use supervisor_workflow::cli::{Cli, Commands};
use supervisor_workflow::guide::ConsoleNavigator;
use supervisor_workflow::{init_telemetry, FileStore, SupervisorWorkflowConfig, WorkflowStore};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let _ = SupervisorWorkflowConfig::load_env_file();
    let config = SupervisorWorkflowConfig::load()?;
    init_telemetry(&config.observability)?;

    let state_file = cli.state_file.clone().unwrap_or_else(|| config.state_file());
    let mut store = WorkflowStore::load_with_key(
        Arc::new(FileStore::new(&state_file)),
        config.storage.key.clone(),
    );
    tracing::debug!(file = ?state_file, key = %store.key(), "Opened workflow store");
    let _subscription = store.subscribe(|change, steps| {
        tracing::info!(
            change = ?change,
            current_step = ?steps.iter().find(|step| step.is_in_progress()).map(|step| step.id),
            "Workflow updated"
        );
    });

    match cli.command {
        // Default behavior: no subcommand shows the guide
        None => ShowGuideCommand::new(None).execute(&mut store, ConsoleNavigator),
        Some(Commands::Status) => StatusCommand::new().execute(&store),
        Some(Commands::Complete { step_id }) => CompleteCommand::new(step_id).execute(&mut store),
        Some(Commands::Reset) => ResetCommand::new().execute(&mut store),
        Some(Commands::Event { trigger }) => EventCommand::new(trigger.into()).execute(&mut store),
        Some(Commands::Guide { action }) => {
            ShowGuideCommand::new(action).execute(&mut store, ConsoleNavigator)
        }
    }
}
