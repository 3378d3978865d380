use anyhow::Result;

use crate::cli::GuideAction;
use crate::guide::{GuideController, Navigator};
use crate::workflow::WorkflowStore;

pub struct ShowGuideCommand {
    pub action: Option<GuideAction>,
}

impl ShowGuideCommand {
    pub fn new(action: Option<GuideAction>) -> Self {
        Self { action }
    }

    pub fn execute<N: Navigator>(&self, store: &mut WorkflowStore, navigator: N) -> Result<()> {
        let mut controller = GuideController::new(navigator);
        let view = controller.show(store);
        print!("{}", view);

        let commands = match &self.action {
            None => return Ok(()),
            Some(GuideAction::Select { step_id }) => controller.select_step(store, *step_id)?,
            Some(GuideAction::Cancel) => controller.cancel(store)?,
            Some(GuideAction::StartAgain) => {
                if !view.all_completed {
                    println!("ℹ️  Start Again is offered once every step is completed");
                    return Ok(());
                }
                controller.start_again(store)?
            }
        };

        match controller.last_close_reason() {
            Some(reason) if !commands.is_empty() => println!("Guide closed: {}", reason),
            _ => println!("ℹ️  Only the step in progress can be started"),
        }
        Ok(())
    }
}
