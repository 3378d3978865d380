// Workflow guide overlay
//
// The guide shows the three onboarding steps, sends the supervisor to the page
// of the current step and offers a restart once everything is done.

pub mod controller;
pub mod navigation;
pub mod session;
pub mod types;
pub mod view;

pub use controller::GuideController;
pub use navigation::{ConsoleNavigator, Navigator, RecordingNavigator};
pub use session::GuideSession;
pub use types::{CloseReason, GuideCommand, GuideEvent, ACTIVITIES_PATH, EMPLOYEE_PATH};
pub use view::{GuideView, StepView};
