//! End-to-end onboarding flow: domain events advance the workflow, the guide
//! re-opens and sends the supervisor to the next page.

use std::sync::{Arc, Mutex};

use supervisor_workflow::guide::{GuideController, RecordingNavigator};
use supervisor_workflow::{
    CloseReason, GuideCommand, MemoryStore, TriggerOutcome, WorkflowChange, WorkflowStore,
    WorkflowTrigger,
};

#[test]
fn test_supervisor_walks_through_every_step() {
    let mut store = WorkflowStore::load(Arc::new(MemoryStore::new()));
    let navigator = RecordingNavigator::new();
    let mut guide = GuideController::new(&navigator);

    // Step 1: guide sends the supervisor to the employee page
    let view = guide.show(&store);
    assert_eq!(view.steps[0].action_label.as_deref(), Some("Start Create Client"));
    guide.select_step(&mut store, 1).unwrap();
    assert_eq!(navigator.last().as_deref(), Some("/employee"));

    assert!(store
        .apply_trigger(WorkflowTrigger::ClientCreated)
        .should_show_guide());

    // Step 2
    let view = guide.show(&store);
    assert_eq!(view.steps[1].action_label.as_deref(), Some("Start Create Activity"));
    assert_eq!(view.steps[0].connector_active, Some(true));
    guide.select_step(&mut store, 2).unwrap();
    assert_eq!(navigator.last().as_deref(), Some("/activities"));

    assert!(store
        .apply_trigger(WorkflowTrigger::ActivitySaved)
        .should_show_guide());

    // Step 3 always leads to the activities page
    guide.show(&store);
    guide.select_step(&mut store, 3).unwrap();
    assert_eq!(
        guide.last_close_reason(),
        Some(CloseReason::NavigatedToActivities)
    );

    assert!(store
        .apply_trigger(WorkflowTrigger::AuditorAssigned)
        .should_show_guide());

    let view = guide.show(&store);
    assert!(view.all_completed);
    assert!(store.current_step().is_none());

    // Start again
    let commands = guide.start_again(&mut store).unwrap();
    assert_eq!(
        commands,
        vec![
            GuideCommand::ResetWorkflow,
            GuideCommand::Navigate("/employee".to_string())
        ]
    );
    assert_eq!(store.current_step().map(|step| step.id), Some(1));
    assert_eq!(
        navigator.visited(),
        vec!["/employee", "/activities", "/activities", "/employee"]
    );
}

#[test]
fn test_events_out_of_order_do_not_advance() {
    let mut store = WorkflowStore::load(Arc::new(MemoryStore::new()));

    assert!(matches!(
        store.apply_trigger(WorkflowTrigger::ActivitySaved),
        TriggerOutcome::NotInWorkflow
    ));
    assert!(matches!(
        store.apply_trigger(WorkflowTrigger::AuditorAssigned),
        TriggerOutcome::NotInWorkflow
    ));
    assert_eq!(store.current_step().map(|step| step.id), Some(1));
}

#[test]
fn test_subscribers_see_guide_driven_reset() {
    let mut store = WorkflowStore::load(Arc::new(MemoryStore::new()));
    for step_id in 1..=3 {
        let _ = store.complete_step(step_id);
    }

    let changes = Arc::new(Mutex::new(Vec::new()));
    let changes_clone = changes.clone();
    let _subscription = store.subscribe(move |change, steps| {
        changes_clone
            .lock()
            .unwrap()
            .push((*change, steps.iter().filter(|step| step.is_in_progress()).count()));
    });

    let mut guide = GuideController::new(RecordingNavigator::new());
    guide.show(&store);
    guide.start_again(&mut store).unwrap();

    assert_eq!(*changes.lock().unwrap(), vec![(WorkflowChange::Reset, 1)]);
}

#[test]
fn test_cancel_from_guide_leaves_progress_untouched() {
    let mut store = WorkflowStore::load(Arc::new(MemoryStore::new()));
    let _ = store.complete_step(1);
    let before = store.steps().to_vec();

    let mut guide = GuideController::new(RecordingNavigator::new());
    guide.show(&store);
    guide.cancel(&mut store).unwrap();

    assert_eq!(store.steps(), before.as_slice());
    assert_eq!(guide.navigator().visited(), vec!["/employee"]);
}
