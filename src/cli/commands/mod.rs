use crate::workflow::Persistence;

pub mod complete;
pub mod event;
pub mod guide;
pub mod reset;
pub mod status;

/// Tell the user when progress was only kept in memory
pub fn report_persistence(persistence: &Persistence) {
    if let Persistence::InMemoryOnly(e) = persistence {
        println!("⚠️  Progress could not be saved and will be lost on the next run: {}", e);
    }
}
