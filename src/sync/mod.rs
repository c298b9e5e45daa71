mod phase;
mod report;

pub use phase::Phase;
pub use report::{ItemOutcome, SyncReport, WorkItem};
