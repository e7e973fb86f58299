mod snapshot;
mod tracker;

pub use snapshot::{DocumentSnapshot, ItemId, Snapshot};
pub use tracker::DirtyTracker;
