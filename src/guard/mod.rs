mod navigation;
mod unload;

pub use navigation::{DirtySource, NavigationGuard, TransitionOutcome};
pub use unload::{UNSAVED_CHANGES_MESSAGE, UnloadEvent};
