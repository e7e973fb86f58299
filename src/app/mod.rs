mod contexts;
mod core;
mod event_bus;
mod event_loop;
mod input_ops;
mod panic_hook;
mod state;
pub(crate) mod terminal_session;

pub use contexts::{
    CONFIRM_PROMPT, GLOBAL_SHORTCUTS, SCHEDULE_EDITOR, SCHEDULE_NAVIGATION, SEARCH_INPUT,
    SEARCH_RESULTS, TITLE_INPUT,
};
pub use core::App;
pub use state::{AppState, PresentationState, Route, StatusState, UnloadOutcome};
