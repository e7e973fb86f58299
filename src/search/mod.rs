mod navigator;
mod state;

pub use navigator::{SearchNavigator, SearchResultActions};
pub use state::SearchState;
