mod nav;

pub use nav::{NavIntent, NavigationState, PresentationActions, PresentationNavController};
