mod model;
mod slides;

pub use model::{ItemKind, Schedule, ScheduleItem};
pub use slides::{SlideIndex, SlidePosition};
