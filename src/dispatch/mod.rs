pub mod priority;
mod registry;

pub use registry::{DispatchRegistry, KeyHandler, Registration};
