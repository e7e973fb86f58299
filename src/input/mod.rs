mod events;
mod keymap;

pub use events::KeyInput;
pub use keymap::{GlobalAction, KeymapPreset, map_global_key};
