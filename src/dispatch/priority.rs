//! Default dispatch priorities for the built-in input contexts.
//!
//! Higher values see a key first. Scoped contexts sit strictly above
//! [`GLOBAL`] so they pre-empt presentation-wide shortcuts while active.

pub const GLOBAL: i32 = 0;
pub const EDITOR: i32 = 5;
pub const NAVIGATION: i32 = 10;
pub const SEARCH_RESULTS: i32 = 20;
pub const SEARCH_INPUT: i32 = 30;
pub const TITLE_INPUT: i32 = 40;
pub const PROMPT: i32 = 100;
