pub mod app;
pub mod config;
pub mod debounce;
pub mod dirty;
pub mod dispatch;
pub mod editor;
pub mod error;
pub(crate) mod event;
pub mod guard;
pub mod input;
pub mod logging;
pub mod presentation;
pub mod schedule;
pub mod search;
pub mod ui;
