use std::time::Instant;

use crossterm::event::{Event, KeyCode};
use tui_input::Input;
use tui_input::backend::crossterm::EventHandler;

use crate::config::DispatchConfig;
use crate::dispatch::DispatchRegistry;
use crate::error::AppResult;
use crate::guard::DirtySource;
use crate::input::{KeyInput, map_global_key};
use crate::presentation::PresentationNavController;
use crate::search::SearchNavigator;

use super::core::App;
use super::state::{AppState, Route};

pub const CONFIRM_PROMPT: &str = "confirm-prompt";
pub const TITLE_INPUT: &str = "title-input";
pub const SEARCH_INPUT: &str = "search-input";
pub const SEARCH_RESULTS: &str = "search-results";
pub const SCHEDULE_NAVIGATION: &str = "schedule-navigation";
pub const SCHEDULE_EDITOR: &str = "schedule-editor";
pub const GLOBAL_SHORTCUTS: &str = "global-shortcuts";

pub(crate) fn install_contexts(registry: &mut DispatchRegistry<AppState>, priorities: &DispatchConfig) {
    registry.register(CONFIRM_PROMPT, priorities.prompt, confirm_prompt, false);
    registry.register(TITLE_INPUT, priorities.title_input, title_input, false);
    registry.register(SEARCH_INPUT, priorities.search_input, search_input, false);
    registry.register(SEARCH_RESULTS, priorities.search_results, SearchNavigator, false);
    registry.register(
        SCHEDULE_NAVIGATION,
        priorities.navigation,
        PresentationNavController,
        false,
    );
    registry.register(SCHEDULE_EDITOR, priorities.editor, schedule_editor, false);
    registry.register(GLOBAL_SHORTCUTS, priorities.global, global_shortcuts, true);
}

impl App {
    /// Enables exactly the contexts the current state listens on. Runs
    /// between events, never during a dispatch.
    pub fn sync_contexts(&mut self) {
        let state = &self.state;
        let search_open = state.search.is_open();
        let flags = [
            (CONFIRM_PROMPT, state.guard.is_prompting()),
            (TITLE_INPUT, state.title_input.is_some()),
            (SEARCH_INPUT, search_open),
            (SEARCH_RESULTS, search_open),
            (SCHEDULE_NAVIGATION, state.route == Route::Present),
            (SCHEDULE_EDITOR, state.route == Route::Edit),
        ];
        for (id, enabled) in flags {
            self.registry.set_enabled(id, enabled);
        }
    }
}

/// Modal while a route change is held: discard or cancel, swallow the rest.
fn confirm_prompt(state: &mut AppState, input: &mut KeyInput) -> AppResult<bool> {
    match input.key_code() {
        KeyCode::Char('y') | KeyCode::Char('d') => state.discard_pending(),
        KeyCode::Char('n') | KeyCode::Char('c') | KeyCode::Esc => state.cancel_pending(),
        _ => {}
    }
    input.prevent_default();
    Ok(true)
}

fn title_input(state: &mut AppState, input: &mut KeyInput) -> AppResult<bool> {
    let Some(editing) = state.title_input.as_mut() else {
        return Ok(false);
    };
    match input.key_code() {
        KeyCode::Enter => {
            let title = editing.value().trim().to_string();
            state.title_input = None;
            state.editor.set_title(title);
            state.status.set("rename", "schedule renamed");
        }
        KeyCode::Esc => {
            state.title_input = None;
            state.status.set("rename", "rename aborted");
        }
        _ => {
            editing.handle_event(&Event::Key(input.key));
        }
    }
    input.prevent_default();
    Ok(true)
}

fn search_input(state: &mut AppState, input: &mut KeyInput) -> AppResult<bool> {
    if !state.search.handle_text_key(input, Instant::now()) {
        return Ok(false);
    }
    input.prevent_default();
    Ok(true)
}

fn schedule_editor(state: &mut AppState, input: &mut KeyInput) -> AppResult<bool> {
    if input.has_control() {
        return Ok(false);
    }

    let editor = &mut state.editor;
    let changed = match input.key_code() {
        KeyCode::Up => {
            editor.select_prev();
            false
        }
        KeyCode::Down => {
            editor.select_next();
            false
        }
        KeyCode::Char('K') => editor.move_selected_up(),
        KeyCode::Char('J') => editor.move_selected_down(),
        KeyCode::Char('x') => editor.remove_selected().is_some(),
        KeyCode::Char('r') => {
            state.title_input = Some(Input::new(editor.document().title.clone()));
            state.status.set("rename", "rename schedule");
            false
        }
        KeyCode::Char('s') => {
            if let Err(err) = editor.save() {
                state.status.set("save", format!("save failed: {err}"));
                return Err(err);
            }
            state.status.set("save", "schedule saved");
            false
        }
        KeyCode::Char('D') => {
            editor.discard_changes();
            state.status.set("discard", "changes discarded");
            true
        }
        _ => return Ok(false),
    };

    if changed {
        state.refresh_slides();
        if state.editor.is_dirty() {
            state.status.set("edit", "unsaved changes");
        }
    }
    input.prevent_default();
    Ok(true)
}

fn global_shortcuts(state: &mut AppState, input: &mut KeyInput) -> AppResult<bool> {
    let Some(action) = map_global_key(input, state.keymap) else {
        return Ok(false);
    };
    state.apply_global(action);
    input.prevent_default();
    Ok(true)
}
