use std::fmt;

use tui_input::Input;

use crate::config::Config;
use crate::editor::ScheduleEditor;
use crate::guard::{NavigationGuard, TransitionOutcome, UnloadEvent};
use crate::input::{GlobalAction, KeymapPreset};
use crate::presentation::{NavigationState, PresentationActions};
use crate::schedule::{SlideIndex, SlidePosition};
use crate::search::{SearchResultActions, SearchState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Present,
    Edit,
    Exit,
}

impl Route {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Present => "present",
            Self::Edit => "edit",
            Self::Exit => "exit",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default)]
pub struct StatusState {
    pub message: String,
    pub last_action: Option<&'static str>,
}

impl StatusState {
    pub fn set(&mut self, action: &'static str, message: impl Into<String>) {
        self.last_action = Some(action);
        self.message = message.into();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresentationState {
    pub visible: bool,
    pub blackout: bool,
}

impl Default for PresentationState {
    fn default() -> Self {
        Self {
            visible: true,
            blackout: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnloadOutcome {
    Quit,
    /// The host shows its own confirmation; a second unload quits.
    Confirming,
}

/// Everything the registered input contexts act on.
#[derive(Debug)]
pub struct AppState {
    pub route: Route,
    pub editor: ScheduleEditor,
    pub guard: NavigationGuard<Route>,
    pub slides: SlideIndex,
    pub nav: NavigationState,
    pub presentation: PresentationState,
    pub search: SearchState,
    pub title_input: Option<Input>,
    pub unload_confirming: bool,
    pub quit: bool,
    pub keymap: KeymapPreset,
    pub status: StatusState,
}

impl AppState {
    pub fn new(editor: ScheduleEditor, config: &Config) -> Self {
        let mut state = Self {
            route: Route::Present,
            editor,
            guard: NavigationGuard::new(),
            slides: SlideIndex::default(),
            nav: NavigationState::default(),
            presentation: PresentationState::default(),
            search: SearchState::new(config.search.debounce_delay(), config.search.max_results),
            title_input: None,
            unload_confirming: false,
            quit: false,
            keymap: config.keymap.preset(),
            status: StatusState::default(),
        };
        state.refresh_slides();
        state
    }

    /// Rebuilds the flat slide list after the document changed.
    pub fn refresh_slides(&mut self) {
        self.slides = SlideIndex::build(self.editor.document());
        self.nav.set_item_count(self.slides.len());
    }

    pub fn current_slide(&self) -> Option<SlidePosition> {
        self.slides.position(self.nav.current_index())
    }

    pub fn current_slide_text(&self) -> Option<&str> {
        let position = self.current_slide()?;
        let item = self.editor.document().items.get(position.item)?;
        Some(
            item.slides
                .get(position.slide)
                .map(String::as_str)
                .unwrap_or_default(),
        )
    }

    /// Routes through the navigation guard; a dirty editor holds the change.
    pub fn request_route(&mut self, target: Route) {
        if target == self.route {
            return;
        }
        match self.guard.request_transition(&self.editor, target) {
            TransitionOutcome::Proceed(route) => self.commit_route(route),
            TransitionOutcome::Held => self.status.set(
                "navigation-held",
                format!("unsaved changes: leaving for {target} needs [d]iscard or [c]ancel"),
            ),
        }
    }

    pub fn discard_pending(&mut self) {
        let Some(route) = self.guard.discard() else {
            return;
        };
        self.editor.discard_changes();
        self.refresh_slides();
        self.commit_route(route);
    }

    pub fn cancel_pending(&mut self) {
        // The terminal router arms no reset hook, so the abandoned target
        // only feeds the status line.
        if let Some(abandoned) = self.guard.cancel() {
            self.status.set(
                "navigation-cancelled",
                format!("stayed on {}; {abandoned} was cancelled", self.route),
            );
        }
    }

    fn commit_route(&mut self, route: Route) {
        self.route = route;
        if route == Route::Exit {
            self.quit = true;
        }
        self.status.set("navigate", format!("switched to {route}"));
    }

    /// Handles an environment unload (terminal interrupt).
    pub fn handle_unload(&mut self) -> UnloadOutcome {
        if self.unload_confirming {
            self.quit = true;
            return UnloadOutcome::Quit;
        }

        let mut event = UnloadEvent::new();
        if self.guard.on_unload(&self.editor, &mut event) {
            self.unload_confirming = true;
            let message = event.return_value().unwrap_or_default();
            self.status.set("unload", format!("{message} Press Ctrl-C again to quit."));
            return UnloadOutcome::Confirming;
        }

        self.quit = true;
        UnloadOutcome::Quit
    }

    pub fn apply_global(&mut self, action: GlobalAction) {
        match action {
            GlobalAction::OpenSearch => {
                self.search.open(self.editor.document());
                self.status.set(action.as_str(), "search schedule");
            }
            GlobalAction::SwitchRoute => {
                let target = match self.route {
                    Route::Present => Route::Edit,
                    Route::Edit | Route::Exit => Route::Present,
                };
                self.request_route(target);
            }
            GlobalAction::Quit => self.request_route(Route::Exit),
            GlobalAction::ToggleBlackout => {
                self.presentation.blackout = !self.presentation.blackout;
                let state = if self.presentation.blackout { "on" } else { "off" };
                self.status.set(action.as_str(), format!("blackout {state}"));
            }
            GlobalAction::ShowPresentation => {
                self.presentation.visible = true;
                self.status.set(action.as_str(), "presentation shown");
            }
            GlobalAction::HidePresentation => self.hide_presentation(),
            GlobalAction::NextItem => self.step_item(true),
            GlobalAction::PrevItem => self.step_item(false),
        }
    }

    fn step_item(&mut self, forward: bool) {
        let Some(position) = self.current_slide() else {
            return;
        };
        let target = if forward {
            position.item + 1
        } else if position.slide > 0 {
            position.item
        } else {
            position.item.saturating_sub(1)
        };
        if let Some(start) = self.slides.item_start(target) {
            self.nav.jump_to(start);
            self.status.set("jump-item", format!("item {}", target + 1));
        }
    }

    fn show_slide_status(&mut self, action: &'static str) {
        let index = self.nav.current_index() + 1;
        let total = self.nav.item_count();
        self.status.set(action, format!("slide {index}/{total}"));
    }
}

impl PresentationActions for AppState {
    fn can_navigate_next(&self) -> bool {
        self.nav.can_navigate_next()
    }

    fn can_navigate_prev(&self) -> bool {
        self.nav.can_navigate_prev()
    }

    fn next_slide(&mut self) {
        self.nav.next();
        self.show_slide_status("next-slide");
    }

    fn prev_slide(&mut self) {
        self.nav.prev();
        self.show_slide_status("prev-slide");
    }

    fn hide_presentation(&mut self) {
        self.presentation.visible = false;
        self.status.set("hide-presentation", "presentation hidden");
    }
}

impl SearchResultActions for AppState {
    fn result_count(&self) -> usize {
        self.search.results().len()
    }

    fn selected_result(&self) -> usize {
        self.search.selected()
    }

    fn select_result(&mut self, index: usize) {
        self.search.select(index);
    }

    fn open_selected_result(&mut self) {
        self.search.flush(self.editor.document());
        let Some(item) = self.search.selected_item() else {
            self.status.set("search-open", "no matching item");
            return;
        };
        if let Some(start) = self.slides.item_start(item) {
            self.nav.jump_to(start);
        }
        self.editor.select(item);
        self.search.close();
        self.status.set("search-open", format!("jumped to item {}", item + 1));
    }

    fn close_search(&mut self) {
        self.search.close();
        self.status.set("search-close", "search closed");
    }
}

#[cfg(test)]
mod tests {
    use crate::config::Config;
    use crate::dirty::ItemId;
    use crate::editor::ScheduleEditor;
    use crate::guard::DirtySource;
    use crate::input::GlobalAction;
    use crate::schedule::{ItemKind, Schedule, ScheduleItem};

    use super::{AppState, Route, UnloadOutcome};

    fn schedule() -> Schedule {
        let item = |id: u64, slides: &[&str]| ScheduleItem {
            id: ItemId::from(id),
            title: format!("song {id}"),
            kind: ItemKind::Song,
            slides: slides.iter().map(|s| s.to_string()).collect(),
        };
        Schedule {
            title: "Sunday".to_string(),
            description: None,
            items: vec![item(1, &["a1", "a2"]), item(2, &[]), item(3, &["c1"])],
        }
    }

    fn state() -> AppState {
        AppState::new(ScheduleEditor::open(schedule(), None), &Config::default())
    }

    #[test]
    fn clean_route_change_commits_immediately() {
        let mut state = state();
        state.request_route(Route::Edit);
        assert_eq!(state.route, Route::Edit);
        assert!(!state.guard.is_prompting());
    }

    #[test]
    fn dirty_route_change_waits_for_discard() {
        let mut state = state();
        state.request_route(Route::Edit);
        state.editor.select(1);
        state.editor.move_selected_up();
        assert!(state.editor.is_dirty());

        state.request_route(Route::Present);
        assert_eq!(state.route, Route::Edit);
        assert!(state.guard.is_prompting());

        state.discard_pending();
        assert_eq!(state.route, Route::Present);
        assert!(!state.editor.is_dirty());
        assert_eq!(state.editor.document(), &schedule());
    }

    #[test]
    fn cancel_keeps_route_and_edits() {
        let mut state = state();
        state.request_route(Route::Edit);
        state.editor.set_title("Sunday (draft)");
        state.apply_global(GlobalAction::Quit);
        assert!(state.guard.is_prompting());

        state.cancel_pending();
        assert_eq!(state.route, Route::Edit);
        assert!(!state.quit);
        assert!(state.editor.is_dirty());
    }

    #[test]
    fn unload_with_unsaved_changes_needs_confirmation() {
        let mut state = state();
        state.editor.set_title("changed");

        assert_eq!(state.handle_unload(), UnloadOutcome::Confirming);
        assert!(!state.quit);
        assert!(!state.guard.is_prompting());
        assert_eq!(state.handle_unload(), UnloadOutcome::Quit);
        assert!(state.quit);
    }

    #[test]
    fn unload_when_clean_quits() {
        let mut state = state();
        assert_eq!(state.handle_unload(), UnloadOutcome::Quit);
        assert!(state.quit);
    }

    #[test]
    fn item_jumps_land_on_first_slide() {
        let mut state = state();
        assert_eq!(state.slides.len(), 4);

        state.apply_global(GlobalAction::NextItem);
        assert_eq!(state.nav.current_index(), 2);
        assert_eq!(state.current_slide_text(), Some(""));
        state.apply_global(GlobalAction::NextItem);
        assert_eq!(state.nav.current_index(), 3);
        state.apply_global(GlobalAction::NextItem);
        assert_eq!(state.nav.current_index(), 3);

        state.apply_global(GlobalAction::PrevItem);
        assert_eq!(state.nav.current_index(), 2);
    }
}
