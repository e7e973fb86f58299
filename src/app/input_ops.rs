use std::time::Instant;

use crossterm::event::{Event, KeyCode, KeyEventKind};

use crate::input::KeyInput;

use super::core::App;
use super::state::UnloadOutcome;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct InputEventOutcome {
    pub(crate) redraw: bool,
    pub(crate) quit_requested: bool,
}

impl App {
    /// Offers one key to the registered contexts. Returns whether any claimed it.
    pub fn handle_key(&mut self, mut input: KeyInput) -> bool {
        if input.key_code() != KeyCode::Char('c') || !input.has_control() {
            self.state.unload_confirming = false;
        }
        let claimed = self.registry.dispatch(&mut self.state, &mut input);
        self.sync_contexts();
        claimed
    }

    pub(crate) fn handle_terminal_event(&mut self, event: Event) -> InputEventOutcome {
        match event {
            Event::Key(key) if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) => {
                let input = KeyInput::new(key);
                if input.has_control() && input.key_code() == KeyCode::Char('c') {
                    let outcome = self.state.handle_unload();
                    return InputEventOutcome {
                        redraw: true,
                        quit_requested: outcome == UnloadOutcome::Quit,
                    };
                }
                self.handle_key(input);
                InputEventOutcome {
                    redraw: true,
                    quit_requested: self.state.quit,
                }
            }
            Event::Resize(_, _) => InputEventOutcome {
                redraw: true,
                quit_requested: false,
            },
            _ => InputEventOutcome::default(),
        }
    }

    /// Commits the search query once its debounce timer has expired.
    pub(crate) fn poll_timers(&mut self, now: Instant) -> bool {
        let state = &mut self.state;
        state.search.poll(now, state.editor.document())
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

    use crate::app::App;
    use crate::config::Config;
    use crate::editor::ScheduleEditor;
    use crate::input::KeyInput;

    fn ctrl_c() -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
    }

    #[test]
    fn interrupt_on_clean_document_quits() {
        let mut app = App::new_with_config(ScheduleEditor::new_document(None), Config::default());
        let outcome = app.handle_terminal_event(ctrl_c());
        assert!(outcome.quit_requested);
    }

    #[test]
    fn interrupt_on_dirty_document_needs_second_press() {
        let mut app = App::new_with_config(ScheduleEditor::new_document(None), Config::default());
        app.state.editor.set_title("Easter");

        assert!(!app.handle_terminal_event(ctrl_c()).quit_requested);
        assert!(app.state.unload_confirming);

        // Any other key dismisses the host confirmation.
        app.handle_key(KeyInput::char('b'));
        assert!(!app.state.unload_confirming);
        assert!(!app.handle_terminal_event(ctrl_c()).quit_requested);
        assert!(app.handle_terminal_event(ctrl_c()).quit_requested);
    }

    #[test]
    fn poll_timers_applies_debounced_search() {
        let mut config = Config::default();
        config.search.debounce_ms = 10;
        let mut app = App::new_with_config(ScheduleEditor::new_document(None), config);
        app.handle_key(KeyInput::char('/'));
        app.handle_key(KeyInput::char('a'));
        assert!(app.state.search.is_pending());

        assert!(app.poll_timers(Instant::now() + Duration::from_secs(1)));
        assert!(!app.state.search.is_pending());
        assert_eq!(app.state.search.committed_query(), "a");
    }
}
