use std::time::{Duration, Instant};

use crossterm::event::{Event, KeyCode};
use tui_input::Input;
use tui_input::backend::crossterm::EventHandler;

use crate::debounce::Debouncer;
use crate::input::KeyInput;
use crate::schedule::Schedule;

/// Search overlay over the schedule's item titles.
///
/// Typing updates the query through a [`Debouncer`]; results are recomputed
/// only when a query commits.
#[derive(Debug)]
pub struct SearchState {
    open: bool,
    input: Input,
    query: Debouncer<String>,
    results: Vec<usize>,
    selected: usize,
    max_results: usize,
}

impl SearchState {
    pub fn new(delay: Duration, max_results: usize) -> Self {
        Self {
            open: false,
            input: Input::default(),
            query: Debouncer::new(String::new(), delay),
            results: Vec::new(),
            selected: 0,
            max_results: max_results.max(1),
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self, schedule: &Schedule) {
        self.open = true;
        self.input.reset();
        self.query = Debouncer::new(String::new(), self.query.delay());
        self.refresh(schedule);
    }

    pub fn close(&mut self) {
        self.open = false;
        self.results.clear();
        self.selected = 0;
    }

    pub fn input_value(&self) -> &str {
        self.input.value()
    }

    pub fn cursor(&self) -> usize {
        self.input.cursor()
    }

    pub fn committed_query(&self) -> &str {
        self.query.debounced_value()
    }

    pub fn is_pending(&self) -> bool {
        self.query.is_pending()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.query.deadline()
    }

    pub fn results(&self) -> &[usize] {
        &self.results
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn select(&mut self, index: usize) {
        self.selected = index.min(self.results.len().saturating_sub(1));
    }

    /// Item index of the selected result.
    pub fn selected_item(&self) -> Option<usize> {
        self.results.get(self.selected).copied()
    }

    /// Feeds a text-editing key into the query box. Returns `false` for keys
    /// that belong to the result list.
    pub fn handle_text_key(&mut self, input: &KeyInput, now: Instant) -> bool {
        if input.has_control() {
            return false;
        }
        match input.key_code() {
            KeyCode::Char(_)
            | KeyCode::Backspace
            | KeyCode::Delete
            | KeyCode::Left
            | KeyCode::Right
            | KeyCode::Home
            | KeyCode::End => {}
            _ => return false,
        }

        if let Some(changed) = self.input.handle_event(&Event::Key(input.key))
            && changed.value
        {
            self.query.update(self.input.value().to_string(), now);
        }
        true
    }

    /// Commits an expired query. Returns whether results changed.
    pub fn poll(&mut self, now: Instant, schedule: &Schedule) -> bool {
        if self.query.poll(now).is_none() {
            return false;
        }
        self.refresh(schedule);
        true
    }

    /// Commits a pending query right away.
    pub fn flush(&mut self, schedule: &Schedule) -> bool {
        if self.query.trigger_immediately().is_none() {
            return false;
        }
        self.refresh(schedule);
        true
    }

    pub fn refresh(&mut self, schedule: &Schedule) {
        let needle = self.query.debounced_value().trim().to_lowercase();
        self.results = schedule
            .items
            .iter()
            .enumerate()
            .filter(|(_, item)| needle.is_empty() || item.title.to_lowercase().contains(&needle))
            .map(|(index, _)| index)
            .take(self.max_results)
            .collect();
        self.select(self.selected);
    }
}
