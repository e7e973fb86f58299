use crossterm::event::KeyCode;

use crate::dispatch::KeyHandler;
use crate::error::AppResult;
use crate::input::KeyInput;

/// Cursor over a flat sequence of slides.
///
/// `current_index` stays below `max(item_count, 1)`; with no items both
/// navigation checks are false.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigationState {
    current_index: usize,
    item_count: usize,
}

impl NavigationState {
    pub fn new(item_count: usize) -> Self {
        Self {
            current_index: 0,
            item_count,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn can_navigate_next(&self) -> bool {
        self.item_count > 0 && self.current_index < self.item_count - 1
    }

    pub fn can_navigate_prev(&self) -> bool {
        self.item_count > 0 && self.current_index > 0
    }

    /// Steps forward; returns whether the index moved.
    pub fn next(&mut self) -> bool {
        if !self.can_navigate_next() {
            return false;
        }
        self.current_index += 1;
        true
    }

    /// Steps backward; returns whether the index moved.
    pub fn prev(&mut self) -> bool {
        if !self.can_navigate_prev() {
            return false;
        }
        self.current_index -= 1;
        true
    }

    pub fn jump_to(&mut self, index: usize) {
        self.current_index = index.min(self.item_count.saturating_sub(1));
    }

    pub fn set_item_count(&mut self, item_count: usize) {
        self.item_count = item_count;
        self.current_index = self.current_index.min(item_count.saturating_sub(1));
    }
}

/// Host side of the presentation navigation controller.
pub trait PresentationActions {
    fn can_navigate_next(&self) -> bool;
    fn can_navigate_prev(&self) -> bool;
    fn next_slide(&mut self);
    fn prev_slide(&mut self);
    fn hide_presentation(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIntent {
    Prev,
    Next,
    Hide,
}

/// Translates presentation keys into slide navigation.
///
/// Every mapped key is claimed even when the boundary check fails, so an
/// arrow at the first or last slide never reaches a lower-priority handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct PresentationNavController;

impl PresentationNavController {
    pub fn intent_for(code: KeyCode) -> Option<NavIntent> {
        match code {
            KeyCode::Left | KeyCode::Up | KeyCode::PageUp => Some(NavIntent::Prev),
            KeyCode::Right | KeyCode::Down | KeyCode::PageDown | KeyCode::Char(' ') => {
                Some(NavIntent::Next)
            }
            KeyCode::Esc => Some(NavIntent::Hide),
            _ => None,
        }
    }

    pub fn handle_key<A>(&self, actions: &mut A, input: &mut KeyInput) -> bool
    where
        A: PresentationActions + ?Sized,
    {
        let Some(intent) = Self::intent_for(input.key_code()) else {
            return false;
        };

        input.prevent_default();
        match intent {
            NavIntent::Prev => {
                if actions.can_navigate_prev() {
                    actions.prev_slide();
                }
            }
            NavIntent::Next => {
                if actions.can_navigate_next() {
                    actions.next_slide();
                }
            }
            NavIntent::Hide => actions.hide_presentation(),
        }
        true
    }
}

impl<C> KeyHandler<C> for PresentationNavController
where
    C: PresentationActions,
{
    fn handle(&mut self, ctx: &mut C, input: &mut KeyInput) -> AppResult<bool> {
        Ok(self.handle_key(ctx, input))
    }
}
