use crossterm::event::KeyCode;

use crate::dispatch::KeyHandler;
use crate::error::AppResult;
use crate::input::KeyInput;

/// Host side of the search-result navigator.
pub trait SearchResultActions {
    fn result_count(&self) -> usize;
    fn selected_result(&self) -> usize;
    fn select_result(&mut self, index: usize);
    fn open_selected_result(&mut self);
    fn close_search(&mut self);
}

/// Moves a selection through search results and opens or dismisses it.
///
/// Up/Down at either end of the list are claimed but do nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchNavigator;

impl SearchNavigator {
    pub fn handle_key<A>(&self, actions: &mut A, input: &mut KeyInput) -> bool
    where
        A: SearchResultActions + ?Sized,
    {
        let count = actions.result_count();
        let selected = actions.selected_result();
        match input.key_code() {
            KeyCode::Up => {
                if selected > 0 {
                    actions.select_result(selected - 1);
                }
            }
            KeyCode::Down => {
                if selected + 1 < count {
                    actions.select_result(selected + 1);
                }
            }
            KeyCode::Enter => actions.open_selected_result(),
            KeyCode::Esc => actions.close_search(),
            _ => return false,
        }
        input.prevent_default();
        true
    }
}

impl<C> KeyHandler<C> for SearchNavigator
where
    C: SearchResultActions,
{
    fn handle(&mut self, ctx: &mut C, input: &mut KeyInput) -> AppResult<bool> {
        Ok(self.handle_key(ctx, input))
    }
}
