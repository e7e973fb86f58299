mod chrome;
mod layout;
mod overlay;
mod view;

use ratatui::Frame;

use crate::app::AppState;

pub use chrome::draw_status;
pub use layout::{UiLayout, split_layout};
pub use overlay::{draw_confirm_prompt, draw_search_overlay, draw_title_input};
pub use view::{draw_schedule, draw_slide};

/// Draws one full frame. Overlays stack in the same order their input
/// contexts take priority, so the topmost one is the one receiving keys.
pub fn draw_app(frame: &mut Frame<'_>, app: &AppState) {
    let area = frame.area();
    let layout = split_layout(area);
    draw_schedule(frame, layout.schedule, app);
    draw_slide(frame, layout.slide, app);
    draw_status(frame, layout.status, app);

    if app.search.is_open() {
        draw_search_overlay(frame, area, app);
    }
    if let Some(input) = &app.title_input {
        draw_title_input(frame, area, input);
    }
    if app.guard.is_prompting() {
        draw_confirm_prompt(frame, area, app);
    }
}
