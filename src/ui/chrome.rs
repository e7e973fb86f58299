use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;

use crate::app::AppState;
use crate::guard::DirtySource;

pub fn draw_status(frame: &mut Frame<'_>, area: Rect, app: &AppState) {
    frame.render_widget(
        Paragraph::new(status_text(app)).style(Style::default().fg(Color::Gray)),
        area,
    );
}

pub(crate) fn status_text(app: &AppState) -> String {
    let route = app.route.as_str().to_uppercase();
    let dirty = if app.editor.is_dirty() { " *" } else { "" };
    let slide_total = app.nav.item_count().max(1);
    let slide_now = (app.nav.current_index() + 1).min(slide_total);
    let message = if app.status.message.is_empty() {
        "-"
    } else {
        app.status.message.as_str()
    };
    format!(
        "{route}{dirty} | slide {slide_now}/{slide_total} | {} | {message}",
        app.status.last_action.unwrap_or("-")
    )
}
