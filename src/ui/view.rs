use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::app::{AppState, Route};

pub fn draw_schedule(frame: &mut Frame<'_>, area: Rect, app: &AppState) {
    let document = app.editor.document();
    let title = if document.title.trim().is_empty() {
        " (untitled) ".to_string()
    } else {
        format!(" {} ", document.title)
    };
    let block = Block::default().title(title).borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let live_item = app.current_slide().map(|position| position.item);
    let lines: Vec<Line<'_>> = document
        .items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let marker = if live_item == Some(index) { "▶ " } else { "  " };
            let mut style = Style::default();
            if app.route == Route::Edit && index == app.editor.selected() {
                style = style.bg(Color::Rgb(45, 45, 50));
            }
            if live_item == Some(index) {
                style = style.add_modifier(Modifier::BOLD);
            }
            Line::from(vec![
                Span::raw(marker),
                Span::raw(item.title.as_str()),
                Span::styled(
                    format!("  {}", item.kind.as_str()),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
            .style(style)
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);
}

pub fn draw_slide(frame: &mut Frame<'_>, area: Rect, app: &AppState) {
    let block = Block::default().title(" Live ").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let (text, style) = if !app.presentation.visible {
        ("(presentation hidden)", Style::default().fg(Color::DarkGray))
    } else if app.presentation.blackout {
        ("", Style::default().bg(Color::Black))
    } else {
        (
            app.current_slide_text().unwrap_or_default(),
            Style::default().fg(Color::White),
        )
    };
    frame.render_widget(
        Paragraph::new(text)
            .style(style)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        inner,
    );
}
