use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use tui_input::Input;

use crate::app::AppState;

use super::layout::centered_rect;

pub fn draw_search_overlay(frame: &mut Frame<'_>, area: Rect, app: &AppState) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let popup = centered_rect(area, area.width.min(72), area.height.clamp(7, 24));
    frame.render_widget(Clear, popup);

    let title = if app.search.is_pending() {
        " Search (typing…) "
    } else {
        " Search "
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    if inner.width == 0 || inner.height < 3 {
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .split(inner);

    let input_line = build_input_line(
        app.search.input_value(),
        app.search.cursor(),
        chunks[0].width as usize,
    );
    frame.render_widget(Paragraph::new(input_line), chunks[0]);
    frame.render_widget(
        Paragraph::new("─".repeat(inner.width as usize)).style(Style::default().fg(Color::DarkGray)),
        chunks[1],
    );

    let list_area = chunks[2];
    let items = &app.editor.document().items;
    let results = app.search.results();
    let mut lines = Vec::new();
    if results.is_empty() {
        lines.push(Line::from(vec![
            Span::raw("   "),
            Span::styled("no matching items", Style::default().fg(Color::DarkGray)),
        ]));
    }

    let max_rows = list_area.height as usize;
    let selected = app.search.selected().min(results.len().saturating_sub(1));
    let start = scroll_start(results.len(), selected, max_rows);
    for (offset, &item_index) in results.iter().enumerate().skip(start).take(max_rows) {
        let Some(item) = items.get(item_index) else {
            continue;
        };
        let is_selected = offset == selected;
        let marker = if is_selected {
            Span::styled(" ┃ ", Style::default().fg(Color::White))
        } else {
            Span::raw("   ")
        };
        let line_style = if is_selected {
            Style::default().bg(Color::Rgb(45, 45, 50))
        } else {
            Style::default()
        };
        let used = 3 + item.title.chars().count() + 2 + item.kind.as_str().len();
        lines.push(
            Line::from(vec![
                marker,
                Span::raw(item.title.as_str()),
                Span::raw("  "),
                Span::styled(item.kind.as_str(), Style::default().fg(Color::DarkGray)),
                Span::raw(" ".repeat((inner.width as usize).saturating_sub(used))),
            ])
            .style(line_style),
        );
    }

    frame.render_widget(Paragraph::new(lines), list_area);
}

pub fn draw_title_input(frame: &mut Frame<'_>, area: Rect, input: &Input) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let popup = centered_rect(area, area.width.min(60), 3);
    frame.render_widget(Clear, popup);
    let block = Block::default()
        .title(" Rename schedule ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let line = build_input_line(input.value(), input.cursor(), inner.width as usize);
    frame.render_widget(Paragraph::new(line), inner);
}

pub fn draw_confirm_prompt(frame: &mut Frame<'_>, area: Rect, app: &AppState) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let popup = centered_rect(area, area.width.min(54), 6);
    frame.render_widget(Clear, popup);
    let block = Block::default()
        .title(" Unsaved changes ")
        .borders(Borders::ALL)
        .style(Style::default().fg(Color::Yellow));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let target = app
        .guard
        .pending_target()
        .map(|route| route.as_str())
        .unwrap_or("-");
    let text = vec![
        Line::from(format!("Leave for {target} and lose your edits?")),
        Line::from(""),
        Line::from(vec![
            Span::styled("[d]", Style::default().fg(Color::White).bold()),
            Span::raw("iscard   "),
            Span::styled("[c]", Style::default().fg(Color::White).bold()),
            Span::raw("ancel"),
        ]),
    ];
    frame.render_widget(
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        inner,
    );
}

fn scroll_start(len: usize, selected: usize, rows: usize) -> usize {
    if rows == 0 || len <= rows || selected < rows / 2 {
        0
    } else if selected >= len - rows / 2 {
        len.saturating_sub(rows)
    } else {
        selected.saturating_sub(rows / 2)
    }
}

/// Renders `input` with a software caret so the terminal cursor stays hidden.
fn build_input_line(input: &str, cursor: usize, width: usize) -> Line<'static> {
    let prefix_width = 3;
    let max_text_width = width.saturating_sub(prefix_width);

    let chars: Vec<char> = input.chars().collect();
    let char_count = chars.len();
    let cursor = cursor.min(char_count);

    let start = if max_text_width == 0 {
        char_count
    } else if cursor >= max_text_width {
        cursor
            .saturating_sub(max_text_width.saturating_sub(1))
            .min(char_count)
    } else {
        0
    };

    let text_width = max_text_width.max(1);
    let end = (start + text_width).min(char_count);
    let mut visible: Vec<char> = chars[start..end].to_vec();
    if visible.len() < text_width {
        visible.extend(std::iter::repeat_n(' ', text_width - visible.len()));
    }
    let caret = cursor
        .saturating_sub(start)
        .min(text_width.saturating_sub(1));

    let mut spans = vec![
        Span::raw(" "),
        Span::styled("> ", Style::default().fg(Color::White)),
    ];
    for (idx, ch) in visible.into_iter().enumerate() {
        if idx == caret {
            spans.push(Span::styled(ch.to_string(), Style::default().reversed()));
        } else {
            spans.push(Span::raw(ch.to_string()));
        }
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use ratatui::style::Modifier;

    use super::{build_input_line, scroll_start};

    #[test]
    fn input_line_highlights_caret_on_character() {
        let line = build_input_line("abc", 1, 12);
        assert_eq!(line.spans[3].content.as_ref(), "b");
        assert!(
            line.spans[3]
                .style
                .add_modifier
                .contains(Modifier::REVERSED)
        );
    }

    #[test]
    fn input_line_highlights_trailing_space_at_end_cursor() {
        let line = build_input_line("abc", 3, 12);
        assert_eq!(line.spans[5].content.as_ref(), " ");
        assert!(
            line.spans[5]
                .style
                .add_modifier
                .contains(Modifier::REVERSED)
        );
    }

    #[test]
    fn input_line_scrolls_to_keep_caret_visible() {
        let line = build_input_line("abcdefgh", 8, 8);
        let text: String = line.spans[2..].iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "efgh ");
    }

    #[test]
    fn scroll_keeps_selection_centered() {
        assert_eq!(scroll_start(3, 2, 10), 0);
        assert_eq!(scroll_start(20, 10, 4), 8);
        assert_eq!(scroll_start(20, 19, 4), 16);
    }
}
