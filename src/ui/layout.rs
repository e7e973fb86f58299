use ratatui::layout::{Constraint, Direction, Layout, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiLayout {
    pub schedule: Rect,
    pub slide: Rect,
    pub status: Rect,
}

pub fn split_layout(area: Rect) -> UiLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(area);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(rows[0]);

    UiLayout {
        schedule: columns[0],
        slide: columns[1],
        status: rows[1],
    }
}

pub(crate) fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.max(1).min(area.width);
    let height = height.max(1).min(area.height);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use ratatui::layout::Rect;

    use super::split_layout;

    #[test]
    fn split_layout_reserves_status_bar() {
        let layout = split_layout(Rect::new(0, 0, 100, 40));
        assert_eq!(layout.status.height, 1);
        assert_eq!(layout.schedule.height, 39);
        assert_eq!(layout.schedule.width + layout.slide.width, 100);
    }

    #[test]
    fn centered_rect_stays_within_area() {
        let area = Rect::new(10, 5, 20, 8);
        let centered = super::centered_rect(area, 99, 99);
        assert_eq!(centered, area);
    }
}
