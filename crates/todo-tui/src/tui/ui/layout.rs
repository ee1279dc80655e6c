use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Horizontally centred rect of `percent_x` width and fixed `height`
pub(in crate::tui) fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height.min(area.height)),
            Constraint::Fill(1),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

/// Rect anchored to the top-right corner of `area`, clipped to fit
pub(in crate::tui) fn top_right_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + area.width - width,
        y: area.y,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_keeps_requested_height() {
        let area = Rect::new(0, 0, 100, 40);
        let popup = centered_rect(60, 10, area);
        assert_eq!(popup.height, 10);
        assert_eq!(popup.width, 60);
        assert_eq!(popup.x, 20);
    }

    #[test]
    fn top_right_rect_is_clipped() {
        let area = Rect::new(2, 1, 30, 5);
        let rect = top_right_rect(40, 8, area);
        assert_eq!(rect, Rect::new(2, 1, 30, 5));

        let rect = top_right_rect(10, 3, area);
        assert_eq!(rect, Rect::new(22, 1, 10, 3));
    }
}
