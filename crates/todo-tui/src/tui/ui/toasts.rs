use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use todo_core::NotificationLevel;

use crate::tui::toast::ToastQueue;
use crate::tui::ui::layout::top_right_rect;

const TOAST_WIDTH: u16 = 36;

pub(in crate::tui) fn draw_toasts(frame: &mut Frame, area: Rect, toasts: &ToastQueue) {
    if toasts.is_empty() {
        return;
    }

    let lines: Vec<Line> = toasts
        .iter()
        .map(|toast| {
            let (icon, color) = match toast.level {
                NotificationLevel::Success => ("✔ ", Color::Green),
                NotificationLevel::Error => ("✖ ", Color::Red),
            };
            Line::from(vec![
                Span::styled(icon, Style::default().fg(color).add_modifier(Modifier::BOLD)),
                Span::styled(toast.message.as_str(), Style::default().fg(color)),
            ])
        })
        .collect();

    let popup = top_right_rect(TOAST_WIDTH, lines.len() as u16 + 2, area);
    frame.render_widget(Clear, popup);
    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(widget, popup);
}
