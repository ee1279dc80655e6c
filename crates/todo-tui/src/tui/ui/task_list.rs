/*
[INPUT]:  AppState task store snapshot and list selection
[OUTPUT]: Task list rendered into Ratatui frame
[POS]:    TUI UI task list rendering
[UPDATE]: When changing row layout or completed-task styling
*/

use std::borrow::Cow;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem};
use todo_core::Task;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::tui::app::{AppState, Focus};
use crate::tui::runtime::border_style;

const HIGHLIGHT_SYMBOL: &str = "> ";
const CHECKBOX_WIDTH: usize = 4;

pub(in crate::tui) fn draw_task_list(frame: &mut Frame, area: Rect, app: &mut AppState) {
    let done = app.store.iter().filter(|task| task.completed).count();
    let title = format!("Tasks ({done}/{})", app.store.len());
    let focused = app.focus == Focus::List && !app.edit_modal.is_open();
    let border = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        border_style()
    };

    let name_width = (area.width as usize).saturating_sub(2 + HIGHLIGHT_SYMBOL.len() + CHECKBOX_WIDTH);
    let items: Vec<ListItem> = if app.store.is_empty() {
        vec![ListItem::new(Span::styled(
            "No tasks",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        app.store
            .iter()
            .map(|task| task_item(task, name_width))
            .collect()
    };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border)
                .title(title),
        )
        .highlight_style(if focused {
            Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        })
        .highlight_symbol(HIGHLIGHT_SYMBOL);
    frame.render_stateful_widget(list, area, &mut app.list_state);
}

fn task_item(task: &Task, name_width: usize) -> ListItem<'_> {
    let (checkbox, name_style) = if task.completed {
        (
            Span::styled("[x] ", Style::default().fg(Color::Green)),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::CROSSED_OUT),
        )
    } else {
        (Span::raw("[ ] "), Style::default())
    };
    let name = truncate_to_width(&task.name, name_width);
    ListItem::new(Line::from(vec![checkbox, Span::styled(name, name_style)]))
}

/// Cut `text` to at most `max_width` display columns, ending with an
/// ellipsis when anything was dropped.
pub(in crate::tui) fn truncate_to_width(text: &str, max_width: usize) -> Cow<'_, str> {
    if text.width() <= max_width {
        return Cow::Borrowed(text);
    }
    if max_width == 0 {
        return Cow::Borrowed("");
    }

    let budget = max_width - 1;
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::fits("milk", 10, "milk")]
    #[case::exact("milk", 4, "milk")]
    #[case::cut("Buy milk today", 8, "Buy mil…")]
    #[case::wide_chars("牛奶和面包", 5, "牛奶…")]
    #[case::zero("milk", 0, "")]
    fn truncates_by_display_width(#[case] text: &str, #[case] width: usize, #[case] expected: &str) {
        let out = truncate_to_width(text, width);
        assert_eq!(out, expected);
        assert!(out.width() <= width);
    }
}
