/*
[INPUT]:  AppState snapshot on every frame
[OUTPUT]: Full-screen to-do layout with overlays
[POS]:    TUI UI module root
[UPDATE]: When adding panels or changing the screen layout
*/

mod input_bar;
mod input_field;
mod layout;
mod logs;
mod task_list;
mod toasts;

pub mod modal;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::app::{AppState, Focus};
use crate::tui::runtime::{border_style, header_style, key_style};

use input_bar::draw_input_bar;
use logs::draw_logs;
use modal::draw_edit_task_modal;
use task_list::draw_task_list;
use toasts::draw_toasts;

/// Render the whole screen from the current state
pub(in crate::tui) fn draw_ui(frame: &mut Frame, app: &mut AppState) {
    let area = frame.area();
    let [title_area, input_area, body_area, footer_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(area);

    draw_title(frame, title_area, app);
    draw_input_bar(frame, input_area, app);

    if app.show_logs {
        let [list_area, logs_area] =
            Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
                .areas(body_area);
        draw_task_list(frame, list_area, app);
        draw_logs(frame, logs_area, &app.log_buffer);
    } else {
        draw_task_list(frame, body_area, app);
    }

    draw_footer(frame, footer_area, app);
    draw_edit_task_modal(frame, area, &app.edit_modal);
    draw_toasts(frame, area, &app.toasts);
}

fn draw_title(frame: &mut Frame, area: ratatui::layout::Rect, app: &AppState) {
    let focus_label = if app.edit_modal.is_open() {
        " editing "
    } else {
        match app.focus {
            Focus::Input => " input ",
            Focus::List => " list ",
        }
    };
    let title = Paragraph::new(Line::from(Span::styled(
        app.title.as_str(),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title_top(Line::from(focus_label).right_aligned()),
    );
    frame.render_widget(title, area);
}

fn draw_footer(frame: &mut Frame, area: ratatui::layout::Rect, app: &AppState) {
    let hints: &[(&str, &str)] = if app.edit_modal.is_open() {
        &[("Enter", "Save"), ("Tab", "Next"), ("Esc", "Cancel")]
    } else {
        match app.focus {
            Focus::Input => &[
                ("Enter", "Add"),
                ("Tab", "List"),
                ("F2", "Logs"),
                ("Ctrl+C", "Quit"),
            ],
            Focus::List => &[
                ("Up/Down", "Select"),
                ("Space", "Done"),
                ("e", "Edit"),
                ("d", "Delete"),
                ("Tab", "Input"),
                ("F2", "Logs"),
                ("q", "Quit"),
            ],
        }
    };

    let mut spans = vec![Span::styled(" TODO ", header_style()), Span::raw(" ")];
    for (key, label) in hints {
        spans.push(Span::styled(format!("[{key}]"), key_style()));
        spans.push(Span::raw(format!(" {label}  ")));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
