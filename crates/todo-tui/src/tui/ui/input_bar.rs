/*
[INPUT]:  AppState input row text and focus
[OUTPUT]: New-task input row and Add control rendered into Ratatui frame
[POS]:    TUI UI input row rendering
[UPDATE]: When changing the add-task row layout
*/

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::app::{AppState, Focus};
use crate::tui::runtime::border_style;
use crate::tui::ui::input_field::draw_input_field;

const ADD_BUTTON_WIDTH: u16 = 9;

pub(in crate::tui) fn draw_input_bar(frame: &mut Frame, area: Rect, app: &AppState) {
    let [input_area, button_area] =
        Layout::horizontal([Constraint::Fill(1), Constraint::Length(ADD_BUTTON_WIDTH)])
            .areas(area);

    let focused = app.focus == Focus::Input && !app.edit_modal.is_open();
    let input_border = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        border_style()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(input_border)
        .title("New task");
    draw_input_field(
        frame,
        input_area,
        &app.input,
        Some(app.placeholder.as_str()),
        focused,
        block,
    );

    let button = Paragraph::new("+ Add")
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL).border_style(border_style()));
    frame.render_widget(button, button_area);
}
