/*
[INPUT]:  Task selected for editing, key events, TaskStore on confirm
[OUTPUT]: "Edit Task" dialog state and rendering
[POS]:    TUI UI modal for renaming a task
[UPDATE]: When edit form fields or validation rules change
*/

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use todo_core::{ConfirmOutcome, EditDialog, Notifier, Task, TaskStore, TodoError};
use tui_input::Input;

use super::{ModalAction, ModalFocus};
use crate::tui::events::input_request;
use crate::tui::runtime::border_style;
use crate::tui::ui::input_field::draw_input_field;
use crate::tui::ui::layout::centered_rect;

const MODAL_HEIGHT: u16 = 10;

/// Edit dialog: the core state machine plus the text field bound to its draft
#[derive(Debug, Default)]
pub(in crate::tui) struct EditTaskModal {
    dialog: EditDialog,
    input: Input,
    focus: ModalFocus,
}

impl EditTaskModal {
    pub(in crate::tui) fn open(&mut self, task: &Task) {
        self.dialog.open(task);
        self.input = Input::new(task.name.clone());
        self.focus = ModalFocus::Field;
    }

    pub(in crate::tui) fn is_open(&self) -> bool {
        self.dialog.is_open()
    }

    pub(in crate::tui) fn field_error(&self) -> Option<&str> {
        self.dialog.session()?.field_error.as_deref()
    }

    pub(in crate::tui) fn handle_key(&mut self, key: KeyEvent) -> ModalAction {
        match key.code {
            KeyCode::Esc => ModalAction::Cancel,
            KeyCode::Enter => self.focus.enter_action(),
            KeyCode::Tab => {
                self.focus = self.focus.next();
                ModalAction::None
            }
            KeyCode::BackTab => {
                self.focus = self.focus.prev();
                ModalAction::None
            }
            KeyCode::Left | KeyCode::Right if self.focus != ModalFocus::Field => {
                self.focus = match self.focus {
                    ModalFocus::Confirm => ModalFocus::Cancel,
                    _ => ModalFocus::Confirm,
                };
                ModalAction::None
            }
            _ => {
                if self.focus == ModalFocus::Field {
                    if let Some(request) = input_request(&key) {
                        let value_changed = self
                            .input
                            .handle(request)
                            .is_some_and(|changed| changed.value);
                        if value_changed {
                            self.dialog.set_draft_name(self.input.value());
                        }
                    }
                }
                ModalAction::None
            }
        }
    }

    /// Commit the draft. A validation failure keeps the dialog open and
    /// moves focus back to the field.
    pub(in crate::tui) fn confirm(
        &mut self,
        store: &mut TaskStore,
        notifier: &mut impl Notifier,
    ) -> Result<ConfirmOutcome, TodoError> {
        let result = self.dialog.confirm(store, notifier);
        if self.dialog.is_open() {
            self.focus = ModalFocus::Field;
        } else {
            self.reset();
        }
        result
    }

    pub(in crate::tui) fn cancel(&mut self) {
        self.dialog.cancel();
        self.reset();
    }

    fn reset(&mut self) {
        self.input.reset();
        self.focus = ModalFocus::Field;
    }
}

pub(in crate::tui) fn draw_edit_task_modal(frame: &mut Frame, area: Rect, modal: &EditTaskModal) {
    if !modal.is_open() {
        return;
    }

    let popup_area = centered_rect(60, MODAL_HEIGHT, area);
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Edit Task ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let [label_area, field_area, error_area, buttons_area, hint_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    let label = Line::from(vec![
        Span::styled("* ", Style::default().fg(Color::Red)),
        Span::raw("Task"),
    ]);
    frame.render_widget(Paragraph::new(label), label_area);

    let field_focused = modal.focus == ModalFocus::Field;
    let field_border = match (modal.field_error().is_some(), field_focused) {
        (true, _) => Style::default().fg(Color::Red),
        (false, true) => Style::default().fg(Color::Yellow),
        (false, false) => border_style(),
    };
    let field_block = Block::default()
        .borders(Borders::ALL)
        .border_style(field_border);
    draw_input_field(frame, field_area, &modal.input, None, field_focused, field_block);

    if let Some(error) = modal.field_error() {
        let error_line = Line::from(Span::styled(error, Style::default().fg(Color::Red)));
        frame.render_widget(Paragraph::new(error_line), error_area);
    }

    let buttons = Line::from(vec![
        button_span("[ OK ]", modal.focus == ModalFocus::Confirm, Color::Green),
        Span::raw("  "),
        button_span("[ Cancel ]", modal.focus == ModalFocus::Cancel, Color::Gray),
    ]);
    frame.render_widget(
        Paragraph::new(buttons).alignment(Alignment::Right),
        buttons_area,
    );

    let hint = Line::from(vec![
        Span::styled("Enter ", Style::default().fg(Color::Cyan)),
        Span::styled("save  ", Style::default().fg(Color::Gray)),
        Span::styled("Tab ", Style::default().fg(Color::Cyan)),
        Span::styled("next  ", Style::default().fg(Color::Gray)),
        Span::styled("Esc ", Style::default().fg(Color::Cyan)),
        Span::styled("cancel", Style::default().fg(Color::Gray)),
    ]);
    frame.render_widget(Paragraph::new(hint), hint_area);
}

fn button_span(label: &'static str, focused: bool, color: Color) -> Span<'static> {
    if focused {
        Span::styled(
            label,
            Style::default()
                .fg(Color::Black)
                .bg(color)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(label, Style::default().fg(color))
    }
}
