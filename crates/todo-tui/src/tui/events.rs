/*
[INPUT]:  Crossterm key events
[OUTPUT]: Gestures routed to AppState, quit requests
[POS]:    TUI key routing for input row, task list, and edit dialog
[UPDATE]: When changing keybindings
*/

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tui_input::InputRequest;

use super::app::{AppState, Focus};
use super::ui::modal::ModalAction;

/// Handles key events for the TUI.
///
/// Returns `true` if quit is requested, `false` otherwise.
pub(super) fn handle_key_event(app: &mut AppState, key: KeyEvent) -> bool {
    if key.kind == KeyEventKind::Release {
        return false;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return true;
    }

    if app.edit_modal.is_open() {
        handle_modal_key_event(app, key);
        return false;
    }

    if key.code == KeyCode::F(2) {
        app.toggle_logs();
        return false;
    }

    match app.focus {
        Focus::Input => handle_input_key_event(app, key),
        Focus::List => handle_list_key_event(app, key),
    }
}

fn handle_input_key_event(app: &mut AppState, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter => app.submit_new_task(),
        KeyCode::Tab | KeyCode::Down | KeyCode::Esc => app.focus_list(),
        _ => {
            if let Some(request) = input_request(&key) {
                app.input.handle(request);
            }
        }
    }
    false
}

fn handle_list_key_event(app: &mut AppState, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return true,
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Char('i') | KeyCode::Char('a') => {
            app.focus_input()
        }
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(1),
        KeyCode::Home | KeyCode::Char('g') => app.select_first(),
        KeyCode::End | KeyCode::Char('G') => app.select_last(),
        KeyCode::Char(' ') | KeyCode::Char('x') => app.toggle_selected(),
        KeyCode::Enter | KeyCode::Char('e') => app.open_edit_selected(),
        KeyCode::Delete | KeyCode::Char('d') => app.delete_selected(),
        _ => {}
    }
    false
}

fn handle_modal_key_event(app: &mut AppState, key: KeyEvent) {
    match app.edit_modal.handle_key(key) {
        ModalAction::Submit => app.confirm_edit(),
        ModalAction::Cancel => app.cancel_edit(),
        ModalAction::None => {}
    }
}

/// Map a key to a single-line text edit, if it is one.
pub(super) fn input_request(key: &KeyEvent) -> Option<InputRequest> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let request = match (key.code, ctrl) {
        (KeyCode::Backspace, false) => InputRequest::DeletePrevChar,
        (KeyCode::Backspace, true) | (KeyCode::Char('w'), true) => InputRequest::DeletePrevWord,
        (KeyCode::Delete, false) => InputRequest::DeleteNextChar,
        (KeyCode::Delete, true) => InputRequest::DeleteNextWord,
        (KeyCode::Left, false) => InputRequest::GoToPrevChar,
        (KeyCode::Left, true) => InputRequest::GoToPrevWord,
        (KeyCode::Right, false) => InputRequest::GoToNextChar,
        (KeyCode::Right, true) => InputRequest::GoToNextWord,
        (KeyCode::Home, _) | (KeyCode::Char('a'), true) => InputRequest::GoToStart,
        (KeyCode::End, _) | (KeyCode::Char('e'), true) => InputRequest::GoToEnd,
        (KeyCode::Char('u'), true) => InputRequest::DeleteLine,
        (KeyCode::Char('k'), true) => InputRequest::DeleteTillEnd,
        (KeyCode::Char(ch), false) => InputRequest::InsertChar(ch),
        _ => return None,
    };
    Some(request)
}
