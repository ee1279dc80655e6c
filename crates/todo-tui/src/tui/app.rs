/*
[INPUT]:  TuiConfig, log buffer handle, routed key gestures
[OUTPUT]: AppState owning the TaskStore plus transient view state
[POS]:    TUI app state and gesture-to-store helpers
[UPDATE]: When adding gestures or view state
*/

use ratatui::widgets::ListState;
use todo_core::actions::{add_task, delete_task, toggle_task};
use todo_core::{ConfirmOutcome, TaskId, TaskStore};
use tracing::debug;
use tui_input::Input;

use super::LogBufferHandle;
use super::toast::ToastQueue;
use super::ui::modal::EditTaskModal;
use crate::config::TuiConfig;

/// Which part of the main screen receives keys when no dialog is open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Focus {
    Input,
    List,
}

pub(super) struct AppState {
    pub(super) title: String,
    pub(super) placeholder: String,
    pub(super) store: TaskStore,
    pub(super) input: Input,
    pub(super) focus: Focus,
    pub(super) list_state: ListState,
    pub(super) edit_modal: EditTaskModal,
    pub(super) toasts: ToastQueue,
    pub(super) log_buffer: LogBufferHandle,
    pub(super) show_logs: bool,
}

impl AppState {
    pub(super) fn new(config: &TuiConfig, log_buffer: LogBufferHandle) -> Self {
        Self {
            title: config.title.clone(),
            placeholder: config.placeholder.clone(),
            store: TaskStore::new(),
            input: Input::default(),
            focus: Focus::Input,
            list_state: ListState::default(),
            edit_modal: EditTaskModal::default(),
            toasts: ToastQueue::new(config.toast_ticks),
            log_buffer,
            show_logs: config.show_logs,
        }
    }

    /// Add the input row's text as a new task. The input is cleared only on
    /// success so a rejected entry can be corrected.
    pub(super) fn submit_new_task(&mut self) {
        let name = self.input.value().to_string();
        if add_task(&mut self.store, &mut self.toasts, &name).is_some() {
            self.input.reset();
            self.list_state.select(Some(self.store.len() - 1));
        }
    }

    pub(super) fn selected_task_id(&self) -> Option<TaskId> {
        let idx = self.list_state.selected()?;
        self.store.tasks().get(idx).map(|task| task.id)
    }

    pub(super) fn toggle_selected(&mut self) {
        if let Some(id) = self.selected_task_id() {
            toggle_task(&mut self.store, id);
        }
    }

    pub(super) fn delete_selected(&mut self) {
        if let Some(id) = self.selected_task_id() {
            delete_task(&mut self.store, &mut self.toasts, id);
            self.clamp_selection();
        }
    }

    pub(super) fn open_edit_selected(&mut self) {
        let Some(id) = self.selected_task_id() else {
            return;
        };
        if let Some(task) = self.store.get(id) {
            self.edit_modal.open(task);
        }
    }

    pub(super) fn confirm_edit(&mut self) {
        match self.edit_modal.confirm(&mut self.store, &mut self.toasts) {
            Ok(ConfirmOutcome::Saved(id)) => debug!(task_id = %id, "edit saved"),
            Ok(ConfirmOutcome::Closed) => self.clamp_selection(),
            Err(err) => debug!(error = %err, "edit kept open"),
        }
    }

    pub(super) fn cancel_edit(&mut self) {
        self.edit_modal.cancel();
    }

    pub(super) fn focus_list(&mut self) {
        self.focus = Focus::List;
        if self.list_state.selected().is_none() && !self.store.is_empty() {
            self.list_state.select(Some(0));
        }
    }

    pub(super) fn focus_input(&mut self) {
        self.focus = Focus::Input;
    }

    pub(super) fn toggle_logs(&mut self) {
        self.show_logs = !self.show_logs;
    }

    pub(super) fn move_selection(&mut self, delta: isize) {
        if self.store.is_empty() {
            self.list_state.select(None);
            return;
        }
        let current = self.list_state.selected().unwrap_or(0) as isize;
        let next = (current + delta).clamp(0, (self.store.len() - 1) as isize) as usize;
        self.list_state.select(Some(next));
    }

    pub(super) fn select_first(&mut self) {
        if !self.store.is_empty() {
            self.list_state.select(Some(0));
        }
    }

    pub(super) fn select_last(&mut self) {
        if !self.store.is_empty() {
            self.list_state.select(Some(self.store.len() - 1));
        }
    }

    pub(super) fn on_tick(&mut self) {
        self.toasts.tick();
    }

    fn clamp_selection(&mut self) {
        if self.store.is_empty() {
            self.list_state.select(None);
        } else if let Some(selected) = self.list_state.selected() {
            if selected >= self.store.len() {
                self.list_state.select(Some(self.store.len() - 1));
            }
        }
    }
}
