/*
[INPUT]:  Edit gestures (open, field changes, confirm, cancel) and the TaskStore
[OUTPUT]: Validated edit commits and inline field errors
[POS]:    Edit dialog state machine - Closed / Open(task being edited)
[UPDATE]: When edit form fields or validation rules change
*/

use tracing::{debug, warn};

use crate::draft::TaskDraft;
use crate::error::TodoError;
use crate::notify::{Notifier, TASK_NAME_REQUIRED, TASK_UPDATED};
use crate::store::TaskStore;
use crate::task::{Task, TaskId};

/// Working state while a task is being edited
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub task_id: TaskId,
    pub draft: TaskDraft,
    /// Inline message shown under the field after a failed confirm
    pub field_error: Option<String>,
}

/// Result of a confirm that passed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmOutcome {
    /// The task was renamed and the dialog closed
    Saved(TaskId),
    /// Nothing was saved; the dialog is closed
    Closed,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditDialog {
    #[default]
    Closed,
    Open(EditSession),
}

impl EditDialog {
    /// Open the dialog with the form pre-filled from `task`.
    pub fn open(&mut self, task: &Task) {
        debug!(task_id = %task.id, "edit dialog opened");
        *self = Self::Open(EditSession {
            task_id: task.id,
            draft: TaskDraft::new(task.name.clone()),
            field_error: None,
        });
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }

    pub fn session(&self) -> Option<&EditSession> {
        match self {
            Self::Open(session) => Some(session),
            Self::Closed => None,
        }
    }

    /// Update the draft name; a stale field error is cleared.
    pub fn set_draft_name(&mut self, name: impl Into<String>) {
        if let Self::Open(session) = self {
            session.draft.name = name.into();
            session.field_error = None;
        }
    }

    /// Close without touching the store. Returns whether the dialog was open.
    pub fn cancel(&mut self) -> bool {
        let was_open = self.is_open();
        if was_open {
            debug!("edit dialog cancelled");
        }
        *self = Self::Closed;
        was_open
    }

    /// Validate the draft and commit it to `store`.
    ///
    /// On validation failure the dialog stays open with `field_error` set and
    /// the store is left untouched.
    pub fn confirm(
        &mut self,
        store: &mut TaskStore,
        notifier: &mut impl Notifier,
    ) -> Result<ConfirmOutcome, TodoError> {
        let Self::Open(session) = self else {
            return Ok(ConfirmOutcome::Closed);
        };

        let name = match session.draft.validate() {
            Ok(name) => name.to_string(),
            Err(err) => {
                debug!(task_id = %session.task_id, "edit rejected by validation");
                session.field_error = Some(TASK_NAME_REQUIRED.to_string());
                return Err(err);
            }
        };
        let task_id = session.task_id;
        *self = Self::Closed;

        if store.edit(task_id, &name)? {
            notifier.success(TASK_UPDATED);
            Ok(ConfirmOutcome::Saved(task_id))
        } else {
            warn!(task_id = %task_id, "edited task no longer exists");
            Ok(ConfirmOutcome::Closed)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::Notification;

    fn store_with(name: &str) -> (TaskStore, TaskId) {
        let mut store = TaskStore::new();
        let id = store.add(name).unwrap().id;
        (store, id)
    }

    #[test]
    fn starts_closed() {
        assert_eq!(EditDialog::default(), EditDialog::Closed);
    }

    #[test]
    fn open_prefills_draft() {
        let (store, id) = store_with("A");
        let mut dialog = EditDialog::default();
        dialog.open(store.get(id).unwrap());

        let session = dialog.session().unwrap();
        assert_eq!(session.task_id, id);
        assert_eq!(session.draft.name, "A");
        assert_eq!(session.field_error, None);
    }

    #[test]
    fn confirm_commits_and_closes() {
        let (mut store, id) = store_with("A");
        let mut notes: Vec<Notification> = Vec::new();
        let mut dialog = EditDialog::default();
        dialog.open(store.get(id).unwrap());
        dialog.set_draft_name("A2");

        let outcome = dialog.confirm(&mut store, &mut notes);
        assert_eq!(outcome, Ok(ConfirmOutcome::Saved(id)));
        assert!(!dialog.is_open());
        assert_eq!(store.get(id).unwrap().name, "A2");
        assert_eq!(notes, vec![Notification::success(TASK_UPDATED)]);
    }

    #[test]
    fn blank_confirm_keeps_dialog_open() {
        let (mut store, id) = store_with("A");
        let mut notes: Vec<Notification> = Vec::new();
        let mut dialog = EditDialog::default();
        dialog.open(store.get(id).unwrap());
        dialog.set_draft_name("");

        let outcome = dialog.confirm(&mut store, &mut notes);
        assert_eq!(outcome, Err(TodoError::RequiredFieldMissing { field: "name" }));
        assert!(dialog.is_open());
        assert_eq!(
            dialog.session().unwrap().field_error.as_deref(),
            Some(TASK_NAME_REQUIRED)
        );
        assert_eq!(store.get(id).unwrap().name, "A");
        assert!(notes.is_empty());
    }

    #[test]
    fn typing_clears_field_error() {
        let (mut store, id) = store_with("A");
        let mut dialog = EditDialog::default();
        dialog.open(store.get(id).unwrap());
        dialog.set_draft_name(" ");
        let _ = dialog.confirm(&mut store, &mut Vec::<Notification>::new());

        dialog.set_draft_name(" B");
        assert_eq!(dialog.session().unwrap().field_error, None);
    }

    #[test]
    fn cancel_discards_draft() {
        let (store, id) = store_with("A");
        let mut dialog = EditDialog::default();
        dialog.open(store.get(id).unwrap());
        dialog.set_draft_name("changed");

        assert!(dialog.cancel());
        assert!(!dialog.cancel());
        assert_eq!(store.get(id).unwrap().name, "A");
    }

    #[test]
    fn confirm_after_task_removed_closes_quietly() {
        let (mut store, id) = store_with("A");
        let mut notes: Vec<Notification> = Vec::new();
        let mut dialog = EditDialog::default();
        dialog.open(store.get(id).unwrap());
        store.delete(id);

        assert_eq!(dialog.confirm(&mut store, &mut notes), Ok(ConfirmOutcome::Closed));
        assert!(!dialog.is_open());
        assert!(notes.is_empty());
    }

    #[test]
    fn confirm_while_closed_is_noop() {
        let mut store = TaskStore::new();
        let mut dialog = EditDialog::Closed;
        assert_eq!(
            dialog.confirm(&mut store, &mut Vec::<Notification>::new()),
            Ok(ConfirmOutcome::Closed)
        );
    }
}
