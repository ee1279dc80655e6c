//! Gesture handlers pairing a store mutation with its user notification.
//!
//! Edits go through [`crate::EditDialog::confirm`], which owns the
//! validate-then-commit flow for the modal form.

use tracing::debug;

use crate::notify::{Notifier, TASK_ADDED, TASK_DELETED, TASK_EMPTY};
use crate::store::TaskStore;
use crate::task::TaskId;

/// Add a task from the input row. Returns the new id, or `None` when the
/// name was rejected (an error notification is raised in that case).
pub fn add_task(store: &mut TaskStore, notifier: &mut impl Notifier, name: &str) -> Option<TaskId> {
    match store.add(name) {
        Ok(task) => {
            let id = task.id;
            notifier.success(TASK_ADDED);
            Some(id)
        }
        Err(err) => {
            debug!(error = %err, "add rejected");
            notifier.error(TASK_EMPTY);
            None
        }
    }
}

/// Delete a task. Returns whether anything was removed.
pub fn delete_task(store: &mut TaskStore, notifier: &mut impl Notifier, id: TaskId) -> bool {
    if store.delete(id).is_some() {
        notifier.success(TASK_DELETED);
        true
    } else {
        false
    }
}

/// Toggle completion. No notification is raised.
pub fn toggle_task(store: &mut TaskStore, id: TaskId) -> Option<bool> {
    store.toggle_complete(id)
}
