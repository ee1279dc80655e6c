/*
[INPUT]:  Add/edit/delete/toggle requests keyed by TaskId
[OUTPUT]: Insertion-ordered in-memory task list
[POS]:    Task Store - sole owner of task records for the session
[UPDATE]: When changing task mutation semantics
*/

use tracing::{debug, info, warn};

use crate::draft::{TaskDraft, validate_new_task_name};
use crate::error::TodoError;
use crate::task::{IdSequence, Task, TaskId};

/// In-memory task list for one UI session.
///
/// Every mutation takes `&mut self`, so the render step always reads a
/// complete post-mutation snapshot through [`TaskStore::tasks`].
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    ids: IdSequence,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new open task to the end of the list.
    pub fn add(&mut self, name: &str) -> Result<&Task, TodoError> {
        let name = validate_new_task_name(name)?;
        let task = Task::new(self.ids.next_id(), name);
        info!(task_id = %task.id, name = %task.name, "task added");

        let index = self.tasks.len();
        self.tasks.push(task);
        Ok(&self.tasks[index])
    }

    /// Replace the name of the matching task.
    ///
    /// Returns `Ok(false)` when no task carries `id`.
    pub fn edit(&mut self, id: TaskId, new_name: &str) -> Result<bool, TodoError> {
        let draft = TaskDraft::new(new_name);
        let name = draft.validate()?;
        match self.get_mut(id) {
            Some(task) => {
                task.name = name.to_string();
                info!(task_id = %id, name = %task.name, "task renamed");
                Ok(true)
            }
            None => {
                warn!(task_id = %id, "edit requested for unknown task");
                Ok(false)
            }
        }
    }

    /// Remove the matching task, if present.
    pub fn delete(&mut self, id: TaskId) -> Option<Task> {
        let index = self.tasks.iter().position(|task| task.id == id)?;
        let task = self.tasks.remove(index);
        info!(task_id = %id, "task deleted");
        Some(task)
    }

    /// Flip the completion flag and return its new value.
    pub fn toggle_complete(&mut self, id: TaskId) -> Option<bool> {
        let task = self.get_mut(id)?;
        task.completed = !task.completed;
        debug!(task_id = %id, completed = task.completed, "task toggled");
        Some(task.completed)
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    fn get_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| task.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_appends_in_insertion_order() {
        let mut store = TaskStore::new();
        store.add("A").unwrap();
        store.add("B").unwrap();
        store.add("C").unwrap();
        let names: Vec<_> = store.iter().map(|task| task.name.as_str()).collect();
        assert_eq!(names, ["A", "B", "C"]);
        assert!(store.iter().all(|task| !task.completed));
    }

    #[test]
    fn add_rejects_blank_name() {
        let mut store = TaskStore::new();
        assert_eq!(store.add("  ").unwrap_err(), TodoError::EmptyTaskName);
        assert!(store.is_empty());
    }

    #[test]
    fn edit_only_touches_name() {
        let mut store = TaskStore::new();
        let id = store.add("A").unwrap().id;
        store.toggle_complete(id);

        assert_eq!(store.edit(id, "A2"), Ok(true));
        let task = store.get(id).unwrap();
        assert_eq!(task.id, id);
        assert_eq!(task.name, "A2");
        assert!(task.completed);
    }

    #[test]
    fn edit_rejects_blank_name_without_mutation() {
        let mut store = TaskStore::new();
        let id = store.add("A").unwrap().id;
        assert_eq!(
            store.edit(id, ""),
            Err(TodoError::RequiredFieldMissing { field: "name" })
        );
        assert_eq!(store.get(id).unwrap().name, "A");
    }

    #[test]
    fn edit_unknown_id_is_noop() {
        let mut store = TaskStore::new();
        store.add("A").unwrap();
        assert_eq!(store.edit(TaskId::new(-1), "B"), Ok(false));
        assert_eq!(store.tasks()[0].name, "A");
    }

    #[test]
    fn delete_keeps_order_of_remaining_tasks() {
        let mut store = TaskStore::new();
        store.add("A").unwrap();
        let b = store.add("B").unwrap().id;
        store.add("C").unwrap();

        let removed = store.delete(b).unwrap();
        assert_eq!(removed.name, "B");
        let names: Vec<_> = store.iter().map(|task| task.name.as_str()).collect();
        assert_eq!(names, ["A", "C"]);
    }

    #[test]
    fn toggle_unknown_id_is_noop() {
        let mut store = TaskStore::new();
        assert_eq!(store.toggle_complete(TaskId::new(1)), None);
    }
}
