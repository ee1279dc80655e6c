/*
[INPUT]:  Gesture sequences against TaskStore and EditDialog
[OUTPUT]: Store and dialog behaviour verification
[POS]:    Integration test layer - end-to-end task list scenarios
[UPDATE]: When changing store or dialog semantics
*/

use std::collections::HashSet;

use rstest::rstest;
use todo_core::actions::{add_task, delete_task, toggle_task};
use todo_core::notify::{TASK_EMPTY, TASK_NAME_REQUIRED};
use todo_core::{EditDialog, Notification, NotificationLevel, TaskStore, TodoError};

fn snapshot(store: &TaskStore) -> Vec<(String, bool)> {
    store
        .iter()
        .map(|task| (task.name.clone(), task.completed))
        .collect()
}

#[rstest]
#[case::all_valid(&["a", "b", "c"], 3)]
#[case::mixed(&["a", "", "b", "   ", "\t"], 2)]
#[case::all_blank(&["", " "], 0)]
#[case::unicode(&["牛奶", "café"], 2)]
fn store_grows_only_for_non_empty_names(#[case] names: &[&str], #[case] expected: usize) {
    let mut store = TaskStore::new();
    let mut notes: Vec<Notification> = Vec::new();
    for name in names {
        add_task(&mut store, &mut notes, name);
    }
    assert_eq!(store.len(), expected);

    let errors = notes
        .iter()
        .filter(|note| note.level == NotificationLevel::Error)
        .count();
    assert_eq!(errors, names.len() - expected);
}

#[test]
fn ids_are_pairwise_distinct() {
    let mut store = TaskStore::new();
    for i in 0..500 {
        store.add(&format!("task {i}")).unwrap();
    }
    let ids: HashSet<_> = store.iter().map(|task| task.id).collect();
    assert_eq!(ids.len(), 500);

    let raw: Vec<i64> = store.iter().map(|task| task.id.get()).collect();
    assert!(raw.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn toggle_is_its_own_inverse() {
    let mut store = TaskStore::new();
    let id = store.add("A").unwrap().id;
    toggle_task(&mut store, id);
    toggle_task(&mut store, id);
    assert!(!store.get(id).unwrap().completed);
}

#[test]
fn delete_twice_is_idempotent() {
    let mut store = TaskStore::new();
    let mut notes: Vec<Notification> = Vec::new();
    let a = store.add("A").unwrap().id;
    store.add("B").unwrap();

    delete_task(&mut store, &mut notes, a);
    let after_first = snapshot(&store);
    delete_task(&mut store, &mut notes, a);
    assert_eq!(snapshot(&store), after_first);
}

#[test]
fn add_then_add_empty() {
    let mut store = TaskStore::new();
    let mut notes: Vec<Notification> = Vec::new();

    add_task(&mut store, &mut notes, "Buy milk");
    assert_eq!(snapshot(&store), vec![("Buy milk".to_string(), false)]);

    notes.clear();
    add_task(&mut store, &mut notes, "");
    assert_eq!(snapshot(&store), vec![("Buy milk".to_string(), false)]);
    assert_eq!(notes, vec![Notification::error(TASK_EMPTY)]);
}

#[test]
fn toggle_first_of_two() {
    let mut store = TaskStore::new();
    let a = store.add("A").unwrap().id;
    store.add("B").unwrap();

    toggle_task(&mut store, a);
    assert_eq!(
        snapshot(&store),
        vec![("A".to_string(), true), ("B".to_string(), false)]
    );
}

#[test]
fn blank_edit_keeps_dialog_open() {
    let mut store = TaskStore::new();
    let mut notes: Vec<Notification> = Vec::new();
    let a = store.add("A").unwrap().id;

    let mut dialog = EditDialog::default();
    dialog.open(store.get(a).unwrap());
    dialog.set_draft_name("");
    let result = dialog.confirm(&mut store, &mut notes);

    assert_eq!(result, Err(TodoError::RequiredFieldMissing { field: "name" }));
    assert!(dialog.is_open());
    assert_eq!(
        dialog.session().and_then(|s| s.field_error.as_deref()),
        Some(TASK_NAME_REQUIRED)
    );
    assert_eq!(snapshot(&store), vec![("A".to_string(), false)]);
}

#[test]
fn add_edit_delete_leaves_empty_store() {
    let mut store = TaskStore::new();
    let mut notes: Vec<Notification> = Vec::new();
    let id = add_task(&mut store, &mut notes, "A").unwrap();

    let mut dialog = EditDialog::default();
    dialog.open(store.get(id).unwrap());
    dialog.set_draft_name("A2");
    dialog.confirm(&mut store, &mut notes).unwrap();
    assert_eq!(store.get(id).unwrap().name, "A2");

    delete_task(&mut store, &mut notes, id);
    assert!(store.is_empty());
}
