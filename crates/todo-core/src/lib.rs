/*
[INPUT]:  Public API exports for todo-core crate
[OUTPUT]: Module declarations and public re-exports
[POS]:    Crate root - task model, store and dialog logic shared by front ends
[UPDATE]: When adding new modules or public exports
*/

pub mod actions;
pub mod dialog;
pub mod draft;
pub mod error;
pub mod notify;
pub mod store;
pub mod task;

// Re-export main types for convenience
pub use dialog::{ConfirmOutcome, EditDialog, EditSession};
pub use draft::TaskDraft;
pub use error::TodoError;
pub use notify::{Notification, NotificationLevel, Notifier};
pub use store::TaskStore;
pub use task::{Task, TaskId};
