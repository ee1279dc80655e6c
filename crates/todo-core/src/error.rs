/*
[INPUT]:  User input validation failures
[OUTPUT]: Structured error type for task operations
[POS]:    Error handling layer - recovered locally by the presentation layer
[UPDATE]: When adding new validation rules
*/

use thiserror::Error;

/// Main error type for task operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TodoError {
    /// Add was requested with an empty or whitespace-only name
    #[error("Task cannot be empty!")]
    EmptyTaskName,

    /// A required form field was left empty on confirm
    #[error("Task {field} is required!")]
    RequiredFieldMissing { field: &'static str },
}

impl TodoError {
    /// Whether the error belongs inline on a form field rather than in a toast
    pub fn is_field_error(&self) -> bool {
        matches!(self, TodoError::RequiredFieldMissing { .. })
    }
}
