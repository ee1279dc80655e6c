//! Form draft records validated before they reach the store.

use crate::error::TodoError;

/// Working copy of the edit form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    pub name: String,
}

impl TaskDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Returns the name to commit, or the required-field error.
    pub fn validate(&self) -> Result<&str, TodoError> {
        if self.name.trim().is_empty() {
            return Err(TodoError::RequiredFieldMissing { field: "name" });
        }
        Ok(self.name.as_str())
    }
}

/// Check applied to the add row before a task is created
pub fn validate_new_task_name(name: &str) -> Result<&str, TodoError> {
    if name.trim().is_empty() {
        return Err(TodoError::EmptyTaskName);
    }
    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::empty("")]
    #[case::spaces("   ")]
    #[case::tabs_and_newlines("\t\n ")]
    fn blank_draft_is_rejected(#[case] name: &str) {
        let draft = TaskDraft::new(name);
        assert_eq!(
            draft.validate(),
            Err(TodoError::RequiredFieldMissing { field: "name" })
        );
        assert_eq!(validate_new_task_name(name), Err(TodoError::EmptyTaskName));
    }

    #[test]
    fn name_is_returned_as_typed() {
        let draft = TaskDraft::new("  Buy milk ");
        assert_eq!(draft.validate(), Ok("  Buy milk "));
        assert_eq!(validate_new_task_name(" x"), Ok(" x"));
    }
}
