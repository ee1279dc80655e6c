/*
[INPUT]:  Modal state, focus, and key events
[OUTPUT]: Modal rendering output and modal action results
[POS]:    TUI UI modal module root
[UPDATE]: When adding dialogs or changing dialog focus handling
*/

mod edit_task;

pub(in crate::tui) use edit_task::{EditTaskModal, draw_edit_task_modal};

/// What a key press inside a dialog asks the caller to do
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(in crate::tui) enum ModalAction {
    Submit,
    Cancel,
    None,
}

/// Focusable elements of a single-field form dialog, in tab order
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(in crate::tui) enum ModalFocus {
    #[default]
    Field,
    Confirm,
    Cancel,
}

impl ModalFocus {
    pub(in crate::tui) fn next(self) -> Self {
        match self {
            Self::Field => Self::Confirm,
            Self::Confirm => Self::Cancel,
            Self::Cancel => Self::Field,
        }
    }

    pub(in crate::tui) fn prev(self) -> Self {
        match self {
            Self::Field => Self::Cancel,
            Self::Confirm => Self::Field,
            Self::Cancel => Self::Confirm,
        }
    }

    /// Enter on the field or OK submits; Enter on Cancel dismisses.
    pub(in crate::tui) fn enter_action(self) -> ModalAction {
        match self {
            Self::Field | Self::Confirm => ModalAction::Submit,
            Self::Cancel => ModalAction::Cancel,
        }
    }
}
