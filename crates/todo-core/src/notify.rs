/*
[INPUT]:  Outcome messages from task actions
[OUTPUT]: Notifier capability and a recording implementation
[POS]:    Side-effect seam between task logic and the presentation toolkit
[UPDATE]: When adding notification levels or message texts
*/

pub const TASK_EMPTY: &str = "Task cannot be empty!";
pub const TASK_ADDED: &str = "Task added successfully!";
pub const TASK_UPDATED: &str = "Task updated successfully!";
pub const TASK_DELETED: &str = "Task deleted successfully!";
pub const TASK_NAME_REQUIRED: &str = "Task name is required!";

/// Severity of a user notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
}

/// A recorded user notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
        }
    }
}

/// Capability for surfacing transient success/error messages to the user
pub trait Notifier {
    fn success(&mut self, message: &str);
    fn error(&mut self, message: &str);
}

impl Notifier for Vec<Notification> {
    fn success(&mut self, message: &str) {
        self.push(Notification::success(message));
    }

    fn error(&mut self, message: &str) {
        self.push(Notification::error(message));
    }
}
