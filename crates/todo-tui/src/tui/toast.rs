use std::collections::VecDeque;

use todo_core::{NotificationLevel, Notifier};
use tracing::{info, warn};

const MAX_VISIBLE_TOASTS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct Toast {
    pub(super) level: NotificationLevel,
    pub(super) message: String,
    ticks_left: u16,
}

/// Transient notifications rendered in the top-right corner.
///
/// Each toast lives for `ttl_ticks` UI ticks; only the newest few are kept.
#[derive(Debug)]
pub(super) struct ToastQueue {
    toasts: VecDeque<Toast>,
    ttl_ticks: u16,
}

impl ToastQueue {
    pub(super) fn new(ttl_ticks: u16) -> Self {
        Self {
            toasts: VecDeque::new(),
            ttl_ticks: ttl_ticks.max(1),
        }
    }

    fn push(&mut self, level: NotificationLevel, message: &str) {
        if self.toasts.len() >= MAX_VISIBLE_TOASTS {
            self.toasts.pop_front();
        }
        self.toasts.push_back(Toast {
            level,
            message: message.to_string(),
            ticks_left: self.ttl_ticks,
        });
    }

    pub(super) fn tick(&mut self) {
        for toast in &mut self.toasts {
            toast.ticks_left = toast.ticks_left.saturating_sub(1);
        }
        self.toasts.retain(|toast| toast.ticks_left > 0);
    }

    pub(super) fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub(super) fn len(&self) -> usize {
        self.toasts.len()
    }

    pub(super) fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

impl Notifier for ToastQueue {
    fn success(&mut self, message: &str) {
        info!(toast = message, "notify success");
        self.push(NotificationLevel::Success, message);
    }

    fn error(&mut self, message: &str) {
        warn!(toast = message, "notify error");
        self.push(NotificationLevel::Error, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_expires_after_ttl() {
        let mut queue = ToastQueue::new(2);
        queue.success("saved");
        queue.tick();
        assert_eq!(queue.len(), 1);
        queue.tick();
        assert!(queue.is_empty());
    }

    #[test]
    fn keeps_only_newest() {
        let mut queue = ToastQueue::new(5);
        for message in ["a", "b", "c", "d"] {
            queue.error(message);
        }
        let messages: Vec<_> = queue.iter().map(|toast| toast.message.as_str()).collect();
        assert_eq!(messages, ["b", "c", "d"]);
        assert!(queue.iter().all(|toast| toast.level == NotificationLevel::Error));
    }
}
