//! Task model definitions

use std::fmt;

use chrono::Utc;

/// Unique task identifier, issued from the creation timestamp in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskId(i64);

impl TaskId {
    pub fn new(raw: i64) -> Self {
        Self(raw)
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A to-do item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    pub name: String,
    pub completed: bool,
}

impl Task {
    /// Create an open task with the given id and name
    pub fn new(id: TaskId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            completed: false,
        }
    }
}

/// Monotonic id source backed by the wall clock.
///
/// Ids follow the creation time in Unix milliseconds. When the clock has not
/// moved past the last issued id (two adds in the same millisecond, or the
/// clock stepping backwards) the previous id plus one is issued instead, so
/// ids stay strictly increasing for the session.
#[derive(Debug, Default)]
pub(crate) struct IdSequence {
    last: Option<i64>,
}

impl IdSequence {
    pub(crate) fn next_id(&mut self) -> TaskId {
        self.next_from(Utc::now().timestamp_millis())
    }

    fn next_from(&mut self, now_millis: i64) -> TaskId {
        let id = match self.last {
            Some(last) if now_millis <= last => last + 1,
            _ => now_millis,
        };
        self.last = Some(id);
        TaskId(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_task_starts_open() {
        let task = Task::new(TaskId::new(7), "Buy milk");
        assert_eq!(task.id.get(), 7);
        assert_eq!(task.name, "Buy milk");
        assert!(!task.completed);
    }

    #[test]
    fn sequence_follows_clock_when_it_advances() {
        let mut seq = IdSequence::default();
        assert_eq!(seq.next_from(1_000), TaskId::new(1_000));
        assert_eq!(seq.next_from(1_005), TaskId::new(1_005));
    }

    #[test]
    fn sequence_bumps_within_same_millisecond() {
        let mut seq = IdSequence::default();
        assert_eq!(seq.next_from(1_000), TaskId::new(1_000));
        assert_eq!(seq.next_from(1_000), TaskId::new(1_001));
        assert_eq!(seq.next_from(1_000), TaskId::new(1_002));
    }

    #[test]
    fn sequence_survives_clock_going_backwards() {
        let mut seq = IdSequence::default();
        seq.next_from(5_000);
        assert_eq!(seq.next_from(4_000), TaskId::new(5_001));
    }

    #[test]
    fn display_is_raw_number() {
        assert_eq!(TaskId::new(1_700_000_000_000).to_string(), "1700000000000");
    }
}
