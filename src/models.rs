//! Frontend Models
//!
//! Task text and rendered list entries.

use crate::error::TaskError;

/// A single to-do entry, identified only by its text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub text: String,
}

impl Task {
    /// Wrap text that was already validated (replayed from storage)
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Trim user input; blank input is an `EmptySubmission`
    pub fn parse(raw: &str) -> Result<Self, TaskError> {
        let text = raw.trim();
        if text.is_empty() {
            return Err(TaskError::EmptySubmission);
        }
        Ok(Self::new(text))
    }
}

/// Opaque id of one rendered entry, unique within its list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryHandle(pub u32);

/// A rendered task with the handle its remove control refers to
#[derive(Debug, Clone, PartialEq)]
pub struct TaskEntry {
    pub handle: EntryHandle,
    pub task: Task,
}
