//! Signal-backed Collaborators
//!
//! Reactive state the components render from. Both types are `Copy` so
//! they can be captured freely by view closures.

use leptos::prelude::*;

use crate::controller::{InputField, RenderTarget};
use crate::models::{EntryHandle, Task, TaskEntry};

/// Current text of the task input, bound to `<input prop:value>`
#[derive(Clone, Copy)]
pub struct InputSignal(RwSignal<String>);

impl InputSignal {
    pub fn new() -> Self {
        Self(RwSignal::new(String::new()))
    }

    pub fn signal(&self) -> RwSignal<String> {
        self.0
    }
}

impl InputField for InputSignal {
    fn value(&self) -> String {
        self.0.get_untracked()
    }

    fn clear(&self) {
        self.0.set(String::new());
    }
}

/// Rendered task entries in display order
#[derive(Clone, Copy)]
pub struct TaskListView {
    entries: RwSignal<Vec<TaskEntry>>,
    next_handle: StoredValue<u32>,
}

impl TaskListView {
    pub fn new() -> Self {
        Self {
            entries: RwSignal::new(Vec::new()),
            next_handle: StoredValue::new(0),
        }
    }

    pub fn entries(&self) -> ReadSignal<Vec<TaskEntry>> {
        self.entries.read_only()
    }

    /// Tracked entry count
    pub fn len(&self) -> usize {
        self.entries.with(|entries| entries.len())
    }
}

impl RenderTarget for TaskListView {
    fn append(&self, task: Task) -> EntryHandle {
        let handle = EntryHandle(self.next_handle.get_value());
        self.next_handle.set_value(handle.0 + 1);
        self.entries.update(|entries| entries.push(TaskEntry { handle, task }));
        handle
    }

    fn remove(&self, handle: EntryHandle) -> Option<Task> {
        let index = self
            .entries
            .with_untracked(|entries| entries.iter().position(|e| e.handle == handle))?;
        let mut removed = None;
        self.entries.update(|entries| removed = Some(entries.remove(index).task));
        removed
    }
}
