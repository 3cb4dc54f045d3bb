//! In-memory collaborators for unit tests

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use crate::controller::{InputField, Notifier, RenderTarget};
use crate::models::{EntryHandle, Task, TaskEntry};
use crate::storage::KeyValueStore;

/// Shared-state key-value store that counts `set` calls
#[derive(Clone, Default)]
pub struct MemoryStore {
    values: Rc<RefCell<HashMap<String, String>>>,
    writes: Rc<Cell<usize>>,
}

impl MemoryStore {
    /// Seed a value without counting it as a write
    pub fn put(&self, key: &str, value: &str) {
        self.values.borrow_mut().insert(key.to_string(), value.to_string());
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    pub fn writes(&self) -> usize {
        self.writes.get()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.raw(key)
    }

    fn set(&self, key: &str, value: &str) {
        self.writes.set(self.writes.get() + 1);
        self.put(key, value);
    }
}

#[derive(Clone, Default)]
pub struct FakeInput(Rc<RefCell<String>>);

impl FakeInput {
    pub fn type_text(&self, text: &str) {
        *self.0.borrow_mut() = text.to_string();
    }
}

impl InputField for FakeInput {
    fn value(&self) -> String {
        self.0.borrow().clone()
    }

    fn clear(&self) {
        self.0.borrow_mut().clear();
    }
}

#[derive(Clone, Default)]
pub struct FakeList {
    entries: Rc<RefCell<Vec<TaskEntry>>>,
    next: Rc<Cell<u32>>,
}

impl FakeList {
    pub fn texts(&self) -> Vec<String> {
        self.entries.borrow().iter().map(|e| e.task.text.clone()).collect()
    }
}

impl RenderTarget for FakeList {
    fn append(&self, task: Task) -> EntryHandle {
        let handle = EntryHandle(self.next.get());
        self.next.set(handle.0 + 1);
        self.entries.borrow_mut().push(TaskEntry { handle, task });
        handle
    }

    fn remove(&self, handle: EntryHandle) -> Option<Task> {
        let mut entries = self.entries.borrow_mut();
        let index = entries.iter().position(|e| e.handle == handle)?;
        Some(entries.remove(index).task)
    }
}

#[derive(Clone, Default)]
pub struct FakeNotifier(Rc<RefCell<Vec<String>>>);

impl FakeNotifier {
    pub fn messages(&self) -> Vec<String> {
        self.0.borrow().clone()
    }
}

impl Notifier for FakeNotifier {
    fn alert(&self, message: &str) {
        self.0.borrow_mut().push(message.to_string());
    }
}
