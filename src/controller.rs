//! Task List Controller
//!
//! Routes user actions to the rendered list and the persisted sequence,
//! keeping the two equal after every call. The controller owns no UI or
//! storage itself; it drives four collaborators through the traits below.

use crate::error::TaskError;
use crate::models::{EntryHandle, Task};
use crate::storage::{KeyValueStore, TaskStore};

/// Text field the user types tasks into
pub trait InputField {
    fn value(&self) -> String;
    fn clear(&self);
}

/// Ordered container of rendered entries
pub trait RenderTarget {
    /// Append an entry at the end and return its handle
    fn append(&self, task: Task) -> EntryHandle;

    /// Remove the entry behind `handle`; `None` if it is already gone
    fn remove(&self, handle: EntryHandle) -> Option<Task>;
}

/// Blocking user-facing notification
pub trait Notifier {
    fn alert(&self, message: &str);
}

#[derive(Clone)]
pub struct TaskListController<I, R, S, N> {
    input: I,
    list: R,
    store: TaskStore<S>,
    notifier: N,
}

impl<I, R, S, N> TaskListController<I, R, S, N>
where
    I: InputField,
    R: RenderTarget,
    S: KeyValueStore,
    N: Notifier,
{
    pub fn new(input: I, list: R, store: TaskStore<S>, notifier: N) -> Self {
        Self {
            input,
            list,
            store,
            notifier,
        }
    }

    /// Add a task.
    ///
    /// `None` reads and trims the input field, persists the task and clears
    /// the field; blank input alerts the user and changes nothing.
    /// `Some(text)` is the replay path: render only, no alert, no write.
    pub fn submit(&self, raw: Option<&str>) -> Result<EntryHandle, TaskError> {
        let Some(text) = raw else {
            return self.submit_direct();
        };
        Ok(self.list.append(Task::new(text)))
    }

    /// Submit whatever is in the input field (button click, Enter key)
    pub fn submit_input(&self) -> Result<EntryHandle, TaskError> {
        self.submit(None)
    }

    fn submit_direct(&self) -> Result<EntryHandle, TaskError> {
        let task = match Task::parse(&self.input.value()) {
            Ok(task) => task,
            Err(err) => {
                self.notifier.alert(&err.to_string());
                return Err(err);
            }
        };
        log::debug!("Adding task '{}'", task.text);
        let text = task.text.clone();
        let handle = self.list.append(task);
        self.store.append(&text);
        self.input.clear();
        Ok(handle)
    }

    /// Remove one rendered entry and the first stored task with its text.
    /// A stale handle is a no-op and returns false.
    pub fn remove(&self, handle: EntryHandle) -> bool {
        let Some(task) = self.list.remove(handle) else {
            log::debug!("Entry {:?} already removed", handle);
            return false;
        };
        log::debug!("Removing task '{}'", task.text);
        self.store.remove_first(&task.text);
        true
    }

    /// Replay the persisted sequence into the render target, in order.
    /// Returns the number of entries rendered.
    pub fn load_all(&self) -> usize {
        let mut count = 0;
        for text in self.store.load() {
            if self.submit(Some(&text)).is_ok() {
                count += 1;
            }
        }
        log::info!("Restored {} tasks from '{}'", count, self.store.key());
        count
    }
}
