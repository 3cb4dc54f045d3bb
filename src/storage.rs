//! Task Persistence
//!
//! The persisted sequence is a JSON array of task texts stored under one
//! key of a synchronous key-value store. Missing or corrupt values read
//! as an empty sequence.

use serde_json::Value;

/// Synchronous string key-value store (browser localStorage shape)
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;

    /// Write failures are the implementation's to log; callers don't retry
    fn set(&self, key: &str, value: &str);
}

/// Ordered task texts persisted under a single key
#[derive(Debug, Clone)]
pub struct TaskStore<S> {
    backend: S,
    key: String,
}

impl<S: KeyValueStore> TaskStore<S> {
    pub fn new(backend: S, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Persisted sequence in stored order
    pub fn load(&self) -> Vec<String> {
        let Some(raw) = self.backend.get(&self.key) else {
            return Vec::new();
        };
        // Non-string elements are dropped one by one, not the whole array
        match serde_json::from_str::<Vec<Value>>(&raw) {
            Ok(values) => values
                .into_iter()
                .filter_map(|value| match value {
                    Value::String(text) if !text.trim().is_empty() => Some(text),
                    Value::String(_) => {
                        log::warn!("Skipping blank task stored under '{}'", self.key);
                        None
                    }
                    other => {
                        log::warn!("Skipping non-text task {} under '{}'", other, self.key);
                        None
                    }
                })
                .collect(),
            Err(err) => {
                log::warn!("Ignoring corrupt task list under '{}': {}", self.key, err);
                Vec::new()
            }
        }
    }

    pub fn append(&self, text: &str) {
        let mut tasks = self.load();
        tasks.push(text.to_string());
        self.save(&tasks);
    }

    /// Remove the first stored task equal to `text`. Returns false (and
    /// writes nothing) when no such task exists.
    pub fn remove_first(&self, text: &str) -> bool {
        let mut tasks = self.load();
        match tasks.iter().position(|t| t == text) {
            Some(index) => {
                tasks.remove(index);
                self.save(&tasks);
                true
            }
            None => {
                log::warn!("Task '{}' not found in storage, nothing to remove", text);
                false
            }
        }
    }

    fn save(&self, tasks: &[String]) {
        match serde_json::to_string(tasks) {
            Ok(raw) => self.backend.set(&self.key, &raw),
            Err(err) => log::warn!("Failed to serialize task list: {}", err),
        }
    }
}
