//! Persistent task store
//!
//! Keeps the master task list as one JSON array in a single key-value slot.

use tracing::{debug, warn};

use super::model::Task;
use crate::storage::KeyValueStore;
use crate::Result;

/// Task list persistence over a key-value store
#[derive(Debug, Clone)]
pub struct TaskStore<S> {
    backend: S,
    key: String,
}

impl<S: KeyValueStore> TaskStore<S> {
    /// Create a store that reads and writes the slot named `key`
    pub fn new(backend: S, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    /// Name of the slot holding the task list
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Borrow the underlying key-value store
    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Load the task list.
    ///
    /// A missing slot, a failed read, or a blob that is not a JSON array
    /// of tasks all yield an empty list.
    pub fn load(&self) -> Vec<Task> {
        let content = match self.backend.get(&self.key) {
            Ok(Some(content)) => content,
            Ok(None) => {
                debug!(key = %self.key, "no stored tasks, starting empty");
                return Vec::new();
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "failed to read stored tasks, starting empty");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<Task>>(&content) {
            Ok(tasks) => {
                debug!(key = %self.key, count = tasks.len(), "loaded tasks");
                tasks
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "discarding malformed stored tasks");
                Vec::new()
            }
        }
    }

    /// Overwrite the slot with `tasks`
    pub fn save(&mut self, tasks: &[Task]) -> Result<()> {
        let content = serde_json::to_string(tasks)?;
        self.backend.set(&self.key, &content)?;
        debug!(key = %self.key, count = tasks.len(), "saved tasks");
        Ok(())
    }
}
