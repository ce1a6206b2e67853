//! Task board repository
//!
//! Owns the master task list and writes it through to storage after
//! every change.

use chrono::Utc;
use tracing::{debug, info, warn};

use super::drag::{DropEvent, DropOutcome};
use super::model::{generate_task_id, Task, TaskDraft, TaskGroup};
use super::projection::{count_of, view_of};
use super::reconcile::{move_task, reorder_task};
use super::store::TaskStore;
use crate::config::BoardConfig;
use crate::storage::{FileKeyValueStore, KeyValueStore};
use crate::Result;

/// The board's single owner of task state
#[derive(Debug)]
pub struct TaskBoard<S> {
    tasks: Vec<Task>,
    store: TaskStore<S>,
}

impl TaskBoard<FileKeyValueStore> {
    /// Open the file-backed board described by `config`
    pub fn open(config: &BoardConfig) -> Self {
        info!(
            data_dir = %config.data_dir.display(),
            key = %config.storage_key,
            "opening task board"
        );
        let backend = FileKeyValueStore::new(&config.data_dir);
        Self::new(TaskStore::new(backend, config.storage_key.clone()))
    }
}

impl<S: KeyValueStore> TaskBoard<S> {
    /// Create a board, loading whatever `store` already holds
    pub fn new(store: TaskStore<S>) -> Self {
        let tasks = store.load();
        Self { tasks, store }
    }

    /// Create a board over `backend` using the slot named `key`
    pub fn with_backend(backend: S, key: impl Into<String>) -> Self {
        Self::new(TaskStore::new(backend, key))
    }

    /// Add a task built from `draft` to the end of the board.
    ///
    /// Returns `false` and changes nothing when the title is blank.
    pub fn add(&mut self, draft: TaskDraft) -> bool {
        if let Err(e) = draft.validate() {
            debug!(error = %e, "rejected new task");
            return false;
        }

        let now = Utc::now();
        let id = generate_task_id(now.timestamp_millis(), |candidate| {
            self.tasks.iter().any(|t| t.id == candidate)
        });
        let task = Task::from_draft(id, &draft, now);
        debug!(task_id = %task.id, title = %task.title, "adding task");

        self.tasks.push(task);
        self.persist();
        true
    }

    /// Remove the task with `id`; absent ids are ignored
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        let removed = self.tasks.len() != before;

        if removed {
            debug!(task_id = id, "deleted task");
            self.persist();
        } else {
            debug!(task_id = id, "delete: task not found");
        }
        removed
    }

    /// The ordered tasks shown in `group`'s view
    pub fn view_of(&self, group: TaskGroup) -> Vec<&Task> {
        view_of(&self.tasks, group)
    }

    /// Move a task into `to` at `to_index` within that view.
    ///
    /// Dropping into `Pending` or `Completed` sets the task's flag to
    /// match; `All` keeps it. Returns whether the board changed.
    pub fn move_task(&mut self, id: &str, from: TaskGroup, to: TaskGroup, to_index: usize) -> bool {
        debug!(task_id = id, from = %from, to = %to, to_index, "move requested");
        let changed = move_task(&mut self.tasks, id, to, to_index);
        if changed {
            self.persist();
        }
        changed
    }

    /// Move a task within `group`'s view without touching its flag.
    ///
    /// The task is located by `id`; `from_index` is only compared
    /// against its actual position and logged when they disagree.
    /// Returns whether the board changed.
    pub fn reorder(
        &mut self,
        id: &str,
        from_index: usize,
        to_index: usize,
        group: TaskGroup,
    ) -> bool {
        debug!(task_id = id, group = %group, from_index, to_index, "reorder requested");
        let changed = reorder_task(&mut self.tasks, id, from_index, to_index, group);
        if changed {
            self.persist();
        }
        changed
    }

    /// Apply a drag-end event from the board UI.
    ///
    /// Drops outside any view or back onto the starting slot are
    /// cancelled; drops into another view move the task, drops inside
    /// the same view reorder it.
    pub fn apply_drop(&mut self, event: DropEvent) -> DropOutcome {
        let Some(destination) = event.destination else {
            debug!(task_id = %event.task_id, "drop outside any view, cancelled");
            return DropOutcome::Cancelled;
        };
        let source = event.source;

        if destination == source {
            debug!(task_id = %event.task_id, "drop at origin, cancelled");
            return DropOutcome::Cancelled;
        }

        if destination.group != source.group {
            if self.move_task(&event.task_id, source.group, destination.group, destination.index) {
                DropOutcome::Moved
            } else {
                DropOutcome::Unchanged
            }
        } else if self.reorder(&event.task_id, source.index, destination.index, source.group) {
            DropOutcome::Reordered
        } else {
            DropOutcome::Unchanged
        }
    }

    /// Number of tasks in `group`'s view
    pub fn count(&self, group: TaskGroup) -> usize {
        count_of(&self.tasks, group)
    }

    /// Get a task by id
    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// The master task list
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Number of tasks on the board
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the board has no tasks
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Borrow the underlying persistent store
    pub fn store(&self) -> &TaskStore<S> {
        &self.store
    }

    /// Write the current state to storage, surfacing any failure
    pub fn flush(&mut self) -> Result<()> {
        self.store.save(&self.tasks)
    }

    /// Write-through after a mutation; failures keep the in-memory state
    fn persist(&mut self) {
        if let Err(e) = self.store.save(&self.tasks) {
            warn!(key = %self.store.key(), error = %e, "failed to persist tasks");
        }
    }
}
