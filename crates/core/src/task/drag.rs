//! Drag-end events coming from the board UI

use serde::{Deserialize, Serialize};

use super::model::TaskGroup;

/// A position inside one board view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropLocation {
    pub group: TaskGroup,
    pub index: usize,
}

impl DropLocation {
    pub fn new(group: TaskGroup, index: usize) -> Self {
        Self { group, index }
    }
}

/// The result of releasing a dragged task card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DropEvent {
    pub task_id: String,
    pub source: DropLocation,
    /// `None` when the card was released outside every view
    pub destination: Option<DropLocation>,
}

impl DropEvent {
    /// A drop onto `destination`
    pub fn new(
        task_id: impl Into<String>,
        source: DropLocation,
        destination: DropLocation,
    ) -> Self {
        Self {
            task_id: task_id.into(),
            source,
            destination: Some(destination),
        }
    }

    /// A drop outside every view
    pub fn outside(task_id: impl Into<String>, source: DropLocation) -> Self {
        Self {
            task_id: task_id.into(),
            source,
            destination: None,
        }
    }
}

/// What the board did with a drop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// Released outside a view or back where it started
    Cancelled,
    /// Moved into another view
    Moved,
    /// Reordered within its view
    Reordered,
    /// Nothing changed: a move named an id missing from the board, or a
    /// reorder named an id missing from its view
    Unchanged,
}
