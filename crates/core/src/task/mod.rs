//! Task module
//!
//! This module contains the task model, the board views, and the
//! repository that owns and persists the master task list.

mod board;
mod drag;
mod model;
mod projection;
mod reconcile;
mod store;

pub use board::TaskBoard;
pub use drag::{DropEvent, DropLocation, DropOutcome};
pub use model::*;
pub use projection::{count_of, position_in, view_of};
pub use reconcile::{move_task, reorder_task};
pub use store::TaskStore;
