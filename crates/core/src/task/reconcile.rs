//! Master list reconciliation for drag-and-drop
//!
//! The board keeps one ordered list of tasks. The pending and completed
//! views are projections of it, so a drop into a view has to be
//! translated back into a new master order. After a move or reorder
//! into the pending or completed view the master list is regrouped with
//! every pending task ahead of every completed task; a drop into the
//! `all` view only splices the task into place.

use tracing::{debug, warn};

use super::model::{Task, TaskGroup};
use super::projection::position_in;

/// Move the task with `id` into `to` at `to_index` within that group's view.
///
/// The task's `completed` flag follows the destination group; `All`
/// keeps it as is. An index past the end of the view appends.
/// Returns `false` and leaves `tasks` untouched when `id` is absent.
pub fn move_task(tasks: &mut Vec<Task>, id: &str, to: TaskGroup, to_index: usize) -> bool {
    let Some(pos) = tasks.iter().position(|t| t.id == id) else {
        debug!(task_id = id, "move: task not found");
        return false;
    };

    let mut moved = tasks.remove(pos);
    if let Some(completed) = to.completed_flag() {
        moved.completed = completed;
    }

    let (mut destination, others): (Vec<Task>, Vec<Task>) =
        std::mem::take(tasks).into_iter().partition(|t| to.contains(t));

    let index = to_index.min(destination.len());
    debug!(
        task_id = id,
        to = %to,
        to_index,
        index,
        destination_len = destination.len(),
        completed = moved.completed,
        "move: splicing task"
    );
    destination.insert(index, moved);

    *tasks = recombine(to, destination, others);
    true
}

/// Move the task with `id` from `from_index` to `to_index` inside `group`'s view.
///
/// The `completed` flag is left alone. The id wins over `from_index`
/// when the two disagree. Returns `false` and leaves `tasks` untouched
/// when the task is not in the group's view.
pub fn reorder_task(
    tasks: &mut Vec<Task>,
    id: &str,
    from_index: usize,
    to_index: usize,
    group: TaskGroup,
) -> bool {
    let Some(actual) = position_in(tasks, group, id) else {
        debug!(task_id = id, group = %group, "reorder: task not in view");
        return false;
    };
    if actual != from_index {
        warn!(
            task_id = id,
            group = %group,
            from_index,
            actual,
            "reorder: stale source index, using task position"
        );
    }

    let (mut view, others): (Vec<Task>, Vec<Task>) =
        std::mem::take(tasks).into_iter().partition(|t| group.contains(t));

    let moved = view.remove(actual);
    let index = to_index.min(view.len());
    debug!(task_id = id, group = %group, from = actual, to = index, "reorder: splicing task");
    view.insert(index, moved);

    *tasks = recombine(group, view, others);
    true
}

/// Rebuild the master list from one group's tasks and everything else.
fn recombine(group: TaskGroup, group_tasks: Vec<Task>, mut others: Vec<Task>) -> Vec<Task> {
    match group {
        TaskGroup::All => group_tasks,
        TaskGroup::Pending => {
            let mut result = group_tasks;
            result.append(&mut others);
            result
        }
        TaskGroup::Completed => {
            others.extend(group_tasks);
            others
        }
    }
}
