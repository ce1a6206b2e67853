//! Board views over the master task list

use super::model::{Task, TaskGroup};

/// Project the master list onto one group's view, preserving master order
pub fn view_of(tasks: &[Task], group: TaskGroup) -> Vec<&Task> {
    tasks.iter().filter(|t| group.contains(t)).collect()
}

/// Number of tasks in one group's view
pub fn count_of(tasks: &[Task], group: TaskGroup) -> usize {
    tasks.iter().filter(|t| group.contains(t)).count()
}

/// Position of the task with `id` inside `group`'s view
pub fn position_in(tasks: &[Task], group: TaskGroup, id: &str) -> Option<usize> {
    tasks
        .iter()
        .filter(|t| group.contains(t))
        .position(|t| t.id == id)
}
