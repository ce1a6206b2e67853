//! End-to-end board behaviour: drag-and-drop scenarios and persistence

use taskboard_core::storage::{FileKeyValueStore, KeyValueStore, MemoryKeyValueStore};
use taskboard_core::task::{Task, TaskBoard, TaskDraft, TaskGroup, TaskStore};
use taskboard_core::BoardConfig;
use tempfile::TempDir;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "taskboard_core=debug".into()),
        )
        .with_test_writer()
        .try_init();
}

/// Build a board whose slot already holds `tasks`
fn seeded_board(tasks: &[Task]) -> TaskBoard<MemoryKeyValueStore> {
    let blob = serde_json::to_string(tasks).unwrap();
    TaskBoard::with_backend(MemoryKeyValueStore::new().with_entry("tasks", blob), "tasks")
}

fn ids(view: Vec<&Task>) -> Vec<&str> {
    view.into_iter().map(|t| t.id.as_str()).collect()
}

#[test]
fn test_reorder_within_pending() {
    init_tracing();
    let mut board = seeded_board(&[Task::new("t1", "one"), Task::new("t2", "two")]);

    assert!(board.reorder("t1", 0, 1, TaskGroup::Pending));

    assert_eq!(ids(board.view_of(TaskGroup::Pending)), ["t2", "t1"]);
    assert_eq!(ids(board.view_of(TaskGroup::All)), ["t2", "t1"]);
}

#[test]
fn test_move_pending_to_completed() {
    init_tracing();
    let mut board = seeded_board(&[Task::new("t1", "one")]);

    assert!(board.move_task("t1", TaskGroup::Pending, TaskGroup::Completed, 0));

    assert!(board.get("t1").unwrap().completed);
    assert!(board.view_of(TaskGroup::Pending).is_empty());
    assert_eq!(ids(board.view_of(TaskGroup::Completed)), ["t1"]);
}

#[test]
fn test_move_into_all_keeps_completed_flag() {
    init_tracing();
    let mut board = seeded_board(&[
        Task::new("t1", "one"),
        Task::new("t2", "two").with_completed(true),
    ]);

    assert!(board.move_task("t1", TaskGroup::Pending, TaskGroup::All, 1));

    assert!(!board.get("t1").unwrap().completed);
    assert_eq!(ids(board.view_of(TaskGroup::All)), ["t2", "t1"]);
}

#[test]
fn test_unknown_ids_leave_board_untouched() {
    init_tracing();
    let seed = [
        Task::new("t1", "one"),
        Task::new("t2", "two").with_completed(true),
    ];
    let mut board = seeded_board(&seed);

    board.delete("ghost");
    board.move_task("ghost", TaskGroup::Pending, TaskGroup::Completed, 0);
    board.reorder("ghost", 0, 1, TaskGroup::Completed);

    assert_eq!(board.tasks(), &seed[..]);
}

#[test]
fn test_view_of_is_repeatable() {
    let board = seeded_board(&[
        Task::new("a", "a").with_completed(true),
        Task::new("b", "b"),
    ]);
    assert_eq!(board.view_of(TaskGroup::All), board.view_of(TaskGroup::All));
}

#[test]
fn test_malformed_slot_starts_empty_and_recovers() {
    init_tracing();
    let backend = MemoryKeyValueStore::new().with_entry("tasks", "{broken");
    let mut board = TaskBoard::with_backend(backend, "tasks");
    assert!(board.is_empty());

    assert!(board.add(TaskDraft::new("fresh start")));
    let raw = board.store().backend().get("tasks").unwrap().unwrap();
    assert!(raw.starts_with('['));
}

#[test]
fn test_board_state_survives_restart() {
    init_tracing();
    let temp_dir = TempDir::new().unwrap();
    let config = BoardConfig::new(temp_dir.path());

    let expected = {
        let mut board = TaskBoard::open(&config);
        board.add(TaskDraft::new("write docs").with_assignee("Kim"));
        board.add(TaskDraft::new("ship release"));
        board.add(TaskDraft::new("celebrate"));

        let docs = board.view_of(TaskGroup::Pending)[0].id.clone();
        board.move_task(&docs, TaskGroup::Pending, TaskGroup::Completed, 0);
        let celebrate = board.tasks()[1].id.clone();
        board.reorder(&celebrate, 1, 0, TaskGroup::Pending);
        board.tasks().to_vec()
    };

    let reopened = TaskBoard::open(&config);
    assert_eq!(reopened.tasks(), expected.as_slice());

    let titles: Vec<&str> = reopened
        .view_of(TaskGroup::Pending)
        .into_iter()
        .map(|t| t.title.as_str())
        .collect();
    assert_eq!(titles, ["celebrate", "ship release"]);
    assert_eq!(reopened.count(TaskGroup::Completed), 1);
}

#[test]
fn test_store_round_trip_through_files() {
    let temp_dir = TempDir::new().unwrap();
    let tasks = vec![
        Task::new("1", "one").with_completed(true),
        Task::new("2", "two"),
    ];

    let mut store = TaskStore::new(FileKeyValueStore::new(temp_dir.path()), "tasks");
    store.save(&tasks).unwrap();
    let loaded = store.load();
    store.save(&loaded).unwrap();

    assert_eq!(store.load(), tasks);
}
