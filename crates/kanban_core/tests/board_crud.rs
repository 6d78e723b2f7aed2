use kanban_core::{
    Board, BoardStore, BoardStoreError, MemorySnapshotStore, Priority, SnapshotStore, StoreResult,
    TaskUpdate, ValidationError,
};
use std::cell::Cell;
use uuid::Uuid;

/// Adapter wrapper that counts save calls, for asserting that rejected
/// operations never reach persistence.
struct CountingStore {
    inner: MemorySnapshotStore,
    saves: Cell<u32>,
}

impl CountingStore {
    fn new() -> Self {
        Self {
            inner: MemorySnapshotStore::new(),
            saves: Cell::new(0),
        }
    }
}

impl SnapshotStore for CountingStore {
    fn load(&self) -> StoreResult<Vec<Board>> {
        self.inner.load()
    }

    fn save(&self, boards: &[Board]) -> StoreResult<()> {
        self.saves.set(self.saves.get() + 1);
        self.inner.save(boards)
    }
}

#[test]
fn open_seeds_default_board_when_store_is_empty() {
    let adapter = MemorySnapshotStore::new();
    let store = BoardStore::open(&adapter).unwrap();

    assert_eq!(store.boards().len(), 1);
    let board = &store.boards()[0];
    assert_eq!(board.name, "My First Board");
    let lanes: Vec<(&str, &str)> = board
        .columns
        .iter()
        .map(|column| (column.name.as_str(), column.color.as_str()))
        .collect();
    assert_eq!(
        lanes,
        vec![
            ("To Do", "#3498db"),
            ("In Progress", "#f39c12"),
            ("Done", "#2ecc71"),
        ]
    );

    // The seed is persisted, not just held in memory.
    assert_eq!(adapter.load().unwrap().len(), 1);
}

#[test]
fn create_board_appends_and_survives_reopen() {
    let adapter = MemorySnapshotStore::new();
    {
        let mut store = BoardStore::open(&adapter).unwrap();
        let board = store.create_board("  Sprint 1 ", " planning ").unwrap();
        assert_eq!(board.name, "Sprint 1");
        assert_eq!(board.description, "planning");
        assert!(board.columns.is_empty());
        assert_eq!(store.boards().len(), 2);
    }

    let store = BoardStore::open(&adapter).unwrap();
    assert_eq!(store.boards().len(), 2);
    assert_eq!(store.boards()[1].name, "Sprint 1");
}

#[test]
fn blank_names_fail_validation_without_touching_persistence() {
    let adapter = CountingStore::new();
    let mut store = BoardStore::open(&adapter).unwrap();
    let board_id = store.boards()[0].id;
    let column_id = store.boards()[0].columns[0].id;
    let saves_after_open = adapter.saves.get();

    let err = store.create_board("   ", "").unwrap_err();
    assert!(matches!(
        err,
        BoardStoreError::Validation(ValidationError::EmptyBoardName)
    ));

    let err = store.create_column(board_id, " \t", "#fff").unwrap_err();
    assert!(matches!(
        err,
        BoardStoreError::Validation(ValidationError::EmptyColumnName)
    ));

    let err = store
        .create_task(board_id, column_id, "  ", "", Priority::Low, None)
        .unwrap_err();
    assert!(matches!(
        err,
        BoardStoreError::Validation(ValidationError::EmptyTaskTitle)
    ));

    assert_eq!(store.boards().len(), 1);
    assert!(store.boards()[0].columns[0].tasks.is_empty());
    assert_eq!(adapter.saves.get(), saves_after_open);
}

#[test]
fn update_board_renames_in_place() {
    let adapter = MemorySnapshotStore::new();
    let mut store = BoardStore::open(&adapter).unwrap();
    let board_id = store.boards()[0].id;

    store.update_board(board_id, "Renamed", "new purpose").unwrap();
    let board = store.board(board_id).unwrap();
    assert_eq!(board.id, board_id);
    assert_eq!(board.name, "Renamed");
    assert_eq!(board.description, "new purpose");

    let err = store.update_board(Uuid::new_v4(), "x", "").unwrap_err();
    assert!(matches!(err, BoardStoreError::BoardNotFound(_)));

    let err = store.update_board(board_id, "  ", "").unwrap_err();
    assert!(matches!(
        err,
        BoardStoreError::Validation(ValidationError::EmptyBoardName)
    ));
}

#[test]
fn delete_board_cascades_and_invalidates_selection() {
    let adapter = MemorySnapshotStore::new();
    let mut store = BoardStore::open(&adapter).unwrap();
    let board = store.create_board("Doomed", "").unwrap();
    let column = store.create_column(board.id, "Lane", "#123456").unwrap();
    store
        .create_task(board.id, column.id, "orphan-to-be", "", Priority::Medium, None)
        .unwrap();

    store.select_board(board.id).unwrap();
    assert_eq!(store.selection().board(), Some(board.id));

    store.delete_board(board.id).unwrap();
    assert!(store.board(board.id).is_none());
    assert!(store.selection().is_unselected());

    let err = store.select_board(board.id).unwrap_err();
    assert!(matches!(err, BoardStoreError::BoardNotFound(id) if id == board.id));

    // Other boards keep their selection on unrelated deletes.
    let keep = store.boards()[0].id;
    let other = store.create_board("Other", "").unwrap();
    store.select_board(keep).unwrap();
    store.delete_board(other.id).unwrap();
    assert_eq!(store.selection().board(), Some(keep));
}

#[test]
fn delete_column_removes_all_contained_tasks() {
    let adapter = MemorySnapshotStore::new();
    let mut store = BoardStore::open(&adapter).unwrap();
    let board_id = store.boards()[0].id;
    let column = store.create_column(board_id, "To Do", "#3498db").unwrap();

    let mut task_ids = Vec::new();
    for title in ["one", "two", "three"] {
        let task = store
            .create_task(board_id, column.id, title, "", Priority::Low, None)
            .unwrap();
        task_ids.push(task.id);
    }

    store.delete_column(board_id, column.id).unwrap();

    let board = store.board(board_id).unwrap();
    assert!(board.column(column.id).is_none());
    for task_id in task_ids {
        assert!(!board.contains_task(task_id));
    }
}

#[test]
fn update_column_changes_name_and_color() {
    let adapter = MemorySnapshotStore::new();
    let mut store = BoardStore::open(&adapter).unwrap();
    let board_id = store.boards()[0].id;
    let column_id = store.boards()[0].columns[0].id;

    store
        .update_column(board_id, column_id, "Backlog", "#000000")
        .unwrap();
    let column = store.board(board_id).unwrap().column(column_id).unwrap();
    assert_eq!(column.name, "Backlog");
    assert_eq!(column.color, "#000000");

    let err = store
        .update_column(board_id, Uuid::new_v4(), "x", "#fff")
        .unwrap_err();
    assert!(matches!(err, BoardStoreError::ColumnNotFound(_)));
}

#[test]
fn update_task_preserves_id_and_created() {
    let adapter = MemorySnapshotStore::new();
    let mut store = BoardStore::open(&adapter).unwrap();
    let board_id = store.boards()[0].id;
    let column_id = store.boards()[0].columns[0].id;

    let task = store
        .create_task(board_id, column_id, "Write spec", "", Priority::High, None)
        .unwrap();

    store
        .update_task(
            board_id,
            column_id,
            task.id,
            TaskUpdate {
                title: "Write the spec".to_string(),
                description: "second draft".to_string(),
                priority: Priority::Medium,
                due_date: chrono::NaiveDate::from_ymd_opt(2026, 9, 30),
            },
        )
        .unwrap();

    let updated = store
        .board(board_id)
        .unwrap()
        .column(column_id)
        .unwrap()
        .task(task.id)
        .unwrap();
    assert_eq!(updated.id, task.id);
    assert_eq!(updated.created, task.created);
    assert_eq!(updated.title, "Write the spec");
    assert_eq!(updated.priority, Priority::Medium);
    assert_eq!(
        updated.due_date,
        chrono::NaiveDate::from_ymd_opt(2026, 9, 30)
    );
}

#[test]
fn delete_task_removes_only_that_task() {
    let adapter = MemorySnapshotStore::new();
    let mut store = BoardStore::open(&adapter).unwrap();
    let board_id = store.boards()[0].id;
    let column_id = store.boards()[0].columns[0].id;

    let keep = store
        .create_task(board_id, column_id, "keep", "", Priority::Low, None)
        .unwrap();
    let drop = store
        .create_task(board_id, column_id, "drop", "", Priority::Low, None)
        .unwrap();

    store.delete_task(board_id, column_id, drop.id).unwrap();

    let column = store.board(board_id).unwrap().column(column_id).unwrap();
    assert_eq!(column.tasks.len(), 1);
    assert_eq!(column.tasks[0].id, keep.id);

    let err = store
        .delete_task(board_id, column_id, drop.id)
        .unwrap_err();
    assert!(matches!(err, BoardStoreError::TaskNotFound(id) if id == drop.id));
}

#[test]
fn workflow_selection_is_transient() {
    let adapter = MemorySnapshotStore::new();
    let mut store = BoardStore::open(&adapter).unwrap();
    let board_id = store.boards()[0].id;
    let column_id = store.boards()[0].columns[0].id;

    store.select_board(board_id).unwrap();
    store.selection_mut().begin_task_workflow(column_id, None);
    assert_eq!(store.selection().column(), Some(column_id));

    store.selection_mut().end_workflow();
    assert_eq!(store.selection().board(), Some(board_id));
    assert_eq!(store.selection().column(), None);
    assert_eq!(store.selection().task(), None);

    // Selection drives which board reads apply to, nothing else.
    assert_eq!(store.current_board().map(|b| b.id), Some(board_id));
}
