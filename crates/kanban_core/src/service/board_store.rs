//! Board store: the in-memory board collection and its operations.
//!
//! # Responsibility
//! - Own the full board collection for the session and every create, update,
//!   delete, and move operation over boards, columns, and tasks.
//! - Flush the whole collection through the snapshot adapter after every
//!   mutation, rolling the mutation back when the flush fails.
//!
//! # Invariants
//! - Memory and persisted state never diverge: each operation is
//!   all-or-nothing from the caller's perspective.
//! - Validation failures return before any mutation or save is attempted.
//! - Deletes cascade; no orphaned column or task remains observable.
//! - Moves stay within one board and append at the target column's end,
//!   preserving the relative order of untouched tasks.

use crate::model::board::{Board, BoardId, Column, ColumnId};
use crate::model::task::{Priority, Task, TaskId};
use crate::model::ValidationError;
use crate::service::selection::Selection;
use crate::store::{SnapshotStore, StoreError};
use chrono::NaiveDate;
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type BoardStoreResult<T> = Result<T, BoardStoreError>;

/// Errors from board store operations.
#[derive(Debug)]
pub enum BoardStoreError {
    /// A required field failed validation; nothing was mutated or saved.
    Validation(ValidationError),
    /// Referenced board does not exist in the current collection.
    BoardNotFound(BoardId),
    /// Referenced column does not exist in the target board.
    ColumnNotFound(ColumnId),
    /// Referenced task does not exist in the target column.
    TaskNotFound(TaskId),
    /// Snapshot flush failed; the in-memory mutation was rolled back.
    Persistence(StoreError),
}

impl Display for BoardStoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::BoardNotFound(id) => write!(f, "board not found: {id}"),
            Self::ColumnNotFound(id) => write!(f, "column not found: {id}"),
            Self::TaskNotFound(id) => write!(f, "task not found: {id}"),
            Self::Persistence(err) => write!(f, "{err}"),
        }
    }
}

impl Error for BoardStoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Persistence(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationError> for BoardStoreError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StoreError> for BoardStoreError {
    fn from(value: StoreError) -> Self {
        Self::Persistence(value)
    }
}

/// Replacement fields for a task update.
///
/// `id` and `created` are not part of the update surface; they are
/// immutable by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskUpdate {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub due_date: Option<NaiveDate>,
}

/// In-memory board collection over an injected snapshot adapter.
pub struct BoardStore<S: SnapshotStore> {
    store: S,
    boards: Vec<Board>,
    selection: Selection,
}

impl<S: SnapshotStore> BoardStore<S> {
    /// Loads the full collection from the adapter.
    ///
    /// An empty store is seeded with one default board so first launch has
    /// something to render; the seed is persisted immediately.
    pub fn open(store: S) -> BoardStoreResult<Self> {
        let mut boards = store.load()?;
        if boards.is_empty() {
            let board = default_board();
            boards.push(board);
            store.save(&boards)?;
            info!("event=default_board_seeded module=service status=ok");
        }
        Ok(Self {
            store,
            boards,
            selection: Selection::default(),
        })
    }

    /// All boards, in display order.
    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    /// Returns the board with `id`, if present.
    pub fn board(&self, id: BoardId) -> Option<&Board> {
        self.boards.iter().find(|board| board.id == id)
    }

    /// Current selection and workflow state.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Mutable selection access for opening/closing workflows.
    pub fn selection_mut(&mut self) -> &mut Selection {
        &mut self.selection
    }

    /// Returns the currently selected board, if any.
    pub fn current_board(&self) -> Option<&Board> {
        self.selection.board().and_then(|id| self.board(id))
    }

    /// Selects `id` as the current board.
    pub fn select_board(&mut self, id: BoardId) -> BoardStoreResult<()> {
        if self.board(id).is_none() {
            return Err(BoardStoreError::BoardNotFound(id));
        }
        self.selection.select_board(id);
        Ok(())
    }

    /// Creates a board with an empty column list and appends it.
    pub fn create_board(
        &mut self,
        name: &str,
        description: &str,
    ) -> BoardStoreResult<Board> {
        let name = require_non_blank(name, ValidationError::EmptyBoardName)?;
        let board = Board::new(name, description.trim());
        let created = board.clone();

        self.boards.push(board);
        if let Err(err) = self.persist() {
            self.boards.pop();
            return Err(err);
        }

        info!(
            "event=board_created module=service status=ok board={}",
            created.id
        );
        Ok(created)
    }

    /// Renames/re-describes a board in place.
    pub fn update_board(
        &mut self,
        board_id: BoardId,
        name: &str,
        description: &str,
    ) -> BoardStoreResult<()> {
        let name = require_non_blank(name, ValidationError::EmptyBoardName)?;
        let index = self.board_index(board_id)?;

        let previous = (
            std::mem::replace(&mut self.boards[index].name, name),
            std::mem::replace(&mut self.boards[index].description, description.trim().to_string()),
        );
        if let Err(err) = self.persist() {
            (self.boards[index].name, self.boards[index].description) = previous;
            return Err(err);
        }

        info!("event=board_updated module=service status=ok board={board_id}");
        Ok(())
    }

    /// Deletes a board and, transitively, all of its columns and tasks.
    ///
    /// Clears the selection when the deleted board was current.
    pub fn delete_board(&mut self, board_id: BoardId) -> BoardStoreResult<()> {
        let index = self.board_index(board_id)?;

        let removed = self.boards.remove(index);
        if let Err(err) = self.persist() {
            self.boards.insert(index, removed);
            return Err(err);
        }

        if self.selection.board() == Some(board_id) {
            self.selection.clear();
        }
        info!("event=board_deleted module=service status=ok board={board_id}");
        Ok(())
    }

    /// Appends an empty column to a board.
    pub fn create_column(
        &mut self,
        board_id: BoardId,
        name: &str,
        color: &str,
    ) -> BoardStoreResult<Column> {
        let name = require_non_blank(name, ValidationError::EmptyColumnName)?;
        let index = self.board_index(board_id)?;

        let column = Column::new(name, color);
        let created = column.clone();
        self.boards[index].columns.push(column);
        if let Err(err) = self.persist() {
            self.boards[index].columns.pop();
            return Err(err);
        }

        info!(
            "event=column_created module=service status=ok board={board_id} column={}",
            created.id
        );
        Ok(created)
    }

    /// Renames/recolors a column in place.
    pub fn update_column(
        &mut self,
        board_id: BoardId,
        column_id: ColumnId,
        name: &str,
        color: &str,
    ) -> BoardStoreResult<()> {
        let name = require_non_blank(name, ValidationError::EmptyColumnName)?;
        let index = self.board_index(board_id)?;
        let column = self.boards[index]
            .column_mut(column_id)
            .ok_or(BoardStoreError::ColumnNotFound(column_id))?;

        let previous = (
            std::mem::replace(&mut column.name, name),
            std::mem::replace(&mut column.color, color.to_string()),
        );
        if let Err(err) = self.persist() {
            if let Some(column) = self.boards[index].column_mut(column_id) {
                (column.name, column.color) = previous;
            }
            return Err(err);
        }

        info!(
            "event=column_updated module=service status=ok board={board_id} column={column_id}"
        );
        Ok(())
    }

    /// Deletes a column and, transitively, all tasks it contains.
    pub fn delete_column(
        &mut self,
        board_id: BoardId,
        column_id: ColumnId,
    ) -> BoardStoreResult<()> {
        let index = self.board_index(board_id)?;
        let column_index = self.boards[index]
            .columns
            .iter()
            .position(|column| column.id == column_id)
            .ok_or(BoardStoreError::ColumnNotFound(column_id))?;

        let removed = self.boards[index].columns.remove(column_index);
        if let Err(err) = self.persist() {
            self.boards[index].columns.insert(column_index, removed);
            return Err(err);
        }

        info!(
            "event=column_deleted module=service status=ok board={board_id} column={column_id}"
        );
        Ok(())
    }

    /// Appends a task to a column, dated today.
    pub fn create_task(
        &mut self,
        board_id: BoardId,
        column_id: ColumnId,
        title: &str,
        description: &str,
        priority: Priority,
        due_date: Option<NaiveDate>,
    ) -> BoardStoreResult<Task> {
        let title = require_non_blank(title, ValidationError::EmptyTaskTitle)?;
        let index = self.board_index(board_id)?;
        let column = self.boards[index]
            .column_mut(column_id)
            .ok_or(BoardStoreError::ColumnNotFound(column_id))?;

        let task = Task::new(title, description.trim(), priority, due_date);
        let created = task.clone();
        column.tasks.push(task);
        if let Err(err) = self.persist() {
            if let Some(column) = self.boards[index].column_mut(column_id) {
                column.tasks.pop();
            }
            return Err(err);
        }

        info!(
            "event=task_created module=service status=ok board={board_id} column={column_id} task={}",
            created.id
        );
        Ok(created)
    }

    /// Replaces a task's editable fields. `id` and `created` are preserved.
    pub fn update_task(
        &mut self,
        board_id: BoardId,
        column_id: ColumnId,
        task_id: TaskId,
        fields: TaskUpdate,
    ) -> BoardStoreResult<()> {
        let title = require_non_blank(&fields.title, ValidationError::EmptyTaskTitle)?;
        let index = self.board_index(board_id)?;
        let column = self.boards[index]
            .column_mut(column_id)
            .ok_or(BoardStoreError::ColumnNotFound(column_id))?;
        let task = column
            .task_mut(task_id)
            .ok_or(BoardStoreError::TaskNotFound(task_id))?;

        let previous = task.clone();
        task.title = title;
        task.description = fields.description.trim().to_string();
        task.priority = fields.priority;
        task.due_date = fields.due_date;
        if let Err(err) = self.persist() {
            if let Some(task) = self.boards[index]
                .column_mut(column_id)
                .and_then(|column| column.task_mut(task_id))
            {
                *task = previous;
            }
            return Err(err);
        }

        info!(
            "event=task_updated module=service status=ok board={board_id} column={column_id} task={task_id}"
        );
        Ok(())
    }

    /// Deletes a task from its column.
    pub fn delete_task(
        &mut self,
        board_id: BoardId,
        column_id: ColumnId,
        task_id: TaskId,
    ) -> BoardStoreResult<()> {
        let index = self.board_index(board_id)?;
        let column = self.boards[index]
            .column_mut(column_id)
            .ok_or(BoardStoreError::ColumnNotFound(column_id))?;
        let task_index = column
            .tasks
            .iter()
            .position(|task| task.id == task_id)
            .ok_or(BoardStoreError::TaskNotFound(task_id))?;

        let removed = column.tasks.remove(task_index);
        if let Err(err) = self.persist() {
            if let Some(column) = self.boards[index].column_mut(column_id) {
                column.tasks.insert(task_index, removed);
            }
            return Err(err);
        }

        info!(
            "event=task_deleted module=service status=ok board={board_id} column={column_id} task={task_id}"
        );
        Ok(())
    }

    /// Transfers a task between two columns of the same board, appending it
    /// at the end of the target's task list.
    ///
    /// Source equal to target is a successful no-op: no mutation, no save.
    pub fn move_task(
        &mut self,
        board_id: BoardId,
        task_id: TaskId,
        source_column_id: ColumnId,
        target_column_id: ColumnId,
    ) -> BoardStoreResult<()> {
        let index = self.board_index(board_id)?;
        let board = &self.boards[index];

        let source_index = board
            .columns
            .iter()
            .position(|column| column.id == source_column_id)
            .ok_or(BoardStoreError::ColumnNotFound(source_column_id))?;
        let target_index = board
            .columns
            .iter()
            .position(|column| column.id == target_column_id)
            .ok_or(BoardStoreError::ColumnNotFound(target_column_id))?;
        let task_index = board.columns[source_index]
            .tasks
            .iter()
            .position(|task| task.id == task_id)
            .ok_or(BoardStoreError::TaskNotFound(task_id))?;

        if source_index == target_index {
            return Ok(());
        }

        let board = &mut self.boards[index];
        let task = board.columns[source_index].tasks.remove(task_index);
        board.columns[target_index].tasks.push(task);
        if let Err(err) = self.persist() {
            let board = &mut self.boards[index];
            let task = match board.columns[target_index].tasks.pop() {
                Some(task) => task,
                // Unreachable: the push above just placed it there.
                None => return Err(err),
            };
            board.columns[source_index].tasks.insert(task_index, task);
            return Err(err);
        }

        info!(
            "event=task_moved module=service status=ok board={board_id} task={task_id} from={source_column_id} to={target_column_id}"
        );
        Ok(())
    }

    fn board_index(&self, board_id: BoardId) -> BoardStoreResult<usize> {
        self.boards
            .iter()
            .position(|board| board.id == board_id)
            .ok_or(BoardStoreError::BoardNotFound(board_id))
    }

    fn persist(&self) -> BoardStoreResult<()> {
        self.store.save(&self.boards).map_err(|err| {
            error!("event=snapshot_save module=service status=error error={err}");
            BoardStoreError::Persistence(err)
        })
    }
}

fn require_non_blank(value: &str, error: ValidationError) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(error);
    }
    Ok(trimmed.to_string())
}

/// First-launch board so the UI has something to render.
fn default_board() -> Board {
    let mut board = Board::new("My First Board", "A default board to get you started");
    board.columns.push(Column::new("To Do", "#3498db"));
    board.columns.push(Column::new("In Progress", "#f39c12"));
    board.columns.push(Column::new("Done", "#2ecc71"));
    board
}

#[cfg(test)]
mod tests {
    use super::require_non_blank;
    use crate::model::ValidationError;

    #[test]
    fn blank_values_are_rejected_after_trim() {
        let err = require_non_blank("  \t ", ValidationError::EmptyBoardName).unwrap_err();
        assert_eq!(err, ValidationError::EmptyBoardName);
        assert_eq!(
            require_non_blank("  Sprint 1 ", ValidationError::EmptyBoardName).unwrap(),
            "Sprint 1"
        );
    }
}
