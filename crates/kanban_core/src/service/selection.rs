//! Selection and transient workflow state.
//!
//! # Responsibility
//! - Track which board is current, and which column/task an open modal-style
//!   workflow is editing.
//!
//! # Invariants
//! - Column/task selection exists only while a board is selected.
//! - Workflow ids are transient: closing a workflow (success or cancel)
//!   clears them; they never affect persisted data.

use crate::model::board::{BoardId, ColumnId};
use crate::model::task::TaskId;

/// Current board plus transient workflow targets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    current_board_id: Option<BoardId>,
    current_column_id: Option<ColumnId>,
    current_task_id: Option<TaskId>,
}

impl Selection {
    /// Returns the selected board, if any.
    pub fn board(&self) -> Option<BoardId> {
        self.current_board_id
    }

    /// Returns the column an open workflow targets, if any.
    pub fn column(&self) -> Option<ColumnId> {
        self.current_column_id
    }

    /// Returns the task an open workflow targets, if any.
    pub fn task(&self) -> Option<TaskId> {
        self.current_task_id
    }

    pub fn is_unselected(&self) -> bool {
        self.current_board_id.is_none()
    }

    /// Switches the current board, dropping any open workflow state.
    ///
    /// Board existence is checked by the caller; see
    /// [`crate::service::board_store::BoardStore::select_board`].
    pub(crate) fn select_board(&mut self, id: BoardId) {
        *self = Self {
            current_board_id: Some(id),
            ..Self::default()
        };
    }

    /// Opens a column create/edit workflow. `None` means a create workflow.
    ///
    /// No-op while no board is selected.
    pub fn begin_column_workflow(&mut self, column: Option<ColumnId>) {
        if self.current_board_id.is_none() {
            return;
        }
        self.current_column_id = column;
        self.current_task_id = None;
    }

    /// Opens a task create/edit/view workflow within `column`.
    /// `task: None` means a create workflow.
    ///
    /// No-op while no board is selected.
    pub fn begin_task_workflow(&mut self, column: ColumnId, task: Option<TaskId>) {
        if self.current_board_id.is_none() {
            return;
        }
        self.current_column_id = Some(column);
        self.current_task_id = task;
    }

    /// Closes the open workflow, keeping the board selection.
    pub fn end_workflow(&mut self) {
        self.current_column_id = None;
        self.current_task_id = None;
    }

    /// Returns to the unselected state.
    pub(crate) fn clear(&mut self) {
        *self = Self::default();
    }
}
