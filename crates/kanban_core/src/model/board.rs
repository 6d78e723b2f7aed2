//! Board and column records.
//!
//! # Responsibility
//! - Define the top-level board document persisted as one snapshot entry.
//! - Keep display ordering inside the owning `Vec`s, not separate indexes.
//!
//! # Invariants
//! - `id` is stable for the record lifetime and never reused.
//! - Column membership is structural containment; there are no back-pointers
//!   from a column to its board or from a task to its column.

use crate::model::task::{Task, TaskId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a board.
pub type BoardId = Uuid;

/// Stable identifier for a column.
pub type ColumnId = Uuid;

/// Top-level container for one kanban project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Stable global id, immutable once created.
    pub id: BoardId,
    /// Display name; must not be blank after trim.
    pub name: String,
    /// Free-form description; may be empty.
    pub description: String,
    /// Ordered lanes. Append-only ordering: removal shifts later entries
    /// left, preserving relative order.
    pub columns: Vec<Column>,
}

impl Board {
    /// Creates an empty board with a generated stable id.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description: description.into(),
            columns: Vec::new(),
        }
    }

    /// Returns the column with `id`, if present.
    pub fn column(&self, id: ColumnId) -> Option<&Column> {
        self.columns.iter().find(|column| column.id == id)
    }

    /// Returns a mutable reference to the column with `id`, if present.
    pub fn column_mut(&mut self, id: ColumnId) -> Option<&mut Column> {
        self.columns.iter_mut().find(|column| column.id == id)
    }

    /// Returns whether any column of this board contains `task_id`.
    pub fn contains_task(&self, task_id: TaskId) -> bool {
        self.columns
            .iter()
            .any(|column| column.task(task_id).is_some())
    }
}

/// A named, colored lane holding an ordered sequence of tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Stable global id, immutable once created.
    pub id: ColumnId,
    /// Display name; must not be blank after trim.
    pub name: String,
    /// Display accent. Presence is the only requirement; no format check.
    pub color: String,
    /// Ordered tasks. Moves append at the end of the target column.
    pub tasks: Vec<Task>,
}

impl Column {
    /// Creates an empty column with a generated stable id.
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            color: color.into(),
            tasks: Vec::new(),
        }
    }

    /// Returns the task with `id`, if present.
    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Returns a mutable reference to the task with `id`, if present.
    pub fn task_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| task.id == id)
    }
}
