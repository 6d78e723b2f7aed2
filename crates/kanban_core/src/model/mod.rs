//! Domain model for the kanban engine.
//!
//! # Responsibility
//! - Define the board/column/task containment shape used by core logic.
//! - Provide field-level validation errors for write boundaries.
//!
//! # Invariants
//! - Every record is identified by a stable id that is never reused.
//! - A column exists only inside a board, a task only inside a column.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod board;
pub mod task;

/// Field validation failures raised at create/update boundaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Board name is blank after trim.
    EmptyBoardName,
    /// Column name is blank after trim.
    EmptyColumnName,
    /// Task title is blank after trim.
    EmptyTaskTitle,
    /// Priority token is not one of `low`, `medium`, `high`.
    InvalidPriority(String),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyBoardName => write!(f, "board name must not be blank"),
            Self::EmptyColumnName => write!(f, "column name must not be blank"),
            Self::EmptyTaskTitle => write!(f, "task title must not be blank"),
            Self::InvalidPriority(value) => write!(
                f,
                "invalid priority `{value}`; expected low|medium|high"
            ),
        }
    }
}

impl Error for ValidationError {}
