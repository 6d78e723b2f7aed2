//! Drag-move engine.
//!
//! # Responsibility
//! - Translate a finished drag gesture into at most one move operation.
//! - Swallow malformed or stray drops: a gesture that lands outside a valid
//!   column is abandoned with no state change and no error.
//!
//! # Invariants
//! - No partial moves: either the task is found in the source and fully
//!   transferred, or nothing happens.
//! - Persistence failures are never swallowed; they propagate to the caller.

use crate::model::board::{BoardId, ColumnId};
use crate::model::task::TaskId;
use crate::service::board_store::{BoardStore, BoardStoreError, BoardStoreResult};
use crate::store::SnapshotStore;
use log::debug;
use serde::{Deserialize, Serialize};

/// Data attached to a task when a drag starts.
///
/// Mirrors the document the UI serializes into the drag payload, so a
/// stray or foreign payload simply fails to decode and the drop is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DropPayload {
    pub task_id: TaskId,
    /// Column the task was picked up from.
    pub column_id: ColumnId,
}

/// What a drop gesture amounted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// The task changed columns and the change was persisted.
    Moved,
    /// The gesture was abandoned; store state is unchanged.
    Ignored,
}

/// Applies a drop gesture to the store.
///
/// `drop_target` is the column container the task was released over, or
/// `None` when it was released outside any container. Dropping onto the
/// source column is an abandoned gesture, not a move.
pub fn apply_drop<S: SnapshotStore>(
    store: &mut BoardStore<S>,
    board_id: BoardId,
    payload: DropPayload,
    drop_target: Option<ColumnId>,
) -> BoardStoreResult<DropOutcome> {
    let Some(target) = drop_target else {
        debug!("event=drop_ignored module=drag reason=no_target task={}", payload.task_id);
        return Ok(DropOutcome::Ignored);
    };

    let target_is_column = store
        .board(board_id)
        .map(|board| board.column(target).is_some())
        .unwrap_or(false);
    if !target_is_column {
        debug!("event=drop_ignored module=drag reason=invalid_target target={target}");
        return Ok(DropOutcome::Ignored);
    }

    if payload.column_id == target {
        return Ok(DropOutcome::Ignored);
    }

    match store.move_task(board_id, payload.task_id, payload.column_id, target) {
        Ok(()) => Ok(DropOutcome::Moved),
        // The payload referenced state that no longer exists; treat as a
        // stray drop rather than surfacing an error for a gesture.
        Err(
            BoardStoreError::BoardNotFound(_)
            | BoardStoreError::ColumnNotFound(_)
            | BoardStoreError::TaskNotFound(_),
        ) => {
            debug!(
                "event=drop_ignored module=drag reason=stale_payload task={}",
                payload.task_id
            );
            Ok(DropOutcome::Ignored)
        }
        Err(err) => Err(err),
    }
}
