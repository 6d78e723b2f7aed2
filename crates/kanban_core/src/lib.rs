//! Kanban board engine core.
//!
//! This crate is the single source of truth for board/column/task
//! invariants: the in-memory board collection, its create/update/delete and
//! move operations, drag-drop translation, confirmation gating, selection
//! state, and snapshot persistence behind an injected adapter. Rendering
//! and event wiring live in the embedding UI layer, which calls into this
//! crate synchronously and re-reads state to re-render.

pub mod db;
pub mod logging;
pub mod model;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::board::{Board, BoardId, Column, ColumnId};
pub use model::task::{Priority, Task, TaskId};
pub use model::ValidationError;
pub use service::board_store::{
    BoardStore, BoardStoreError, BoardStoreResult, TaskUpdate,
};
pub use service::confirm::ConfirmGate;
pub use service::drag::{apply_drop, DropOutcome, DropPayload};
pub use service::selection::Selection;
pub use store::sqlite_store::SqliteSnapshotStore;
pub use store::{MemorySnapshotStore, SnapshotStore, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
