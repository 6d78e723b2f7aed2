//! Confirmation gate for destructive operations.
//!
//! # Responsibility
//! - Hold one pending destructive action until the user confirms or cancels.
//!
//! # Invariants
//! - At most one confirmation is pending at a time; a new request replaces
//!   the previous one and the replaced action is discarded, never invoked.
//! - A confirmed action runs exactly once; the gate is cleared either way.

use std::fmt::{Debug, Formatter};

type ConfirmAction<Ctx, T> = Box<dyn FnOnce(&mut Ctx) -> T>;

struct Pending<Ctx, T> {
    message: String,
    action: ConfirmAction<Ctx, T>,
}

/// Ask-then-act gate. `Ctx` is whatever the deferred action mutates
/// (typically the board store); `T` is the action's result.
pub struct ConfirmGate<Ctx, T = ()> {
    pending: Option<Pending<Ctx, T>>,
}

impl<Ctx, T> ConfirmGate<Ctx, T> {
    pub fn new() -> Self {
        Self { pending: None }
    }

    /// Stores `action` behind `message`, replacing any pending request.
    pub fn request(
        &mut self,
        message: impl Into<String>,
        action: impl FnOnce(&mut Ctx) -> T + 'static,
    ) {
        self.pending = Some(Pending {
            message: message.into(),
            action: Box::new(action),
        });
    }

    /// Runs the pending action exactly once and clears the gate.
    ///
    /// Returns `None` when nothing was pending.
    pub fn confirm(&mut self, ctx: &mut Ctx) -> Option<T> {
        self.pending.take().map(|pending| (pending.action)(ctx))
    }

    /// Clears the gate without running the pending action.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Message to display while a confirmation is pending.
    pub fn pending_message(&self) -> Option<&str> {
        self.pending.as_ref().map(|pending| pending.message.as_str())
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl<Ctx, T> Default for ConfirmGate<Ctx, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Ctx, T> Debug for ConfirmGate<Ctx, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfirmGate")
            .field("pending_message", &self.pending_message())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::ConfirmGate;

    #[test]
    fn confirm_runs_action_once_and_clears() {
        let mut gate: ConfirmGate<u32> = ConfirmGate::new();
        gate.request("Delete?", |count| *count += 1);

        let mut count = 0;
        assert_eq!(gate.confirm(&mut count), Some(()));
        assert_eq!(count, 1);
        assert!(!gate.is_pending());
        assert_eq!(gate.confirm(&mut count), None);
        assert_eq!(count, 1);
    }

    #[test]
    fn cancel_discards_without_running() {
        let mut gate: ConfirmGate<u32> = ConfirmGate::new();
        gate.request("Delete?", |count| *count += 1);
        gate.cancel();

        let mut count = 0;
        assert_eq!(gate.confirm(&mut count), None);
        assert_eq!(count, 0);
    }

    #[test]
    fn new_request_replaces_pending_one() {
        let mut gate: ConfirmGate<Vec<&'static str>> = ConfirmGate::new();
        gate.request("Delete?", |log| log.push("first"));
        gate.request("Delete again?", |log| log.push("second"));
        assert_eq!(gate.pending_message(), Some("Delete again?"));

        let mut log = Vec::new();
        gate.confirm(&mut log);
        gate.confirm(&mut log);
        assert_eq!(log, vec!["second"]);
    }
}
