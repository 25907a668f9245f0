//! Pending-state tracking for asynchronous builder actions.
//!
//! Save, publish, and submit are network round-trips; while one is in
//! flight its trigger must stay disabled so a double click cannot issue
//! two concurrent writes to the same form. The handle makes the
//! in-flight state explicit and observable instead of burying it in a
//! suspended coroutine.

/// Observable state of one asynchronous action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActionState {
    /// Never started, or reset.
    #[default]
    Idle,
    /// Started and not yet settled; re-entrant triggers are refused.
    Pending,
    /// Last attempt succeeded.
    Done,
    /// Last attempt failed; local state is unchanged and the user may
    /// retry manually.
    Failed,
}

/// A single action's lifecycle handle (one per save/publish/submit
/// trigger).
#[derive(Debug, Clone, Copy, Default)]
pub struct PendingAction {
    state: ActionState,
}

impl PendingAction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ActionState {
        self.state
    }

    pub fn is_pending(&self) -> bool {
        self.state == ActionState::Pending
    }

    /// Try to start the action. Returns `false`, changing nothing,
    /// while a previous attempt is still in flight.
    pub fn try_begin(&mut self) -> bool {
        if self.state == ActionState::Pending {
            return false;
        }
        self.state = ActionState::Pending;
        true
    }

    /// Settle the in-flight attempt as succeeded.
    pub fn succeed(&mut self) {
        self.state = ActionState::Done;
    }

    /// Settle the in-flight attempt as failed.
    pub fn fail(&mut self) {
        self.state = ActionState::Failed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reentrant_trigger_refused() {
        let mut action = PendingAction::new();
        assert!(action.try_begin());
        assert!(!action.try_begin());
        assert!(action.is_pending());
    }

    #[test]
    fn test_retry_after_failure() {
        let mut action = PendingAction::new();
        assert!(action.try_begin());
        action.fail();
        assert_eq!(action.state(), ActionState::Failed);
        assert!(action.try_begin());
    }

    #[test]
    fn test_done_allows_next_attempt() {
        let mut action = PendingAction::new();
        assert!(action.try_begin());
        action.succeed();
        assert_eq!(action.state(), ActionState::Done);
        assert!(action.try_begin());
    }
}
