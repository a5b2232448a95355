use crate::error::{HistoryError, Result};

/// Append-only stack of snapshots with single-step undo.
///
/// The snapshot type is chosen by the caller. Nothing records states
/// automatically: push a snapshot after every change that should be
/// revertible. Once a state has been recorded the history never becomes
/// empty again, because `undo` stops at the first recorded state.
#[derive(Debug, Clone)]
pub struct TaskHistory<S> {
    states: Vec<S>,
}

impl<S> Default for TaskHistory<S> {
    fn default() -> Self {
        Self { states: Vec::new() }
    }
}

impl<S> TaskHistory<S> {
    /// Create an empty history.
    #[must_use]
    pub const fn new() -> Self {
        Self { states: Vec::new() }
    }

    /// Record `state` as the newest snapshot.
    pub fn add_state(&mut self, state: S) {
        self.states.push(state);
    }

    /// Discard the newest snapshot and return the one before it.
    ///
    /// With a single recorded state nothing is discarded and that state is
    /// returned again. Popped states are gone for good.
    ///
    /// # Errors
    /// Returns [`HistoryError::Empty`] when no state has been recorded.
    pub fn undo(&mut self) -> Result<&S> {
        if self.states.len() > 1 {
            self.states.pop();
        }
        let current = self.states.last().ok_or(HistoryError::Empty);
        if current.is_ok() {
            tracing::debug!(remaining = self.states.len(), "history undo");
        }
        current
    }

    /// Newest snapshot, if any.
    #[must_use]
    pub fn current(&self) -> Option<&S> {
        self.states.last()
    }

    /// Number of recorded snapshots.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.states.len()
    }

    /// Returns true when nothing has been recorded.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
