//! A single-writer store around the reducer.
//!
//! The store owns the current state and folds dispatched actions through
//! [`reduce`]. Callers serialize dispatch; there is no locking.
//!
//! With invariant checks on, a state that fails [`invariants::check`] is never
//! committed. The store keeps its previous state instead.

use spritesheet_common::{SpriteError, SpriteResult};
use tracing::{debug, error, info};

use crate::action::Action;
use crate::invariants;
use crate::reducer::reduce;
use crate::snapshot::EditorSnapshot;
use crate::state::EditorState;

/// Holds the current editor state.
#[derive(Debug, Clone)]
pub struct EditorStore {
    /// Current state.
    state: EditorState,
    /// Number of committed state changes.
    revision: u64,
    /// Run invariant checks after every dispatch.
    check_invariants: bool,
}

impl Default for EditorStore {
    fn default() -> Self {
        Self::new(EditorState::initial())
    }
}

impl EditorStore {
    /// Creates a store starting from `state`.
    #[must_use]
    pub fn new(state: EditorState) -> Self {
        Self {
            state,
            revision: 0,
            check_invariants: cfg!(debug_assertions),
        }
    }

    /// Enables or disables invariant checks after dispatch.
    #[must_use]
    pub fn with_invariant_checks(mut self, enabled: bool) -> Self {
        self.check_invariants = enabled;
        self
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> &EditorState {
        &self.state
    }

    /// Number of committed state changes.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Applies `action`, committing the result. Returns whether the state changed.
    ///
    /// # Errors
    ///
    /// With invariant checks on, returns [`SpriteError::State`] if the next
    /// state is inconsistent. Nothing is committed in that case.
    pub fn try_dispatch(&mut self, action: &Action) -> SpriteResult<bool> {
        let next = reduce(Some(&self.state), action);
        if next == self.state {
            debug!(action = action.kind(), "Dispatch left state unchanged");
            return Ok(false);
        }

        if self.check_invariants {
            invariants::check(&next)?;
        }

        self.state = next;
        self.revision += 1;
        Ok(true)
    }

    /// Applies `action`. Returns whether a new state was committed.
    ///
    /// An invariant violation is logged and the previous state kept.
    pub fn dispatch(&mut self, action: &Action) -> bool {
        match self.try_dispatch(action) {
            Ok(changed) => changed,
            Err(e) => {
                error!(action = action.kind(), "Dispatch refused: {e}");
                false
            },
        }
    }

    /// Decodes and applies a JSON action.
    ///
    /// # Errors
    ///
    /// Returns an error if the action cannot be decoded or the result breaks
    /// an invariant; the state is left as is.
    pub fn dispatch_json(&mut self, json: &str) -> SpriteResult<bool> {
        let action = Action::from_json(json)?;
        self.try_dispatch(&action)
    }

    /// Replaces the current state wholesale.
    pub fn replace(&mut self, state: EditorState) {
        self.state = state;
        self.revision += 1;
    }

    /// Decodes a snapshot and makes its state current.
    ///
    /// # Errors
    ///
    /// Returns [`SpriteError::Snapshot`] if the snapshot cannot be read; the
    /// current state is kept.
    pub fn restore(&mut self, json: &str) -> SpriteResult<()> {
        let snapshot = EditorSnapshot::from_json(json)?;
        info!(version = %snapshot.version, "Restored snapshot");
        self.replace(snapshot.into_state());
        Ok(())
    }

    /// Consumes the store, returning the current state.
    #[must_use]
    pub fn into_state(self) -> EditorState {
        self.state
    }
}
