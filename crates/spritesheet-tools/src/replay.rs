//! Action log replay.
//!
//! An action log is a recorded sequence of editor actions. Replaying it folds
//! every action through the reducer from a starting state, counting which
//! actions changed the state and, optionally, checking invariants after each
//! step.
//!
//! Two encodings are accepted:
//! - a JSON document `{"metadata": {...}, "actions": [...]}`
//! - JSON Lines, one action object per line (blank lines and lines starting
//!   with `#` are skipped)

use serde::{Deserialize, Serialize};
use spritesheet_common::{ActionError, SchemaVersion, StateError};
use spritesheet_state::action::Action;
use spritesheet_state::invariants;
use spritesheet_state::state::EditorState;
use spritesheet_state::store::EditorStore;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Replay errors.
#[derive(Debug, Error)]
pub enum ReplayError {
    /// IO error while reading a log
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// An action could not be decoded
    #[error(transparent)]
    Action(#[from] ActionError),
    /// The document is not an action log
    #[error("Invalid action log: {0}")]
    InvalidFormat(String),
    /// The log was written by an incompatible schema
    #[error("Unsupported action log version: {0}")]
    UnsupportedVersion(SchemaVersion),
    /// The log could not be encoded
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Metadata about a recorded action log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionLogMetadata {
    /// Version of the log format
    pub version: SchemaVersion,
    /// Human-readable name
    pub name: String,
    /// Description
    pub description: String,
}

impl Default for ActionLogMetadata {
    fn default() -> Self {
        Self {
            version: SchemaVersion::ACTION_LOG,
            name: String::new(),
            description: String::new(),
        }
    }
}

/// A recorded sequence of actions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionLog {
    /// Metadata about the log
    #[serde(default)]
    pub metadata: ActionLogMetadata,
    /// Actions in dispatch order
    pub actions: Vec<Action>,
}

impl ActionLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an action.
    pub fn push(&mut self, action: Action) {
        self.actions.push(action);
    }

    /// Returns the number of actions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Checks whether the log has no actions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Parses a log in either supported encoding.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is neither a log document nor valid JSON Lines.
    pub fn parse(data: &str) -> Result<Self, ReplayError> {
        match serde_json::from_str::<serde_json::Value>(data) {
            Ok(serde_json::Value::Object(map)) if map.contains_key("actions") => {
                Self::from_json(data)
            },
            Ok(serde_json::Value::Array(_)) => Err(ReplayError::InvalidFormat(
                "expected an object with an \"actions\" array".into(),
            )),
            _ => Self::from_json_lines(data),
        }
    }

    /// Parses a log document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is malformed or too new.
    pub fn from_json(data: &str) -> Result<Self, ReplayError> {
        let log: Self = serde_json::from_str(data)
            .map_err(|e| ReplayError::InvalidFormat(e.to_string()))?;
        if !SchemaVersion::ACTION_LOG.can_read(&log.metadata.version) {
            return Err(ReplayError::UnsupportedVersion(log.metadata.version));
        }
        Ok(log)
    }

    /// Parses JSON Lines, one action per line.
    ///
    /// # Errors
    ///
    /// Returns the first line that fails to decode.
    pub fn from_json_lines(data: &str) -> Result<Self, ReplayError> {
        let mut log = Self::new();
        for (index, line) in data.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let action = serde_json::from_str(line).map_err(|e| ActionError::MalformedLine {
                line: index + 1,
                message: e.to_string(),
            })?;
            log.push(action);
        }
        Ok(log)
    }

    /// Reads and parses a log file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ReplayError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let log = Self::parse(&contents)?;
        info!("Loaded {} actions from {}", log.len(), path.display());
        Ok(log)
    }

    /// Serializes the log as a JSON document.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self, pretty: bool) -> Result<String, ReplayError> {
        let result = if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        };
        result.map_err(|e| ReplayError::Serialization(e.to_string()))
    }
}

/// An invariant violation found during replay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Index of the action after which the violation was found
    pub index: usize,
    /// Action type
    pub action: &'static str,
    /// Violated invariant
    pub error: StateError,
}

/// Result of replaying a log.
#[derive(Debug, Clone)]
pub struct ReplayOutcome {
    /// Final state
    pub state: EditorState,
    /// Actions that changed the state
    pub applied: usize,
    /// Actions that left the state as it was, whether refused or without effect
    pub unchanged: usize,
    /// Invariant violations, if checking was enabled
    pub violations: Vec<Violation>,
}

impl ReplayOutcome {
    /// Checks whether the replay finished without invariant violations.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Replays `log` on top of `initial`.
#[must_use]
pub fn replay(log: &ActionLog, initial: EditorState, check_invariants: bool) -> ReplayOutcome {
    let mut store = EditorStore::new(initial).with_invariant_checks(false);
    let mut violations = Vec::new();
    let mut unchanged = 0;

    for (index, action) in log.actions.iter().enumerate() {
        if !store.dispatch(action) {
            unchanged += 1;
            continue;
        }
        if check_invariants {
            if let Err(error) = invariants::check(store.state()) {
                warn!(index, action = action.kind(), "Invariant violated: {error}");
                violations.push(Violation {
                    index,
                    action: action.kind(),
                    error,
                });
            }
        }
    }

    let applied = log.len() - unchanged;
    debug!(applied, unchanged, "Replay finished");
    ReplayOutcome {
        state: store.into_state(),
        applied,
        unchanged,
        violations,
    }
}
