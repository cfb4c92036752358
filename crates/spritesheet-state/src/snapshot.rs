//! Serializable editor snapshots.
//!
//! A snapshot is the full state tree tagged with a schema version. Restoring
//! one validates the version and the state's invariants, since a decoded
//! state did not come out of the reducer.

use serde::{Deserialize, Serialize};
use spritesheet_common::{SchemaVersion, SnapshotError};

use crate::invariants;
use crate::state::EditorState;

/// A versioned copy of an editor state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorSnapshot {
    /// Schema version the snapshot was written with
    pub version: SchemaVersion,
    /// Captured state
    pub state: EditorState,
}

impl EditorSnapshot {
    /// Captures `state` with the current schema version.
    ///
    /// Cheap: the tree is shared, not copied.
    #[must_use]
    pub fn capture(state: &EditorState) -> Self {
        Self {
            version: SchemaVersion::EDITOR_SNAPSHOT,
            state: state.clone(),
        }
    }

    /// Serializes the snapshot to JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self, pretty: bool) -> Result<String, SnapshotError> {
        let result = if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        };
        result.map_err(|e| SnapshotError::Serialization(e.to_string()))
    }

    /// Deserializes and validates a snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed, the snapshot was written by
    /// an unreadable schema version, or its state breaks an invariant.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let snapshot: Self =
            serde_json::from_str(json).map_err(|e| SnapshotError::Deserialization(e.to_string()))?;

        if !SchemaVersion::EDITOR_SNAPSHOT.can_read(&snapshot.version) {
            return Err(SnapshotError::UnsupportedVersion {
                found: snapshot.version,
                supported: SchemaVersion::EDITOR_SNAPSHOT,
            });
        }
        invariants::check(&snapshot.state)?;
        Ok(snapshot)
    }

    /// Consumes the snapshot, returning its state.
    #[must_use]
    pub fn into_state(self) -> EditorState {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Action;
    use spritesheet_common::{AnimationId, FileId, FrameId, StateError};

    fn sample() -> EditorState {
        EditorState::initial()
            .apply(&Action::AddFile {
                file_name: "hero.png".to_string(),
                id: FileId::new(0),
            })
            .apply(&Action::AddAnimation {
                animation_name: "Run".to_string(),
                id: AnimationId::new(0),
            })
            .apply(&Action::AddFrameToAnimation {
                animation: AnimationId::new(0),
                id: FrameId::new(0),
            })
            .apply(&Action::SetRotationForSelectedFileFrame { value: 90 })
    }

    #[test]
    fn test_snapshot_restores_same_state() {
        let state = sample();
        let json = EditorSnapshot::capture(&state).to_json(false).expect("encode");
        let restored = EditorSnapshot::from_json(&json).expect("decode").into_state();
        assert_eq!(restored, state);
    }

    #[test]
    fn test_snapshot_json_uses_string_keys() {
        let json = EditorSnapshot::capture(&sample()).to_json(true).expect("encode");
        let value: serde_json::Value = serde_json::from_str(&json).expect("parse");
        assert_eq!(
            value["state"]["entities"]["files"]["0"],
            serde_json::json!({"id": 0, "name": "hero.png"})
        );
        assert_eq!(value["state"]["entities"]["frames"]["0"]["fileFrames"][0]["rotation"], 90);
    }

    #[test]
    fn test_newer_major_version_is_rejected() {
        let mut snapshot = EditorSnapshot::capture(&sample());
        snapshot.version = SchemaVersion::new(2, 0);
        let json = snapshot.to_json(false).expect("encode");

        let err = EditorSnapshot::from_json(&json).unwrap_err();
        assert!(matches!(err, SnapshotError::UnsupportedVersion { .. }));
    }

    #[test]
    fn test_invalid_state_is_rejected() {
        let json = r#"{
            "version": "1.0",
            "state": {
                "fileOrder": [],
                "entities": {"files": {}, "animations": {}, "frames": {}},
                "selectedFile": 4, "selectedAnimation": null, "selectedFrame": null,
                "canvasWidth": 300, "canvasHeight": 300
            }
        }"#;
        let err = EditorSnapshot::from_json(json).unwrap_err();
        assert!(matches!(
            err,
            SnapshotError::Invalid(StateError::DanglingSelectedFile(_))
        ));
    }
}
