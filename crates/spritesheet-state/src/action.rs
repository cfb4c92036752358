//! Actions understood by the reducer.
//!
//! Actions travel as tagged JSON records: a `"type"` discriminator plus the
//! payload fields of that type, e.g.
//! `{"type": "ADD_FILE", "fileName": "hero.png", "id": 0}`.

use serde::{Deserialize, Serialize};
use spritesheet_common::{ActionError, AnimationId, FileId, FrameId};

use crate::state::FileFrame;

/// A user intent applied to an [`crate::EditorState`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    /// Replace the canvas width
    SetCanvasWidth {
        /// New width
        width: i64,
    },
    /// Replace the canvas height
    SetCanvasHeight {
        /// New height
        height: i64,
    },

    /// Import a file, append it to the file order and select it
    #[serde(rename_all = "camelCase")]
    AddFile {
        /// Display name
        file_name: String,
        /// Caller-chosen unique id
        id: FileId,
    },
    /// Rename a file
    RenameFile {
        /// File to rename
        file: FileId,
        /// New name
        name: String,
    },
    /// Select a file, or clear the selection with `null`
    SelectFile {
        /// File to select
        file: Option<FileId>,
    },
    /// Swap a file with its predecessor in the file order
    MoveFileUp {
        /// File to move
        id: FileId,
    },
    /// Swap a file with its successor in the file order
    MoveFileDown {
        /// File to move
        id: FileId,
    },

    /// Create an animation and select it
    #[serde(rename_all = "camelCase")]
    AddAnimation {
        /// Display name
        animation_name: String,
        /// Caller-chosen unique id
        id: AnimationId,
    },
    /// Select an animation, or clear the selection with `null`
    SelectAnimation {
        /// Animation to select
        animation: Option<AnimationId>,
    },
    /// Rename an animation
    #[serde(rename_all = "camelCase")]
    RenameAnimation {
        /// Animation to rename
        animation: AnimationId,
        /// New name
        new_name: String,
    },

    /// Create a frame for every known file, append it to an animation and select it
    AddFrameToAnimation {
        /// Owning animation
        animation: AnimationId,
        /// Caller-chosen unique id
        id: FrameId,
    },
    /// Replace a frame's duration
    SetDurationForFrame {
        /// Frame to update
        frame: FrameId,
        /// Duration in milliseconds
        duration: i64,
    },
    /// Select a frame, or clear the selection with `null`
    SelectFrame {
        /// Frame to select
        frame: Option<FrameId>,
    },
    /// Delete a frame and unlink it from its animation
    DeleteFrame {
        /// Frame to delete
        id: FrameId,
    },

    /// `left += 1` on the selected file-frame
    IncrementLeftForSelectedFileFrame,
    /// `left -= 1` on the selected file-frame
    DecrementLeftForSelectedFileFrame,
    /// Set `left` on the selected file-frame
    SetLeftForSelectedFileFrame {
        /// New offset
        left: i32,
    },
    /// `top += 1` on the selected file-frame
    IncrementTopForSelectedFileFrame,
    /// `top -= 1` on the selected file-frame
    DecrementTopForSelectedFileFrame,
    /// Set `top` on the selected file-frame
    SetTopForSelectedFileFrame {
        /// New offset
        top: i32,
    },
    /// Set `visible` on the selected file-frame
    SetVisibilityForSelectedFileFrame {
        /// New visibility
        visible: bool,
    },
    /// `rotation -= 1` on the selected file-frame
    RotateLeftForSelectedFileFrame,
    /// `rotation += 1` on the selected file-frame
    RotateRightForSelectedFileFrame,
    /// Set `rotation` on the selected file-frame
    SetRotationForSelectedFileFrame {
        /// New rotation
        value: i32,
    },

    /// Any action type this reducer does not know; always a no-op
    #[serde(other)]
    Unknown,
}

/// An edit to the file-frame addressed by the current frame and file selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFrameEdit {
    /// Add to `left`
    NudgeLeft(i32),
    /// Set `left`
    SetLeft(i32),
    /// Add to `top`
    NudgeTop(i32),
    /// Set `top`
    SetTop(i32),
    /// Set `visible`
    SetVisible(bool),
    /// Add to `rotation`
    Rotate(i32),
    /// Set `rotation`
    SetRotation(i32),
}

impl FileFrameEdit {
    /// Applies the edit. Relative edits saturate at the `i32` bounds.
    pub fn apply(self, file_frame: &mut FileFrame) {
        match self {
            Self::NudgeLeft(delta) => file_frame.left = file_frame.left.saturating_add(delta),
            Self::SetLeft(left) => file_frame.left = left,
            Self::NudgeTop(delta) => file_frame.top = file_frame.top.saturating_add(delta),
            Self::SetTop(top) => file_frame.top = top,
            Self::SetVisible(visible) => file_frame.visible = visible,
            Self::Rotate(delta) => file_frame.rotation = file_frame.rotation.saturating_add(delta),
            Self::SetRotation(rotation) => file_frame.rotation = rotation,
        }
    }
}

impl Action {
    /// Decodes an action from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is not an object with a `type` field, or a
    /// known type is missing part of its payload.
    pub fn from_json(json: &str) -> Result<Self, ActionError> {
        serde_json::from_str(json).map_err(|e| ActionError::Malformed(e.to_string()))
    }

    /// Encodes the action as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, ActionError> {
        serde_json::to_string(self).map_err(|e| ActionError::Encode(e.to_string()))
    }

    /// The wire name of the action type.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::SetCanvasWidth { .. } => "SET_CANVAS_WIDTH",
            Self::SetCanvasHeight { .. } => "SET_CANVAS_HEIGHT",
            Self::AddFile { .. } => "ADD_FILE",
            Self::RenameFile { .. } => "RENAME_FILE",
            Self::SelectFile { .. } => "SELECT_FILE",
            Self::MoveFileUp { .. } => "MOVE_FILE_UP",
            Self::MoveFileDown { .. } => "MOVE_FILE_DOWN",
            Self::AddAnimation { .. } => "ADD_ANIMATION",
            Self::SelectAnimation { .. } => "SELECT_ANIMATION",
            Self::RenameAnimation { .. } => "RENAME_ANIMATION",
            Self::AddFrameToAnimation { .. } => "ADD_FRAME_TO_ANIMATION",
            Self::SetDurationForFrame { .. } => "SET_DURATION_FOR_FRAME",
            Self::SelectFrame { .. } => "SELECT_FRAME",
            Self::DeleteFrame { .. } => "DELETE_FRAME",
            Self::IncrementLeftForSelectedFileFrame => "INCREMENT_LEFT_FOR_SELECTED_FILE_FRAME",
            Self::DecrementLeftForSelectedFileFrame => "DECREMENT_LEFT_FOR_SELECTED_FILE_FRAME",
            Self::SetLeftForSelectedFileFrame { .. } => "SET_LEFT_FOR_SELECTED_FILE_FRAME",
            Self::IncrementTopForSelectedFileFrame => "INCREMENT_TOP_FOR_SELECTED_FILE_FRAME",
            Self::DecrementTopForSelectedFileFrame => "DECREMENT_TOP_FOR_SELECTED_FILE_FRAME",
            Self::SetTopForSelectedFileFrame { .. } => "SET_TOP_FOR_SELECTED_FILE_FRAME",
            Self::SetVisibilityForSelectedFileFrame { .. } => {
                "SET_VISIBILITY_FOR_SELECTED_FILE_FRAME"
            },
            Self::RotateLeftForSelectedFileFrame => "ROTATE_LEFT_FOR_SELECTED_FILE_FRAME",
            Self::RotateRightForSelectedFileFrame => "ROTATE_RIGHT_FOR_SELECTED_FILE_FRAME",
            Self::SetRotationForSelectedFileFrame { .. } => "SET_ROTATION_FOR_SELECTED_FILE_FRAME",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// The file-frame edit this action performs, if it belongs to the
    /// selected-file-frame family.
    #[must_use]
    pub fn file_frame_edit(&self) -> Option<FileFrameEdit> {
        match *self {
            Self::IncrementLeftForSelectedFileFrame => Some(FileFrameEdit::NudgeLeft(1)),
            Self::DecrementLeftForSelectedFileFrame => Some(FileFrameEdit::NudgeLeft(-1)),
            Self::SetLeftForSelectedFileFrame { left } => Some(FileFrameEdit::SetLeft(left)),
            Self::IncrementTopForSelectedFileFrame => Some(FileFrameEdit::NudgeTop(1)),
            Self::DecrementTopForSelectedFileFrame => Some(FileFrameEdit::NudgeTop(-1)),
            Self::SetTopForSelectedFileFrame { top } => Some(FileFrameEdit::SetTop(top)),
            Self::SetVisibilityForSelectedFileFrame { visible } => {
                Some(FileFrameEdit::SetVisible(visible))
            },
            Self::RotateLeftForSelectedFileFrame => Some(FileFrameEdit::Rotate(-1)),
            Self::RotateRightForSelectedFileFrame => Some(FileFrameEdit::Rotate(1)),
            Self::SetRotationForSelectedFileFrame { value } => {
                Some(FileFrameEdit::SetRotation(value))
            },
            _ => None,
        }
    }
}
