//! The state reducer.
//!
//! [`reduce`] maps `(state, action)` to a new state without touching its
//! input. It runs in two steps:
//!
//! 1. A guard rejects actions that reference ids which do not exist, or
//!    create ids which already do. A rejected action returns the input state
//!    unchanged, so no transition is ever half applied.
//! 2. One slice reducer per field of the root state computes that field.
//!    Every slice reducer reads only the prior state, so they can be combined
//!    in any order. Cross-slice effects (a new frame is linked into its
//!    animation and selected) come from several slices reacting to the same
//!    action.

mod animations;
mod canvas;
mod files;
mod frames;

use spritesheet_common::{AnimationId, FileId, FrameId};
use tracing::{debug, trace};

use crate::action::Action;
use crate::selectors;
use crate::state::{EditorState, Entities};

/// Applies `action` to `state`.
///
/// A missing state is replaced by [`EditorState::initial`] before the action
/// is applied. The function never panics and never reports an error: unknown
/// action types and actions that reference absent ids leave the state as it
/// was.
#[must_use]
pub fn reduce(state: Option<&EditorState>, action: &Action) -> EditorState {
    match state {
        Some(prev) => transition(prev, action),
        None => transition(&EditorState::initial(), action),
    }
}

impl EditorState {
    /// Applies `action` and returns the resulting state.
    #[must_use]
    pub fn apply(&self, action: &Action) -> Self {
        transition(self, action)
    }
}

fn transition(prev: &EditorState, action: &Action) -> EditorState {
    if let Some(reason) = rejection(prev, action) {
        debug!(action = action.kind(), reason, "Action ignored");
        return prev.clone();
    }
    trace!(action = action.kind(), "Applying action");

    EditorState {
        file_order: files::file_order(prev, action),
        entities: Entities {
            files: files::files(prev, action),
            animations: animations::animations(prev, action),
            frames: frames::frames(prev, action),
        },
        selected_file: files::selected_file(prev, action),
        selected_animation: animations::selected_animation(prev, action),
        selected_frame: frames::selected_frame(prev, action),
        canvas_width: canvas::canvas_width(prev, action),
        canvas_height: canvas::canvas_height(prev, action),
    }
}

/// Why `action` cannot be applied to `state`, if it cannot.
fn rejection(state: &EditorState, action: &Action) -> Option<&'static str> {
    let has_file = |id: &FileId| state.entities.files.contains(id);
    let has_animation = |id: &AnimationId| state.entities.animations.contains(id);
    let has_frame = |id: &FrameId| state.entities.frames.contains(id);

    if action.file_frame_edit().is_some() {
        return selectors::resolve_selected_file_frame(state)
            .is_none()
            .then_some("no selected file-frame");
    }

    match action {
        Action::AddFile { id, .. } if has_file(id) => Some("file id already in use"),
        Action::RenameFile { file: id, .. }
        | Action::SelectFile { file: Some(id) }
        | Action::MoveFileUp { id }
        | Action::MoveFileDown { id }
            if !has_file(id) =>
        {
            Some("unknown file")
        },
        Action::AddAnimation { id, .. } if has_animation(id) => {
            Some("animation id already in use")
        },
        Action::SelectAnimation {
            animation: Some(id),
        }
        | Action::RenameAnimation { animation: id, .. }
            if !has_animation(id) =>
        {
            Some("unknown animation")
        },
        Action::AddFrameToAnimation { id, .. } if has_frame(id) => Some("frame id already in use"),
        Action::AddFrameToAnimation { animation, .. } if !has_animation(animation) => {
            Some("unknown animation")
        },
        Action::SetDurationForFrame { frame: id, .. }
        | Action::SelectFrame { frame: Some(id) }
        | Action::DeleteFrame { id }
            if !has_frame(id) =>
        {
            Some("unknown frame")
        },
        Action::Unknown => Some("unknown action type"),
        _ => None,
    }
}
