//! Canvas dimension slices.

use crate::action::Action;
use crate::state::EditorState;

pub(super) fn canvas_width(prev: &EditorState, action: &Action) -> i64 {
    match *action {
        Action::SetCanvasWidth { width } => width,
        _ => prev.canvas_width,
    }
}

pub(super) fn canvas_height(prev: &EditorState, action: &Action) -> i64 {
    match *action {
        Action::SetCanvasHeight { height } => height,
        _ => prev.canvas_height,
    }
}
