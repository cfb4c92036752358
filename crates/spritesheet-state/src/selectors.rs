//! Read-only queries over an [`EditorState`].

use spritesheet_common::{AnimationId, FileId, FrameId};

use crate::state::{EditorState, File, FileFrame, Frame};

/// Files in display order.
pub fn ordered_files(state: &EditorState) -> impl Iterator<Item = &File> + '_ {
    state.file_order().iter().filter_map(|&id| state.file(id))
}

/// Frames of an animation in playback order.
#[must_use]
pub fn animation_frames(state: &EditorState, animation: AnimationId) -> Vec<&Frame> {
    state
        .animation(animation)
        .map(|a| a.frames.iter().filter_map(|&id| state.frame(id)).collect())
        .unwrap_or_default()
}

/// Total playback time of an animation in milliseconds, saturating at the
/// `i64` bounds.
#[must_use]
pub fn animation_duration(state: &EditorState, animation: AnimationId) -> Option<i64> {
    state.animation(animation)?;
    Some(
        animation_frames(state, animation)
            .iter()
            .fold(0i64, |total, f| total.saturating_add(f.duration)),
    )
}

/// The animation whose frame list contains `frame`.
///
/// Frames carry no back-reference, so this scans every animation.
#[must_use]
pub fn owning_animation(state: &EditorState, frame: FrameId) -> Option<AnimationId> {
    state
        .entities()
        .animations
        .iter()
        .find(|(_, animation)| animation.frames.contains(&frame))
        .map(|(&id, _)| id)
}

/// The file-frame of `file` within `frame`.
///
/// File-frames are positional: the entry at index `i` belongs to the file at
/// index `i` of the current file order.
#[must_use]
pub fn file_frame_for(state: &EditorState, frame: FrameId, file: FileId) -> Option<&FileFrame> {
    let position = state.file_position(file)?;
    state.frame(frame)?.file_frames.get(position)
}

/// Resolves the selected file-frame to `(frame, position)`.
///
/// `None` when no frame or no file is selected, or the selected frame has no
/// file-frame at the selected file's position.
#[must_use]
pub fn resolve_selected_file_frame(state: &EditorState) -> Option<(FrameId, usize)> {
    let frame = state.selected_frame()?;
    let position = state.file_position(state.selected_file()?)?;
    (position < state.frame(frame)?.file_frames.len()).then_some((frame, position))
}

/// The file-frame addressed by the current frame and file selection.
#[must_use]
pub fn selected_file_frame(state: &EditorState) -> Option<&FileFrame> {
    let (frame, position) = resolve_selected_file_frame(state)?;
    state.frame(frame)?.file_frames.get(position)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Action;

    fn sheet() -> EditorState {
        let mut state = EditorState::initial();
        for action in [
            Action::AddFile {
                file_name: "body.png".to_string(),
                id: FileId::new(0),
            },
            Action::AddFile {
                file_name: "head.png".to_string(),
                id: FileId::new(1),
            },
            Action::AddAnimation {
                animation_name: "Walk".to_string(),
                id: AnimationId::new(0),
            },
            Action::AddFrameToAnimation {
                animation: AnimationId::new(0),
                id: FrameId::new(0),
            },
            Action::AddFrameToAnimation {
                animation: AnimationId::new(0),
                id: FrameId::new(1),
            },
            Action::SetDurationForFrame {
                frame: FrameId::new(1),
                duration: 250,
            },
        ] {
            state = state.apply(&action);
        }
        state
    }

    #[test]
    fn test_ordered_files_follow_file_order() {
        let state = sheet().apply(&Action::MoveFileUp { id: FileId::new(1) });
        let names: Vec<&str> = ordered_files(&state).map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["head.png", "body.png"]);
    }

    #[test]
    fn test_animation_frames_and_duration() {
        let state = sheet();
        let ids: Vec<FrameId> = animation_frames(&state, AnimationId::new(0))
            .iter()
            .map(|f| f.id)
            .collect();
        assert_eq!(ids, vec![FrameId::new(0), FrameId::new(1)]);
        assert_eq!(animation_duration(&state, AnimationId::new(0)), Some(750));
        assert_eq!(animation_duration(&state, AnimationId::new(9)), None);
    }

    #[test]
    fn test_owning_animation() {
        let state = sheet();
        assert_eq!(owning_animation(&state, FrameId::new(1)), Some(AnimationId::new(0)));
        assert_eq!(owning_animation(&state, FrameId::new(5)), None);
    }

    #[test]
    fn test_selected_file_frame_resolution() {
        let state = sheet();
        // Last added file (head.png, position 1) and last added frame are selected.
        assert_eq!(resolve_selected_file_frame(&state), Some((FrameId::new(1), 1)));
        assert_eq!(
            selected_file_frame(&state),
            file_frame_for(&state, FrameId::new(1), FileId::new(1))
        );
    }
}
