//! Frame table and frame selection slices.
//!
//! This is where the cross-slice work happens. A new frame gets one
//! file-frame per file currently in the file order, and the selected
//! file-frame editing family is resolved through the frame and file
//! selections.

use spritesheet_common::FrameId;
use tracing::debug;

use crate::action::Action;
use crate::selectors;
use crate::state::{EditorState, Frame};
use crate::table::EntityTable;

pub(super) fn frames(prev: &EditorState, action: &Action) -> EntityTable<FrameId, Frame> {
    let frames = &prev.entities.frames;

    if let Some(edit) = action.file_frame_edit() {
        return match selectors::resolve_selected_file_frame(prev) {
            Some((frame, position)) => frames.with_updated(&frame, |f| {
                if let Some(file_frame) = f.file_frames.get_mut(position) {
                    edit.apply(file_frame);
                }
            }),
            None => frames.clone(),
        };
    }

    match *action {
        Action::AddFrameToAnimation { id, .. } => {
            let known_files = prev
                .file_order
                .iter()
                .filter(|file| prev.entities.files.contains(file))
                .count();
            frames.with_inserted(id, Frame::new(id, known_files))
        },
        Action::SetDurationForFrame { frame, duration } => {
            frames.with_updated(&frame, |f| f.duration = duration)
        },
        Action::DeleteFrame { id } => frames.without(&id),
        _ => frames.clone(),
    }
}

pub(super) fn selected_frame(prev: &EditorState, action: &Action) -> Option<FrameId> {
    match *action {
        Action::AddFrameToAnimation { id, .. } => Some(id),
        Action::SelectFrame { frame } => frame,
        Action::DeleteFrame { id } if prev.selected_frame == Some(id) => {
            let next = selectors::owning_animation(prev, id)
                .and_then(|owner| prev.animation(owner))
                .and_then(|animation| animation.frames.iter().copied().find(|&f| f != id));
            debug!("Deleted selected frame {id}, now selecting {next:?}");
            next
        },
        _ => prev.selected_frame,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FileFrame;
    use spritesheet_common::{AnimationId, FileId};

    fn base() -> EditorState {
        EditorState::initial().apply(&Action::AddAnimation {
            animation_name: "Base".to_string(),
            id: AnimationId::new(0),
        })
    }

    fn add_frame(state: &EditorState, id: i64) -> EditorState {
        state.apply(&Action::AddFrameToAnimation {
            animation: AnimationId::new(0),
            id: FrameId::new(id),
        })
    }

    fn add_file(state: &EditorState, id: i64) -> EditorState {
        state.apply(&Action::AddFile {
            file_name: format!("file{id}.png"),
            id: FileId::new(id),
        })
    }

    fn selected_file_frame(state: &EditorState) -> FileFrame {
        *selectors::selected_file_frame(state).expect("selected file-frame")
    }

    #[test]
    fn test_add_frame_without_files() {
        let state = add_frame(&base(), 0);
        let frame = state.frame(FrameId::new(0)).expect("frame");

        assert_eq!(frame.duration, 500);
        assert!(frame.file_frames.is_empty());
        assert_eq!(
            state.animation(AnimationId::new(0)).map(|a| a.frames.clone()),
            Some(vec![FrameId::new(0)])
        );
        assert_eq!(state.selected_frame(), Some(FrameId::new(0)));
    }

    #[test]
    fn test_add_frame_creates_file_frame_per_file() {
        let state = add_frame(&add_file(&base(), 0), 0);
        let frame = state.frame(FrameId::new(0)).expect("frame");
        assert_eq!(frame.file_frames, vec![FileFrame::default()]);

        let state = add_frame(&add_file(&add_file(&base(), 0), 1), 0);
        assert_eq!(state.frame(FrameId::new(0)).map(|f| f.file_frames.len()), Some(2));
    }

    #[test]
    fn test_later_files_do_not_extend_existing_frames() {
        let state = add_file(&add_frame(&add_file(&base(), 0), 0), 1);
        assert_eq!(state.frame(FrameId::new(0)).map(|f| f.file_frames.len()), Some(1));
    }

    #[test]
    fn test_select_frame() {
        let state = add_frame(&add_frame(&base(), 0), 1).apply(&Action::SelectFrame {
            frame: Some(FrameId::new(0)),
        });
        assert_eq!(state.selected_frame(), Some(FrameId::new(0)));
    }

    #[test]
    fn test_set_duration() {
        let state = add_frame(&base(), 0).apply(&Action::SetDurationForFrame {
            frame: FrameId::new(0),
            duration: 600,
        });
        assert_eq!(state.frame(FrameId::new(0)).map(|f| f.duration), Some(600));
    }

    #[test]
    fn test_delete_selected_frame_selects_first_remaining() {
        let state = add_frame(&add_frame(&base(), 0), 1);
        let removed = state.apply(&Action::DeleteFrame { id: FrameId::new(1) });

        let keys: Vec<FrameId> = removed.entities().frames.ids().copied().collect();
        assert_eq!(keys, vec![FrameId::new(0)]);
        assert_eq!(removed.selected_frame(), Some(FrameId::new(0)));
        assert_eq!(
            removed.animation(AnimationId::new(0)).map(|a| a.frames.clone()),
            Some(vec![FrameId::new(0)])
        );
    }

    #[test]
    fn test_delete_last_frame_clears_selection() {
        let removed = add_frame(&base(), 0).apply(&Action::DeleteFrame { id: FrameId::new(0) });
        assert_eq!(removed.selected_frame(), None);
        assert!(removed.entities().frames.is_empty());
    }

    #[test]
    fn test_delete_unselected_frame_keeps_selection() {
        let state = add_frame(&add_frame(&base(), 0), 1).apply(&Action::SelectFrame {
            frame: Some(FrameId::new(1)),
        });
        let removed = state.apply(&Action::DeleteFrame { id: FrameId::new(0) });
        assert_eq!(removed.selected_frame(), Some(FrameId::new(1)));
    }

    #[test]
    fn test_left_and_top_round_trip() {
        let mut state = add_frame(&add_file(&base(), 0), 0);

        state = state.apply(&Action::IncrementLeftForSelectedFileFrame);
        assert_eq!(selected_file_frame(&state).left, 1);
        state = state.apply(&Action::DecrementLeftForSelectedFileFrame);
        assert_eq!(selected_file_frame(&state).left, 0);
        state = state.apply(&Action::SetLeftForSelectedFileFrame { left: 20 });
        assert_eq!(selected_file_frame(&state).left, 20);

        state = state.apply(&Action::IncrementTopForSelectedFileFrame);
        assert_eq!(selected_file_frame(&state).top, 1);
        state = state.apply(&Action::DecrementTopForSelectedFileFrame);
        assert_eq!(selected_file_frame(&state).top, 0);
        state = state.apply(&Action::SetTopForSelectedFileFrame { top: 20 });
        assert_eq!(selected_file_frame(&state).top, 20);
    }

    #[test]
    fn test_visibility() {
        let state = add_frame(&add_file(&base(), 0), 0)
            .apply(&Action::SetVisibilityForSelectedFileFrame { visible: false });
        assert!(!selected_file_frame(&state).visible);
    }

    #[test]
    fn test_rotation() {
        let state = add_frame(&add_file(&base(), 0), 0);

        let left = state.apply(&Action::RotateLeftForSelectedFileFrame);
        assert_eq!(selected_file_frame(&left).rotation, -1);
        let right = state.apply(&Action::RotateRightForSelectedFileFrame);
        assert_eq!(selected_file_frame(&right).rotation, 1);
        let both = left.apply(&Action::RotateRightForSelectedFileFrame);
        assert_eq!(selected_file_frame(&both).rotation, 0);
        let set = state.apply(&Action::SetRotationForSelectedFileFrame { value: 50 });
        assert_eq!(selected_file_frame(&set).rotation, 50);
    }

    #[test]
    fn test_edit_targets_selected_file_position() {
        let state = add_frame(&add_file(&add_file(&base(), 0), 1), 0)
            .apply(&Action::SelectFile {
                file: Some(FileId::new(1)),
            })
            .apply(&Action::SetLeftForSelectedFileFrame { left: 7 });
        let frame = state.frame(FrameId::new(0)).expect("frame");
        assert_eq!(frame.file_frames[0].left, 0);
        assert_eq!(frame.file_frames[1].left, 7);
    }

    #[test]
    fn test_edit_without_selection_is_noop() {
        let state = add_frame(&add_file(&base(), 0), 0);

        let no_file = state.apply(&Action::SelectFile { file: None });
        let edited = no_file.apply(&Action::IncrementLeftForSelectedFileFrame);
        assert_eq!(edited, no_file);

        let no_frame = state.apply(&Action::SelectFrame { frame: None });
        let edited = no_frame.apply(&Action::RotateRightForSelectedFileFrame);
        assert_eq!(edited, no_frame);
    }

    #[test]
    fn test_edit_on_frame_without_file_frame_is_noop() {
        // Frame created before the file existed has no file-frame for it.
        let state = add_file(&add_frame(&base(), 0), 0);
        let edited = state.apply(&Action::IncrementTopForSelectedFileFrame);
        assert_eq!(edited, state);
    }

    #[test]
    fn test_edit_copies_only_edited_frame() {
        let state = add_frame(&add_frame(&add_file(&base(), 0), 0), 1);
        let edited = state.apply(&Action::IncrementLeftForSelectedFileFrame);

        let before = &state.entities().frames;
        let after = &edited.entities().frames;
        assert!(after.shares_record_with(before, &FrameId::new(0)));
        assert!(!after.shares_record_with(before, &FrameId::new(1)));
        assert_eq!(selectors::selected_file_frame(&state).map(|ff| ff.left), Some(0));
    }
}
