//! Referential invariants of the editor state.
//!
//! States built only through [`crate::reduce`] always pass [`check`]. States
//! decoded from elsewhere (snapshots, hand-written fixtures) should be checked
//! before use.

use spritesheet_common::{FrameId, StateError};
use std::collections::HashSet;

use crate::state::EditorState;

/// Validates every cross-reference in `state`.
///
/// # Errors
///
/// Returns the first violated invariant.
pub fn check(state: &EditorState) -> Result<(), StateError> {
    check_keys(state)?;
    check_file_order(state)?;
    check_frame_ownership(state)?;
    check_selection(state)?;
    check_file_frames(state)
}

fn check_keys(state: &EditorState) -> Result<(), StateError> {
    let entities = state.entities();
    let keys = entities
        .files
        .iter()
        .map(|(key, file)| (key.raw(), file.id.raw()))
        .chain(entities.animations.iter().map(|(key, a)| (key.raw(), a.id.raw())))
        .chain(entities.frames.iter().map(|(key, f)| (key.raw(), f.id.raw())));

    for (key, id) in keys {
        if key != id {
            return Err(StateError::KeyMismatch { key, id });
        }
    }
    Ok(())
}

fn check_file_order(state: &EditorState) -> Result<(), StateError> {
    let files = &state.entities().files;
    let mut seen = HashSet::with_capacity(state.file_order().len());

    for &id in state.file_order() {
        if !files.contains(&id) {
            return Err(StateError::DanglingFileOrder(id));
        }
        if !seen.insert(id) {
            return Err(StateError::DuplicateFileOrder(id));
        }
    }
    match files.ids().find(|id| !seen.contains(*id)) {
        Some(&unordered) => Err(StateError::UnorderedFile(unordered)),
        None => Ok(()),
    }
}

fn check_frame_ownership(state: &EditorState) -> Result<(), StateError> {
    let frames = &state.entities().frames;
    let mut owned: HashSet<FrameId> = HashSet::with_capacity(frames.len());

    for (&animation, record) in state.entities().animations.iter() {
        for &frame in &record.frames {
            if !frames.contains(&frame) {
                return Err(StateError::DanglingAnimationFrame { animation, frame });
            }
            if !owned.insert(frame) {
                return Err(StateError::SharedFrame(frame));
            }
        }
    }
    match frames.ids().find(|id| !owned.contains(*id)) {
        Some(&orphan) => Err(StateError::OrphanFrame(orphan)),
        None => Ok(()),
    }
}

fn check_selection(state: &EditorState) -> Result<(), StateError> {
    if let Some(file) = state.selected_file() {
        if state.file(file).is_none() {
            return Err(StateError::DanglingSelectedFile(file));
        }
    }
    if let Some(animation) = state.selected_animation() {
        if state.animation(animation).is_none() {
            return Err(StateError::DanglingSelectedAnimation(animation));
        }
    }
    if let Some(frame) = state.selected_frame() {
        if state.frame(frame).is_none() {
            return Err(StateError::DanglingSelectedFrame(frame));
        }
    }
    Ok(())
}

fn check_file_frames(state: &EditorState) -> Result<(), StateError> {
    let files = state.entities().files.len();
    for (&frame, record) in state.entities().frames.iter() {
        if record.file_frames.len() > files {
            return Err(StateError::TooManyFileFrames {
                frame,
                file_frames: record.file_frames.len(),
                files,
            });
        }
    }
    Ok(())
}
