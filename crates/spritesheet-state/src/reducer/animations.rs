//! Animation table and animation selection slices.

use spritesheet_common::AnimationId;

use crate::action::Action;
use crate::selectors;
use crate::state::{Animation, EditorState};
use crate::table::EntityTable;

pub(super) fn animations(
    prev: &EditorState,
    action: &Action,
) -> EntityTable<AnimationId, Animation> {
    let animations = &prev.entities.animations;
    match action {
        Action::AddAnimation { animation_name, id } => animations.with_inserted(
            *id,
            Animation {
                id: *id,
                name: animation_name.clone(),
                frames: Vec::new(),
            },
        ),
        Action::RenameAnimation {
            animation,
            new_name,
        } => animations.with_updated(animation, |a| a.name.clone_from(new_name)),
        Action::AddFrameToAnimation { animation, id } => {
            animations.with_updated(animation, |a| a.frames.push(*id))
        },
        Action::DeleteFrame { id } => match selectors::owning_animation(prev, *id) {
            Some(owner) => animations.with_updated(&owner, |a| a.frames.retain(|f| f != id)),
            None => animations.clone(),
        },
        _ => animations.clone(),
    }
}

pub(super) fn selected_animation(prev: &EditorState, action: &Action) -> Option<AnimationId> {
    match *action {
        Action::AddAnimation { id, .. } => Some(id),
        Action::SelectAnimation { animation } => animation,
        _ => prev.selected_animation,
    }
}
