//! File table, file order and file selection slices.

use spritesheet_common::FileId;
use std::sync::Arc;

use crate::action::Action;
use crate::state::{EditorState, File};
use crate::table::EntityTable;

/// Direction of a file order move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shift {
    Up,
    Down,
}

pub(super) fn file_order(prev: &EditorState, action: &Action) -> Arc<Vec<FileId>> {
    match *action {
        Action::AddFile { id, .. } => {
            let mut order = Vec::clone(&prev.file_order);
            order.push(id);
            Arc::new(order)
        },
        Action::MoveFileUp { id } => shifted(&prev.file_order, id, Shift::Up),
        Action::MoveFileDown { id } => shifted(&prev.file_order, id, Shift::Down),
        _ => Arc::clone(&prev.file_order),
    }
}

/// Swaps `id` with its neighbour. At either end the order is returned as is.
fn shifted(order: &Arc<Vec<FileId>>, id: FileId, shift: Shift) -> Arc<Vec<FileId>> {
    let Some(position) = order.iter().position(|&f| f == id) else {
        return Arc::clone(order);
    };
    let neighbour = match shift {
        Shift::Up => position.checked_sub(1),
        Shift::Down => Some(position + 1).filter(|&n| n < order.len()),
    };
    match neighbour {
        Some(neighbour) => {
            let mut next = Vec::clone(order);
            next.swap(position, neighbour);
            Arc::new(next)
        },
        None => Arc::clone(order),
    }
}

pub(super) fn files(prev: &EditorState, action: &Action) -> EntityTable<FileId, File> {
    let files = &prev.entities.files;
    match action {
        Action::AddFile { file_name, id } => files.with_inserted(
            *id,
            File {
                id: *id,
                name: file_name.clone(),
            },
        ),
        Action::RenameFile { file, name } => files.with_updated(file, |f| f.name.clone_from(name)),
        _ => files.clone(),
    }
}

pub(super) fn selected_file(prev: &EditorState, action: &Action) -> Option<FileId> {
    match *action {
        Action::AddFile { id, .. } => Some(id),
        Action::SelectFile { file } => file,
        _ => prev.selected_file,
    }
}
