//! The editor state tree.
//!
//! The tree is normalized: files, animations and frames live in their own
//! [`EntityTable`]s and refer to each other by id. Display order of files is
//! kept separately in `file_order`; animations have no order list and are
//! enumerated in insertion order.

use serde::{Deserialize, Serialize};
use spritesheet_common::{AnimationId, FileId, FrameId};
use std::sync::Arc;

use crate::table::EntityTable;

/// Default canvas width in pixels.
pub const DEFAULT_CANVAS_WIDTH: i64 = 300;

/// Default canvas height in pixels.
pub const DEFAULT_CANVAS_HEIGHT: i64 = 300;

/// Default frame duration in milliseconds.
pub const DEFAULT_FRAME_DURATION: i64 = 500;

/// An image file imported into the sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct File {
    /// File ID
    pub id: FileId,
    /// Display name
    pub name: String,
}

/// A named sequence of frames.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Animation {
    /// Animation ID
    pub id: AnimationId,
    /// Display name
    pub name: String,
    /// Frames in playback order
    pub frames: Vec<FrameId>,
}

/// Placement and visibility of one file within one frame.
///
/// File-frames have no id of their own. The file-frame at position `i` of a
/// frame belongs to the file at position `i` of the file order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileFrame {
    /// Horizontal offset in pixels
    pub left: i32,
    /// Vertical offset in pixels
    pub top: i32,
    /// Rotation in degrees
    pub rotation: i32,
    /// Whether the file is drawn in this frame
    pub visible: bool,
}

impl Default for FileFrame {
    fn default() -> Self {
        Self {
            left: 0,
            top: 0,
            rotation: 0,
            visible: true,
        }
    }
}

/// A single frame of an animation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Frame {
    /// Frame ID
    pub id: FrameId,
    /// How long the frame is shown, in milliseconds
    pub duration: i64,
    /// One entry per file known when the frame was created, in file order
    pub file_frames: Vec<FileFrame>,
}

impl Frame {
    /// Creates a frame with the default duration and one default file-frame per file.
    #[must_use]
    pub fn new(id: FrameId, file_count: usize) -> Self {
        Self {
            id,
            duration: DEFAULT_FRAME_DURATION,
            file_frames: vec![FileFrame::default(); file_count],
        }
    }
}

/// The entity tables of the editor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Entities {
    /// Imported files
    pub files: EntityTable<FileId, File>,
    /// Animations
    pub animations: EntityTable<AnimationId, Animation>,
    /// Frames of every animation
    pub frames: EntityTable<FrameId, Frame>,
}

/// Root state of the editor.
///
/// States are immutable: transitions go through [`crate::reduce`] and return
/// a new state that shares every untouched subtree with its input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorState {
    pub(crate) file_order: Arc<Vec<FileId>>,
    pub(crate) entities: Entities,
    pub(crate) selected_file: Option<FileId>,
    pub(crate) selected_animation: Option<AnimationId>,
    pub(crate) selected_frame: Option<FrameId>,
    pub(crate) canvas_width: i64,
    pub(crate) canvas_height: i64,
}

impl Default for EditorState {
    fn default() -> Self {
        Self::initial()
    }
}

impl EditorState {
    /// The bootstrap state: nothing loaded, nothing selected, 300x300 canvas.
    #[must_use]
    pub fn initial() -> Self {
        Self::with_canvas(DEFAULT_CANVAS_WIDTH, DEFAULT_CANVAS_HEIGHT)
    }

    /// An empty state with the given canvas size.
    #[must_use]
    pub fn with_canvas(width: i64, height: i64) -> Self {
        Self {
            file_order: Arc::new(Vec::new()),
            entities: Entities::default(),
            selected_file: None,
            selected_animation: None,
            selected_frame: None,
            canvas_width: width,
            canvas_height: height,
        }
    }

    /// File ids in display order.
    #[must_use]
    pub fn file_order(&self) -> &[FileId] {
        &self.file_order
    }

    /// Entity tables.
    #[must_use]
    pub fn entities(&self) -> &Entities {
        &self.entities
    }

    /// Looks up a file.
    #[must_use]
    pub fn file(&self, id: FileId) -> Option<&File> {
        self.entities.files.get(&id)
    }

    /// Looks up an animation.
    #[must_use]
    pub fn animation(&self, id: AnimationId) -> Option<&Animation> {
        self.entities.animations.get(&id)
    }

    /// Looks up a frame.
    #[must_use]
    pub fn frame(&self, id: FrameId) -> Option<&Frame> {
        self.entities.frames.get(&id)
    }

    /// Currently selected file.
    #[must_use]
    pub fn selected_file(&self) -> Option<FileId> {
        self.selected_file
    }

    /// Currently selected animation.
    #[must_use]
    pub fn selected_animation(&self) -> Option<AnimationId> {
        self.selected_animation
    }

    /// Currently selected frame.
    #[must_use]
    pub fn selected_frame(&self) -> Option<FrameId> {
        self.selected_frame
    }

    /// Canvas width in pixels.
    #[must_use]
    pub fn canvas_width(&self) -> i64 {
        self.canvas_width
    }

    /// Canvas height in pixels.
    #[must_use]
    pub fn canvas_height(&self) -> i64 {
        self.canvas_height
    }

    /// Position of a file in the display order.
    #[must_use]
    pub fn file_position(&self, id: FileId) -> Option<usize> {
        self.file_order.iter().position(|&f| f == id)
    }

    /// Checks whether the file order is the same allocation in both states.
    #[must_use]
    pub fn shares_file_order_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.file_order, &other.file_order)
    }
}
