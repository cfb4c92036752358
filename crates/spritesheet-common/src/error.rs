//! Error types for the sprite-sheet editor.
//!
//! The reducer itself is total and never produces these. They come out of
//! action parsing, invariant validation, snapshot restore and tooling.

use thiserror::Error;

use crate::ids::{AnimationId, FileId, FrameId};
use crate::version::SchemaVersion;

/// Error returned by the fallible store operations.
#[derive(Debug, Error)]
pub enum SpriteError {
    /// State invariant violations
    #[error("State error: {0}")]
    State(#[from] StateError),

    /// Action decoding errors
    #[error("Action error: {0}")]
    Action(#[from] ActionError),

    /// Snapshot errors
    #[error("Snapshot error: {0}")]
    Snapshot(#[from] SnapshotError),
}

/// A broken referential invariant in an editor state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    /// File order names a file that is not in the file table
    #[error("File order references missing file {0}")]
    DanglingFileOrder(FileId),

    /// File appears more than once in the file order
    #[error("File {0} appears more than once in the file order")]
    DuplicateFileOrder(FileId),

    /// File exists but is not part of the file order
    #[error("File {0} is missing from the file order")]
    UnorderedFile(FileId),

    /// Animation lists a frame that is not in the frame table
    #[error("Animation {animation} references missing frame {frame}")]
    DanglingAnimationFrame {
        /// Owning animation
        animation: AnimationId,
        /// Missing frame
        frame: FrameId,
    },

    /// Frame is listed by more than one animation, or twice by one
    #[error("Frame {0} is owned more than once")]
    SharedFrame(FrameId),

    /// Frame is not listed by any animation
    #[error("Frame {0} has no owning animation")]
    OrphanFrame(FrameId),

    /// A record's own id does not match the key it is stored under
    #[error("Record stored under key {key} carries id {id}")]
    KeyMismatch {
        /// Table key
        key: i64,
        /// Id inside the record
        id: i64,
    },

    /// Selected file does not exist
    #[error("Selected file {0} does not exist")]
    DanglingSelectedFile(FileId),

    /// Selected animation does not exist
    #[error("Selected animation {0} does not exist")]
    DanglingSelectedAnimation(AnimationId),

    /// Selected frame does not exist
    #[error("Selected frame {0} does not exist")]
    DanglingSelectedFrame(FrameId),

    /// Frame carries more file-frames than there are files
    #[error("Frame {frame} has {file_frames} file-frames but only {files} files exist")]
    TooManyFileFrames {
        /// Offending frame
        frame: FrameId,
        /// File-frame count
        file_frames: usize,
        /// File count
        files: usize,
    },
}

/// Action decoding errors.
#[derive(Debug, Error)]
pub enum ActionError {
    /// Action JSON could not be decoded
    #[error("Malformed action: {0}")]
    Malformed(String),

    /// A line of an action log could not be decoded
    #[error("Malformed action on line {line}: {message}")]
    MalformedLine {
        /// 1-based line number
        line: usize,
        /// Decoder message
        message: String,
    },

    /// Action could not be encoded
    #[error("Failed to encode action: {0}")]
    Encode(String),
}

/// Snapshot save/restore errors.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Serialization failed
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Deserialization failed
    #[error("Deserialization error: {0}")]
    Deserialization(String),

    /// Snapshot was written by an incompatible schema
    #[error("Unsupported snapshot version {found} (supported: {supported})")]
    UnsupportedVersion {
        /// Version found in the snapshot
        found: SchemaVersion,
        /// Version this build understands
        supported: SchemaVersion,
    },

    /// Snapshot decoded but its state is inconsistent
    #[error("Snapshot state is invalid: {0}")]
    Invalid(#[from] StateError),
}

/// Result type alias for editor operations.
pub type SpriteResult<T> = Result<T, SpriteError>;
