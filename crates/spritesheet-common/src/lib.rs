//! # Spritesheet Common
//!
//! Common types, utilities, and shared abstractions for the sprite-sheet editor.
//!
//! This crate provides foundational types used across the editor crates:
//! - ID types (FileId, AnimationId, FrameId)
//! - Version information for snapshots and action logs
//! - Common error types
//! - Prelude for convenient imports

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod error;
pub mod ids;
pub mod version;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::*;
    pub use crate::ids::*;
    pub use crate::version::*;
}

pub use prelude::*;
