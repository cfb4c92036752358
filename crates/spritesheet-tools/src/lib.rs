//! # Spritesheet Tools
//!
//! Development tools for the sprite-sheet editor.
//!
//! This crate provides:
//! - Action log parsing and replay
//! - TOML configuration for the `sprite-replay` binary

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod replay;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::*;
    pub use crate::replay::*;
}

pub use prelude::*;
