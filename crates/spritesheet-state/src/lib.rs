//! # Spritesheet State
//!
//! The state core of the sprite-sheet editor.
//!
//! This crate provides a pure reducer over a normalized, immutable state tree:
//! - Copy-on-write entity tables for files, animations and frames
//! - The root state with file order, selections and canvas size
//! - Tagged actions decoded from JSON
//! - Slice reducers combined into one transition function
//! - Invariant checks, selectors and versioned snapshots
//! - A single-writer store that folds actions

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod action;
pub mod invariants;
pub mod reducer;
pub mod selectors;
pub mod snapshot;
pub mod state;
pub mod store;
pub mod table;

pub use reducer::reduce;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::action::*;
    pub use crate::reducer::reduce;
    pub use crate::snapshot::*;
    pub use crate::state::*;
    pub use crate::store::*;
    pub use crate::table::*;
}
