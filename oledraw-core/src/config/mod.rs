//! Configuration types
//!
//! Panel geometry and editor settings. Both are plain values handed to the
//! codec and editor at construction; nothing in the crate reads globals.

pub mod geometry;
pub mod types;

pub use geometry::*;
pub use types::*;
