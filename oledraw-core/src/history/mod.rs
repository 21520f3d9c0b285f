//! Undo/redo history
//!
//! A linear list of full hardware-buffer snapshots with a cursor. Pushing
//! after an undo discards the redo branch.

pub mod store;

pub use store::{HistoryStore, Snapshot};
