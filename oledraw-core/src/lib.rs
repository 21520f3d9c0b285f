//! Bitmap engine for small paged monochrome displays
//!
//! This crate contains everything a pixel editor needs below the UI layer:
//!
//! - Logical pixel grid with bounds-absorbing writes and square brushes
//! - Rasterizers (Bresenham line, rectangle, midpoint ellipse)
//! - Page codec between the grid and SH1106/SSD1306 style display RAM
//! - Region extraction and paste sessions for the clipboard
//! - Linear undo/redo history over full-buffer snapshots
//! - Tool dispatch and the `Editor` facade tying it all together
//!
//! Nothing here performs I/O. Invalid coordinates, degenerate shapes and
//! exhausted history are absorbed silently; only configuration surfaces
//! errors.

#![no_std]
#![deny(unsafe_code)]

extern crate alloc;

#[macro_use]
mod fmt;

pub mod codec;
pub mod config;
pub mod editor;
pub mod history;
pub mod raster;
pub mod region;

pub use codec::{HardwareCodec, PageLayout};
pub use config::{EditorConfig, GeometryError, PanelGeometry};
pub use editor::{Editor, Tool};
pub use history::{HistoryStore, Snapshot};
pub use raster::{BrushSize, LogicalGrid};
pub use region::{PasteMode, PasteSession, Rect, RegionImage, Selection};
