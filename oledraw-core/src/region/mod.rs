//! Region extraction and clipboard
//!
//! Copies rectangular areas of the grid into minimal-size images and
//! places them back through cancellable paste sessions.

pub mod extract;
pub mod image;
pub mod paste;
pub mod rect;

pub use extract::copy_region;
pub use image::RegionImage;
pub use paste::{PasteMode, PasteSession};
pub use rect::{Rect, Selection};
