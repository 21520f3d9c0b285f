//! Logical pixel grid and rasterizers
//!
//! All drawing reads and writes a [`LogicalGrid`] through its single
//! bounds-checked `set_pixel`, so brush size is orthogonal to shape.

pub mod brush;
pub mod grid;
pub mod shapes;

pub use brush::{BrushSize, MAX_BRUSH_SIZE, MIN_BRUSH_SIZE};
pub use grid::LogicalGrid;
pub use shapes::{draw_ellipse, draw_line, draw_rectangle, draw_rectangle_between};
