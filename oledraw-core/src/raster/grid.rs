//! Logical pixel grid
//!
//! Device-independent boolean bitmap, row-major. Every access is bounds
//! checked; coordinates outside the grid are absorbed without error so a
//! stray pointer position never interrupts drawing.

use alloc::vec;
use alloc::vec::Vec;

use super::brush::BrushSize;
use crate::config::PanelGeometry;

/// Boolean pixel array the rasterizers draw into
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicalGrid {
    width: u16,
    height: u16,
    cells: Vec<bool>,
}

impl Default for LogicalGrid {
    fn default() -> Self {
        Self::for_panel(&PanelGeometry::default())
    }
}

impl LogicalGrid {
    /// Create a blank grid
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![false; width as usize * height as usize],
        }
    }

    /// Create a blank grid covering a panel's visible area
    pub fn for_panel(geometry: &PanelGeometry) -> Self {
        Self::new(geometry.width, geometry.height)
    }

    /// Width in pixels
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Height in pixels
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Cell index for a coordinate, if it lies on the grid
    fn index(&self, x: i64, y: i64) -> Option<usize> {
        if x >= 0 && y >= 0 && x < self.width as i64 && y < self.height as i64 {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    fn write(&mut self, x: i64, y: i64, on: bool) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = on;
        }
    }

    /// Paint the brush stamp anchored at (x, y)
    ///
    /// A single-pixel brush writes exactly (x, y). Larger brushes write the
    /// `size × size` square starting `offset` pixels up and left of the
    /// anchor; each cell is checked on its own and off-grid cells are
    /// skipped, never clamped.
    pub fn set_pixel(&mut self, x: i32, y: i32, on: bool, brush: BrushSize) {
        let (x, y) = (x as i64, y as i64);
        if brush.is_single() {
            self.write(x, y, on);
            return;
        }

        let size = brush.get() as i64;
        let offset = brush.offset();
        for dy in 0..size {
            for dx in 0..size {
                self.write(x + dx - offset, y + dy - offset, on);
            }
        }
    }

    /// Read a pixel; anything off the grid reads as off
    pub fn get_pixel(&self, x: i32, y: i32) -> bool {
        self.index(x as i64, y as i64)
            .map(|i| self.cells[i])
            .unwrap_or(false)
    }

    /// Turn every pixel off
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Number of lit pixels
    pub fn lit_count(&self) -> usize {
        self.cells.iter().filter(|&&on| on).count()
    }

    /// Whether no pixel is lit
    pub fn is_blank(&self) -> bool {
        !self.cells.iter().any(|&on| on)
    }

    /// Iterate the coordinates of lit pixels in row-major order
    pub fn lit_pixels(&self) -> impl Iterator<Item = (u16, u16)> + '_ {
        let width = self.width as usize;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &on)| on)
            .map(move |(i, _)| ((i % width) as u16, (i / width) as u16))
    }

    /// Row-major cell slice
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_new_grid_is_blank() {
        let grid = LogicalGrid::default();
        assert_eq!(grid.width(), 128);
        assert_eq!(grid.height(), 64);
        assert_eq!(grid.cells().len(), 128 * 64);
        assert!(grid.is_blank());
    }

    #[test]
    fn test_out_of_range_is_absorbed() {
        let mut grid = LogicalGrid::default();
        grid.set_pixel(-1, 0, true, BrushSize::SINGLE);
        grid.set_pixel(128, 0, true, BrushSize::SINGLE);
        grid.set_pixel(0, 64, true, BrushSize::SINGLE);
        grid.set_pixel(i32::MIN, i32::MAX, true, BrushSize::new(6));
        assert!(grid.is_blank());
        assert!(!grid.get_pixel(-1, -1));
        assert!(!grid.get_pixel(1000, 5));
    }

    #[test]
    fn test_brush_at_corner_writes_in_bounds_subset() {
        let mut grid = LogicalGrid::default();
        grid.set_pixel(0, 0, true, BrushSize::new(3));
        // 3x3 around the origin keeps only the 2x2 inside the grid
        assert_eq!(grid.lit_count(), 4);
        assert!(grid.get_pixel(0, 0));
        assert!(grid.get_pixel(1, 1));
        assert!(!grid.get_pixel(2, 2));
    }

    #[test]
    fn test_even_brush_extends_down_right() {
        let mut grid = LogicalGrid::default();
        grid.set_pixel(10, 10, true, BrushSize::new(2));
        let lit: Vec<_> = grid.lit_pixels().collect();
        assert_eq!(lit, vec![(10, 10), (11, 10), (10, 11), (11, 11)]);
    }

    #[test]
    fn test_erase_with_brush() {
        let mut grid = LogicalGrid::default();
        grid.set_pixel(20, 20, true, BrushSize::new(5));
        assert_eq!(grid.lit_count(), 25);
        grid.set_pixel(20, 20, false, BrushSize::new(3));
        assert_eq!(grid.lit_count(), 16);
        assert!(!grid.get_pixel(20, 20));
        assert!(grid.get_pixel(18, 18));
    }

    #[test]
    fn test_clear() {
        let mut grid = LogicalGrid::new(16, 8);
        grid.set_pixel(3, 3, true, BrushSize::new(4));
        assert!(!grid.is_blank());
        grid.clear();
        assert!(grid.is_blank());
    }

    proptest! {
        #[test]
        fn prop_set_get_identity(x in 0i32..128, y in 0i32..64) {
            let mut grid = LogicalGrid::default();
            grid.set_pixel(x, y, true, BrushSize::SINGLE);
            prop_assert!(grid.get_pixel(x, y));
            prop_assert_eq!(grid.lit_count(), 1);
            grid.set_pixel(x, y, false, BrushSize::SINGLE);
            prop_assert!(!grid.get_pixel(x, y));
        }

        #[test]
        fn prop_brush_never_escapes_stamp(
            x in -8i32..136,
            y in -8i32..72,
            size in 1i32..=6,
        ) {
            let mut grid = LogicalGrid::default();
            let brush = BrushSize::new(size);
            grid.set_pixel(x, y, true, brush);

            let offset = brush.offset() as i32;
            let (left, top) = (x - offset, y - offset);
            let right = left + size - 1;
            let bottom = top + size - 1;
            let expected = ((right.min(127) - left.max(0) + 1).max(0)
                * (bottom.min(63) - top.max(0) + 1).max(0)) as usize;

            prop_assert_eq!(grid.lit_count(), expected);
            for (px, py) in grid.lit_pixels() {
                let (px, py) = (px as i32, py as i32);
                prop_assert!(px >= left && px <= right && py >= top && py <= bottom);
            }
        }
    }

    #[test]
    fn test_brush_fuzz_every_edge() {
        let mut grid = LogicalGrid::default();
        for size in 1..=6 {
            let brush = BrushSize::new(size);
            for x in -3..=130 {
                for y in [-3, -1, 0, 1, 62, 63, 64, 66] {
                    grid.set_pixel(x, y, true, brush);
                }
            }
            for y in -3..=66 {
                for x in [-3, -1, 0, 1, 126, 127, 128, 130] {
                    grid.set_pixel(x, y, true, brush);
                }
            }
        }
        assert!(grid.get_pixel(0, 0));
        assert!(grid.get_pixel(127, 63));
    }
}
