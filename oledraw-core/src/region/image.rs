//! Minimal-size monochrome images

use alloc::vec;
use alloc::vec::Vec;

use crate::raster::LogicalGrid;

/// Rectangular block of pixels cut from a grid
///
/// Row-major; pixel `(x, y)` is stored at `y * width + x`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RegionImage {
    width: u16,
    height: u16,
    cells: Vec<bool>,
}

impl RegionImage {
    /// All-off image of the given size
    pub fn blank(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![false; width as usize * height as usize],
        }
    }

    /// Snapshot of an entire grid
    pub fn from_grid(grid: &LogicalGrid) -> Self {
        Self {
            width: grid.width(),
            height: grid.height(),
            cells: grid.cells().to_vec(),
        }
    }

    /// Build from one palette index per pixel, row-major
    ///
    /// Index 1 is a lit pixel; every other value is off. Missing trailing
    /// entries are off.
    pub fn from_indices(width: u16, height: u16, indices: &[u8]) -> Self {
        let mut image = Self::blank(width, height);
        for (cell, &index) in image.cells.iter_mut().zip(indices) {
            *cell = index == 1;
        }
        image
    }

    /// One palette index per pixel, row-major (1 = on, 0 = off)
    pub fn to_indices(&self) -> Vec<u8> {
        self.cells.iter().map(|&on| on as u8).collect()
    }

    /// Width in pixels
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Height in pixels
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Whether the image has zero area
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let x = u16::try_from(x).ok()?;
        let y = u16::try_from(y).ok()?;
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    /// Pixel state; out-of-range reads are off
    pub fn get(&self, x: i32, y: i32) -> bool {
        self.index(x, y).is_some_and(|i| self.cells[i])
    }

    /// Set one pixel; out-of-range writes are ignored
    pub fn set(&mut self, x: i32, y: i32, on: bool) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = on;
        }
    }

    /// Number of lit pixels
    pub fn lit_count(&self) -> usize {
        self.cells.iter().filter(|&&on| on).count()
    }

    /// Every pixel as `(x, y, on)`, row-major
    pub fn pixels(&self) -> impl Iterator<Item = (u16, u16, bool)> + '_ {
        let width = self.width.max(1) as usize;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &on)| ((i % width) as u16, (i / width) as u16, on))
    }
}
