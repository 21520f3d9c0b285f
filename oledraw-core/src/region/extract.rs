//! Copying rectangles out of a grid

use super::{Rect, RegionImage};
use crate::raster::LogicalGrid;

/// Copy the part of `rect` that lies on the grid
///
/// The rectangle is clipped to the grid first. Returns `None` when nothing
/// of it remains, otherwise an image sized to the clipped rectangle.
pub fn copy_region(grid: &LogicalGrid, rect: Rect) -> Option<RegionImage> {
    let bounds = Rect::new(0, 0, grid.width() as i32, grid.height() as i32);
    let Some(clip) = rect.intersect(&bounds) else {
        trace!("copy_region: empty intersection");
        return None;
    };

    let mut image = RegionImage::blank(clip.width as u16, clip.height as u16);
    for dy in 0..clip.height {
        for dx in 0..clip.width {
            if grid.get_pixel(clip.x + dx, clip.y + dy) {
                image.set(dx, dy, true);
            }
        }
    }
    debug!(
        "copy_region: {}x{} at ({}, {})",
        clip.width, clip.height, clip.x, clip.y
    );
    Some(image)
}
