//! Page layout encoder and decoder

use alloc::vec;
use alloc::vec::Vec;

use crate::config::{PanelGeometry, PAGE_HEIGHT};
use crate::raster::{BrushSize, LogicalGrid};
use crate::region::RegionImage;

/// Byte layout used when encoding a region on its own
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PageLayout {
    /// `ceil(h / 8)` pages of exactly `w` bytes each
    #[default]
    Packed,
    /// Each page padded to a full RAM row: `column_offset` leading zero
    /// bytes, the region's columns, then zeros up to `ram_page_width`
    Framed,
}

/// Stateless translator bound to one controller geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HardwareCodec {
    geometry: PanelGeometry,
}

impl HardwareCodec {
    /// Create a codec for a controller
    pub const fn new(geometry: PanelGeometry) -> Self {
        Self { geometry }
    }

    /// Geometry this codec encodes for
    pub const fn geometry(&self) -> &PanelGeometry {
        &self.geometry
    }

    /// Size of a full hardware buffer
    pub const fn buffer_len(&self) -> usize {
        self.geometry.buffer_len()
    }

    /// Encode the visible area of a grid into a full hardware buffer
    ///
    /// Columns of the RAM row outside the visible window stay zero.
    pub fn encode(&self, grid: &LogicalGrid) -> Vec<u8> {
        let mut buffer = vec![0u8; self.buffer_len()];
        let (width, height) = (self.geometry.width, self.geometry.height);

        for (x, y) in grid.lit_pixels() {
            if x >= width || y >= height {
                continue;
            }
            let index = self.geometry.byte_index(x as usize, y as usize);
            if let Some(byte) = buffer.get_mut(index) {
                *byte |= 1 << (y % PAGE_HEIGHT);
            }
        }

        buffer
    }

    /// Load a hardware buffer into `grid`, replacing its contents
    ///
    /// The grid is cleared first. Bytes that would lie past the end of
    /// `data` are treated as absent, so a short or empty buffer leaves the
    /// corresponding pixels off.
    pub fn decode_into(&self, grid: &mut LogicalGrid, data: &[u8]) {
        grid.clear();
        if data.len() != self.buffer_len() {
            warn!(
                "hardware buffer is {} bytes, expected {}",
                data.len(),
                self.buffer_len()
            );
        }
        if data.is_empty() {
            return;
        }

        for page in 0..self.geometry.pages() {
            for x in 0..self.geometry.width as usize {
                let index = self.geometry.byte_index(x, page * PAGE_HEIGHT as usize);
                let Some(&byte) = data.get(index) else {
                    continue;
                };
                for bit in 0..PAGE_HEIGHT as usize {
                    if (byte >> bit) & 0x01 != 0 {
                        let y = page * PAGE_HEIGHT as usize + bit;
                        grid.set_pixel(x as i32, y as i32, true, BrushSize::SINGLE);
                    }
                }
            }
        }
    }

    /// Decode a hardware buffer into a new grid sized to the panel
    pub fn decode(&self, data: &[u8]) -> LogicalGrid {
        let mut grid = LogicalGrid::for_panel(&self.geometry);
        self.decode_into(&mut grid, data);
        grid
    }

    /// Page-organize a region using its own width and height
    ///
    /// Pixels of the last page below the region's height encode as 0.
    pub fn region_bytes(&self, image: &RegionImage, layout: PageLayout) -> Vec<u8> {
        let (w, h) = (image.width() as usize, image.height() as usize);
        let pages = h.div_ceil(PAGE_HEIGHT as usize);
        let (lead, row) = match layout {
            PageLayout::Packed => (0, w),
            PageLayout::Framed => {
                let lead = self.geometry.column_offset as usize;
                (lead, (self.geometry.ram_page_width as usize).max(lead + w))
            }
        };

        let mut bytes = vec![0u8; pages * row];
        for page in 0..pages {
            for x in 0..w {
                let mut byte = 0u8;
                for bit in 0..PAGE_HEIGHT as usize {
                    let y = page * PAGE_HEIGHT as usize + bit;
                    if y < h && image.get(x as i32, y as i32) {
                        byte |= 1 << bit;
                    }
                }
                bytes[page * row + lead + x] = byte;
            }
        }
        bytes
    }

    /// Decode a packed region layout back into an image
    ///
    /// Missing trailing bytes read as 0.
    pub fn region_from_bytes(&self, width: u16, height: u16, data: &[u8]) -> RegionImage {
        let mut image = RegionImage::blank(width, height);
        let pages = (height as usize).div_ceil(PAGE_HEIGHT as usize);
        for page in 0..pages {
            for x in 0..width as usize {
                let Some(&byte) = data.get(page * width as usize + x) else {
                    return image;
                };
                for bit in 0..PAGE_HEIGHT as usize {
                    let y = page * PAGE_HEIGHT as usize + bit;
                    if y < height as usize && (byte >> bit) & 0x01 != 0 {
                        image.set(x as i32, y as i32, true);
                    }
                }
            }
        }
        image
    }
}
