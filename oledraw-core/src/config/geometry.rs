//! Panel geometry
//!
//! Describes how a controller lays out its display RAM: the visible pixel
//! area, the physical width of one RAM page and the column where the
//! visible area starts inside that page.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Height of one RAM page in pixels
pub const PAGE_HEIGHT: u16 = 8;

/// Geometry validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GeometryError {
    /// Width or height is zero
    EmptyPanel,
    /// Height is not a whole number of pages
    HeightNotPageAligned,
    /// Visible columns plus column offset do not fit in one RAM page
    RowOverflow,
}

/// Physical layout of a paged display controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PanelGeometry {
    /// Visible width in pixels
    pub width: u16,
    /// Visible height in pixels
    pub height: u16,
    /// Bytes per RAM page row (may exceed `width`)
    pub ram_page_width: u16,
    /// RAM column holding visible column 0
    pub column_offset: u16,
}

impl PanelGeometry {
    /// SH1106: 132 column RAM, visible area starts at column 2
    pub const SH1106: Self = Self {
        width: 128,
        height: 64,
        ram_page_width: 132,
        column_offset: 2,
    };

    /// SSD1306: RAM matches the visible area
    pub const SSD1306: Self = Self {
        width: 128,
        height: 64,
        ram_page_width: 128,
        column_offset: 0,
    };

    /// Create a validated geometry
    pub const fn new(
        width: u16,
        height: u16,
        ram_page_width: u16,
        column_offset: u16,
    ) -> Result<Self, GeometryError> {
        let geometry = Self {
            width,
            height,
            ram_page_width,
            column_offset,
        };
        match geometry.validate() {
            Ok(()) => Ok(geometry),
            Err(e) => Err(e),
        }
    }

    /// Check the geometry invariants
    pub const fn validate(&self) -> Result<(), GeometryError> {
        if self.width == 0 || self.height == 0 {
            return Err(GeometryError::EmptyPanel);
        }
        if self.height % PAGE_HEIGHT != 0 {
            return Err(GeometryError::HeightNotPageAligned);
        }
        if self.column_offset as u32 + self.width as u32 > self.ram_page_width as u32 {
            return Err(GeometryError::RowOverflow);
        }
        Ok(())
    }

    /// Number of RAM pages
    pub const fn pages(&self) -> usize {
        (self.height / PAGE_HEIGHT) as usize
    }

    /// Size of a full hardware buffer in bytes
    pub const fn buffer_len(&self) -> usize {
        self.ram_page_width as usize * self.pages()
    }

    /// Byte index of a logical pixel in the hardware buffer
    ///
    /// Coordinates are not checked against the visible area; callers
    /// validate the returned index against the buffer length.
    pub const fn byte_index(&self, x: usize, y: usize) -> usize {
        let page = y / PAGE_HEIGHT as usize;
        page * self.ram_page_width as usize + x + self.column_offset as usize
    }
}

impl Default for PanelGeometry {
    fn default() -> Self {
        Self::SH1106
    }
}
