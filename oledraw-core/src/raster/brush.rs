//! Square brush stamp

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Smallest brush side length
pub const MIN_BRUSH_SIZE: u8 = 1;

/// Largest brush side length
pub const MAX_BRUSH_SIZE: u8 = 6;

/// Side length of the square stamped around every painted pixel
///
/// Always within `[MIN_BRUSH_SIZE, MAX_BRUSH_SIZE]`; out-of-range requests
/// are clamped rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BrushSize(u8);

impl BrushSize {
    /// Single pixel brush
    pub const SINGLE: Self = Self(MIN_BRUSH_SIZE);

    /// Create a brush, clamping `size` into the supported range
    pub const fn new(size: i32) -> Self {
        if size < MIN_BRUSH_SIZE as i32 {
            Self(MIN_BRUSH_SIZE)
        } else if size > MAX_BRUSH_SIZE as i32 {
            Self(MAX_BRUSH_SIZE)
        } else {
            Self(size as u8)
        }
    }

    /// Side length in pixels
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Distance from the stamp's top-left corner to its anchor pixel
    ///
    /// Even sizes cannot be centered; the extra row and column fall on the
    /// bottom-right side.
    pub const fn offset(self) -> i64 {
        (self.0 as i64 - 1) / 2
    }

    /// Whether this brush writes exactly one pixel
    pub const fn is_single(self) -> bool {
        self.0 <= 1
    }
}

impl Default for BrushSize {
    fn default() -> Self {
        Self::SINGLE
    }
}

impl From<u8> for BrushSize {
    fn from(size: u8) -> Self {
        Self::new(size as i32)
    }
}
