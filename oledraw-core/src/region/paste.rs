//! Paste sessions
//!
//! A session holds a pending image and a candidate position. Nothing reaches
//! the grid until [`PasteSession::commit`]; dropping the session cancels it.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::RegionImage;
use crate::raster::{BrushSize, LogicalGrid};

/// How image pixels combine with the grid on commit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PasteMode {
    /// Only lit image pixels are written
    #[default]
    Overlay,
    /// Every image pixel overwrites its target
    Cover,
}

/// Pending placement of a region image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasteSession {
    image: RegionImage,
    position: (i32, i32),
    mode: PasteMode,
}

impl PasteSession {
    /// Session placing `image` at `position` in the default mode
    pub fn new(image: RegionImage, position: (i32, i32)) -> Self {
        Self {
            image,
            position,
            mode: PasteMode::default(),
        }
    }

    /// Same session with another compositing mode
    pub fn with_mode(mut self, mode: PasteMode) -> Self {
        self.mode = mode;
        self
    }

    /// Image being placed
    pub fn image(&self) -> &RegionImage {
        &self.image
    }

    /// Top-left corner the image will be written at
    pub fn position(&self) -> (i32, i32) {
        self.position
    }

    /// Current compositing mode
    pub fn mode(&self) -> PasteMode {
        self.mode
    }

    /// Switch the compositing mode
    pub fn set_mode(&mut self, mode: PasteMode) {
        self.mode = mode;
    }

    /// Move the top-left corner to an absolute position
    pub fn move_to(&mut self, x: i32, y: i32) {
        self.position = (x, y);
    }

    /// Shift the position by a relative offset
    pub fn nudge(&mut self, dx: i32, dy: i32) {
        self.position = (
            self.position.0.saturating_add(dx),
            self.position.1.saturating_add(dy),
        );
    }

    /// Write the image into the grid and end the session
    ///
    /// Target pixels off the grid are skipped. Returns whether any pixel
    /// was written.
    pub fn commit(self, grid: &mut LogicalGrid) -> bool {
        let (ox, oy) = (self.position.0 as i64, self.position.1 as i64);
        let (gw, gh) = (grid.width() as i64, grid.height() as i64);
        let mut written = false;

        for (x, y, on) in self.image.pixels() {
            if !on && self.mode == PasteMode::Overlay {
                continue;
            }
            let tx = ox + x as i64;
            let ty = oy + y as i64;
            if !(0..gw).contains(&tx) || !(0..gh).contains(&ty) {
                continue;
            }
            grid.set_pixel(tx as i32, ty as i32, on, BrushSize::SINGLE);
            written = true;
        }

        debug!(
            "paste commit at ({}, {}), written={}",
            self.position.0, self.position.1, written
        );
        written
    }

    /// Discard the session, handing back its image
    pub fn cancel(self) -> RegionImage {
        trace!("paste cancelled");
        self.image
    }
}
