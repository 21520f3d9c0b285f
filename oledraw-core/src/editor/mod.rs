//! Editor facade
//!
//! Owns the canvas and everything around it: codec, history, brush,
//! selection, clipboard and the pending paste. Every mutation that should
//! be undoable ends in [`Editor::commit`], after the drawing completes.

pub mod tool;

pub use tool::Tool;

use alloc::vec::Vec;

use crate::codec::{HardwareCodec, PageLayout};
use crate::config::{EditorConfig, GeometryError, PanelGeometry};
use crate::history::{HistoryStore, Snapshot};
use crate::raster::{self, BrushSize, LogicalGrid};
use crate::region::{self, PasteSession, Rect, RegionImage, Selection};

/// Pixel editor state for one panel
#[derive(Debug, Clone)]
pub struct Editor {
    grid: LogicalGrid,
    codec: HardwareCodec,
    history: HistoryStore,
    brush: BrushSize,
    selection_min: u16,
    selection: Option<Selection>,
    clipboard: Option<RegionImage>,
    paste: Option<PasteSession>,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(PanelGeometry::default())
    }
}

impl Editor {
    /// Blank editor for a panel; history starts at the blank canvas
    pub fn new(geometry: PanelGeometry) -> Self {
        let grid = LogicalGrid::for_panel(&geometry);
        let codec = HardwareCodec::new(geometry);
        let history = HistoryStore::with_initial(Snapshot::from(codec.encode(&grid)));
        Self {
            grid,
            codec,
            history,
            brush: BrushSize::SINGLE,
            selection_min: crate::config::DEFAULT_SELECTION_MIN,
            selection: None,
            clipboard: None,
            paste: None,
        }
    }

    /// Build from a loaded configuration
    pub fn from_config(config: &EditorConfig) -> Result<Self, GeometryError> {
        config.panel.validate()?;
        let mut editor = Self::new(config.panel);
        editor.brush = BrushSize::new(config.brush as i32);
        editor.selection_min = config.selection_min;
        Ok(editor)
    }

    /// Logical canvas
    pub fn grid(&self) -> &LogicalGrid {
        &self.grid
    }

    /// Codec for the configured panel
    pub fn codec(&self) -> &HardwareCodec {
        &self.codec
    }

    /// Undo history
    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    /// Brush used by tools and shapes
    pub fn brush(&self) -> BrushSize {
        self.brush
    }

    /// Change the brush; out-of-range sizes are clamped
    pub fn set_brush(&mut self, size: i32) {
        self.brush = BrushSize::new(size);
    }

    /// Active selection, if any
    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }

    /// Whole canvas as a rectangle
    fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.grid.width() as i32, self.grid.height() as i32)
    }

    /// Drop the selection without touching the canvas
    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// Last copied or cut region
    pub fn clipboard(&self) -> Option<&RegionImage> {
        self.clipboard.as_ref()
    }

    /// Pending paste, if one is open
    pub fn paste_session(&self) -> Option<&PasteSession> {
        self.paste.as_ref()
    }

    /// Pending paste, for moving it around before commit
    pub fn paste_session_mut(&mut self) -> Option<&mut PasteSession> {
        self.paste.as_mut()
    }

    // Canvas operations. None of these touch history on their own.

    /// Turn every pixel off
    pub fn clear(&mut self) {
        self.grid.clear();
    }

    /// Write one brush stamp
    pub fn set_pixel(&mut self, x: i32, y: i32, on: bool, brush: BrushSize) {
        self.grid.set_pixel(x, y, on, brush);
    }

    /// Pixel state; off-canvas reads are off
    pub fn get_pixel(&self, x: i32, y: i32) -> bool {
        self.grid.get_pixel(x, y)
    }

    /// Line with the current brush
    pub fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, on: bool) {
        raster::draw_line(&mut self.grid, x0, y0, x1, y1, on, self.brush);
    }

    /// Rectangle with the current brush
    pub fn draw_rectangle(&mut self, x: i32, y: i32, w: i32, h: i32, on: bool, fill: bool) {
        raster::draw_rectangle(&mut self.grid, x, y, w, h, on, fill, self.brush);
    }

    /// Ellipse with the current brush
    pub fn draw_ellipse(&mut self, p0: (i32, i32), p1: (i32, i32), on: bool) {
        raster::draw_ellipse(&mut self.grid, p0, p1, on, self.brush);
    }

    /// Current canvas in display RAM layout
    pub fn hardware_buffer(&self) -> Vec<u8> {
        self.codec.encode(&self.grid)
    }

    /// Replace the canvas from display RAM bytes
    pub fn set_from_hardware_buffer(&mut self, data: &[u8]) {
        self.codec.decode_into(&mut self.grid, data);
    }

    /// Copy of the on-canvas part of `rect`
    pub fn copy_region(&self, rect: Rect) -> Option<RegionImage> {
        region::copy_region(&self.grid, rect)
    }

    /// Page bytes for `image` in the given layout
    pub fn region_to_hardware_bytes(&self, image: &RegionImage, layout: PageLayout) -> Vec<u8> {
        self.codec.region_bytes(image, layout)
    }

    // History

    /// Record the current canvas; identical consecutive states are merged
    pub fn commit(&mut self) {
        self.history.push(Snapshot::from(self.hardware_buffer()));
    }

    /// Restore the previous committed canvas
    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(snapshot) => {
                self.codec.decode_into(&mut self.grid, snapshot.as_bytes());
                true
            }
            None => false,
        }
    }

    /// Restore the next committed canvas
    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(snapshot) => {
                self.codec.decode_into(&mut self.grid, snapshot.as_bytes());
                true
            }
            None => false,
        }
    }

    /// Whether an earlier commit exists
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Whether a later commit exists
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    // Tools

    /// Run `tool` for a drag from `from` to `to`
    ///
    /// Drawing tools commit afterwards. Select only updates the selection.
    pub fn apply_tool(&mut self, tool: Tool, from: (i32, i32), to: (i32, i32)) {
        let (x0, y0) = from;
        let (x1, y1) = to;
        match tool {
            Tool::Pen => self.draw_line(x0, y0, x1, y1, true),
            Tool::Eraser => self.draw_line(x0, y0, x1, y1, false),
            Tool::Line => self.draw_line(x0, y0, x1, y1, true),
            Tool::Rectangle => {
                raster::draw_rectangle_between(&mut self.grid, from, to, true, false, self.brush)
            }
            Tool::FilledRectangle => {
                raster::draw_rectangle_between(&mut self.grid, from, to, true, true, self.brush)
            }
            Tool::Ellipse => self.draw_ellipse(from, to, true),
            Tool::Select => {
                self.selection = Selection::from_drag(from, to, self.selection_min);
                trace!("select: {}", self.selection.is_some());
            }
        }
        if tool.draws() {
            self.commit();
        }
    }

    // Clipboard

    /// Copy the selection into the clipboard
    pub fn copy(&mut self) -> bool {
        let Some(selection) = self.selection else {
            return false;
        };
        match self.copy_region(selection.rect()) {
            Some(image) => {
                self.clipboard = Some(image);
                true
            }
            None => false,
        }
    }

    /// Copy the selection, erase it and pick it up as a pending paste
    pub fn cut(&mut self) -> bool {
        let Some(selection) = self.selection else {
            return false;
        };
        // The clipboard holds only the on-grid part; it is lifted from there
        let Some(rect) = selection.rect().intersect(&self.bounds()) else {
            return false;
        };
        if !self.copy() {
            return false;
        }
        raster::draw_rectangle(
            &mut self.grid,
            rect.x,
            rect.y,
            rect.width - 1,
            rect.height - 1,
            false,
            true,
            BrushSize::SINGLE,
        );
        self.commit();

        self.selection = None;
        if let Some(image) = self.clipboard.clone() {
            self.paste = Some(PasteSession::new(image, rect.origin()));
        }
        true
    }

    /// Start a paste of the clipboard at the top-left corner
    pub fn paste(&mut self) -> bool {
        match &self.clipboard {
            Some(image) => {
                self.paste = Some(PasteSession::new(image.clone(), (0, 0)));
                true
            }
            None => false,
        }
    }

    /// Write the pending paste into the canvas
    ///
    /// Returns whether any pixel was written; history is only updated then.
    pub fn commit_paste(&mut self) -> bool {
        let Some(session) = self.paste.take() else {
            return false;
        };
        let written = session.commit(&mut self.grid);
        if written {
            self.commit();
        }
        written
    }

    /// Drop the pending paste without touching the canvas
    pub fn cancel_paste(&mut self) -> bool {
        match self.paste.take() {
            Some(session) => {
                let _ = session.cancel();
                true
            }
            None => false,
        }
    }

    /// Replace the canvas with a binarized image placed at the origin
    pub fn load_image(&mut self, image: &RegionImage) {
        self.grid.clear();
        for (x, y, on) in image.pixels() {
            if on {
                self.grid.set_pixel(x as i32, y as i32, true, BrushSize::SINGLE);
            }
        }
        debug!("load_image: {}x{}", image.width(), image.height());
        self.commit();
    }
}
