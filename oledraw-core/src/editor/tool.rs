//! Editing tools

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Active editing tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Tool {
    /// Freehand drawing, lit pixels
    #[default]
    Pen,
    /// Freehand drawing, clears pixels
    Eraser,
    Line,
    /// Outline only
    Rectangle,
    FilledRectangle,
    /// Inscribed in the drag box
    Ellipse,
    /// Rectangular selection for the clipboard
    Select,
}

impl Tool {
    pub const ALL: [Tool; 7] = [
        Tool::Pen,
        Tool::Eraser,
        Tool::Line,
        Tool::Rectangle,
        Tool::FilledRectangle,
        Tool::Ellipse,
        Tool::Select,
    ];

    /// Whether applying the tool changes the canvas
    pub fn draws(&self) -> bool {
        !matches!(self, Tool::Select)
    }
}
