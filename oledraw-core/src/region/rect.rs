//! Rectangles and selections

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in logical pixel coordinates
///
/// Covers columns `x..x + width` and rows `y..y + height`. A rectangle with
/// a non-positive width or height is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Create a rectangle from its top-left corner and size
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Smallest rectangle containing both points, inclusive
    ///
    /// The corners may be given in any order.
    pub fn from_corners(p0: (i32, i32), p1: (i32, i32)) -> Self {
        let left = p0.0.min(p1.0);
        let top = p0.1.min(p1.1);
        let width = (p0.0 as i64 - p1.0 as i64).abs() + 1;
        let height = (p0.1 as i64 - p1.1 as i64).abs() + 1;
        Self::new(left, top, clamp_i32(width), clamp_i32(height))
    }

    /// Whether the rectangle covers no pixels
    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Exclusive right edge
    fn right(&self) -> i64 {
        self.x as i64 + self.width as i64
    }

    /// Exclusive bottom edge
    fn bottom(&self) -> i64 {
        self.y as i64 + self.height as i64
    }

    /// Overlap of two rectangles, `None` if they do not overlap
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        if self.is_empty() || other.is_empty() {
            return None;
        }
        let left = (self.x as i64).max(other.x as i64);
        let top = (self.y as i64).max(other.y as i64);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        if right <= left || bottom <= top {
            return None;
        }
        Some(Rect::new(
            left as i32,
            top as i32,
            clamp_i32(right - left),
            clamp_i32(bottom - top),
        ))
    }

    /// Whether a pixel lies inside the rectangle
    pub fn contains(&self, x: i32, y: i32) -> bool {
        let (x, y) = (x as i64, y as i64);
        !self.is_empty()
            && x >= self.x as i64
            && y >= self.y as i64
            && x < self.right()
            && y < self.bottom()
    }

    /// Top-left corner
    pub const fn origin(&self) -> (i32, i32) {
        (self.x, self.y)
    }
}

fn clamp_i32(v: i64) -> i32 {
    v.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

/// A committed selection rectangle
///
/// Only drags that span at least `min_size` pixels on both axes select
/// anything; a click or a sliver clears the selection instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Selection(Rect);

impl Selection {
    /// Build a selection from the press and release points of a drag
    pub fn from_drag(start: (i32, i32), end: (i32, i32), min_size: u16) -> Option<Self> {
        let rect = Rect::from_corners(start, end);
        let min = min_size as i32;
        if rect.width < min || rect.height < min {
            return None;
        }
        Some(Self(rect))
    }

    /// Selected rectangle
    pub const fn rect(&self) -> Rect {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_corners_any_order() {
        let a = Rect::from_corners((10, 5), (3, 20));
        let b = Rect::from_corners((3, 20), (10, 5));
        assert_eq!(a, b);
        assert_eq!(a, Rect::new(3, 5, 8, 16));
        assert_eq!(Rect::from_corners((4, 4), (4, 4)), Rect::new(4, 4, 1, 1));
    }

    #[test]
    fn test_empty() {
        assert!(Rect::new(0, 0, 0, 5).is_empty());
        assert!(Rect::new(0, 0, 5, -1).is_empty());
        assert!(!Rect::new(-3, -3, 1, 1).is_empty());
    }

    #[test]
    fn test_intersect() {
        let bounds = Rect::new(0, 0, 128, 64);
        assert_eq!(
            Rect::new(120, 60, 20, 20).intersect(&bounds),
            Some(Rect::new(120, 60, 8, 4))
        );
        assert_eq!(
            Rect::new(-5, -5, 10, 10).intersect(&bounds),
            Some(Rect::new(0, 0, 5, 5))
        );
        assert_eq!(Rect::new(128, 0, 10, 10).intersect(&bounds), None);
        assert_eq!(Rect::new(-10, 0, 10, 10).intersect(&bounds), None);
        assert_eq!(Rect::new(5, 5, 0, 10).intersect(&bounds), None);
        assert_eq!(
            Rect::new(i32::MAX - 1, 0, i32::MAX, 10).intersect(&bounds),
            None
        );
    }

    #[test]
    fn test_contains() {
        let r = Rect::new(2, 2, 3, 3);
        assert!(r.contains(2, 2));
        assert!(r.contains(4, 4));
        assert!(!r.contains(5, 4));
        assert!(!Rect::new(0, 0, 0, 0).contains(0, 0));
    }

    #[test]
    fn test_selection_min_size() {
        assert!(Selection::from_drag((5, 5), (5, 5), 2).is_none());
        assert!(Selection::from_drag((5, 5), (20, 5), 2).is_none());
        let sel = Selection::from_drag((20, 9), (5, 5), 2).unwrap();
        assert_eq!(sel.rect(), Rect::new(5, 5, 16, 5));
        assert!(Selection::from_drag((5, 5), (5, 5), 1).is_some());
    }
}
