// MIT/Apache2 License

use std::cmp;

/// An axis-aligned rectangle in pixel space. One corner of the rectangle is at (`x1`, `y1`), and the other
/// corner is at (`x2`, `y2`).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rect {
    /// X coordinate of the first point.
    pub x1: i32,
    /// Y coordinate of the first point.
    pub y1: i32,
    /// X coordinate of the second point.
    pub x2: i32,
    /// Y coordinate of the second point.
    pub y2: i32,
}

impl Rect {
    /// A rectangle with its origin at zero and the given size.
    #[inline]
    #[must_use]
    pub fn from_size(width: i32, height: i32) -> Rect {
        Rect {
            x1: 0,
            y1: 0,
            x2: width,
            y2: height,
        }
    }

    /// The horizontal extent of this rectangle.
    #[inline]
    #[must_use]
    pub fn width(self) -> i32 {
        self.x2 - self.x1
    }

    /// The vertical extent of this rectangle.
    #[inline]
    #[must_use]
    pub fn height(self) -> i32 {
        self.y2 - self.y1
    }

    /// The shorter of the two sides.
    #[inline]
    #[must_use]
    pub fn min_side(self) -> i32 {
        cmp::min(self.width(), self.height())
    }

    /// A copy of this rectangle inset by `dx` on the left and right and `dy` on the top and bottom. Negative
    /// values grow the rectangle instead.
    #[inline]
    #[must_use]
    pub fn inset(self, dx: i32, dy: i32) -> Rect {
        Rect {
            x1: self.x1 + dx,
            y1: self.y1 + dy,
            x2: self.x2 - dx,
            y2: self.y2 - dy,
        }
    }

    /// Tell whether this rectangle covers no area.
    #[inline]
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.x2 <= self.x1 || self.y2 <= self.y1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inset() {
        let rect = Rect::from_size(100, 80);
        let inner = rect.inset(25, 20);
        assert_eq!(
            inner,
            Rect {
                x1: 25,
                y1: 20,
                x2: 75,
                y2: 60
            }
        );
        // inset does not mutate the source rectangle
        assert_eq!(rect, Rect::from_size(100, 80));
        // a negative inset undoes a positive one
        assert_eq!(inner.inset(-25, -20), rect);
    }

    #[test]
    fn test_degenerate() {
        assert!(Rect::from_size(0, 0).is_empty());
        assert!(Rect::from_size(10, 0).is_empty());
        assert!(!Rect::from_size(1, 1).is_empty());
        // over-insetting collapses to an empty rectangle, not an error
        assert!(Rect::from_size(10, 10).inset(6, 6).is_empty());
    }

    #[test]
    fn test_min_side() {
        assert_eq!(Rect::from_size(100, 80).min_side(), 80);
        assert_eq!(Rect::from_size(80, 100).min_side(), 80);
    }
}
