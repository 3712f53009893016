//! Drawable area of the display surface.

use embedded_graphics::geometry::{Point, Size};

/// Width and height of the display, read once at start-up.
///
/// Dimensions are at least one pixel so the modulo scatter of the star field
/// and the centre calculation never divide by zero. The fields are private so
/// every viewport goes through the clamp in [`Viewport::new`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Viewport {
    width: i32,
    height: i32,
}

impl Viewport {
    pub const fn new(
        width: i32,
        height: i32,
    ) -> Self {
        Self {
            width: if width < 1 { 1 } else { width },
            height: if height < 1 { 1 } else { height },
        }
    }

    /// Viewport covering a draw target of the given size.
    pub const fn from_size(size: Size) -> Self { Self::new(size.width as i32, size.height as i32) }

    #[inline]
    pub const fn width(&self) -> i32 { self.width }

    #[inline]
    pub const fn height(&self) -> i32 { self.height }

    #[inline]
    pub const fn center_x(&self) -> i32 { self.width / 2 }

    #[inline]
    pub const fn center_y(&self) -> i32 { self.height / 2 }

    #[inline]
    pub const fn center(&self) -> Point { Point::new(self.center_x(), self.center_y()) }

    /// Whether `(x, y)` is a pixel inside the viewport.
    #[inline]
    pub const fn contains(
        &self,
        x: i32,
        y: i32,
    ) -> bool {
        x >= 0 && y >= 0 && x < self.width && y < self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center() {
        let vp = Viewport::new(320, 240);
        assert_eq!(vp.center_x(), 160);
        assert_eq!(vp.center_y(), 120);
        assert_eq!(vp.center(), Point::new(160, 120));
    }

    #[test]
    fn test_from_size() {
        assert_eq!(Viewport::from_size(Size::new(240, 320)), Viewport::new(240, 320));
    }

    #[test]
    fn test_degenerate_size_clamped() {
        let vp = Viewport::new(0, -5);
        assert_eq!(vp.width(), 1);
        assert_eq!(vp.height(), 1);
    }

    #[test]
    fn test_zero_size_from_display() {
        let vp = Viewport::from_size(Size::new(0, 0));
        assert_eq!((vp.width(), vp.height()), (1, 1));
        assert_eq!(vp.center(), Point::zero());
    }

    #[test]
    fn test_contains() {
        let vp = Viewport::new(320, 240);
        assert!(vp.contains(0, 0));
        assert!(vp.contains(319, 239));
        assert!(!vp.contains(320, 0));
        assert!(!vp.contains(0, -1));
    }
}
