//! Immediate-mode drawing helpers over any `DrawTarget<Color = Rgb565>`.
//!
//! These map the panel-style API (`fillCircle(x, y, r)`, `drawPixel`, text at
//! a cursor) onto embedded-graphics primitives. Draw results are discarded:
//! display collaborators are infallible by contract.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, PrimitiveStyle};
use embedded_graphics::text::{Baseline, Text};

/// Fill a circle of `radius` around `(x, y)`, covering `2 * radius + 1` pixels
/// across. A radius of zero or less draws nothing.
pub fn fill_circle<D>(
    display: &mut D,
    x: i32,
    y: i32,
    radius: i32,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    if radius <= 0 {
        return;
    }
    Circle::with_center(Point::new(x, y), (radius * 2 + 1) as u32)
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(display)
        .ok();
}

/// Set a single pixel. Off-screen coordinates are left to the target to clip.
#[inline]
pub fn draw_pixel<D>(
    display: &mut D,
    x: i32,
    y: i32,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Pixel(Point::new(x, y), color).draw(display).ok();
}

/// Draw `text` with its top-left corner at the cursor `(x, y)`.
pub fn draw_text<D>(
    display: &mut D,
    text: &str,
    x: i32,
    y: i32,
    style: MonoTextStyle<'_, Rgb565>,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Text::with_baseline(text, Point::new(x, y), style, Baseline::Top)
        .draw(display)
        .ok();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{BLACK, WHITE};
    use crate::styles::text_style;
    use crate::test_support::FrameRecorder;

    #[test]
    fn test_fill_circle_extent() {
        let mut frame = FrameRecorder::new(64, 64);
        fill_circle(&mut frame, 30, 30, 5, WHITE);

        assert_eq!(frame.pixel(30, 30), WHITE);
        assert_eq!(frame.pixel(25, 30), WHITE);
        assert_eq!(frame.pixel(35, 30), WHITE);
        assert_eq!(frame.pixel(30, 25), WHITE);
        assert_eq!(frame.pixel(30, 35), WHITE);
        assert_eq!(frame.pixel(24, 30), BLACK);
        assert_eq!(frame.pixel(36, 30), BLACK);
        // Corners of the bounding square stay clear
        assert_eq!(frame.pixel(25, 25), BLACK);
    }

    #[test]
    fn test_fill_circle_non_positive_radius() {
        let mut frame = FrameRecorder::new(16, 16);
        fill_circle(&mut frame, 8, 8, 0, WHITE);
        fill_circle(&mut frame, 8, 8, -3, WHITE);
        assert_eq!(frame.writes(), 0);
    }

    #[test]
    fn test_draw_pixel() {
        let mut frame = FrameRecorder::new(16, 16);
        draw_pixel(&mut frame, 3, 4, WHITE);
        draw_pixel(&mut frame, 40, 4, WHITE);
        assert_eq!(frame.pixel(3, 4), WHITE);
        assert_eq!(frame.writes(), 1);
    }

    #[test]
    fn test_draw_text_below_cursor() {
        let mut frame = FrameRecorder::new(64, 32);
        draw_text(&mut frame, "H", 10, 10, text_style(1, WHITE));
        assert!(frame.count_in(10, 10, 6, 10, WHITE) > 0);
        // Nothing above the cursor line
        assert_eq!(frame.count_in(0, 0, 64, 10, WHITE), 0);
    }
}
