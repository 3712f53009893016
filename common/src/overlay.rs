//! Diagnostics overlay: fixed labels, elapsed time and free memory.
//!
//! Text is formatted into fixed-capacity `heapless` strings so the overlay
//! never allocates.

use core::fmt::Write;

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use heapless::String;

use crate::colors::WHITE;
use crate::config::{EFFECT_LABEL, EFFECT_Y, MEMORY_OFFSET_Y, TEXT_X, TIME_OFFSET_Y, TITLE_LABEL, TITLE_Y};
use crate::primitives::draw_text;
use crate::styles::text_style;
use crate::viewport::Viewport;

/// Size-1 white overlay text.
const OVERLAY_STYLE: MonoTextStyle<'static, Rgb565> = text_style(1, WHITE);

/// "Time: 12.3s", one decimal place.
pub fn format_elapsed(elapsed: f32) -> String<24> {
    let mut s = String::new();
    write!(s, "Time: {elapsed:.1}s").ok();
    s
}

/// "Free RAM: 174080 bytes".
pub fn format_free_memory(bytes: u32) -> String<32> {
    let mut s = String::new();
    write!(s, "Free RAM: {bytes} bytes").ok();
    s
}

/// Draw the four overlay lines. Labels are anchored to the top edge,
/// readouts to the bottom.
pub fn draw_diagnostics<D>(
    display: &mut D,
    viewport: &Viewport,
    elapsed: f32,
    free_memory_bytes: u32,
) where
    D: DrawTarget<Color = Rgb565>,
{
    draw_text(display, TITLE_LABEL, TEXT_X, TITLE_Y, OVERLAY_STYLE);
    draw_text(display, EFFECT_LABEL, TEXT_X, EFFECT_Y, OVERLAY_STYLE);

    let time = format_elapsed(elapsed);
    draw_text(display, &time, TEXT_X, viewport.height() - TIME_OFFSET_Y, OVERLAY_STYLE);

    let memory = format_free_memory(free_memory_bytes);
    draw_text(display, &memory, TEXT_X, viewport.height() - MEMORY_OFFSET_Y, OVERLAY_STYLE);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::FrameRecorder;

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(0.0).as_str(), "Time: 0.0s");
        assert_eq!(format_elapsed(1.04).as_str(), "Time: 1.0s");
        assert_eq!(format_elapsed(12.36).as_str(), "Time: 12.4s");
        assert_eq!(format_elapsed(86_400.0).as_str(), "Time: 86400.0s");
    }

    #[test]
    fn test_format_free_memory() {
        assert_eq!(format_free_memory(174_080).as_str(), "Free RAM: 174080 bytes");
        assert_eq!(format_free_memory(u32::MAX).as_str(), "Free RAM: 4294967295 bytes");
    }

    #[test]
    fn test_draw_positions() {
        let vp = Viewport::new(320, 240);
        let mut frame = FrameRecorder::new(320, 240);
        draw_diagnostics(&mut frame, &vp, 3.5, 1024);

        // Title row and both bottom rows carry text
        assert!(frame.count_in(10, 10, 120, 10, WHITE) > 0);
        assert!(frame.count_in(10, 25, 120, 10, WHITE) > 0);
        assert!(frame.count_in(10, 205, 120, 10, WHITE) > 0);
        assert!(frame.count_in(10, 220, 120, 10, WHITE) > 0);
        // Nothing left of the text column or in the middle band
        assert_eq!(frame.count_in(0, 0, 10, 240, WHITE), 0);
        assert_eq!(frame.count_in(0, 40, 320, 160, WHITE), 0);
    }
}
