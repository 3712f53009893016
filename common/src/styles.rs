//! Pre-computed text styles.
//!
//! The panel API sizes text by an integer multiplier of a 6×8 base glyph.
//! embedded-graphics has no scaled font, so each size maps to the nearest
//! mono font: size 1 is 6×10, size 2 and above is 10×20.

use embedded_graphics::mono_font::ascii::{FONT_6X10, FONT_10X20};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb565;

/// Size-1 font. Overlay labels and readouts.
pub const LABEL_FONT: &MonoFont = &FONT_6X10;

/// Size-2 font. Self-test confirmation.
pub const LARGE_FONT: &MonoFont = &FONT_10X20;

/// Font for a panel text size multiplier.
pub const fn font_for_size(size: u8) -> &'static MonoFont<'static> {
    if size <= 1 { LABEL_FONT } else { LARGE_FONT }
}

/// Text style for a panel text size and colour.
pub const fn text_style(
    size: u8,
    color: Rgb565,
) -> MonoTextStyle<'static, Rgb565> {
    MonoTextStyle::new(font_for_size(size), color)
}
