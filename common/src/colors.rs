//! Colour constants and the colour synthesizer.
//!
//! # Rgb565 Packing
//!
//! The panel stores 16 bits per pixel: 5 bits red, 6 bits green, 5 bits
//! blue. Effects compute colours as 8-bit-per-channel [`Rgb`] triples and
//! convert them with [`pack`], which drops the low bits of each channel
//! exactly like the panel driver's own `color565` conversion.
//!
//! # Colour Cycling
//!
//! [`cycling_color`] drives each channel with its own sine wave:
//!
//! ```text
//! channel = 128 + 127 * sin(t * 0.7 + phase)    phase = 0, 2.1, 4.2 rad
//! ```
//!
//! The phases are close to, but not exactly, a third of a turn apart, so the
//! three channels never line up and the result sweeps the hue wheel instead
//! of pulsing a single hue.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

use crate::config::{COLOR_AMPLITUDE, COLOR_FREQUENCY, COLOR_MIDPOINT, COLOR_PHASES};
use crate::trig::sin;

// =============================================================================
// Standard Colors
// =============================================================================

/// Pure black (0, 0, 0).
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white (31, 63, 31). Highlight and overlay text.
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Pure red (31, 0, 0). Display self-test and error log lines.
pub const RED: Rgb565 = Rgb565::RED;

/// Pure green (0, 63, 0). Display self-test and info log lines.
pub const GREEN: Rgb565 = Rgb565::GREEN;

/// Pure blue (0, 0, 31). Display self-test.
pub const BLUE: Rgb565 = Rgb565::BLUE;

/// Pure yellow (31, 63, 0). Warning log lines.
pub const YELLOW: Rgb565 = Rgb565::YELLOW;

/// Dark gray (8, 16, 8). Debug log lines and dividers.
pub const GRAY: Rgb565 = Rgb565::new(8, 16, 8);

/// Frame background: the 8-bit triple (0, 0, 30) packed to native format.
pub const BACKGROUND: Rgb565 = pack(Rgb::new(0, 0, 30));

// =============================================================================
// 8-bit RGB Triple
// =============================================================================

/// An 8-bit-per-channel colour before conversion to the panel format.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[inline]
    pub const fn new(
        r: u8,
        g: u8,
        b: u8,
    ) -> Self {
        Self { r, g, b }
    }

    /// Neutral gray with all channels at `level`.
    #[inline]
    pub const fn gray(level: u8) -> Self { Self::new(level, level, level) }

    /// Scale every channel by `brightness / 256` (see [`scale_brightness`]).
    #[inline]
    pub const fn scaled(
        self,
        brightness: u8,
    ) -> Self {
        Self::new(
            scale_brightness(self.r, brightness),
            scale_brightness(self.g, brightness),
            scale_brightness(self.b, brightness),
        )
    }

    /// Convert to the panel's native format.
    #[inline]
    pub const fn to_native(self) -> Rgb565 { pack(self) }
}

// =============================================================================
// Synthesis
// =============================================================================

/// Rainbow colour at animation time `t` (seconds).
///
/// Every channel lies in `1..=255` and the triple repeats with period
/// `2π / 0.7`.
pub fn cycling_color(t: f32) -> Rgb {
    let channel = |phase: f32| (COLOR_MIDPOINT + COLOR_AMPLITUDE * sin(t * COLOR_FREQUENCY + phase)) as u8;
    Rgb::new(channel(COLOR_PHASES[0]), channel(COLOR_PHASES[1]), channel(COLOR_PHASES[2]))
}

/// Fixed-point brightness scale: `(channel * brightness) >> 8`, truncating.
///
/// A brightness of 255 is therefore very slightly dimmer than the input.
#[inline]
pub const fn scale_brightness(
    channel: u8,
    brightness: u8,
) -> u8 {
    ((channel as u16 * brightness as u16) >> 8) as u8
}

/// Pack an 8-bit triple into Rgb565 by truncating to 5/6/5 bits.
#[inline]
pub const fn pack(color: Rgb) -> Rgb565 { Rgb565::new(color.r >> 3, color.g >> 2, color.b >> 3) }

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use core::f32::consts::TAU;

    use super::*;

    fn grid() -> impl Iterator<Item = f32> { (0..4000).map(|i| i as f32 * 0.025) }

    #[test]
    fn test_channels_bounded() {
        for t in grid() {
            let c = cycling_color(t);
            for ch in [c.r, c.g, c.b] {
                assert!(ch >= 1, "channel {ch} below 1 at t={t}");
            }
        }
    }

    #[test]
    fn test_cycling_periodic() {
        let period = TAU / COLOR_FREQUENCY;
        for t in grid().take(400) {
            let a = cycling_color(t);
            let b = cycling_color(t + period);
            // micromath evaluates the shifted argument with its own rounding
            assert!(a.r.abs_diff(b.r) <= 1, "red drifted at t={t}");
            assert!(a.g.abs_diff(b.g) <= 1, "green drifted at t={t}");
            assert!(a.b.abs_diff(b.b) <= 1, "blue drifted at t={t}");
        }
    }

    #[test]
    fn test_channels_never_in_phase() {
        for t in grid() {
            let c = cycling_color(t);
            assert!(!(c.r == c.g && c.g == c.b), "all channels equal at t={t}");
        }
    }

    #[test]
    fn test_cycling_at_zero() {
        // sin(0) = 0 -> red at midpoint; green and blue on opposite slopes
        let c = cycling_color(0.0);
        assert!(c.r.abs_diff(128) <= 1);
        assert!(c.g > 200);
        assert!(c.b < 128);
    }

    #[test]
    fn test_scale_brightness_half() {
        assert_eq!(scale_brightness(200, 128), 100);
    }

    #[test]
    fn test_scale_brightness_edges() {
        assert_eq!(scale_brightness(0, 255), 0);
        assert_eq!(scale_brightness(255, 0), 0);
        assert_eq!(scale_brightness(255, 255), 254);
        assert_eq!(scale_brightness(1, 255), 0);
    }

    #[test]
    fn test_scaled_triple() {
        let c = Rgb::new(200, 100, 40).scaled(128);
        assert_eq!(c, Rgb::new(100, 50, 20));
    }

    #[test]
    fn test_pack() {
        assert_eq!(pack(Rgb::new(255, 255, 255)), WHITE);
        assert_eq!(pack(Rgb::new(0, 0, 0)), BLACK);
        assert_eq!(pack(Rgb::new(255, 0, 0)), RED);
        // Low bits are dropped, not rounded
        assert_eq!(pack(Rgb::new(7, 3, 7)), BLACK);
        assert_eq!(BACKGROUND, Rgb565::new(0, 0, 3));
    }

    #[test]
    fn test_gray() {
        assert_eq!(Rgb::gray(42), Rgb::new(42, 42, 42));
        assert_eq!(Rgb::gray(255).to_native(), WHITE);
    }
}
