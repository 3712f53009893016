//! Twinkling star field background.
//!
//! Star positions come from a modulo scatter of the star index:
//!
//! ```text
//! x = index * 17 mod width
//! y = index * 23 mod height
//! ```
//!
//! so the field is identical on every run and needs no seed or stored state.
//! Each star's brightness follows its own phase of a shared sine:
//!
//! ```text
//! twinkle = sin(t * 2 + index * 0.5)
//! ```
//!
//! Stars with `twinkle <= 0.3` are hidden, which leaves roughly 40% of the
//! field lit at any moment. Lit stars are drawn with brightness
//! `100 + twinkle * 155`, and above `0.8` they grow into an L-shaped
//! three-pixel cluster.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use crate::colors::Rgb;
use crate::config::{
    STAR_BASE_BRIGHTNESS,
    STAR_BRIGHTNESS_RANGE,
    STAR_STEP_X,
    STAR_STEP_Y,
    TWINKLE_BIG,
    TWINKLE_PHASE_STEP,
    TWINKLE_SPEED,
    TWINKLE_VISIBLE,
};
use crate::primitives::draw_pixel;
use crate::trig::sin;
use crate::viewport::Viewport;

/// Position of one background star.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StarPoint {
    pub x: i32,
    pub y: i32,
}

/// How a star is drawn on the current frame.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum StarAppearance {
    Hidden,
    /// Single pixel of the given gray level.
    Dot(u8),
    /// Pixel plus its right and lower neighbours.
    Cluster(u8),
}

/// Deterministic position of star `index` inside `viewport`.
pub fn star_position(
    index: u32,
    viewport: &Viewport,
) -> StarPoint {
    let scatter = |step: u32, extent: i32| (u64::from(index) * u64::from(step) % extent as u64) as i32;
    StarPoint {
        x: scatter(STAR_STEP_X, viewport.width()),
        y: scatter(STAR_STEP_Y, viewport.height()),
    }
}

/// Twinkle signal of star `index` at animation time `t`, in `[-1, 1]`.
#[inline]
pub fn twinkle(
    t: f32,
    index: u32,
) -> f32 {
    sin(t * TWINKLE_SPEED + index as f32 * TWINKLE_PHASE_STEP)
}

/// Classify a twinkle value into hidden, dot or cluster.
pub fn star_appearance(twinkle: f32) -> StarAppearance {
    if twinkle <= TWINKLE_VISIBLE {
        return StarAppearance::Hidden;
    }
    let brightness = (STAR_BASE_BRIGHTNESS + twinkle * STAR_BRIGHTNESS_RANGE) as u8;
    if twinkle > TWINKLE_BIG {
        StarAppearance::Cluster(brightness)
    } else {
        StarAppearance::Dot(brightness)
    }
}

/// Draw stars `0..count` for animation time `t`.
pub fn render_field<D>(
    display: &mut D,
    t: f32,
    count: u32,
    viewport: &Viewport,
) where
    D: DrawTarget<Color = Rgb565>,
{
    for index in 0..count {
        let star = star_position(index, viewport);
        match star_appearance(twinkle(t, index)) {
            StarAppearance::Hidden => {}
            StarAppearance::Dot(level) => {
                draw_pixel(display, star.x, star.y, Rgb::gray(level).to_native());
            }
            StarAppearance::Cluster(level) => {
                let color = Rgb::gray(level).to_native();
                draw_pixel(display, star.x, star.y, color);
                draw_pixel(display, star.x + 1, star.y, color);
                draw_pixel(display, star.x, star.y + 1, color);
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use core::f32::consts::FRAC_PI_4;

    use super::*;
    use crate::colors::{BLACK, WHITE};
    use crate::config::STAR_COUNT;
    use crate::test_support::FrameRecorder;

    #[test]
    fn test_positions_in_bounds() {
        for vp in [Viewport::new(320, 240), Viewport::new(240, 320), Viewport::new(7, 3)] {
            for index in 0..(vp.width() * vp.height()) as u32 {
                let p = star_position(index, &vp);
                assert!(vp.contains(p.x, p.y), "star {index} at {p:?} outside {vp:?}");
            }
        }
    }

    #[test]
    fn test_positions_deterministic() {
        let vp = Viewport::new(320, 240);
        assert_eq!(star_position(0, &vp), StarPoint { x: 0, y: 0 });
        assert_eq!(star_position(1, &vp), StarPoint { x: 17, y: 23 });
        assert_eq!(star_position(19, &vp), StarPoint { x: 3, y: 197 });
        assert_eq!(star_position(5, &vp), star_position(5, &vp));
    }

    #[test]
    fn test_positions_on_zero_sized_display() {
        let vp = Viewport::from_size(Size::new(0, 240));
        assert_eq!(star_position(1, &vp), StarPoint { x: 0, y: 23 });
        let vp = Viewport::new(0, 0);
        assert_eq!(star_position(19, &vp), StarPoint { x: 0, y: 0 });
    }

    #[test]
    fn test_appearance_thresholds() {
        assert_eq!(star_appearance(-1.0), StarAppearance::Hidden);
        assert_eq!(star_appearance(0.3), StarAppearance::Hidden);
        assert_eq!(star_appearance(0.5), StarAppearance::Dot(177));
        assert_eq!(star_appearance(0.8), StarAppearance::Dot(224));
        assert_eq!(star_appearance(0.9), StarAppearance::Cluster(239));
        assert_eq!(star_appearance(1.0), StarAppearance::Cluster(255));
    }

    #[test]
    fn test_field_sparse() {
        // Roughly 60% of stars are hidden on any frame
        let mut hidden = 0;
        let mut total = 0;
        for frame in 0..200 {
            let t = frame as f32 * 0.05;
            for index in 0..STAR_COUNT {
                total += 1;
                if star_appearance(twinkle(t, index)) == StarAppearance::Hidden {
                    hidden += 1;
                }
            }
        }
        let ratio = hidden as f32 / total as f32;
        assert!((0.5..0.7).contains(&ratio), "hidden ratio {ratio}");
    }

    #[test]
    fn test_render_cluster() {
        let vp = Viewport::new(320, 240);
        let mut frame = FrameRecorder::new(320, 240);
        // Star 0 peaks when sin(2t) = 1
        render_field(&mut frame, FRAC_PI_4, 1, &vp);

        assert_eq!(frame.pixel(0, 0), WHITE);
        assert_eq!(frame.pixel(1, 0), WHITE);
        assert_eq!(frame.pixel(0, 1), WHITE);
        assert_eq!(frame.pixel(1, 1), BLACK);
        assert_eq!(frame.writes(), 3);
    }

    #[test]
    fn test_render_hidden() {
        let vp = Viewport::new(320, 240);
        let mut frame = FrameRecorder::new(320, 240);
        // sin(0) = 0 is below the visibility threshold
        render_field(&mut frame, 0.0, 1, &vp);
        assert_eq!(frame.writes(), 0);
    }

    #[test]
    fn test_render_full_field_pixel_budget() {
        let vp = Viewport::new(320, 240);
        let mut frame = FrameRecorder::new(320, 240);
        render_field(&mut frame, 1.7, STAR_COUNT, &vp);
        assert!(frame.writes() <= STAR_COUNT as usize * 3);
        assert!(frame.writes() > 0);
    }
}
