//! Primary object, fading trail and highlight.
//!
//! The object follows two independent sines,
//!
//! ```text
//! x = cx + sin(t * 0.8) * (cx - 30)
//! y = cy + cos(t * 1.2) * (cy - 30)
//! ```
//!
//! tracing a Lissajous path that stays 30 px clear of the edges, while its
//! radius pulses as `15 + sin(t * 3) * 5`. The trail resamples the same
//! path at earlier times, each step older, smaller and dimmer.
//!
//! # Draw Order
//!
//! The panel has no alpha: every draw overwrites what is beneath it. The
//! object is therefore painted back to front:
//!
//! 1. trail steps 3, 2, 1, 0 (oldest and dimmest first)
//! 2. the primary object at full brightness
//! 3. a white highlight a third of the radius, offset up-left

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use crate::colors::{Rgb, WHITE, cycling_color};
use crate::config::{
    HIGHLIGHT_DIVISOR,
    MOTION_FREQ_X,
    MOTION_FREQ_Y,
    MOTION_MARGIN,
    SIZE_AMPLITUDE,
    SIZE_BASE,
    SIZE_FREQ,
    TRAIL_FADE_PER_STEP,
    TRAIL_SHRINK_PER_STEP,
    TRAIL_STEPS,
    TRAIL_TIME_OFFSET,
};
use crate::primitives::fill_circle;
use crate::trig::{cos, sin};
use crate::viewport::Viewport;

/// One computed draw of the object: centre, radius and colour.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MotionSample {
    pub x: i32,
    pub y: i32,
    pub size: i32,
    pub color: Rgb,
}

impl MotionSample {
    /// Whether the sample has a drawable radius.
    #[inline]
    pub const fn is_visible(&self) -> bool { self.size > 0 }

    /// White highlight drawn on top of this sample.
    pub const fn highlight(&self) -> Highlight {
        let radius = self.size / HIGHLIGHT_DIVISOR;
        Highlight {
            x: self.x - radius,
            y: self.y - radius,
            radius,
        }
    }
}

/// Specular highlight circle.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Highlight {
    pub x: i32,
    pub y: i32,
    pub radius: i32,
}

/// Unscaled radius at time `t`, kept as a float so trail shrink is applied
/// before truncation.
#[inline]
fn pulse(t: f32) -> f32 { SIZE_BASE + sin(t * SIZE_FREQ) * SIZE_AMPLITUDE }

/// Centre of the object at time `t`.
pub fn path_position(
    t: f32,
    viewport: &Viewport,
) -> Point {
    let cx = viewport.center_x();
    let cy = viewport.center_y();
    let x = cx as f32 + sin(t * MOTION_FREQ_X) * (cx - MOTION_MARGIN) as f32;
    let y = cy as f32 + cos(t * MOTION_FREQ_Y) * (cy - MOTION_MARGIN) as f32;
    Point::new(x as i32, y as i32)
}

/// The primary object at time `t`, full size and brightness.
pub fn primary_sample(
    t: f32,
    viewport: &Viewport,
) -> MotionSample {
    let p = path_position(t, viewport);
    MotionSample {
        x: p.x,
        y: p.y,
        size: pulse(t) as i32,
        color: cycling_color(t),
    }
}

/// Trail sample `step` behind the object at time `t`.
///
/// Position and radius come from `t - step * 0.1`; the radius then shrinks
/// by `2 * step`. The colour is the current colour faded to
/// `255 - step * 60`, so the whole trail shares one hue.
pub fn trail_sample(
    t: f32,
    step: u8,
    viewport: &Viewport,
) -> MotionSample {
    let trail_t = t - f32::from(step) * TRAIL_TIME_OFFSET;
    let p = path_position(trail_t, viewport);
    let shrink = i32::from(step) * TRAIL_SHRINK_PER_STEP;
    let brightness = 255u8.saturating_sub(step.saturating_mul(TRAIL_FADE_PER_STEP));
    MotionSample {
        x: p.x,
        y: p.y,
        size: (pulse(trail_t) - shrink as f32) as i32,
        color: cycling_color(t).scaled(brightness),
    }
}

/// Draw trail, primary object and highlight for time `t`.
pub fn render_object<D>(
    display: &mut D,
    t: f32,
    viewport: &Viewport,
) where
    D: DrawTarget<Color = Rgb565>,
{
    for step in (0..=TRAIL_STEPS).rev() {
        let sample = trail_sample(t, step, viewport);
        if sample.is_visible() {
            fill_circle(display, sample.x, sample.y, sample.size, sample.color.to_native());
        }
    }

    let primary = primary_sample(t, viewport);
    fill_circle(display, primary.x, primary.y, primary.size, primary.color.to_native());

    let highlight = primary.highlight();
    fill_circle(display, highlight.x, highlight.y, highlight.radius, WHITE);
}

// =============================================================================
// Tests
// =============================================================================
