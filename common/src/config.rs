//! Compile-time configuration for the screensaver engine.
//!
//! Every tunable of the effect lives here as a `const`. Nothing is loaded at
//! runtime: the values are baked into the firmware image and the orderings
//! they depend on are checked at compile time with `const` assertions. If a
//! value is changed so that, for example, the trail could shrink to a
//! negative radius, compilation fails.
//!
//! # Usage
//!
//! ```ignore
//! use screensaver_common::config::{FRAME_INTERVAL_MS, STAR_COUNT};
//! ```

// =============================================================================
// Frame Pacing
// =============================================================================

/// Minimum milliseconds between two fired frame ticks (50 ms = 20 FPS).
pub const FRAME_INTERVAL_MS: u32 = 50;

/// Animation seconds added to the clock on every fired tick.
pub const TIME_STEP_PER_TICK: f32 = 0.05;

const _: () = assert!(FRAME_INTERVAL_MS > 0);
const _: () = assert!(TIME_STEP_PER_TICK > 0.0);

// =============================================================================
// Motion (primary object and trail)
// =============================================================================

/// Distance in pixels the object centre keeps from the viewport edge.
pub const MOTION_MARGIN: i32 = 30;

/// Horizontal oscillation frequency (rad/s).
pub const MOTION_FREQ_X: f32 = 0.8;

/// Vertical oscillation frequency (rad/s). Differs from X for a Lissajous path.
pub const MOTION_FREQ_Y: f32 = 1.2;

/// Radius at the centre of the pulse.
pub const SIZE_BASE: f32 = 15.0;

/// Pulse amplitude; radius stays within `SIZE_BASE ± SIZE_AMPLITUDE`.
pub const SIZE_AMPLITUDE: f32 = 5.0;

/// Pulse frequency (rad/s).
pub const SIZE_FREQ: f32 = 3.0;

/// Number of trail samples drawn behind the object (steps `TRAIL_STEPS..=0`).
pub const TRAIL_STEPS: u8 = 3;

/// Animation seconds between consecutive trail samples.
pub const TRAIL_TIME_OFFSET: f32 = 0.1;

/// Radius lost per trail step.
pub const TRAIL_SHRINK_PER_STEP: i32 = 2;

/// Brightness lost per trail step (out of 255).
pub const TRAIL_FADE_PER_STEP: u8 = 60;

/// Highlight radius and offset are the primary radius divided by this.
pub const HIGHLIGHT_DIVISOR: i32 = 3;

// The oldest trail sample at the smallest pulse must still have a radius.
const _: () = assert!(
    (SIZE_BASE - SIZE_AMPLITUDE) as i32 - TRAIL_STEPS as i32 * TRAIL_SHRINK_PER_STEP > 0
);
const _: () = assert!((TRAIL_STEPS as u32) * (TRAIL_FADE_PER_STEP as u32) < 255);
const _: () = assert!(HIGHLIGHT_DIVISOR > 1);

// =============================================================================
// Colour Cycling
// =============================================================================

/// Shared angular frequency of the three colour channels.
pub const COLOR_FREQUENCY: f32 = 0.7;

/// Per-channel phase offsets in radians (red, green, blue).
pub const COLOR_PHASES: [f32; 3] = [0.0, 2.1, 4.2];

/// Channel value at a sine of zero.
pub const COLOR_MIDPOINT: f32 = 128.0;

/// Channel swing around the midpoint.
pub const COLOR_AMPLITUDE: f32 = 127.0;

const _: () = assert!(COLOR_MIDPOINT + COLOR_AMPLITUDE <= 255.0);
const _: () = assert!(COLOR_MIDPOINT - COLOR_AMPLITUDE >= 1.0);

// =============================================================================
// Star Field
// =============================================================================

/// Number of background stars evaluated per frame.
pub const STAR_COUNT: u32 = 20;

/// Horizontal scatter multiplier (`x = index * STAR_STEP_X mod width`).
pub const STAR_STEP_X: u32 = 17;

/// Vertical scatter multiplier (`y = index * STAR_STEP_Y mod height`).
pub const STAR_STEP_Y: u32 = 23;

/// Twinkle angular speed (rad/s).
pub const TWINKLE_SPEED: f32 = 2.0;

/// Twinkle phase added per star index.
pub const TWINKLE_PHASE_STEP: f32 = 0.5;

/// A star is drawn only while its twinkle exceeds this.
pub const TWINKLE_VISIBLE: f32 = 0.3;

/// Above this twinkle a star is drawn as a 3-pixel cluster.
pub const TWINKLE_BIG: f32 = 0.8;

/// Star brightness at a twinkle of zero.
pub const STAR_BASE_BRIGHTNESS: f32 = 100.0;

/// Brightness added per unit of twinkle.
pub const STAR_BRIGHTNESS_RANGE: f32 = 155.0;

const _: () = assert!(TWINKLE_VISIBLE < TWINKLE_BIG);
const _: () = assert!(TWINKLE_BIG < 1.0);
const _: () = assert!(STAR_BASE_BRIGHTNESS + STAR_BRIGHTNESS_RANGE <= 255.0);

// =============================================================================
// Diagnostics Overlay Layout
// =============================================================================

/// Left edge of every overlay line.
pub const TEXT_X: i32 = 10;

/// Top of the title line.
pub const TITLE_Y: i32 = 10;

/// Top of the effect-name line.
pub const EFFECT_Y: i32 = 25;

/// Distance of the free-memory line from the bottom edge.
pub const MEMORY_OFFSET_Y: i32 = 35;

/// Distance of the elapsed-time line from the bottom edge.
pub const TIME_OFFSET_Y: i32 = 20;

/// Title label.
pub const TITLE_LABEL: &str = "ESP32 Screensaver";

/// Name of the effect shown under the title.
pub const EFFECT_LABEL: &str = "Basic Bouncing Ball";

const _: () = assert!(EFFECT_Y > TITLE_Y);
const _: () = assert!(MEMORY_OFFSET_Y > TIME_OFFSET_Y);

// =============================================================================
// Self-Tests
// =============================================================================

/// Duration of each solid colour in the display test.
pub const DISPLAY_TEST_STEP_MS: u32 = 500;

/// Top-left of the "Display OK!" confirmation text.
pub const DISPLAY_TEST_TEXT_X: i32 = 50;
pub const DISPLAY_TEST_TEXT_Y: i32 = 100;

/// Length of the touch test window.
pub const TOUCH_TEST_DURATION_MS: u32 = 10_000;

/// Polling period of the touch test while untouched.
pub const TOUCH_TEST_SAMPLE_MS: u32 = 50;

/// Extra hold-off after a touch sample before polling again.
pub const TOUCH_TEST_HOLDOFF_MS: u32 = 100;

/// Radius of the marker drawn at each touch sample.
pub const TOUCH_MARKER_RADIUS: i32 = 5;

/// Largest raw coordinate reported by a 12-bit resistive touch controller.
pub const TOUCH_RAW_MAX: i32 = 4095;

const _: () = assert!(TOUCH_TEST_SAMPLE_MS < TOUCH_TEST_DURATION_MS);
