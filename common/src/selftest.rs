//! Hardware self-tests for bring-up.
//!
//! Both tests are time-driven and non-blocking: the host calls them once per
//! loop iteration with the current time and presents the display afterwards,
//! exactly like the screensaver itself.
//!
//! # Display Test
//!
//! - 0-500ms: solid red
//! - 500-1000ms: solid green
//! - 1000-1500ms: solid blue
//! - 1500ms+: black with "Display OK!" in the large font
//!
//! # Touch Test
//!
//! For 10 seconds the touch controller is polled every 50 ms. Every touch
//! is logged with its raw coordinates and pressure and marked on screen with
//! a small white dot; after a touch the next poll is held off a further
//! 100 ms.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use crate::colors::{BLACK, BLUE, GREEN, RED, WHITE};
use crate::config::{
    DISPLAY_TEST_STEP_MS,
    DISPLAY_TEST_TEXT_X,
    DISPLAY_TEST_TEXT_Y,
    TOUCH_MARKER_RADIUS,
    TOUCH_TEST_DURATION_MS,
    TOUCH_TEST_HOLDOFF_MS,
    TOUCH_TEST_SAMPLE_MS,
};
use crate::input::PointerInput;
use crate::log_buffer::{LogBuffer, log_info};
use crate::primitives::{draw_text, fill_circle};
use crate::styles::text_style;
use crate::viewport::Viewport;

/// Progress of a self-test.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SelfTestPhase {
    Running,
    Done,
}

/// Draw one frame of the display test `elapsed_ms` after it started.
pub fn draw_display_test_frame<D>(
    display: &mut D,
    elapsed_ms: u32,
) -> SelfTestPhase
where
    D: DrawTarget<Color = Rgb565>,
{
    let color = match elapsed_ms / DISPLAY_TEST_STEP_MS {
        0 => RED,
        1 => GREEN,
        2 => BLUE,
        _ => {
            display.clear(BLACK).ok();
            draw_text(display, "Display OK!", DISPLAY_TEST_TEXT_X, DISPLAY_TEST_TEXT_Y, text_style(2, WHITE));
            return SelfTestPhase::Done;
        }
    };
    display.clear(color).ok();
    SelfTestPhase::Running
}

/// Touch test state: start time, next poll time and sample count.
pub struct TouchTest {
    started_ms: u32,
    next_poll_ms: u32,
    samples: u32,
}

impl TouchTest {
    pub fn start(
        now_ms: u32,
        log: &mut LogBuffer,
    ) -> Self {
        log_info!(log, now_ms, "Touch test: touch the screen");
        Self {
            started_ms: now_ms,
            next_poll_ms: 0,
            samples: 0,
        }
    }

    /// Run the test at `now_ms`; polls `input` when a poll is due.
    pub fn step<D, I>(
        &mut self,
        display: &mut D,
        input: &mut I,
        log: &mut LogBuffer,
        viewport: &Viewport,
        now_ms: u32,
    ) -> SelfTestPhase
    where
        D: DrawTarget<Color = Rgb565>,
        I: PointerInput + ?Sized,
    {
        let elapsed = now_ms.wrapping_sub(self.started_ms);
        if elapsed >= TOUCH_TEST_DURATION_MS {
            return SelfTestPhase::Done;
        }
        if elapsed < self.next_poll_ms {
            return SelfTestPhase::Running;
        }

        self.next_poll_ms = elapsed + TOUCH_TEST_SAMPLE_MS;
        if input.is_touched() {
            let p = input.read_point();
            self.samples += 1;
            self.next_poll_ms += TOUCH_TEST_HOLDOFF_MS;
            log_info!(log, now_ms, "Touch: X={}, Y={}, P={}", p.x, p.y, p.pressure);

            let marker = p.to_screen(viewport);
            fill_circle(display, marker.x, marker.y, TOUCH_MARKER_RADIUS, WHITE);
        }
        SelfTestPhase::Running
    }

    /// Log the closing line of the test.
    pub fn finish(
        &self,
        now_ms: u32,
        log: &mut LogBuffer,
    ) {
        log_info!(log, now_ms, "Touch test complete: {} samples", self.samples);
    }

    #[inline]
    pub const fn samples(&self) -> u32 { self.samples }
}

// =============================================================================
// Tests
// =============================================================================
