//! Host implementations of the engine's collaborators.
//!
//! - [`HostPlatform`]: wall clock since start-up and a simulated free heap
//! - [`MouseTouch`]: left mouse button acts as a resistive touch panel

use std::time::Instant;

use embedded_graphics::prelude::Point;
use screensaver_common::config::TOUCH_RAW_MAX;
use screensaver_common::{Platform, PointerInput, TouchPoint, Viewport};

use crate::config::{FRAMEBUFFER_BYTES, SIMULATED_HEAP_BYTES, SIMULATED_PRESSURE};

/// Platform services backed by `std::time`.
pub struct HostPlatform {
    start: Instant,
}

impl HostPlatform {
    pub fn new() -> Self { Self { start: Instant::now() } }
}

impl Default for HostPlatform {
    fn default() -> Self { Self::new() }
}

impl Platform for HostPlatform {
    fn now_millis(&self) -> u32 {
        // Truncation wraps like a 32-bit board counter
        self.start.elapsed().as_millis() as u32
    }

    fn free_memory_bytes(&self) -> u32 { SIMULATED_HEAP_BYTES - FRAMEBUFFER_BYTES }
}

/// Mouse-driven pointer input.
///
/// Window coordinates are converted back into raw `0..=4095` panel units so
/// the engine sees the same numbers a real controller would report.
pub struct MouseTouch {
    viewport: Viewport,
    pressed: bool,
    position: Point,
}

impl MouseTouch {
    pub const fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            pressed: false,
            position: Point::zero(),
        }
    }

    pub fn press(
        &mut self,
        point: Point,
    ) {
        self.pressed = true;
        self.position = point;
    }

    pub fn release(&mut self) { self.pressed = false; }

    pub fn move_to(
        &mut self,
        point: Point,
    ) {
        self.position = point;
    }

    fn to_raw(
        value: i32,
        extent: i32,
    ) -> i16 {
        let span = (extent - 1).max(1);
        (value.clamp(0, span) * TOUCH_RAW_MAX / span) as i16
    }
}

impl PointerInput for MouseTouch {
    fn is_touched(&mut self) -> bool { self.pressed }

    fn read_point(&mut self) -> TouchPoint {
        TouchPoint::new(
            Self::to_raw(self.position.x, self.viewport.width()),
            Self::to_raw(self.position.y, self.viewport.height()),
            SIMULATED_PRESSURE,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_memory() {
        let platform = HostPlatform::new();
        assert_eq!(platform.free_memory_bytes(), 174_080);
        assert_eq!(platform.cpu_frequency_mhz(), None);
    }

    #[test]
    fn test_mouse_touch_state() {
        let mut touch = MouseTouch::new(Viewport::new(320, 240));
        assert!(!touch.is_touched());
        touch.press(Point::new(10, 10));
        assert!(touch.is_touched());
        touch.release();
        assert!(!touch.is_touched());
    }

    #[test]
    fn test_raw_round_trip_corners() {
        let vp = Viewport::new(320, 240);
        let mut touch = MouseTouch::new(vp);

        touch.press(Point::new(0, 0));
        assert_eq!(touch.read_point(), TouchPoint::new(0, 0, SIMULATED_PRESSURE));

        touch.move_to(Point::new(319, 239));
        let raw = touch.read_point();
        assert_eq!((raw.x, raw.y), (4095, 4095));
        assert_eq!(raw.to_screen(&vp), Point::new(319, 239));

        touch.move_to(Point::new(160, 120));
        assert_eq!(touch.read_point().to_screen(&vp), Point::new(160, 120));
    }

    #[test]
    fn test_raw_clamps_outside_window() {
        let mut touch = MouseTouch::new(Viewport::new(320, 240));
        touch.press(Point::new(-40, 900));
        let raw = touch.read_point();
        assert_eq!((raw.x, raw.y), (0, 4095));
    }
}
