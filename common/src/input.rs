//! Pointer input bridge.
//!
//! The touch controller is polled once per fired frame. A touch restarts the
//! animation clock. There is no debouncing and no queue: a touch held across
//! several frames resets the clock on every one of them, which keeps the
//! animation frozen at `t = 0` until the finger is lifted.

use embedded_graphics::geometry::Point;

use crate::clock::AnimationClock;
use crate::config::TOUCH_RAW_MAX;
use crate::viewport::Viewport;

/// One sample from the touch controller, in raw panel units.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TouchPoint {
    pub x: i16,
    pub y: i16,
    pub pressure: u16,
}

impl TouchPoint {
    pub const fn new(
        x: i16,
        y: i16,
        pressure: u16,
    ) -> Self {
        Self { x, y, pressure }
    }

    /// Map raw `0..=4095` coordinates linearly onto the viewport.
    ///
    /// The result is clamped so a full-scale reading lands on the last pixel
    /// instead of one past it.
    pub fn to_screen(
        &self,
        viewport: &Viewport,
    ) -> Point {
        let map = |raw: i16, extent: i32| (i32::from(raw) * extent / TOUCH_RAW_MAX).clamp(0, extent - 1);
        Point::new(map(self.x, viewport.width()), map(self.y, viewport.height()))
    }
}

/// Poll-based pointer input collaborator.
///
/// [`read_point`](Self::read_point) is only meaningful straight after
/// [`is_touched`](Self::is_touched) returned `true`.
pub trait PointerInput {
    fn is_touched(&mut self) -> bool;

    fn read_point(&mut self) -> TouchPoint;
}

impl<T: PointerInput + ?Sized> PointerInput for &mut T {
    fn is_touched(&mut self) -> bool { (**self).is_touched() }

    fn read_point(&mut self) -> TouchPoint { (**self).read_point() }
}

/// Poll `input` once and reset `clock` if it is touched.
///
/// Returns the sample that caused the reset.
pub fn poll_and_maybe_reset<I>(
    input: &mut I,
    clock: &mut AnimationClock,
) -> Option<TouchPoint>
where
    I: PointerInput + ?Sized,
{
    if !input.is_touched() {
        return None;
    }
    let point = input.read_point();
    clock.reset();
    Some(point)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ScriptedTouch;

    #[test]
    fn test_untouched_leaves_clock() {
        let mut touch = ScriptedTouch::default();
        let mut clock = AnimationClock::default();
        clock.advance(3.0);

        assert_eq!(poll_and_maybe_reset(&mut touch, &mut clock), None);
        assert_eq!(clock.elapsed(), 3.0);
        assert_eq!(touch.polls, 1);
        // No coordinate read without a touch
        assert_eq!(touch.reads, 0);
    }

    #[test]
    fn test_touch_resets_clock() {
        let mut touch = ScriptedTouch::default();
        touch.press(1200, 3400);
        let mut clock = AnimationClock::default();
        clock.advance(7.25);

        let point = poll_and_maybe_reset(&mut touch, &mut clock);
        assert_eq!(point, Some(TouchPoint::new(1200, 3400, 800)));
        assert_eq!(clock.elapsed(), 0.0);
        assert_eq!(touch.reads, 1);
    }

    #[test]
    fn test_held_touch_resets_every_poll() {
        let mut touch = ScriptedTouch::default();
        touch.press(10, 10);
        let mut clock = AnimationClock::default();

        for _ in 0..5 {
            clock.advance_tick();
            assert!(poll_and_maybe_reset(&mut touch, &mut clock).is_some());
            assert_eq!(clock.elapsed(), 0.0);
        }
    }

    #[test]
    fn test_poll_through_reference() {
        let mut touch = ScriptedTouch::default();
        touch.press(0, 0);
        let mut clock = AnimationClock::default();
        let mut by_ref = &mut touch;
        assert!(poll_and_maybe_reset(&mut by_ref, &mut clock).is_some());
        assert_eq!(touch.polls, 1);
    }

    #[test]
    fn test_to_screen_mapping() {
        let vp = Viewport::new(320, 240);
        assert_eq!(TouchPoint::new(0, 0, 0).to_screen(&vp), Point::new(0, 0));
        assert_eq!(TouchPoint::new(4095, 4095, 0).to_screen(&vp), Point::new(319, 239));
        assert_eq!(TouchPoint::new(2048, 2048, 0).to_screen(&vp), Point::new(160, 120));
        assert_eq!(TouchPoint::new(-20, 5000, 0).to_screen(&vp), Point::new(0, 239));
    }
}
