//! Screensaver engine context and frame compositor.
//!
//! [`Screensaver`] owns everything the effect needs between frames: the
//! display surface, the pointer input, the animation clock and the log. The
//! host loop only has to call [`Screensaver::step`] with its platform
//! services; the rest happens in a fixed order on every fired tick:
//!
//! ```text
//! tick gate -> poll input (may reset clock) -> clear -> star field
//!           -> trail, object, highlight -> diagnostics text -> advance clock
//! ```
//!
//! The surface is redrawn from scratch each frame with no double buffering.
//!
//! # Example
//!
//! ```ignore
//! let mut saver = Screensaver::new(display, touch, FrameTickConfig::DEFAULT);
//! loop {
//!     if saver.step(&platform) {
//!         present(saver.display());
//!     }
//! }
//! ```

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use crate::clock::{AnimationClock, FrameTickConfig};
use crate::colors::BACKGROUND;
use crate::config::STAR_COUNT;
use crate::input::{PointerInput, poll_and_maybe_reset};
use crate::log_buffer::{LogBuffer, log_debug, log_info, log_warn};
use crate::motion::render_object;
use crate::overlay::draw_diagnostics;
use crate::platform::{Platform, SystemInfo};
use crate::starfield::render_field;
use crate::viewport::Viewport;

/// A fired tick this many intervals after the previous one is logged as late.
const LATE_FRAME_INTERVALS: u32 = 2;

/// The running effect and its injected collaborators.
pub struct Screensaver<D, I> {
    display: D,
    input: I,
    clock: AnimationClock,
    viewport: Viewport,
    log: LogBuffer,
    frames: u32,
    touch_resets: u32,
}

impl<D, I> Screensaver<D, I>
where
    D: DrawTarget<Color = Rgb565>,
    I: PointerInput,
{
    /// Take ownership of the collaborators. The viewport is read from the
    /// display once, here.
    pub fn new(
        display: D,
        input: I,
        config: FrameTickConfig,
    ) -> Self {
        let viewport = Viewport::from_size(display.bounding_box().size);
        let mut log = LogBuffer::new();
        log_info!(log, 0, "Screensaver started {}x{}", viewport.width(), viewport.height());
        Self {
            display,
            input,
            clock: AnimationClock::new(config),
            viewport,
            log,
            frames: 0,
            touch_resets: 0,
        }
    }

    /// Run one pass of the host loop.
    ///
    /// Returns `false` without side effects when no frame is due. Otherwise
    /// polls the input, renders a frame, advances animation time and returns
    /// `true`.
    pub fn step<P>(
        &mut self,
        platform: &P,
    ) -> bool
    where
        P: Platform + ?Sized,
    {
        let now = platform.now_millis();
        let previous_tick = self.clock.last_tick_ms();
        if !self.clock.tick(now) {
            return false;
        }

        let gap = now.wrapping_sub(previous_tick);
        if self.frames > 0 && gap >= self.clock.config().target_interval_ms.saturating_mul(LATE_FRAME_INTERVALS) {
            log_warn!(self.log, now, "Frame late: {} ms since last", gap);
        }

        let before = self.clock.elapsed();
        if let Some(point) = poll_and_maybe_reset(&mut self.input, &mut self.clock) {
            log_info!(self.log, now, "Touch at X={}, Y={}", point.x, point.y);
            log_debug!(self.log, now, "Animation reset from t={}", before);
            self.touch_resets = self.touch_resets.wrapping_add(1);
        }

        self.render_frame(platform.free_memory_bytes());
        self.clock.advance_tick();
        self.frames = self.frames.wrapping_add(1);
        true
    }

    /// Composite one frame at the current animation time, overlay text last.
    pub fn render_frame(
        &mut self,
        free_memory_bytes: u32,
    ) {
        self.render_scene();
        draw_diagnostics(&mut self.display, &self.viewport, self.clock.elapsed(), free_memory_bytes);
    }

    /// Background, star field, then the object. The object overwrites any
    /// star beneath it.
    fn render_scene(&mut self) {
        let t = self.clock.elapsed();
        self.display.clear(BACKGROUND).ok();
        render_field(&mut self.display, t, STAR_COUNT, &self.viewport);
        render_object(&mut self.display, t, &self.viewport);
    }

    /// Collect a [`SystemInfo`] snapshot from `platform`.
    pub fn system_info<P>(
        &self,
        platform: &P,
    ) -> SystemInfo
    where
        P: Platform + ?Sized,
    {
        SystemInfo::collect(platform)
    }

    /// Write a system information report to the log.
    pub fn log_system_info<P>(
        &mut self,
        platform: &P,
    ) where
        P: Platform + ?Sized,
    {
        let now = platform.now_millis();
        let info = self.system_info(platform);
        log_info!(self.log, now, "=== System Information ===");
        log_info!(self.log, now, "Free Heap: {} bytes", info.free_heap_bytes);
        match info.cpu_frequency_mhz {
            Some(mhz) => log_info!(self.log, now, "CPU Frequency: {} MHz", mhz),
            None => log_info!(self.log, now, "CPU Frequency: n/a"),
        }
        match info.flash_size_bytes {
            Some(bytes) => log_info!(self.log, now, "Flash Size: {} bytes", bytes),
            None => log_info!(self.log, now, "Flash Size: n/a"),
        }
        log_info!(self.log, now, "Uptime: {} seconds", info.uptime_secs);
    }
}

impl<D, I> Screensaver<D, I> {
    /// Animation time in seconds.
    #[inline]
    pub const fn elapsed(&self) -> f32 { self.clock.elapsed() }

    #[inline]
    pub const fn viewport(&self) -> Viewport { self.viewport }

    /// Number of frames rendered by [`step`](Self::step).
    #[inline]
    pub const fn frames(&self) -> u32 { self.frames }

    /// Number of fired frames on which a touch reset the clock.
    #[inline]
    pub const fn touch_resets(&self) -> u32 { self.touch_resets }

    #[inline]
    pub const fn log(&self) -> &LogBuffer { &self.log }

    #[inline]
    pub fn log_mut(&mut self) -> &mut LogBuffer { &mut self.log }

    #[inline]
    pub const fn display(&self) -> &D { &self.display }

    #[inline]
    pub fn display_mut(&mut self) -> &mut D { &mut self.display }

    #[inline]
    pub fn input_mut(&mut self) -> &mut I { &mut self.input }

    /// Borrow display, input and log together, for self-tests that need all three.
    pub fn parts_mut(&mut self) -> (&mut D, &mut I, &mut LogBuffer) { (&mut self.display, &mut self.input, &mut self.log) }

    /// Give the collaborators back.
    pub fn into_parts(self) -> (D, I) { (self.display, self.input) }
}

// =============================================================================
// Tests
// =============================================================================
