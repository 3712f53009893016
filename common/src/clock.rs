//! Frame pacing and the animation clock.
//!
//! The host loop calls [`AnimationClock::tick`] as often as it likes with the
//! current monotonic millisecond count. The call never blocks: it reports
//! whether a frame is due and only then records the tick time. Animation time
//! is a separate scalar that moves forward by a fixed step per fired frame,
//! so the effect runs at the same speed whatever the real frame rate.
//!
//! # Millisecond Wrap
//!
//! Platform clocks are 32-bit and wrap after ~49.7 days. The interval check
//! uses `wrapping_sub`, so pacing carries on across the wrap.
//!
//! # Precision
//!
//! `elapsed` is an unbounded `f32` accumulator. After many hours of
//! continuous uptime the step becomes a visible fraction of the value and
//! the motion coarsens. A reset (touch) returns it to zero.

use crate::config::{FRAME_INTERVAL_MS, TIME_STEP_PER_TICK};

/// Fixed pacing parameters, immutable for the process lifetime.
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FrameTickConfig {
    /// Minimum milliseconds between fired ticks.
    pub target_interval_ms: u32,
    /// Animation seconds added per fired tick.
    pub time_step: f32,
}

impl FrameTickConfig {
    /// 50 ms interval (20 FPS) with a 0.05 s step: animation time tracks wall time.
    pub const DEFAULT: Self = Self::new(FRAME_INTERVAL_MS, TIME_STEP_PER_TICK);

    pub const fn new(
        target_interval_ms: u32,
        time_step: f32,
    ) -> Self {
        Self {
            target_interval_ms,
            time_step,
        }
    }
}

impl Default for FrameTickConfig {
    fn default() -> Self { Self::DEFAULT }
}

/// Animation time plus the timestamp of the last fired tick.
#[derive(Clone, Copy, Debug)]
pub struct AnimationClock {
    elapsed: f32,
    last_tick_ms: u32,
    config: FrameTickConfig,
}

impl AnimationClock {
    pub const fn new(config: FrameTickConfig) -> Self {
        Self {
            elapsed: 0.0,
            last_tick_ms: 0,
            config,
        }
    }

    /// Returns `true` and records `now_ms` when at least one interval has
    /// passed since the last fired tick. Otherwise leaves all state unchanged.
    pub fn tick(
        &mut self,
        now_ms: u32,
    ) -> bool {
        if now_ms.wrapping_sub(self.last_tick_ms) >= self.config.target_interval_ms {
            self.last_tick_ms = now_ms;
            true
        } else {
            false
        }
    }

    /// Add `step` seconds of animation time.
    #[inline]
    pub fn advance(
        &mut self,
        step: f32,
    ) {
        self.elapsed += step;
    }

    /// Add the configured per-tick step.
    #[inline]
    pub fn advance_tick(&mut self) { self.advance(self.config.time_step) }

    /// Restart animation time at zero. Pacing is not affected.
    #[inline]
    pub fn reset(&mut self) { self.elapsed = 0.0; }

    /// Animation time in seconds.
    #[inline]
    pub const fn elapsed(&self) -> f32 { self.elapsed }

    #[inline]
    pub const fn last_tick_ms(&self) -> u32 { self.last_tick_ms }

    #[inline]
    pub const fn config(&self) -> FrameTickConfig { self.config }
}

impl Default for AnimationClock {
    fn default() -> Self { Self::new(FrameTickConfig::DEFAULT) }
}

// =============================================================================
// Tests
// =============================================================================
