//! Frame metrics for the debug page.
//!
//! Only frames that the tick gate actually fired are recorded; idle polls of
//! the main loop are not frames.

use core::fmt::Write;
use std::time::{Duration, Instant};

use heapless::String;

/// Render timing and frame counters.
pub struct FrameMetrics {
    /// Render time of the latest frame (microseconds).
    pub render_time_us: u32,
    pub render_time_min_us: u32,
    pub render_time_max_us: u32,
    render_time_avg_us: f32,

    /// Gap between the latest two frames (microseconds).
    pub frame_gap_us: u32,

    pub total_frames: u64,

    last_frame: Option<Instant>,
    start_time: Instant,
}

impl FrameMetrics {
    const EMA_ALPHA: f32 = 0.1;

    pub fn new() -> Self {
        Self {
            render_time_us: 0,
            render_time_min_us: u32::MAX,
            render_time_max_us: 0,
            render_time_avg_us: 0.0,
            frame_gap_us: 0,
            total_frames: 0,
            last_frame: None,
            start_time: Instant::now(),
        }
    }

    /// Record one fired frame that started at `frame_start`.
    pub fn record_frame(
        &mut self,
        frame_start: Instant,
        render_time: Duration,
    ) {
        let render_us = render_time.as_micros() as u32;
        self.render_time_us = render_us;
        self.render_time_min_us = self.render_time_min_us.min(render_us);
        self.render_time_max_us = self.render_time_max_us.max(render_us);

        if self.total_frames == 0 {
            self.render_time_avg_us = render_us as f32;
        } else {
            self.render_time_avg_us =
                Self::EMA_ALPHA.mul_add(render_us as f32, (1.0 - Self::EMA_ALPHA) * self.render_time_avg_us);
        }

        if let Some(last) = self.last_frame {
            self.frame_gap_us = frame_start.duration_since(last).as_micros() as u32;
        }
        self.last_frame = Some(frame_start);
        self.total_frames += 1;
    }

    #[inline]
    pub const fn render_time_avg_us(&self) -> u32 { self.render_time_avg_us as u32 }

    /// Minimum render time, or 0 before the first frame.
    pub const fn render_time_min_us(&self) -> u32 {
        if self.render_time_min_us == u32::MAX { 0 } else { self.render_time_min_us }
    }

    /// Frames per second derived from the latest frame gap.
    pub fn fps(&self) -> f32 {
        if self.frame_gap_us == 0 {
            0.0
        } else {
            1_000_000.0 / self.frame_gap_us as f32
        }
    }

    #[inline]
    pub fn uptime(&self) -> Duration { self.start_time.elapsed() }

    pub fn uptime_string(&self) -> String<12> { format_uptime(self.uptime().as_secs()) }
}

impl Default for FrameMetrics {
    fn default() -> Self { Self::new() }
}

/// Whether `interval_ms` has passed since `last_ms` on a wrapping millisecond
/// counter.
#[inline]
pub const fn interval_elapsed(
    now_ms: u32,
    last_ms: u32,
    interval_ms: u32,
) -> bool {
    now_ms.wrapping_sub(last_ms) >= interval_ms
}

/// Format seconds as `HH:MM:SS`.
pub fn format_uptime(total_secs: u64) -> String<12> {
    let hours = total_secs / 3600;
    let mins = (total_secs % 3600) / 60;
    let secs = total_secs % 60;

    let mut s = String::new();
    let _ = write!(s, "{hours:02}:{mins:02}:{secs:02}");
    s
}
