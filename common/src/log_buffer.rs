//! Log buffer with levels and timestamps for on-screen log viewing.
//!
//! Engine events (start-up, touches, clock resets, system reports, self-test
//! samples) are kept in a fixed-capacity circular buffer that a host can
//! render on its debug page. With the `defmt` feature enabled the same
//! messages are also forwarded to the `defmt` logger.
//!
//! # Log Levels
//!
//! - `Debug`: Gray - state changes useful while tuning
//! - `Info`: Green - normal operation
//! - `Warn`: Yellow - unexpected but handled conditions
//! - `Error`: Red - failures reported by collaborators
//!
//! # Usage
//!
//! ```ignore
//! use crate::log_buffer::log_info;
//!
//! log_info!(self.log, now_ms, "Touch at X={}, Y={}", p.x, p.y);
//! ```

use core::fmt;

use embedded_graphics::pixelcolor::Rgb565;
use heapless::String;

use crate::colors::{GRAY, GREEN, RED, YELLOW};

/// Maximum number of log entries to keep.
pub const LOG_ENTRIES: usize = 14;

/// Maximum bytes per log message.
pub const LOG_MSG_LEN: usize = 40;

/// Log severity level.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum LogLevel {
    /// State changes (gray)
    Debug = 0,
    /// Normal operation (green)
    #[default]
    Info = 1,
    /// Warnings (yellow)
    Warn = 2,
    /// Errors (red)
    Error = 3,
}

impl LogLevel {
    /// Display colour for this level.
    pub const fn color(self) -> Rgb565 {
        match self {
            Self::Debug => GRAY,
            Self::Info => GREEN,
            Self::Warn => YELLOW,
            Self::Error => RED,
        }
    }

    /// Single-character prefix for this level.
    pub const fn prefix(self) -> char {
        match self {
            Self::Debug => 'D',
            Self::Info => 'I',
            Self::Warn => 'W',
            Self::Error => 'E',
        }
    }
}

/// A single log entry with level, message, and timestamp.
#[derive(Clone, Debug, Default)]
pub struct LogEntry {
    pub level: LogLevel,
    /// Message, truncated to `LOG_MSG_LEN` bytes at a character boundary.
    pub message: String<LOG_MSG_LEN>,
    /// Milliseconds since boot.
    pub timestamp_ms: u32,
}

impl LogEntry {
    pub fn new(
        level: LogLevel,
        message: &str,
        timestamp_ms: u32,
    ) -> Self {
        let mut msg = String::new();
        Truncating(&mut msg).push(message);
        Self {
            level,
            message: msg,
            timestamp_ms,
        }
    }

    /// Build an entry from formatting arguments, truncating on overflow.
    pub fn from_fmt(
        level: LogLevel,
        timestamp_ms: u32,
        args: fmt::Arguments<'_>,
    ) -> Self {
        let mut msg = String::new();
        fmt::write(&mut Truncating(&mut msg), args).ok();
        Self {
            level,
            message: msg,
            timestamp_ms,
        }
    }
}

/// `fmt::Write` adapter that keeps whatever fits and drops the rest.
struct Truncating<'a, const N: usize>(&'a mut String<N>);

impl<const N: usize> Truncating<'_, N> {
    fn push(
        &mut self,
        s: &str,
    ) {
        for c in s.chars() {
            if self.0.push(c).is_err() {
                break;
            }
        }
    }
}

impl<const N: usize> fmt::Write for Truncating<'_, N> {
    fn write_str(
        &mut self,
        s: &str,
    ) -> fmt::Result {
        self.push(s);
        Ok(())
    }
}

/// Circular buffer of log entries.
pub struct LogBuffer {
    entries: [LogEntry; LOG_ENTRIES],
    head: usize, // Next write position
    count: usize,
}

impl LogBuffer {
    pub const fn new() -> Self {
        Self {
            entries: [const {
                LogEntry {
                    level: LogLevel::Info,
                    message: String::new(),
                    timestamp_ms: 0,
                }
            }; LOG_ENTRIES],
            head: 0,
            count: 0,
        }
    }

    /// Push a new log entry. Oldest entry is dropped if buffer is full.
    pub fn push(
        &mut self,
        entry: LogEntry,
    ) {
        self.entries[self.head] = entry;
        self.head = (self.head + 1) % LOG_ENTRIES;
        if self.count < LOG_ENTRIES {
            self.count += 1;
        }
    }

    /// Format and push a message.
    pub fn push_fmt(
        &mut self,
        level: LogLevel,
        timestamp_ms: u32,
        args: fmt::Arguments<'_>,
    ) {
        self.push(LogEntry::from_fmt(level, timestamp_ms, args));
    }

    #[inline]
    pub const fn len(&self) -> usize { self.count }

    #[inline]
    pub const fn is_empty(&self) -> bool { self.count == 0 }

    /// Most recent entry, if any.
    pub fn last(&self) -> Option<&LogEntry> {
        if self.count == 0 {
            None
        } else {
            Some(&self.entries[(self.head + LOG_ENTRIES - 1) % LOG_ENTRIES])
        }
    }

    /// Iterate over entries from oldest to newest.
    pub fn iter(&self) -> LogBufferIter<'_> {
        let start = if self.count < LOG_ENTRIES { 0 } else { self.head };
        LogBufferIter {
            buffer: self,
            pos: start,
            remaining: self.count,
        }
    }
}

impl Default for LogBuffer {
    fn default() -> Self { Self::new() }
}

/// Iterator over log buffer entries (oldest to newest).
pub struct LogBufferIter<'a> {
    buffer: &'a LogBuffer,
    pos: usize,
    remaining: usize,
}

impl<'a> Iterator for LogBufferIter<'a> {
    type Item = &'a LogEntry;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let entry = &self.buffer.entries[self.pos];
        self.pos = (self.pos + 1) % LOG_ENTRIES;
        self.remaining -= 1;
        Some(entry)
    }
}

/// Log a message at Info level.
macro_rules! log_info {
    ($log:expr, $now:expr, $($arg:tt)*) => {{
        $log.push_fmt($crate::log_buffer::LogLevel::Info, $now, format_args!($($arg)*));
        #[cfg(feature = "defmt")]
        defmt::info!($($arg)*);
    }};
}

/// Log a message at Warn level.
macro_rules! log_warn {
    ($log:expr, $now:expr, $($arg:tt)*) => {{
        $log.push_fmt($crate::log_buffer::LogLevel::Warn, $now, format_args!($($arg)*));
        #[cfg(feature = "defmt")]
        defmt::warn!($($arg)*);
    }};
}

/// Log a message at Debug level.
macro_rules! log_debug {
    ($log:expr, $now:expr, $($arg:tt)*) => {{
        $log.push_fmt($crate::log_buffer::LogLevel::Debug, $now, format_args!($($arg)*));
        #[cfg(feature = "defmt")]
        defmt::debug!($($arg)*);
    }};
}

pub(crate) use {log_debug, log_info, log_warn};

// =============================================================================
// Tests
// =============================================================================
