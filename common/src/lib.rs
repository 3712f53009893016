//! Procedural screensaver engine for small embedded displays.
//!
//! This crate contains the platform-agnostic effect shared by the desktop
//! simulator and hardware targets:
//!
//! - [`clock`]: Frame pacing gate and the animation clock
//! - [`colors`]: Colour constants, rainbow cycling, brightness scaling, Rgb565 packing
//! - [`starfield`]: Deterministic twinkling star field
//! - [`motion`]: Lissajous object, fading trail and highlight
//! - [`input`]: Pointer input bridge (touch resets the clock)
//! - [`overlay`]: Diagnostics text
//! - [`engine`]: [`Screensaver`] context and frame compositor
//! - [`selftest`]: Display and touch bring-up tests
//! - [`log_buffer`]: On-screen log ring buffer
//!
//! All drawing is generic over `DrawTarget<Color = Rgb565>`.
//!
//! # Testing
//!
//! Run tests on host with:
//! ```bash
//! cargo test -p screensaver-common
//! ```
//!
//! Tests run with `std` enabled (via `cfg_attr`), while firmware builds are
//! `no_std`.
//!
//! # Features
//!
//! - `defmt`: every `log_info!`/`log_warn!`/`log_debug!` call is also sent to
//!   `defmt`, and the public data types derive `defmt::Format`. Firmware enables
//!   it in its dependency entry and links a logger (e.g. `defmt-rtt`). Host test
//!   binaries cannot link without a logger, so the feature is type-checked only:
//!   ```bash
//!   cargo check -p screensaver-common --features defmt
//!   ```

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod clock;
pub mod colors;
pub mod config;
pub mod engine;
pub mod input;
pub mod log_buffer;
pub mod motion;
pub mod overlay;
pub mod platform;
pub mod primitives;
pub mod selftest;
pub mod starfield;
pub mod styles;
pub mod viewport;

mod trig;

#[cfg(test)]
mod test_support;

// Re-export commonly used items
pub use clock::{AnimationClock, FrameTickConfig};
pub use colors::Rgb;
pub use engine::Screensaver;
pub use input::{PointerInput, TouchPoint};
pub use log_buffer::{LogBuffer, LogEntry, LogLevel};
pub use platform::{Platform, SystemInfo};
pub use viewport::Viewport;
