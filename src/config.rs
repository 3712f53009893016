//! Simulator configuration constants.
//!
//! The simulated panel matches a 320x240 SPI TFT in landscape. Memory
//! figures imitate a microcontroller with a 320 KB heap that also holds a
//! full Rgb565 framebuffer, so the overlay readout looks like the real board.

use std::time::Duration;

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels.
pub const SCREEN_WIDTH: u32 = 320;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 240;

/// Window pixels per display pixel.
pub const WINDOW_SCALE: u32 = 2;

/// Window title.
pub const WINDOW_TITLE: &str = "Screensaver Sim";

// =============================================================================
// Timing Configuration
// =============================================================================

/// Sleep between loop iterations. Far below the frame interval so the tick
/// gate, not the sleep, decides the frame rate.
pub const POLL_INTERVAL: Duration = Duration::from_millis(1);

/// Sleep between display self-test frames.
pub const SELF_TEST_FRAME_TIME: Duration = Duration::from_millis(20);

/// How long the display self-test runs, including the "Display OK!" hold.
pub const DISPLAY_TEST_TOTAL_MS: u32 = 2_500;

/// Refresh interval of the debug page.
pub const DEBUG_REFRESH_MS: u32 = 250;

// =============================================================================
// Simulated Platform
// =============================================================================

/// Total heap of the simulated board.
pub const SIMULATED_HEAP_BYTES: u32 = 320 * 1024;

/// Rgb565 framebuffer held in that heap.
pub const FRAMEBUFFER_BYTES: u32 = SCREEN_WIDTH * SCREEN_HEIGHT * 2;

/// Raw pressure reported while the mouse button is held.
pub const SIMULATED_PRESSURE: u16 = 600;

const _: () = assert!(FRAMEBUFFER_BYTES < SIMULATED_HEAP_BYTES);
