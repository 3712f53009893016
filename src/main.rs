// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::too_many_lines)]

//! Desktop simulator for the procedural screensaver.
//!
//! Runs the engine from `screensaver-common` against an SDL window instead of
//! an SPI panel. The start-up sequence mirrors the board: a system report, a
//! display self-test, then the screensaver loop.
//!
//! # Controls
//!
//! | Input | Action |
//! |-------|--------|
//! | Left mouse button | Touch the panel (restarts the animation) |
//! | `Y` | Toggle screensaver / debug page |
//! | `I` | Log system information |
//! | `T` | Start the 10 s touch test |

mod config;
mod debug_page;
mod host;
mod pages;
mod profiling;

use std::thread;
use std::time::Instant;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::{Keycode, MouseButton};
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use screensaver_common::colors::BLACK;
use screensaver_common::selftest::{SelfTestPhase, TouchTest, draw_display_test_frame};
use screensaver_common::{
    FrameTickConfig,
    LogBuffer,
    LogEntry,
    LogLevel,
    Platform,
    Screensaver,
    Viewport,
};

use crate::config::{
    DEBUG_REFRESH_MS,
    DISPLAY_TEST_TOTAL_MS,
    POLL_INTERVAL,
    SCREEN_HEIGHT,
    SCREEN_WIDTH,
    SELF_TEST_FRAME_TIME,
    WINDOW_SCALE,
    WINDOW_TITLE,
};
use crate::debug_page::{EngineStats, draw_debug_page};
use crate::host::{HostPlatform, MouseTouch};
use crate::pages::Page;
use crate::profiling::{FrameMetrics, interval_elapsed};

/// Show the red, green, blue sequence and the "Display OK!" card.
///
/// Returns `false` if the window was closed.
fn run_display_test(
    display: &mut SimulatorDisplay<Rgb565>,
    window: &mut Window,
    log: &mut LogBuffer,
    platform: &HostPlatform,
) -> bool {
    let start = platform.now_millis();
    log.push(LogEntry::new(LogLevel::Info, "Display test started", start));

    loop {
        let elapsed = platform.now_millis().wrapping_sub(start);
        let phase = draw_display_test_frame(display, elapsed);
        window.update(display);

        for ev in window.events() {
            if let SimulatorEvent::Quit = ev {
                return false;
            }
        }

        if phase == SelfTestPhase::Done && elapsed >= DISPLAY_TEST_TOTAL_MS {
            log.push(LogEntry::new(LogLevel::Info, "Display test complete", platform.now_millis()));
            return true;
        }
        thread::sleep(SELF_TEST_FRAME_TIME);
    }
}

fn main() {
    let display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(WINDOW_SCALE).build();
    let mut window = Window::new(WINDOW_TITLE, &output_settings);

    let platform = HostPlatform::new();
    let touch = MouseTouch::new(Viewport::new(SCREEN_WIDTH as i32, SCREEN_HEIGHT as i32));
    let mut saver = Screensaver::new(display, touch, FrameTickConfig::DEFAULT);
    saver.log_system_info(&platform);

    saver.display_mut().clear(BLACK).ok();
    window.update(saver.display());

    {
        let (display, _, log) = saver.parts_mut();
        if !run_display_test(display, &mut window, log, &platform) {
            return;
        }
    }

    let mut current_page = Page::default();
    let mut touch_test: Option<TouchTest> = None;
    let mut metrics = FrameMetrics::new();
    let mut last_debug_refresh = platform.now_millis();
    let mut page_just_switched = false;

    loop {
        let now = platform.now_millis();

        // Handle events
        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => return,
                SimulatorEvent::MouseButtonDown {
                    mouse_btn: MouseButton::Left,
                    point,
                } => saver.input_mut().press(point),
                SimulatorEvent::MouseButtonUp {
                    mouse_btn: MouseButton::Left,
                    ..
                } => saver.input_mut().release(),
                SimulatorEvent::MouseMove { point } => saver.input_mut().move_to(point),
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    if repeat {
                        continue;
                    }
                    match keycode {
                        Keycode::Y => {
                            current_page = current_page.toggle();
                            page_just_switched = true;
                            saver.log_mut().push_fmt(
                                LogLevel::Info,
                                now,
                                format_args!("Page: {}", current_page.name()),
                            );
                        }
                        Keycode::I => saver.log_system_info(&platform),
                        Keycode::T if touch_test.is_none() => {
                            let (display, _, log) = saver.parts_mut();
                            display.clear(BLACK).ok();
                            touch_test = Some(TouchTest::start(now, log));
                            page_just_switched = true;
                        }
                        _ => {}
                    }
                }
                _ => {}
            }
        }

        let mut drawn = false;

        if let Some(test) = touch_test.as_mut() {
            let viewport = saver.viewport();
            let (display, input, log) = saver.parts_mut();
            if test.step(display, input, log, &viewport, now) == SelfTestPhase::Done {
                test.finish(now, log);
                touch_test = None;
            }
            drawn = true;
        } else {
            match current_page {
                Page::Screensaver => {
                    let frame_start = Instant::now();
                    if saver.step(&platform) {
                        metrics.record_frame(frame_start, frame_start.elapsed());
                        drawn = true;
                    }
                }
                Page::Debug => {
                    if page_just_switched || interval_elapsed(now, last_debug_refresh, DEBUG_REFRESH_MS) {
                        last_debug_refresh = now;
                        let info = saver.system_info(&platform);
                        let engine = EngineStats {
                            frames: saver.frames(),
                            elapsed: saver.elapsed(),
                            touch_resets: saver.touch_resets(),
                        };
                        let (display, _, log) = saver.parts_mut();
                        draw_debug_page(display, &metrics, &engine, &info, log);
                        drawn = true;
                    }
                }
            }
        }
        page_just_switched = false;

        if drawn {
            window.update(saver.display());
        }
        thread::sleep(POLL_INTERVAL);
    }
}
