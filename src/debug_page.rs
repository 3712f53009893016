//! Debug page rendering: frame metrics, system info and a log terminal.

use core::fmt::Write;

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;
use embedded_graphics_simulator::SimulatorDisplay;
use heapless::String;
use profont::PROFONT_12_POINT;
use screensaver_common::colors::{BLACK, GRAY, GREEN, WHITE, YELLOW};
use screensaver_common::styles::LABEL_FONT;
use screensaver_common::{LogBuffer, SystemInfo};

use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::profiling::FrameMetrics;

const HEADER_Y: i32 = 13;
const HEADER_DIVIDER_Y: i32 = 18;
const SECTION_HEADER_Y: i32 = 28;
const STATS_Y: i32 = 40;
const LOG_DIVIDER_Y: i32 = 118;
const LOG_Y: i32 = 130;
const LOG_LINE_HEIGHT: i32 = 11;
const LOG_VISIBLE_LINES: usize = 9;
const COL1_X: i32 = 4;
const COL2_X: i32 = 110;
const COL3_X: i32 = 215;
const STAT_LINE_HEIGHT: i32 = 13;

const DEBUG_BG: Rgb565 = BLACK;
const HEADER_COLOR: Rgb565 = GREEN;
const SECTION_COLOR: Rgb565 = GRAY;
const VALUE_COLOR: Rgb565 = WHITE;
const HIGHLIGHT_COLOR: Rgb565 = YELLOW;
const LOG_PROMPT_COLOR: Rgb565 = GREEN;
const DIVIDER_COLOR: Rgb565 = GRAY;
const TERMINAL_BG: Rgb565 = Rgb565::new(1, 2, 1);

/// Engine figures shown in the middle column.
pub struct EngineStats {
    pub frames: u32,
    pub elapsed: f32,
    pub touch_resets: u32,
}

pub fn draw_debug_page(
    display: &mut SimulatorDisplay<Rgb565>,
    metrics: &FrameMetrics,
    engine: &EngineStats,
    info: &SystemInfo,
    log: &LogBuffer,
) {
    display.clear(DEBUG_BG).ok();
    draw_header(display, metrics);
    draw_horizontal_line(display, HEADER_DIVIDER_Y);
    draw_section_headers(display);
    draw_timing_column(display, metrics);
    draw_engine_column(display, engine);
    draw_system_column(display, info);
    draw_horizontal_line(display, LOG_DIVIDER_Y);
    draw_log_terminal(display, log);
}

fn draw_header(
    display: &mut SimulatorDisplay<Rgb565>,
    metrics: &FrameMetrics,
) {
    let header_style = MonoTextStyle::new(&PROFONT_12_POINT, HEADER_COLOR);
    let info_style = MonoTextStyle::new(LABEL_FONT, VALUE_COLOR);

    Text::new("DEBUG VIEW", Point::new(COL1_X, HEADER_Y), header_style)
        .draw(display)
        .ok();

    let mut uptime_str: String<24> = String::new();
    let _ = write!(uptime_str, "UP {}", metrics.uptime_string());
    Text::new(&uptime_str, Point::new(160, HEADER_Y), info_style)
        .draw(display)
        .ok();

    let mut fps_str: String<12> = String::new();
    let _ = write!(fps_str, "{:.0} FPS", metrics.fps());
    Text::new(&fps_str, Point::new(266, HEADER_Y), info_style)
        .draw(display)
        .ok();
}

fn draw_section_headers(display: &mut SimulatorDisplay<Rgb565>) {
    let style = MonoTextStyle::new(LABEL_FONT, SECTION_COLOR);
    Text::new("TIMING", Point::new(COL1_X, SECTION_HEADER_Y), style)
        .draw(display)
        .ok();
    Text::new("ENGINE", Point::new(COL2_X, SECTION_HEADER_Y), style)
        .draw(display)
        .ok();
    Text::new("SYSTEM", Point::new(COL3_X, SECTION_HEADER_Y), style)
        .draw(display)
        .ok();
}

/// Draw `lines` top to bottom from `(x, STATS_Y)`.
fn draw_column(
    display: &mut SimulatorDisplay<Rgb565>,
    x: i32,
    lines: &[(String<20>, Rgb565)],
) {
    let mut y = STATS_Y;
    for (text, color) in lines {
        Text::new(text, Point::new(x, y), MonoTextStyle::new(LABEL_FONT, *color))
            .draw(display)
            .ok();
        y += STAT_LINE_HEIGHT;
    }
}

fn line(args: core::fmt::Arguments<'_>) -> String<20> {
    let mut s = String::new();
    let _ = s.write_fmt(args);
    s
}

fn draw_timing_column(
    display: &mut SimulatorDisplay<Rgb565>,
    metrics: &FrameMetrics,
) {
    let ms = |us: u32| us as f32 / 1000.0;
    draw_column(
        display,
        COL1_X,
        &[
            (line(format_args!("Render:{:.1}ms", ms(metrics.render_time_us))), VALUE_COLOR),
            (line(format_args!("Gap:   {:.1}ms", ms(metrics.frame_gap_us))), VALUE_COLOR),
            (line(format_args!("Min:   {:.1}ms", ms(metrics.render_time_min_us()))), HIGHLIGHT_COLOR),
            (line(format_args!("Max:   {:.1}ms", ms(metrics.render_time_max_us))), HIGHLIGHT_COLOR),
            (line(format_args!("Avg:   {:.1}ms", ms(metrics.render_time_avg_us()))), HIGHLIGHT_COLOR),
        ],
    );
}

fn draw_engine_column(
    display: &mut SimulatorDisplay<Rgb565>,
    engine: &EngineStats,
) {
    draw_column(
        display,
        COL2_X,
        &[
            (line(format_args!("Frames:{}", engine.frames)), VALUE_COLOR),
            (line(format_args!("t:     {:.1}s", engine.elapsed)), VALUE_COLOR),
            (line(format_args!("Resets:{}", engine.touch_resets)), VALUE_COLOR),
        ],
    );
}

fn draw_system_column(
    display: &mut SimulatorDisplay<Rgb565>,
    info: &SystemInfo,
) {
    let cpu = match info.cpu_frequency_mhz {
        Some(mhz) => line(format_args!("CPU:  {mhz}MHz")),
        None => line(format_args!("CPU:  n/a")),
    };
    let flash = match info.flash_size_bytes {
        Some(bytes) => line(format_args!("Flash:{}KB", bytes / 1024)),
        None => line(format_args!("Flash:n/a")),
    };
    draw_column(
        display,
        COL3_X,
        &[
            (line(format_args!("Heap: {}KB", info.free_heap_bytes / 1024)), VALUE_COLOR),
            (cpu, VALUE_COLOR),
            (flash, VALUE_COLOR),
            (line(format_args!("Up:   {}s", info.uptime_secs)), HIGHLIGHT_COLOR),
        ],
    );
}

/// Newest log lines, each prefixed with its level letter in the level's color.
fn draw_log_terminal(
    display: &mut SimulatorDisplay<Rgb565>,
    log: &LogBuffer,
) {
    let prompt_style = MonoTextStyle::new(LABEL_FONT, LOG_PROMPT_COLOR);

    Rectangle::new(
        Point::new(0, LOG_DIVIDER_Y + 2),
        Size::new(SCREEN_WIDTH, SCREEN_HEIGHT - LOG_DIVIDER_Y as u32 - 2),
    )
    .into_styled(PrimitiveStyle::with_fill(TERMINAL_BG))
    .draw(display)
    .ok();

    let mut y = LOG_Y;
    let skip = log.len().saturating_sub(LOG_VISIBLE_LINES);

    for entry in log.iter().skip(skip) {
        let style = MonoTextStyle::new(LABEL_FONT, entry.level.color());
        let mut prefix: String<4> = String::new();
        let _ = write!(prefix, "{}>", entry.level.prefix());
        Text::new(&prefix, Point::new(COL1_X, y), style).draw(display).ok();
        Text::new(&entry.message, Point::new(COL1_X + 16, y), style)
            .draw(display)
            .ok();
        y += LOG_LINE_HEIGHT;
    }

    Text::new("> _", Point::new(COL1_X, y), prompt_style).draw(display).ok();
}

fn draw_horizontal_line(
    display: &mut SimulatorDisplay<Rgb565>,
    y: i32,
) {
    Line::new(Point::new(2, y), Point::new(SCREEN_WIDTH as i32 - 2, y))
        .into_styled(PrimitiveStyle::with_stroke(DIVIDER_COLOR, 1))
        .draw(display)
        .ok();
}
