//! Host-side collaborators for unit tests.

use core::convert::Infallible;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use crate::colors::BLACK;
use crate::input::{PointerInput, TouchPoint};
use crate::platform::Platform;

/// In-memory framebuffer that counts every in-bounds pixel write.
pub struct FrameRecorder {
    size: Size,
    pixels: Vec<Rgb565>,
    writes: usize,
}

impl FrameRecorder {
    pub fn new(
        width: u32,
        height: u32,
    ) -> Self {
        Self {
            size: Size::new(width, height),
            pixels: vec![BLACK; (width * height) as usize],
            writes: 0,
        }
    }

    pub fn pixel(
        &self,
        x: i32,
        y: i32,
    ) -> Rgb565 {
        self.pixels[(y as u32 * self.size.width + x as u32) as usize]
    }

    pub const fn writes(&self) -> usize { self.writes }

    /// Number of pixels of `color` inside the given rectangle.
    pub fn count_in(
        &self,
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        color: Rgb565,
    ) -> usize {
        let mut n = 0;
        for py in y..y + h {
            for px in x..x + w {
                if self.pixel(px, py) == color {
                    n += 1;
                }
            }
        }
        n
    }

    pub fn count(
        &self,
        color: Rgb565,
    ) -> usize {
        self.pixels.iter().filter(|&&c| c == color).count()
    }
}

impl OriginDimensions for FrameRecorder {
    fn size(&self) -> Size { self.size }
}

impl DrawTarget for FrameRecorder {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(p, color) in pixels {
            if p.x >= 0 && p.y >= 0 && (p.x as u32) < self.size.width && (p.y as u32) < self.size.height {
                let idx = (p.y as u32 * self.size.width + p.x as u32) as usize;
                self.pixels[idx] = color;
                self.writes += 1;
            }
        }
        Ok(())
    }
}

/// Pointer input whose touch state is set directly by the test.
#[derive(Default)]
pub struct ScriptedTouch {
    pub held: Option<TouchPoint>,
    pub polls: u32,
    pub reads: u32,
}

impl ScriptedTouch {
    pub fn press(
        &mut self,
        x: i16,
        y: i16,
    ) {
        self.held = Some(TouchPoint::new(x, y, 800));
    }

    pub fn release(&mut self) { self.held = None; }
}

impl PointerInput for ScriptedTouch {
    fn is_touched(&mut self) -> bool {
        self.polls += 1;
        self.held.is_some()
    }

    fn read_point(&mut self) -> TouchPoint {
        self.reads += 1;
        self.held.unwrap_or_default()
    }
}

/// Platform with a manually driven clock.
pub struct ManualPlatform {
    pub now_ms: u32,
    pub free_bytes: u32,
    pub cpu_mhz: Option<u32>,
}

impl ManualPlatform {
    pub const fn new() -> Self {
        Self {
            now_ms: 0,
            free_bytes: 174_080,
            cpu_mhz: None,
        }
    }
}

impl Platform for ManualPlatform {
    fn now_millis(&self) -> u32 { self.now_ms }

    fn free_memory_bytes(&self) -> u32 { self.free_bytes }

    fn cpu_frequency_mhz(&self) -> Option<u32> { self.cpu_mhz }
}
