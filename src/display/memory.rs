use alloc::vec::Vec;

use super::{check_frame, DisplaySink};
use crate::error::{DisplayError, GfxError};
use crate::graphics::Color;

/// Headless display that keeps the last frame, for tests and host-side
/// tooling.
pub struct MemoryDisplay {
    width: u32,
    height: u32,
    frame: Vec<Color>,
    frames: u64,
    vsync_requests: u64,
    brightness: u8,
    status_led: Color,
}

impl MemoryDisplay {
    pub fn new(width: u32, height: u32) -> Result<Self, GfxError> {
        let count = (width as usize)
            .checked_mul(height as usize)
            .filter(|&n| n > 0)
            .ok_or(GfxError::InvalidDimensions { width, height })?;
        let mut frame = Vec::new();
        frame
            .try_reserve_exact(count)
            .map_err(|_| GfxError::OutOfMemory { width, height })?;
        frame.resize(count, Color::BLACK);
        Ok(Self {
            width,
            height,
            frame,
            frames: 0,
            vsync_requests: 0,
            brightness: 0,
            status_led: Color::BLACK,
        })
    }

    /// The most recent frame, column-major. Black before the first update.
    pub fn frame(&self) -> &[Color] {
        &self.frame
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.frame.get(x as usize * self.height as usize + y as usize).copied()
    }

    pub fn frames_shown(&self) -> u64 {
        self.frames
    }

    /// How many of the shown frames asked for vsync.
    pub fn vsync_requests(&self) -> u64 {
        self.vsync_requests
    }

    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    pub fn status_led(&self) -> Color {
        self.status_led
    }
}

impl DisplaySink for MemoryDisplay {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn update(&mut self, pixels: &[Color], vsync: bool) -> Result<(), DisplayError> {
        check_frame(&*self, pixels)?;
        self.frame.copy_from_slice(pixels);
        self.frames += 1;
        if vsync {
            self.vsync_requests += 1;
        }
        log::trace!("memory display: frame {}", self.frames);
        Ok(())
    }

    fn set_brightness(&mut self, percent: u8) {
        self.brightness = percent.min(100);
    }

    fn set_status_led(&mut self, color: Color) {
        self.status_led = color.set_alpha(0xFF);
    }
}
