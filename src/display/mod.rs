//! Display subsystem
//!
//! Everything between a finished [`PixelBuffer`](crate::graphics::PixelBuffer)
//! and the glass:
//! - [`DisplaySink`]: the panel as seen by the renderer
//! - `panel`: generic TFT driver over a pixel bus, TE line and PWM outputs
//! - `memory`: headless sink keeping the last frame in RAM
//! - `swap_chain`: double buffering between a render and a display context

mod memory;
mod panel;
mod swap_chain;

pub use memory::MemoryDisplay;
pub use panel::{
    backlight_level, status_led_levels, wait_for_vsync, LedLevels, Panel, PixelBus, PwmChannel, PwmOutputs,
    TearingEffect,
};
pub use swap_chain::SwapChain;

use crate::error::DisplayError;
use crate::graphics::Color;

/// A physical or virtual panel.
///
/// Frames arrive in the column-major order of
/// [`PixelBuffer::pixels`](crate::graphics::PixelBuffer::pixels).
pub trait DisplaySink {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    fn pixel_count(&self) -> usize {
        self.width() as usize * self.height() as usize
    }

    /// Transfer one frame. With `vsync` the transfer waits for the panel's
    /// blanking interval first. Returns once the whole frame is out, so the
    /// caller may reuse the pixels immediately.
    fn update(&mut self, pixels: &[Color], vsync: bool) -> Result<(), DisplayError>;

    /// Backlight in percent; values above 100 are clamped.
    fn set_brightness(&mut self, percent: u8);

    /// Status LED color. Alpha is ignored; black is off.
    fn set_status_led(&mut self, color: Color);
}

impl<D: DisplaySink + ?Sized> DisplaySink for &mut D {
    fn width(&self) -> u32 {
        (**self).width()
    }

    fn height(&self) -> u32 {
        (**self).height()
    }

    fn update(&mut self, pixels: &[Color], vsync: bool) -> Result<(), DisplayError> {
        (**self).update(pixels, vsync)
    }

    fn set_brightness(&mut self, percent: u8) {
        (**self).set_brightness(percent)
    }

    fn set_status_led(&mut self, color: Color) {
        (**self).set_status_led(color)
    }
}

/// Reject a frame whose size does not match the panel.
pub(crate) fn check_frame<D: DisplaySink + ?Sized>(display: &D, pixels: &[Color]) -> Result<(), DisplayError> {
    let expected = display.pixel_count();
    if pixels.len() != expected {
        return Err(DisplayError::SizeMismatch { expected, actual: pixels.len() });
    }
    Ok(())
}
