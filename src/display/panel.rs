//! Generic TFT panel driver.
//!
//! The controller bring-up, pin muxing and DMA set-up are board specific and
//! live behind [`PixelBus`], [`TearingEffect`] and [`PwmOutputs`]. This
//! module owns what is common to every board: frame sequencing, the
//! tearing-effect handshake and the backlight/LED duty math.
use super::{check_frame, DisplaySink};
use crate::config::PanelConfig;
use crate::error::DisplayError;
use crate::graphics::Color;

/// Parallel or serial link to the display controller.
pub trait PixelBus {
    /// Set the full-screen address window and open a memory write.
    fn begin_frame(&mut self, width: u32, height: u32) -> Result<(), DisplayError>;

    /// Stream pixels, blocking until the last one is on the wire.
    fn write_pixels(&mut self, pixels: &[Color]) -> Result<(), DisplayError>;
}

/// The panel's tearing-effect output, high during vertical blanking.
pub trait TearingEffect {
    fn is_high(&mut self) -> bool;
}

impl<F: FnMut() -> bool> TearingEffect for F {
    fn is_high(&mut self) -> bool {
        self()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PwmChannel {
    Backlight,
    Red,
    Green,
    Blue,
}

pub trait PwmOutputs {
    /// Set the compare level of `channel`; `wrap + 1` is always on.
    fn set_level(&mut self, channel: PwmChannel, level: u32);
}

/// Wait for the start of the next blanking interval.
///
/// If the line is already high the current interval is partly over, so the
/// wait first lets it fall and then waits for the rising edge. With a
/// `budget`, each phase polls at most that many times before giving up with
/// [`DisplayError::VsyncTimeout`].
pub fn wait_for_vsync<T: TearingEffect + ?Sized>(te: &mut T, budget: Option<u32>) -> Result<(), DisplayError> {
    poll_while(te, true, budget)?;
    poll_while(te, false, budget)
}

fn poll_while<T: TearingEffect + ?Sized>(te: &mut T, level: bool, budget: Option<u32>) -> Result<(), DisplayError> {
    let mut left = budget;
    while te.is_high() == level {
        match left.as_mut() {
            Some(0) => return Err(DisplayError::VsyncTimeout),
            Some(n) => *n -= 1,
            None => {}
        }
        core::hint::spin_loop();
    }
    Ok(())
}

/// Backlight compare level for `percent` (clamped to 100).
pub fn backlight_level(wrap: u16, percent: u8) -> u32 {
    (wrap as u32 + 1) * percent.min(100) as u32 / 100
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedLevels {
    pub red: u32,
    pub green: u32,
    pub blue: u32,
}

/// Compare levels for the common-anode status LED.
///
/// Outputs are inverted (full level is off). Green is dimmed by 4 and blue
/// by 2 relative to red so mixed colors look balanced, and everything
/// scales with the backlight `brightness`.
pub fn status_led_levels(wrap: u16, color: Color, brightness: u8) -> LedLevels {
    let top = wrap as u32 + 1;
    let brightness = brightness.min(100) as u32;
    let level = |channel: u8, shift: u32| top.saturating_sub(((top * channel as u32) >> shift) * brightness / 100);
    LedLevels {
        red: level(color.red(), 8),
        green: level(color.green(), 10),
        blue: level(color.blue(), 9),
    }
}

/// [`DisplaySink`] over board-specific bus, TE and PWM implementations.
pub struct Panel<B, T, P> {
    config: PanelConfig,
    bus: B,
    te: T,
    pwm: P,
    brightness: u8,
}

impl<B: PixelBus, T: TearingEffect, P: PwmOutputs> Panel<B, T, P> {
    /// Take ownership of the hardware, apply the configured backlight level
    /// and switch the status LED off.
    pub fn new(config: PanelConfig, bus: B, te: T, pwm: P) -> Self {
        let mut panel = Self { config, bus, te, pwm, brightness: 0 };
        panel.set_brightness(config.brightness);
        panel.set_status_led(Color::BLACK);
        log::debug!("panel {}x{} up", config.width, config.height);
        panel
    }

    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    pub fn bus(&self) -> &B {
        &self.bus
    }

    pub fn pwm(&self) -> &P {
        &self.pwm
    }

    /// Hand the hardware back.
    pub fn release(self) -> (B, T, P) {
        (self.bus, self.te, self.pwm)
    }
}

impl<B: PixelBus, T: TearingEffect, P: PwmOutputs> DisplaySink for Panel<B, T, P> {
    fn width(&self) -> u32 {
        self.config.width
    }

    fn height(&self) -> u32 {
        self.config.height
    }

    fn update(&mut self, pixels: &[Color], vsync: bool) -> Result<(), DisplayError> {
        check_frame(&*self, pixels)?;
        self.bus.begin_frame(self.config.width, self.config.height)?;
        if vsync {
            if let Err(e) = wait_for_vsync(&mut self.te, self.config.vsync_timeout) {
                log::warn!("{}, sending frame unsynchronized", e);
            }
        }
        self.bus.write_pixels(pixels)
    }

    fn set_brightness(&mut self, percent: u8) {
        self.brightness = percent.min(100);
        self.pwm
            .set_level(PwmChannel::Backlight, backlight_level(self.config.pwm_wrap, self.brightness));
    }

    fn set_status_led(&mut self, color: Color) {
        let levels = status_led_levels(self.config.pwm_wrap, color, self.brightness);
        self.pwm.set_level(PwmChannel::Red, levels.red);
        self.pwm.set_level(PwmChannel::Green, levels.green);
        self.pwm.set_level(PwmChannel::Blue, levels.blue);
    }
}
