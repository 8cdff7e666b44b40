/// Panel geometry and LED/backlight parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelConfig {
    pub width: u32,
    pub height: u32,
    /// Backlight level applied at start-up, 0..=100.
    pub brightness: u8,
    /// Poll budget for each phase of the tearing-effect wait; `None` waits
    /// forever.
    pub vsync_timeout: Option<u32>,
    /// PWM counter top shared by the backlight and status LED channels.
    pub pwm_wrap: u16,
}

impl PanelConfig {
    /// The 1.77" 160x128 TFT of the handheld.
    pub const fn lt177() -> Self {
        Self {
            width: 160,
            height: 128,
            brightness: 60,
            vsync_timeout: None,
            pwm_wrap: 0xFFFF,
        }
    }

    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height, ..Self::lt177() }
    }

    pub const fn with_brightness(self, percent: u8) -> Self {
        let brightness = if percent > 100 { 100 } else { percent };
        Self { brightness, ..self }
    }

    pub const fn with_vsync_timeout(self, polls: u32) -> Self {
        Self { vsync_timeout: Some(polls), ..self }
    }

    pub const fn with_pwm_wrap(self, wrap: u16) -> Self {
        Self { pwm_wrap: wrap, ..self }
    }

    pub const fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self::lt177()
    }
}
