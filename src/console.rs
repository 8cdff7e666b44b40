//! Top-level device context.
//!
//! One [`Console`] owns the display, the frame buffers and the sprite cache
//! and is passed by reference to whatever draws. Nothing in the crate keeps
//! global device state.
use crate::display::{DisplaySink, SwapChain};
use crate::error::GfxError;
use crate::graphics::{Color, PixelBuffer, SpriteCache, SpriteId};

pub struct Console<'a, D: DisplaySink> {
    display: D,
    frames: SwapChain,
    sprites: SpriteCache<'a>,
    vsync: bool,
}

impl<'a, D: DisplaySink> Console<'a, D> {
    /// Wrap `display` with a swap chain of its size. Frames wait for vsync
    /// unless [`set_vsync`](Self::set_vsync) says otherwise.
    pub fn new(display: D) -> Result<Self, GfxError> {
        let frames = SwapChain::new(display.width(), display.height())?;
        log::info!("console {}x{} ready", display.width(), display.height());
        Ok(Self {
            display,
            frames,
            sprites: SpriteCache::new(),
            vsync: true,
        })
    }

    pub fn width(&self) -> u32 {
        self.display.width()
    }

    pub fn height(&self) -> u32 {
        self.display.height()
    }

    pub fn vsync(&self) -> bool {
        self.vsync
    }

    pub fn set_vsync(&mut self, vsync: bool) {
        self.vsync = vsync;
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    pub fn swap_chain(&self) -> &SwapChain {
        &self.frames
    }

    pub fn sprites(&self) -> &SpriteCache<'a> {
        &self.sprites
    }

    pub fn sprites_mut(&mut self) -> &mut SpriteCache<'a> {
        &mut self.sprites
    }

    /// Borrow the parts separately, e.g. to render from one thread through
    /// the swap chain while another presents to the display.
    pub fn split(&mut self) -> (&SwapChain, &mut SpriteCache<'a>, &mut D) {
        (&self.frames, &mut self.sprites, &mut self.display)
    }

    /// Run `f` on the back buffer.
    pub fn draw<R>(&self, f: impl FnOnce(&mut PixelBuffer) -> R) -> R {
        self.frames.draw(f)
    }

    pub fn submit(&self) {
        self.frames.submit();
    }

    /// Send the last submitted frame, if any. Returns whether one went out.
    pub fn present(&mut self) -> Result<bool, GfxError> {
        Ok(self.frames.present(&mut self.display, self.vsync)?)
    }

    /// Draw, submit and present in one go, for single-context use.
    pub fn frame<R>(&mut self, f: impl FnOnce(&mut PixelBuffer) -> R) -> Result<R, GfxError> {
        let result = self.draw(f);
        self.submit();
        self.present()?;
        Ok(result)
    }

    /// Show a registered sprite centered on an otherwise transparent screen.
    /// The image is decoded straight into the back buffer, not cached.
    pub fn show_sprite_fullscreen(&mut self, id: SpriteId) -> Result<(), GfxError> {
        let sprites = &self.sprites;
        self.frames.draw(|back| sprites.draw_centered(id, back))?;
        self.submit();
        self.present()?;
        Ok(())
    }

    pub fn set_brightness(&mut self, percent: u8) {
        self.display.set_brightness(percent);
    }

    pub fn set_status_led(&mut self, color: Color) {
        self.display.set_status_led(color);
    }

    /// Tear down, handing the display back.
    pub fn into_display(self) -> D {
        self.display
    }
}
