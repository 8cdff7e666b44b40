use core::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use spin::{Mutex, MutexGuard};

use super::DisplaySink;
use crate::error::{DisplayError, GfxError};
use crate::graphics::PixelBuffer;

/// Two frame buffers shared between a render context and a display context.
///
/// The renderer draws into the back buffer and [`submit`](Self::submit)s it;
/// the display side [`present`](Self::present)s the front buffer. Each buffer
/// sits behind its own lock, so a transfer in progress blocks only a renderer
/// that tries to reuse that same buffer.
pub struct SwapChain {
    buffers: [Mutex<PixelBuffer>; 2],
    front: AtomicUsize,
    fresh: AtomicBool,
}

impl SwapChain {
    pub fn new(width: u32, height: u32) -> Result<Self, GfxError> {
        Ok(Self {
            buffers: [Mutex::new(PixelBuffer::new(width, height)?), Mutex::new(PixelBuffer::new(width, height)?)],
            front: AtomicUsize::new(0),
            fresh: AtomicBool::new(false),
        })
    }

    pub fn width(&self) -> u32 {
        self.buffers[0].lock().width()
    }

    pub fn height(&self) -> u32 {
        self.buffers[0].lock().height()
    }

    /// Lock the back buffer. Drop the guard before calling
    /// [`submit`](Self::submit).
    pub fn back(&self) -> MutexGuard<'_, PixelBuffer> {
        self.buffers[1 - self.front.load(Ordering::Acquire)].lock()
    }

    /// Run `f` on the back buffer.
    pub fn draw<R>(&self, f: impl FnOnce(&mut PixelBuffer) -> R) -> R {
        f(&mut *self.back())
    }

    /// Make the back buffer the front one and mark it ready for display.
    pub fn submit(&self) {
        self.front.fetch_xor(1, Ordering::AcqRel);
        self.fresh.store(true, Ordering::Release);
    }

    /// Whether a submitted frame is waiting for [`present`](Self::present).
    pub fn has_fresh_frame(&self) -> bool {
        self.fresh.load(Ordering::Acquire)
    }

    /// Send the front buffer to `display` if a new frame was submitted since
    /// the last call. Returns whether a frame went out.
    pub fn present<D: DisplaySink + ?Sized>(&self, display: &mut D, vsync: bool) -> Result<bool, DisplayError> {
        if !self.fresh.swap(false, Ordering::AcqRel) {
            return Ok(false);
        }
        loop {
            let index = self.front.load(Ordering::Acquire);
            let front = self.buffers[index].lock();
            // a submit between load and lock moved the front
            if self.front.load(Ordering::Acquire) == index {
                front.show_on(display, vsync)?;
                return Ok(true);
            }
        }
    }

    /// Present regardless of freshness, e.g. after the panel was reset.
    pub fn present_again<D: DisplaySink + ?Sized>(&self, display: &mut D, vsync: bool) -> Result<(), DisplayError> {
        self.fresh.store(true, Ordering::Release);
        self.present(display, vsync).map(|_| ())
    }
}
