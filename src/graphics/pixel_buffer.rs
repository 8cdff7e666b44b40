//! Software framebuffer.
//!
//! The panel is mounted rotated by 90°, so the backing store is column-major
//! with the height running fastest: pixel `(x, y)` lives at `x * height + y`
//! and a vertical span is one contiguous run, which is what the DMA streams
//! out. One extra cell sits past the visible area; out-of-range coordinates
//! resolve to it, so every primitive is clip-safe at the single pixel level.
use alloc::vec::Vec;
use spin::Mutex;

use super::color::Color;
use super::effect::{Effect, Pixel};
use crate::display::DisplaySink;
use crate::error::{DisplayError, GfxError};

/// The bulk-fill engine is shared by every buffer; two clears never overlap.
static FILL_LOCK: Mutex<()> = Mutex::new(());

/// How the current brush color reaches the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DrawMode {
    /// Opaque color, plain store.
    Dot,
    /// Translucent color, composited over the destination.
    AlphaDot,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct Brush {
    pub color: Color,
    pub mode: DrawMode,
}

impl Brush {
    pub fn new(color: Color) -> Self {
        let mode = if color.is_opaque() { DrawMode::Dot } else { DrawMode::AlphaDot };
        Self { color, mode }
    }

    #[inline]
    pub fn apply(&self, dst: &mut Color) {
        match self.mode {
            DrawMode::Dot => *dst = self.color,
            DrawMode::AlphaDot => *dst = self.color.blend_over(*dst),
        }
    }
}

/// Owned ARGB pixel store. Deliberately not `Clone`: a buffer is the sole
/// owner of its allocation.
pub struct PixelBuffer {
    width: u32,
    height: u32,
    cells: Vec<Color>,
    brush: Brush,
    cursor: usize,
}

impl PixelBuffer {
    /// Allocate a `width` x `height` buffer cleared to [`Color::TRANSPARENT`].
    pub fn new(width: u32, height: u32) -> Result<Self, GfxError> {
        let count = (width as usize)
            .checked_mul(height as usize)
            .filter(|&n| n > 0 && n < usize::MAX)
            .ok_or(GfxError::InvalidDimensions { width, height })?;

        let mut cells = Vec::new();
        cells
            .try_reserve_exact(count + 1)
            .map_err(|_| GfxError::OutOfMemory { width, height })?;
        cells.resize(count + 1, Color::TRANSPARENT);

        log::debug!("pixel buffer {}x{} allocated", width, height);
        Ok(Self {
            width,
            height,
            cells,
            brush: Brush::new(Color::WHITE),
            cursor: count,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixel_count(&self) -> usize {
        self.cells.len() - 1
    }

    /// Visible pixels in panel (column-major) order.
    pub fn pixels(&self) -> &[Color] {
        &self.cells[..self.pixel_count()]
    }

    pub fn pixels_mut(&mut self) -> &mut [Color] {
        let n = self.pixel_count();
        &mut self.cells[..n]
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        if self.contains(x, y) {
            Some(self.cells[self.index_of(x, y)])
        } else {
            None
        }
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    /// Backing index of `(x, y)`, or the discard cell when outside.
    #[inline]
    pub(crate) fn index_of(&self, x: i32, y: i32) -> usize {
        if self.contains(x, y) {
            x as usize * self.height as usize + y as usize
        } else {
            self.pixel_count()
        }
    }

    #[inline]
    pub(crate) fn set_color(&mut self, color: Color) {
        self.brush = Brush::new(color);
    }

    #[inline]
    pub(crate) fn seek(&mut self, x: i32, y: i32) {
        self.cursor = self.index_of(x, y);
    }

    /// Apply the brush at the cursor.
    #[inline]
    pub(crate) fn plot(&mut self) {
        let brush = self.brush;
        brush.apply(&mut self.cells[self.cursor]);
    }

    #[inline]
    pub(crate) fn plot_at(&mut self, x: i32, y: i32) {
        self.seek(x, y);
        self.plot();
    }

    /// Store `color` at `(x, y)` without compositing.
    #[inline]
    pub(crate) fn put(&mut self, x: i32, y: i32, color: Color) {
        let idx = self.index_of(x, y);
        self.cells[idx] = color;
    }

    /// Brush the column `x` from `y0` to `y1` inclusive. The run is
    /// contiguous in memory.
    pub(crate) fn vertical_span(&mut self, x: i32, y0: i32, y1: i32) {
        let (y0, y1) = if y0 <= y1 { (y0, y1) } else { (y1, y0) };
        if x < 0 || x as u32 >= self.width || y1 < 0 || y0 >= self.height as i32 {
            return;
        }
        let top = y0.max(0) as usize;
        let bottom = y1.min(self.height as i32 - 1) as usize;
        let base = x as usize * self.height as usize;
        let brush = self.brush;
        for cell in &mut self.cells[base + top..=base + bottom] {
            brush.apply(cell);
        }
    }

    /// Brush the row `y` from `x0` to `x1` inclusive, stepping one column
    /// (`height` cells) at a time.
    pub(crate) fn horizontal_span(&mut self, x0: i32, x1: i32, y: i32) {
        let (x0, x1) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
        if y < 0 || y as u32 >= self.height || x1 < 0 || x0 >= self.width as i32 {
            return;
        }
        let left = x0.max(0) as usize;
        let right = x1.min(self.width as i32 - 1) as usize;
        let stride = self.height as usize;
        let brush = self.brush;
        let mut idx = left * stride + y as usize;
        for _ in left..=right {
            brush.apply(&mut self.cells[idx]);
            idx += stride;
        }
    }

    /// Single pixel; opaque colors overwrite, translucent ones blend.
    pub fn point(&mut self, x: i32, y: i32, color: Color) {
        self.set_color(color);
        self.plot_at(x, y);
    }

    /// Fill every visible cell with `color` (no blending).
    ///
    /// Takes the global fill lock for the whole run.
    pub fn clear(&mut self, color: Color) {
        let _fill = FILL_LOCK.lock();
        self.pixels_mut().fill(color);
    }

    /// Hand the frame to `display`. Blocks until the transfer is done.
    pub fn show_on<D: DisplaySink + ?Sized>(&self, display: &mut D, vsync: bool) -> Result<(), DisplayError> {
        display.update(self.pixels(), vsync)
    }

    /// Copy all of `src` with its upper-left corner at `(x, y)`.
    pub fn blit(&mut self, src: &PixelBuffer, x: i32, y: i32) {
        self.blit_region(src, x, y, 0, 0, src.width, src.height);
    }

    /// Copy the `width` x `height` window of `src` starting at
    /// `(src_x, src_y)` to `(dst_x, dst_y)`.
    ///
    /// Both windows are clipped: the source against `src`, the destination
    /// against this buffer, shifting the source origin when the destination
    /// starts off the left or top edge. Each pixel is written with its own
    /// blend mode.
    #[allow(clippy::too_many_arguments)]
    pub fn blit_region(
        &mut self,
        src: &PixelBuffer,
        dst_x: i32,
        dst_y: i32,
        src_x: u32,
        src_y: u32,
        width: u32,
        height: u32,
    ) {
        if src_x >= src.width || src_y >= src.height {
            return;
        }
        let mut w = width.min(src.width - src_x) as i64;
        let mut h = height.min(src.height - src_y) as i64;
        let (mut sx, mut sy) = (src_x as i64, src_y as i64);
        let (mut dx, mut dy) = (dst_x as i64, dst_y as i64);

        if dx < 0 {
            sx -= dx;
            w += dx;
            dx = 0;
        }
        if dy < 0 {
            sy -= dy;
            h += dy;
            dy = 0;
        }
        w = w.min(self.width as i64 - dx);
        h = h.min(self.height as i64 - dy);
        if w <= 0 || h <= 0 {
            return;
        }

        let (dst_stride, src_stride) = (self.height as usize, src.height as usize);
        for col in 0..w as usize {
            let d = (dx as usize + col) * dst_stride + dy as usize;
            let s = (sx as usize + col) * src_stride + sy as usize;
            let column = &src.cells[s..s + h as usize];
            for (dst, &c) in self.cells[d..d + h as usize].iter_mut().zip(column) {
                Brush::new(c).apply(dst);
            }
        }
    }

    /// Copy `src` centered on `(xc, yc)`, passing each pixel through
    /// `effect` as an offset from the source center.
    pub fn blit_with_effect<E: Effect + ?Sized>(&mut self, src: &PixelBuffer, xc: i32, yc: i32, effect: &E) {
        let x_off = (src.width >> 1) as i32;
        let y_off = (src.height >> 1) as i32;
        let stride = src.height as usize;

        for x in 0..src.width as usize {
            for y in 0..src.height as usize {
                let color = src.cells[x * stride + y];
                let out = effect.transform(Pixel::new(x as i32 - x_off, y as i32 - y_off, color));
                self.point(out.x + xc, out.y + yc, out.color);
            }
        }
    }
}

impl core::fmt::Debug for PixelBuffer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PixelBuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}
