//! Lazily decoded, reference-counted PNG sprites.
//!
//! Assets are registered once as encoded bytes. The first [`acquire`]
//! decodes into a buffer of the image's size; later acquires share it. Each
//! acquire is balanced by a [`release`]; the decoded buffer is dropped from
//! the cache when the count returns to zero, so rarely used images do not
//! pin heap.
//!
//! [`acquire`]: SpriteCache::acquire
//! [`release`]: SpriteCache::release
use alloc::sync::Arc;
use alloc::vec::Vec;

use super::color::Color;
use super::pixel_buffer::PixelBuffer;
use super::png::PngImage;
use crate::error::GfxError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SpriteId(usize);

impl SpriteId {
    pub const fn index(self) -> usize {
        self.0
    }
}

struct Slot<'a> {
    image: PngImage<'a>,
    decoded: Option<Arc<PixelBuffer>>,
    refs: usize,
}

#[derive(Default)]
pub struct SpriteCache<'a> {
    slots: Vec<Slot<'a>>,
}

impl<'a> SpriteCache<'a> {
    pub fn new() -> Self {
        Self { slots: Vec::new() }
    }

    pub fn register(&mut self, png: &'a [u8]) -> SpriteId {
        self.slots.push(Slot {
            image: PngImage::new(png),
            decoded: None,
            refs: 0,
        });
        SpriteId(self.slots.len() - 1)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn image(&self, id: SpriteId) -> Result<PngImage<'a>, GfxError> {
        Ok(self.slot(id)?.image)
    }

    pub fn is_loaded(&self, id: SpriteId) -> bool {
        self.slots.get(id.0).is_some_and(|s| s.decoded.is_some())
    }

    pub fn ref_count(&self, id: SpriteId) -> usize {
        self.slots.get(id.0).map_or(0, |s| s.refs)
    }

    /// Decode on first use and return the shared buffer.
    pub fn acquire(&mut self, id: SpriteId) -> Result<Arc<PixelBuffer>, GfxError> {
        let slot = self.slot_mut(id)?;
        let buffer = match slot.decoded.clone() {
            Some(buffer) => buffer,
            None => {
                let buffer = Arc::new(slot.image.render_new()?);
                log::debug!("sprite {} decoded ({}x{})", id.0, buffer.width(), buffer.height());
                slot.decoded = Some(buffer.clone());
                buffer
            }
        };
        slot.refs += 1;
        Ok(buffer)
    }

    /// Drop one reference; the cached buffer goes when none remain.
    pub fn release(&mut self, id: SpriteId) -> Result<(), GfxError> {
        let slot = self.slot_mut(id)?;
        if slot.decoded.is_none() {
            return Ok(());
        }
        slot.refs = slot.refs.saturating_sub(1);
        if slot.refs == 0 {
            slot.decoded = None;
            log::debug!("sprite {} released", id.0);
        }
        Ok(())
    }

    /// Evict regardless of outstanding references.
    pub fn release_forced(&mut self, id: SpriteId) -> Result<(), GfxError> {
        let slot = self.slot_mut(id)?;
        slot.refs = 0;
        slot.decoded = None;
        Ok(())
    }

    pub fn release_all(&mut self) {
        for slot in &mut self.slots {
            slot.refs = 0;
            slot.decoded = None;
        }
    }

    /// Clear `target` to transparent and decode the sprite centered in it,
    /// bypassing the cache. Used for full-screen images that would not fit
    /// next to the frame in memory.
    pub fn draw_centered(&self, id: SpriteId, target: &mut PixelBuffer) -> Result<(), GfxError> {
        let image = self.slot(id)?.image;
        target.clear(Color::TRANSPARENT);
        let (w, h) = image.dimensions().unwrap_or((0, 0));
        let x = (target.width() as i64 - w as i64) / 2;
        let y = (target.height() as i64 - h as i64) / 2;
        image.render_into(target, x as i32, y as i32)
    }

    fn slot(&self, id: SpriteId) -> Result<&Slot<'a>, GfxError> {
        self.slots.get(id.0).ok_or(GfxError::UnknownSprite(id.0))
    }

    fn slot_mut(&mut self, id: SpriteId) -> Result<&mut Slot<'a>, GfxError> {
        self.slots.get_mut(id.0).ok_or(GfxError::UnknownSprite(id.0))
    }
}
