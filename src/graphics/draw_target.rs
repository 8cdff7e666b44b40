//! `embedded-graphics` bridge for [`PixelBuffer`]
use embedded_graphics::{pixelcolor::Rgb888, prelude::*};

use super::color::Color;
use super::pixel_buffer::PixelBuffer;

// Rgb888 carries no alpha, so everything arriving here is an opaque store.
impl DrawTarget for PixelBuffer {
    type Color = Rgb888;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(Point { x, y }, color) in pixels {
            self.put(x, y, Color::from(color));
        }
        Ok(())
    }

    fn fill_solid(
        &mut self,
        area: &embedded_graphics::primitives::Rectangle,
        color: Self::Color,
    ) -> Result<(), Self::Error> {
        let Some(bottom_right) = area.bottom_right() else {
            return Ok(());
        };
        self.filled_rectangle(area.top_left.x, area.top_left.y, bottom_right.x, bottom_right.y, Color::from(color));
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        PixelBuffer::clear(self, Color::from(color));
        Ok(())
    }
}

impl OriginDimensions for PixelBuffer {
    fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }
}
