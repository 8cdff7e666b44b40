//! Text rendering onto [`PixelBuffer`].
use embedded_graphics::{
    mono_font::{MonoFont, MonoTextStyle},
    prelude::*,
    text::{Baseline, Text},
    Drawable,
};

use super::color::Color;
use super::font::Font;
use super::pixel_buffer::PixelBuffer;

impl PixelBuffer {
    /// Draw `text` from the atlas `font` with its upper-left corner at
    /// `(x, y)` and return the advance in pixels (`chars * font.width()`).
    ///
    /// Glyph coverage scales the foreground alpha. With a `background`, every
    /// cell of each character box is painted with the foreground composited
    /// over the background, and characters missing from the atlas become a
    /// solid background box. Without one, only covered cells are touched.
    pub fn text(&mut self, x: i32, y: i32, text: &str, font: &Font<'_>, fg: Color, background: Option<Color>) -> u32 {
        let w = font.width() as i32;
        let mut cx = x;

        for c in text.chars() {
            if cx >= self.width() as i32 {
                break;
            }
            if cx + w > 0 {
                self.glyph(cx, y, c, font, fg, background);
            }
            cx = cx.saturating_add(w);
        }
        font.text_width(text)
    }

    fn glyph(&mut self, x: i32, y: i32, c: char, font: &Font<'_>, fg: Color, background: Option<Color>) {
        let (w, h) = (font.width() as i32, font.height() as i32);
        if font.glyph_row(c, 0).is_none() {
            if let Some(bg) = background {
                self.filled_rectangle(x, y, x + w - 1, y + h - 1, bg);
            }
            return;
        }

        for row in 0..font.height() {
            let Some(coverage) = font.glyph_row(c, row) else { continue };
            let py = y + row as i32;
            for (col, &cov) in coverage.iter().enumerate() {
                let px = x + col as i32;
                match background {
                    Some(bg) => self.point(px, py, fg.combine_alpha(cov).blend_over(bg)),
                    None if cov != 0 => self.point(px, py, fg.combine_alpha(cov)),
                    None => {}
                }
            }
        }
    }

    /// Draw `text` in an `embedded-graphics` monospace font, top-aligned at
    /// `(x, y)`. Returns the advance in pixels.
    pub fn text_mono(&mut self, x: i32, y: i32, text: &str, font: &MonoFont<'_>, color: Color) -> u32 {
        let style = MonoTextStyle::new(font, color.to_rgb888());
        match Text::with_baseline(text, Point::new(x, y), style, Baseline::Top).draw(self) {
            Ok(next) => (next.x - x).max(0) as u32,
            Err(never) => match never {},
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphics::font::GLYPH_COUNT;
    use alloc::vec;
    use alloc::vec::Vec;
    use embedded_graphics::mono_font::ascii::FONT_6X10;

    /// 2x2 glyphs with coverage 255 in the upper-left cell only.
    fn corner_atlas() -> Vec<u8> {
        let mut data = vec![0u8; GLYPH_COUNT * 4];
        for g in 0..GLYPH_COUNT {
            data[g * 4] = 255;
        }
        data
    }

    #[test]
    fn returns_advance() {
        let data = corner_atlas();
        let font = Font::new(2, 2, &data);
        let mut buf = PixelBuffer::new(20, 4).unwrap();
        assert_eq!(buf.text(0, 0, "abc", &font, Color::WHITE, None), 6);
        assert_eq!(buf.text(-50, 0, "abc", &font, Color::WHITE, None), 6);
        assert_eq!(buf.text(18, 2, "Hello", &font, Color::WHITE, None), 10);
    }

    #[test]
    fn transparent_background_draws_coverage_only() {
        let data = corner_atlas();
        let font = Font::new(2, 2, &data);
        let mut buf = PixelBuffer::new(8, 2).unwrap();
        buf.clear(Color::BLACK);
        buf.text(0, 0, "a b", &font, Color::RED, None);
        assert_eq!(buf.pixel(0, 0), Some(Color::RED));
        assert_eq!(buf.pixel(1, 0), Some(Color::BLACK));
        assert_eq!(buf.pixel(0, 1), Some(Color::BLACK));
        // the space advances without drawing
        assert_eq!(buf.pixel(2, 0), Some(Color::BLACK));
        assert_eq!(buf.pixel(4, 0), Some(Color::RED));
    }

    #[test]
    fn background_fills_cells_and_missing_glyphs() {
        let data = corner_atlas();
        let font = Font::new(2, 2, &data);
        let mut buf = PixelBuffer::new(6, 2).unwrap();
        buf.text(0, 0, "x y", &font, Color::RED, Some(Color::BLUE));
        assert_eq!(buf.pixel(0, 0), Some(Color::RED));
        assert_eq!(buf.pixel(1, 1), Some(Color::BLUE));
        assert!((2..4).all(|x| (0..2).all(|y| buf.pixel(x, y) == Some(Color::BLUE))));
        assert_eq!(buf.pixel(4, 0), Some(Color::RED));
    }

    #[test]
    fn coverage_scales_foreground() {
        let mut data = vec![0u8; GLYPH_COUNT];
        data[('#' as usize) - 0x21] = 128;
        let font = Font::new(1, 1, &data);
        let mut buf = PixelBuffer::new(1, 1).unwrap();
        buf.clear(Color::BLACK);
        buf.text(0, 0, "#", &font, Color::WHITE, Some(Color::BLACK));
        let expected = Color::WHITE.combine_alpha(128).blend_over(Color::BLACK);
        assert_eq!(buf.pixel(0, 0), Some(expected));
    }

    #[test]
    fn text_near_edges_stays_inside() {
        let data = vec![255u8; GLYPH_COUNT * 9];
        let font = Font::new(3, 3, &data);
        let mut buf = PixelBuffer::new(10, 10).unwrap();
        buf.text(8, 8, "WW", &font, Color::RED, Some(Color::BLUE));
        let painted = buf.pixels().iter().filter(|&&c| c != Color::TRANSPARENT).count();
        assert_eq!(painted, 4);
    }

    #[test]
    fn mono_text_is_top_aligned() {
        let mut buf = PixelBuffer::new(40, 12).unwrap();
        let advance = buf.text_mono(0, 0, "Hi", &FONT_6X10, Color::WHITE);
        assert_eq!(advance, 12);
        let lit = buf.pixels().iter().filter(|&&c| c == Color::WHITE).count();
        assert!(lit > 0);
        assert!((0..40).all(|x| buf.pixel(x, 11) == Some(Color::TRANSPARENT)));
    }
}
