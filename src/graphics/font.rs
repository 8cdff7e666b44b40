//! Grayscale glyph atlas.
//!
//! An atlas holds the printable ASCII range `0x21..=0x7F` (95 glyphs) as 8-bit
//! coverage values, white text on black. Glyphs are stored one after another,
//! each `width * height` bytes in row-major order, so a vertical strip bitmap
//! exported by an image converter can be embedded as-is.

pub const FIRST_GLYPH: u8 = 0x21;
pub const LAST_GLYPH: u8 = 0x7F;
pub const GLYPH_COUNT: usize = (LAST_GLYPH - FIRST_GLYPH + 1) as usize;

#[derive(Debug, Clone, Copy)]
pub struct Font<'a> {
    width: u32,
    height: u32,
    data: &'a [u8],
}

impl<'a> Font<'a> {
    /// `data` must hold at least `95 * width * height` bytes; glyphs beyond a
    /// short atlas are treated as missing.
    pub const fn new(width: u32, height: u32, data: &'a [u8]) -> Self {
        Self { width, height, data }
    }

    pub const fn width(&self) -> u32 {
        self.width
    }

    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Coverage bytes of one scanline of `c`, or `None` when the atlas has
    /// no glyph for it (space, control and non-ASCII characters).
    pub fn glyph_row(&self, c: char, scanline: u32) -> Option<&'a [u8]> {
        if scanline >= self.height {
            return None;
        }
        let code = u32::from(c);
        if code < FIRST_GLYPH as u32 || code > LAST_GLYPH as u32 {
            return None;
        }
        let w = self.width as usize;
        let glyph = (code - FIRST_GLYPH as u32) as usize;
        let start = (glyph * self.height as usize + scanline as usize) * w;
        self.data.get(start..start + w)
    }

    /// Pixel width of `text` when drawn with this font.
    pub fn text_width(&self, text: &str) -> u32 {
        text.chars().count() as u32 * self.width
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn atlas(w: u32, h: u32) -> Vec<u8> {
        // every byte encodes its glyph index so lookups are easy to check
        (0..GLYPH_COUNT)
            .flat_map(|g| core::iter::repeat(g as u8).take((w * h) as usize))
            .collect()
    }

    #[test]
    fn looks_up_glyph_rows() {
        let data = atlas(3, 4);
        let font = Font::new(3, 4, &data);
        assert_eq!(font.glyph_row('!', 0), Some(&[0u8, 0, 0][..]));
        assert_eq!(font.glyph_row('A', 3), Some(&[0x20u8, 0x20, 0x20][..]));
        assert_eq!(font.glyph_row('\u{7f}', 1).map(|r| r[0]), Some(94));
    }

    #[test]
    fn missing_glyphs() {
        let data = atlas(3, 4);
        let font = Font::new(3, 4, &data);
        assert_eq!(font.glyph_row(' ', 0), None);
        assert_eq!(font.glyph_row('é', 0), None);
        assert_eq!(font.glyph_row('A', 4), None);

        let short = Font::new(3, 4, &data[..12]);
        assert!(short.glyph_row('!', 3).is_some());
        assert_eq!(short.glyph_row('"', 0), None);
    }

    #[test]
    fn width_counts_chars() {
        let font = Font::new(6, 8, &[]);
        assert_eq!(font.text_width("Hello"), 30);
        assert_eq!(font.text_width(""), 0);
    }
}
