//! Color representation and manipulation
//!
//! `Color` is a packed `0xAARRGGBB` word, the format the panel DMA streams
//! out. All operations are pure and safe to call with any alpha value.
use embedded_graphics_core::pixelcolor::{Rgb888, RgbColor};

const RB_MASK: u32 = 0x00FF_00FF;
const ALPHA_ONE: u32 = 0x00FF_0000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct Color(pub u32);

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self::with_alpha(r, g, b, 0xFF)
    }

    pub const fn with_alpha(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self((a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32)
    }

    pub const fn from_hex(hex: u32) -> Self {
        Self(0xFF00_0000 | (hex & 0x00FF_FFFF))
    }

    pub const fn raw(self) -> u32 {
        self.0
    }

    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    pub const fn is_opaque(self) -> bool {
        self.0 & 0xFF00_0000 == 0xFF00_0000
    }

    /// Replace the alpha channel.
    pub const fn set_alpha(self, alpha: u8) -> Self {
        Self((self.0 & 0x00FF_FFFF) | (alpha as u32) << 24)
    }

    /// Replace the alpha channel with `alpha` in `0.0..=1.0` (truncating).
    pub fn set_alpha_f32(self, alpha: f32) -> Self {
        self.set_alpha((alpha.clamp(0.0, 1.0) * 255.0) as u8)
    }

    /// Scale this color's alpha by `extra / 255`.
    ///
    /// Merges a glyph coverage byte with the foreground color's own alpha.
    pub const fn combine_alpha(self, extra: u8) -> Self {
        let a = self.alpha() as u32 * extra as u32 / 255;
        self.set_alpha(a as u8)
    }

    /// Composite `self` over `bottom`.
    ///
    /// Fixed point with a 0..=256 weight and a truncating shift, so an opaque
    /// top returns itself and a fully transparent top returns `bottom`
    /// bit-exact. Intermediate alphas are biased downwards by truncation.
    #[inline]
    pub const fn blend_over(self, bottom: Color) -> Color {
        let a = self.alpha() as u32;
        let w = a + (a >> 7);
        let nw = 256 - w;

        let rb = (((self.0 & RB_MASK) * w + (bottom.0 & RB_MASK) * nw) >> 8) & RB_MASK;
        // green sits in the low half, alpha in the high half; the top layer
        // covers with alpha 255 so the result is a + b * (1 - a)
        let ag_top = ((self.0 >> 8) & 0xFF) | ALPHA_ONE;
        let ag_bottom = (bottom.0 >> 8) & RB_MASK;
        let ag = (ag_top * w + ag_bottom * nw) & 0xFF00_FF00;

        Color(rb | ag)
    }

    /// Per-channel saturating addition, alpha included.
    pub const fn saturating_add(self, other: Color) -> Color {
        Color::with_alpha(
            self.red().saturating_add(other.red()),
            self.green().saturating_add(other.green()),
            self.blue().saturating_add(other.blue()),
            self.alpha().saturating_add(other.alpha()),
        )
    }

    /// Rotate the hue by `degrees`. Alpha passes through; alpha 0 colors are
    /// returned untouched.
    pub fn rotate_hue(self, degrees: f32) -> Color {
        HueMatrix::new(degrees).apply(self)
    }

    /// Premultiply RGB by the color's own alpha (`c * a >> 8`).
    ///
    /// Used to fade the status LED by an intensity folded into alpha.
    pub const fn scale_by_alpha(self) -> Color {
        let a = self.alpha() as u32;
        Color::with_alpha(
            (self.red() as u32 * a >> 8) as u8,
            (self.green() as u32 * a >> 8) as u8,
            (self.blue() as u32 * a >> 8) as u8,
            self.alpha(),
        )
    }

    pub fn to_rgb888(self) -> Rgb888 {
        Rgb888::new(self.red(), self.green(), self.blue())
    }

    pub fn to_bytes(self) -> [u8; 4] {
        [self.red(), self.green(), self.blue(), self.alpha()]
    }
}

impl From<Rgb888> for Color {
    fn from(c: Rgb888) -> Self {
        Color::new(c.r(), c.g(), c.b())
    }
}

impl From<Color> for Rgb888 {
    fn from(c: Color) -> Self {
        c.to_rgb888()
    }
}

/// Precomputed 3x3 hue rotation about the grey axis.
///
/// Building the matrix costs two trig calls; applying it is nine multiplies,
/// so callers rotating many pixels by one angle keep a `HueMatrix` around
/// instead of calling [`Color::rotate_hue`] per pixel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HueMatrix {
    m: [[f32; 3]; 3],
}

impl HueMatrix {
    pub fn new(degrees: f32) -> Self {
        let rad = degrees * core::f32::consts::PI / 180.0;
        let cos_a = libm::cosf(rad);
        let sin_a = libm::sinf(rad);
        let third = 1.0 / 3.0;
        let sq = libm::sqrtf(third) * sin_a;
        let diag = cos_a + (1.0 - cos_a) * third;
        let off = third * (1.0 - cos_a);

        Self {
            m: [
                [diag, off - sq, off + sq],
                [off + sq, diag, off - sq],
                [off - sq, off + sq, diag],
            ],
        }
    }

    pub fn apply(&self, color: Color) -> Color {
        if color.alpha() == 0 {
            return color;
        }
        let (r, g, b) = (color.red() as f32, color.green() as f32, color.blue() as f32);
        let row = |i: usize| clamp_channel(r * self.m[i][0] + g * self.m[i][1] + b * self.m[i][2]);
        Color::with_alpha(row(0), row(1), row(2), color.alpha())
    }
}

fn clamp_channel(v: f32) -> u8 {
    v.clamp(0.0, 255.0) as u8
}
