//! Per-pixel transforms applied during a centered blit.
//!
//! An [`Effect`] maps a source pixel, given as an offset from the source
//! center, to a destination offset and color. Effects compose with
//! [`Effect::then`]; the left effect runs first.

use super::color::{Color, HueMatrix};

/// Fixed-point shift for rotation and scale factors. Offsets stay well
/// inside ±2048, so `offset << SCALE_SHIFT` fits easily in 64 bits.
pub const SCALE_SHIFT: u32 = 20;
const ONE: i64 = 1 << SCALE_SHIFT;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pixel {
    pub x: i32,
    pub y: i32,
    pub color: Color,
}

impl Pixel {
    pub const fn new(x: i32, y: i32, color: Color) -> Self {
        Self { x, y, color }
    }
}

pub trait Effect {
    fn transform(&self, px: Pixel) -> Pixel;

    /// Run `next` on the output of `self`.
    fn then<B: Effect>(self, next: B) -> Chain<Self, B>
    where
        Self: Sized,
    {
        Chain { first: self, next }
    }
}

impl<E: Effect + ?Sized> Effect for &E {
    fn transform(&self, px: Pixel) -> Pixel {
        (**self).transform(px)
    }
}

impl<E: Effect + ?Sized> Effect for alloc::boxed::Box<E> {
    fn transform(&self, px: Pixel) -> Pixel {
        (**self).transform(px)
    }
}

/// Two effects evaluated in sequence.
#[derive(Debug, Clone, Copy)]
pub struct Chain<A, B> {
    first: A,
    next: B,
}

impl<A: Effect, B: Effect> Effect for Chain<A, B> {
    fn transform(&self, px: Pixel) -> Pixel {
        self.next.transform(self.first.transform(px))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl Effect for Identity {
    fn transform(&self, px: Pixel) -> Pixel {
        px
    }
}

/// Rotation about the source center, counter-clockwise in panel space.
#[derive(Debug, Clone, Copy)]
pub struct Rotation {
    sin_s: i64,
    cos_s: i64,
}

impl Rotation {
    pub fn new(degrees: f32) -> Self {
        let rad = degrees * core::f32::consts::PI / 180.0;
        Self {
            sin_s: (libm::sinf(rad) * ONE as f32) as i64,
            cos_s: (libm::cosf(rad) * ONE as f32) as i64,
        }
    }
}

impl Effect for Rotation {
    fn transform(&self, px: Pixel) -> Pixel {
        let (x, y) = (px.x as i64, px.y as i64);
        let rx = ((x * self.cos_s) >> SCALE_SHIFT) - ((y * self.sin_s) >> SCALE_SHIFT);
        let ry = ((x * self.sin_s) >> SCALE_SHIFT) + ((y * self.cos_s) >> SCALE_SHIFT);
        Pixel::new(rx as i32, ry as i32, px.color)
    }
}

/// Downscale or flip. Factors are clamped to `-1.0..=1.0`.
#[derive(Debug, Clone, Copy)]
pub struct Scale {
    h: i64,
    v: i64,
}

impl Scale {
    pub fn new(horizontal: f32, vertical: f32) -> Self {
        let fixed = |f: f32| ((f * ONE as f32) as i64).clamp(-ONE, ONE);
        Self { h: fixed(horizontal), v: fixed(vertical) }
    }
}

impl Effect for Scale {
    fn transform(&self, px: Pixel) -> Pixel {
        Pixel::new(
            ((px.x as i64 * self.h) >> SCALE_SHIFT) as i32,
            ((px.y as i64 * self.v) >> SCALE_SHIFT) as i32,
            px.color,
        )
    }
}

/// Hue rotation of every pixel; coordinates pass through.
#[derive(Debug, Clone, Copy)]
pub struct HueShift {
    matrix: HueMatrix,
}

impl HueShift {
    pub fn new(degrees: f32) -> Self {
        Self { matrix: HueMatrix::new(degrees) }
    }
}

impl Effect for HueShift {
    fn transform(&self, px: Pixel) -> Pixel {
        Pixel::new(px.x, px.y, self.matrix.apply(px.color))
    }
}
