//! # Graphics Core
//!
//! CPU-side rendering for the handheld's TFT panel.
//!
//! ## Modules
//!
//! - `color`: packed ARGB `Color` and its blend operations
//! - `palette`: named color constants
//! - `pixel_buffer`: `PixelBuffer`, the frame store every primitive draws into
//! - `shapes`: lines, rectangles, arcs and circles
//! - `text`: glyph-atlas and monospace text
//! - `draw_target`: `embedded-graphics` integration
//! - `effect`: coordinate/color transforms for `blit_with_effect`
//! - `png`: streaming PNG decoder and the `PngImage` bridge
//! - `sprite_cache`: lazily decoded, shared sprites
//! - `viewport`: world-to-buffer coordinate window
//!
//! ## Layout
//!
//! The panel is mounted rotated, so buffers are column-major
//! (`index = x * height + y`). Every buffer has one extra cell past the
//! visible pixels; out-of-range writes land there instead of failing.

mod color;
mod draw_target;
mod effect;
mod font;
mod palette;
mod pixel_buffer;
pub mod png;
mod shapes;
mod sprite_cache;
mod text;
mod viewport;

pub use color::{Color, HueMatrix};
pub use effect::{Chain, Effect, HueShift, Identity, Pixel, Rotation, Scale, SCALE_SHIFT};
pub use font::{Font, FIRST_GLYPH, GLYPH_COUNT, LAST_GLYPH};
pub use pixel_buffer::PixelBuffer;
pub use shapes::MAX_RADIUS;
pub use png::{Decoder, ImageHeader, PngImage, RowSink};
pub use sprite_cache::{SpriteCache, SpriteId};
pub use viewport::Viewport;
