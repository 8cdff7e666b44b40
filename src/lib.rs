//! # pocketgfx
//!
//! Software framebuffer, compositing and PNG bridge for a handheld with a
//! small TFT panel.
//!
//! Drawing goes through [`graphics::PixelBuffer`]; finished frames reach the
//! panel through a [`display::DisplaySink`], usually via the double-buffered
//! [`Console`]. The crate is `no_std` and needs only an allocator.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod config;
pub mod console;
pub mod display;
pub mod error;
pub mod graphics;

pub use config::PanelConfig;
pub use console::Console;
pub use display::{DisplaySink, MemoryDisplay, SwapChain};
pub use error::{DecodeError, DisplayError, GfxError};
pub use graphics::{Color, Font, PixelBuffer, PngImage};
