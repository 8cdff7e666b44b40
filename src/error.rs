//! Error types shared across the graphics core.

use thiserror::Error;

/// Crate-wide error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GfxError {
    #[error("allocation of a {width}x{height} pixel buffer failed")]
    OutOfMemory { width: u32, height: u32 },
    #[error("invalid buffer dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
    #[error("image decode failed: {0}")]
    Decode(#[from] DecodeError),
    #[error("display transfer failed: {0}")]
    Display(#[from] DisplayError),
    #[error("unknown sprite id {0}")]
    UnknownSprite(usize),
}

/// Failure reasons of the streaming PNG decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("missing PNG signature")]
    BadSignature,
    #[error("malformed IHDR chunk")]
    BadHeader,
    #[error("image data before IHDR")]
    MissingHeader,
    #[error("unsupported color type {color_type} with bit depth {bit_depth}")]
    Unsupported { color_type: u8, bit_depth: u8 },
    #[error("interlaced images are not supported")]
    Interlaced,
    #[error("chunk length {0} exceeds 2^31 - 1")]
    ChunkTooLong(u32),
    #[error("malformed PLTE chunk")]
    BadPalette,
    #[error("image exceeds {0} pixels")]
    TooLarge(u32),
    #[error("unknown scanline filter {0}")]
    BadFilter(u8),
    #[error("zlib stream is corrupt")]
    Inflate,
    #[error("stream ended before the image was complete")]
    Truncated,
}

/// Failure reasons reported by a display sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DisplayError {
    #[error("frame holds {actual} pixels, panel expects {expected}")]
    SizeMismatch { expected: usize, actual: usize },
    #[error("tearing-effect line did not toggle in time")]
    VsyncTimeout,
    #[error("pixel bus write failed")]
    Bus,
}
