//! Streaming PNG decoder and the bridge into [`PixelBuffer`].
//!
//! The decoder is push based: [`Decoder::feed`] takes whatever bytes are at
//! hand, inflates `IDAT` payload through a 32 KiB wrapping dictionary and
//! hands every finished scanline to a [`RowSink`] as ARGB pixels. Peak memory
//! is the dictionary, the inflate state and two scanlines.
//!
//! Color types 0, 2, 3, 4 and 6 at every legal bit depth are handled,
//! including `PLTE` and `tRNS`. Adam7 interlacing is rejected. Chunk CRCs
//! are skipped, not verified.
use alloc::boxed::Box;
use alloc::vec::Vec;

use miniz_oxide::inflate::core::{decompress, inflate_flags, DecompressorOxide};
use miniz_oxide::inflate::TINFLStatus;
use spin::Mutex;

use super::color::Color;
use super::pixel_buffer::PixelBuffer;
use crate::error::{DecodeError, GfxError};

const SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

const CHUNK_IHDR: [u8; 4] = *b"IHDR";
const CHUNK_PLTE: [u8; 4] = *b"PLTE";
const CHUNK_TRNS: [u8; 4] = *b"tRNS";
const CHUNK_IDAT: [u8; 4] = *b"IDAT";
const CHUNK_IEND: [u8; 4] = *b"IEND";

const COLOR_GREY: u8 = 0;
const COLOR_RGB: u8 = 2;
const COLOR_PALETTE: u8 = 3;
const COLOR_GREY_ALPHA: u8 = 4;
const COLOR_RGBA: u8 = 6;

const FILTER_NONE: u8 = 0;
const FILTER_SUB: u8 = 1;
const FILTER_UP: u8 = 2;
const FILTER_AVERAGE: u8 = 3;
const FILTER_PAETH: u8 = 4;

/// Largest image accepted, in pixels.
pub const MAX_PIXELS: u32 = 1024 * 1024;

// must be a power of two >= 32 KiB for wrapping-mode inflate
const DICT_SIZE: usize = 32_768;

/// Longest chunk body a PNG may declare.
const MAX_CHUNK_LEN: u32 = 0x7FFF_FFFF;

/// Bytes handed to the decoder per feed step.
const FEED_CHUNK: usize = 1024;

// Sessions are serialized process-wide.
static DECODE_LOCK: Mutex<()> = Mutex::new(());

/// Parsed `IHDR` fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageHeader {
    pub width: u32,
    pub height: u32,
    pub bit_depth: u8,
    pub color_type: u8,
}

impl ImageHeader {
    fn parse(raw: &[u8]) -> Result<Self, DecodeError> {
        if raw.len() != 13 {
            return Err(DecodeError::BadHeader);
        }
        let header = Self {
            width: be_u32(raw, 0),
            height: be_u32(raw, 4),
            bit_depth: raw[8],
            color_type: raw[9],
        };
        // compression and filter method are always 0
        if header.width == 0 || header.height == 0 || raw[10] != 0 || raw[11] != 0 {
            return Err(DecodeError::BadHeader);
        }
        if raw[12] != 0 {
            return Err(DecodeError::Interlaced);
        }
        match (header.color_type, header.bit_depth) {
            (COLOR_GREY, 1 | 2 | 4 | 8 | 16) => {}
            (COLOR_RGB, 8 | 16) => {}
            (COLOR_PALETTE, 1 | 2 | 4 | 8) => {}
            (COLOR_GREY_ALPHA, 8 | 16) => {}
            (COLOR_RGBA, 8 | 16) => {}
            (color_type, bit_depth) => return Err(DecodeError::Unsupported { color_type, bit_depth }),
        }
        if header.width.saturating_mul(header.height) > MAX_PIXELS {
            return Err(DecodeError::TooLarge(MAX_PIXELS));
        }
        Ok(header)
    }

    fn channels(&self) -> usize {
        match self.color_type {
            COLOR_RGB => 3,
            COLOR_GREY_ALPHA => 2,
            COLOR_RGBA => 4,
            _ => 1,
        }
    }

    /// Filter stride: bytes per complete pixel, 1 for sub-byte depths.
    fn filter_stride(&self) -> usize {
        (self.channels() * self.bit_depth as usize / 8).max(1)
    }

    /// Length of one unfiltered scanline, without the filter byte.
    fn scanline_bytes(&self) -> usize {
        (self.width as usize * self.channels() * self.bit_depth as usize + 7) / 8
    }
}

/// Receives the image header once, then each decoded scanline top to bottom.
pub trait RowSink {
    fn on_header(&mut self, header: &ImageHeader) -> Result<(), GfxError>;

    fn on_row(&mut self, y: u32, row: &[Color]);
}

#[derive(Debug, Clone, Copy)]
enum Stage {
    Signature,
    ChunkHeader,
    /// Small chunk collected whole before it is interpreted.
    Meta { kind: [u8; 4], len: usize },
    Data { remaining: usize },
    Skip { remaining: usize },
    End,
}

/// `tRNS` color key for grey and truecolor images, at sample precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColorKey {
    Grey(u16),
    Rgb([u16; 3]),
}

/// Incremental PNG decoder. One instance decodes one image.
pub struct Decoder {
    stage: Stage,
    scratch: Vec<u8>,
    header: Option<ImageHeader>,
    palette: Vec<Color>,
    key: Option<ColorKey>,
    inflater: Option<Inflater>,
    scanlines: Option<Scanlines>,
}

impl Decoder {
    pub fn new() -> Self {
        Self {
            stage: Stage::Signature,
            scratch: Vec::new(),
            header: None,
            palette: Vec::new(),
            key: None,
            inflater: None,
            scanlines: None,
        }
    }

    pub fn header(&self) -> Option<&ImageHeader> {
        self.header.as_ref()
    }

    /// Scanlines delivered so far.
    pub fn rows(&self) -> u32 {
        self.scanlines.as_ref().map_or(0, |s| s.y)
    }

    pub fn is_complete(&self) -> bool {
        self.header.is_some_and(|h| self.rows() >= h.height)
    }

    /// Consume bytes from `input` and return how many were used. Zero means
    /// the stream has ended (`IEND` seen); the caller stops feeding.
    pub fn feed<S: RowSink + ?Sized>(&mut self, input: &[u8], sink: &mut S) -> Result<usize, GfxError> {
        let mut pos = 0;

        while pos < input.len() {
            match self.stage {
                Stage::Signature => {
                    if !self.gather(input, &mut pos, SIGNATURE.len()) {
                        break;
                    }
                    if self.scratch[..] != SIGNATURE {
                        return Err(DecodeError::BadSignature.into());
                    }
                    self.scratch.clear();
                    self.stage = Stage::ChunkHeader;
                }
                Stage::ChunkHeader => {
                    if !self.gather(input, &mut pos, 8) {
                        break;
                    }
                    let len = be_u32(&self.scratch, 0);
                    if len > MAX_CHUNK_LEN {
                        return Err(DecodeError::ChunkTooLong(len).into());
                    }
                    let kind = [self.scratch[4], self.scratch[5], self.scratch[6], self.scratch[7]];
                    self.scratch.clear();
                    self.stage = self.enter_chunk(kind, len as usize)?;
                }
                Stage::Meta { kind, len } => {
                    if !self.gather(input, &mut pos, len) {
                        break;
                    }
                    self.finish_meta(kind, sink)?;
                    self.scratch.clear();
                    self.stage = Stage::Skip { remaining: 4 };
                }
                Stage::Data { remaining } => {
                    let take = remaining.min(input.len() - pos);
                    self.inflate(&input[pos..pos + take], sink)?;
                    pos += take;
                    self.stage = match remaining - take {
                        0 => Stage::Skip { remaining: 4 },
                        left => Stage::Data { remaining: left },
                    };
                }
                Stage::Skip { remaining } => {
                    let take = remaining.min(input.len() - pos);
                    pos += take;
                    self.stage = match remaining - take {
                        0 => Stage::ChunkHeader,
                        left => Stage::Skip { remaining: left },
                    };
                }
                Stage::End => break,
            }
        }
        Ok(pos)
    }

    /// Check that the whole image arrived.
    pub fn finish(&self) -> Result<(), DecodeError> {
        let header = self.header.ok_or(DecodeError::MissingHeader)?;
        if self.rows() < header.height {
            log::warn!("png: expected {} rows, got {}", header.height, self.rows());
            return Err(DecodeError::Truncated);
        }
        Ok(())
    }

    /// Append input to `scratch` until it holds `want` bytes.
    fn gather(&mut self, input: &[u8], pos: &mut usize, want: usize) -> bool {
        let take = (want - self.scratch.len()).min(input.len() - *pos);
        self.scratch.extend_from_slice(&input[*pos..*pos + take]);
        *pos += take;
        self.scratch.len() == want
    }

    fn enter_chunk(&mut self, kind: [u8; 4], len: usize) -> Result<Stage, GfxError> {
        if self.header.is_none() && kind != CHUNK_IHDR {
            return Err(DecodeError::MissingHeader.into());
        }
        let stage = match kind {
            CHUNK_IHDR if len != 13 || self.header.is_some() => return Err(DecodeError::BadHeader.into()),
            CHUNK_PLTE if len == 0 || len % 3 != 0 || len > 768 => return Err(DecodeError::BadPalette.into()),
            CHUNK_TRNS if len > 256 => return Err(DecodeError::BadPalette.into()),
            CHUNK_IHDR | CHUNK_PLTE | CHUNK_TRNS => Stage::Meta { kind, len },
            CHUNK_IDAT => {
                self.begin_data()?;
                Stage::Data { remaining: len }
            }
            CHUNK_IEND => Stage::End,
            _ => Stage::Skip { remaining: len + 4 },
        };
        Ok(stage)
    }

    fn finish_meta<S: RowSink + ?Sized>(&mut self, kind: [u8; 4], sink: &mut S) -> Result<(), GfxError> {
        match kind {
            CHUNK_IHDR => {
                let header = ImageHeader::parse(&self.scratch)?;
                log::debug!(
                    "png: {}x{} type {} depth {}",
                    header.width,
                    header.height,
                    header.color_type,
                    header.bit_depth
                );
                sink.on_header(&header)?;
                self.header = Some(header);
            }
            CHUNK_PLTE => {
                self.palette = self.scratch.chunks_exact(3).map(|c| Color::new(c[0], c[1], c[2])).collect();
            }
            CHUNK_TRNS => {
                let color_type = self.header.map(|h| h.color_type);
                match color_type {
                    Some(COLOR_PALETTE) => {
                        for (entry, &alpha) in self.palette.iter_mut().zip(&self.scratch) {
                            *entry = entry.set_alpha(alpha);
                        }
                    }
                    Some(COLOR_GREY) if self.scratch.len() >= 2 => {
                        self.key = Some(ColorKey::Grey(be_u16(&self.scratch, 0)));
                    }
                    Some(COLOR_RGB) if self.scratch.len() >= 6 => {
                        self.key = Some(ColorKey::Rgb([
                            be_u16(&self.scratch, 0),
                            be_u16(&self.scratch, 2),
                            be_u16(&self.scratch, 4),
                        ]));
                    }
                    _ => log::warn!("png: ignoring tRNS for color type {:?}", color_type),
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn begin_data(&mut self) -> Result<(), GfxError> {
        if self.scanlines.is_some() {
            return Ok(());
        }
        let header = self.header.ok_or(DecodeError::MissingHeader)?;
        if header.color_type == COLOR_PALETTE && self.palette.is_empty() {
            return Err(DecodeError::BadPalette.into());
        }
        let format = PixelFormat {
            color_type: header.color_type,
            bit_depth: header.bit_depth,
            palette: core::mem::take(&mut self.palette),
            key: self.key,
        };
        self.scanlines = Some(Scanlines::new(&header, format)?);
        self.inflater = Some(Inflater::new(&header)?);
        Ok(())
    }

    fn inflate<S: RowSink + ?Sized>(&mut self, mut data: &[u8], sink: &mut S) -> Result<(), GfxError> {
        let (Some(inflater), Some(scanlines)) = (self.inflater.as_mut(), self.scanlines.as_mut()) else {
            return Err(DecodeError::MissingHeader.into());
        };

        while !inflater.done {
            let write_pos = inflater.dict_pos & (DICT_SIZE - 1);
            let (status, consumed, produced) = decompress(
                &mut inflater.state,
                data,
                &mut inflater.dict,
                write_pos,
                inflate_flags::TINFL_FLAG_PARSE_ZLIB_HEADER | inflate_flags::TINFL_FLAG_HAS_MORE_INPUT,
            );
            data = &data[consumed..];

            for i in 0..produced {
                scanlines.push(inflater.dict[(write_pos + i) & (DICT_SIZE - 1)], sink)?;
            }
            inflater.dict_pos += produced;

            match status {
                TINFLStatus::Done => inflater.done = true,
                TINFLStatus::NeedsMoreInput if data.is_empty() => break,
                TINFLStatus::NeedsMoreInput | TINFLStatus::HasMoreOutput => {
                    if consumed == 0 && produced == 0 {
                        return Err(DecodeError::Inflate.into());
                    }
                }
                status => {
                    log::error!("png: inflate failed with {:?}", status);
                    return Err(DecodeError::Inflate.into());
                }
            }
        }
        Ok(())
    }
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new()
    }
}

struct Inflater {
    state: Box<DecompressorOxide>,
    dict: Vec<u8>,
    dict_pos: usize,
    done: bool,
}

impl Inflater {
    fn new(header: &ImageHeader) -> Result<Self, GfxError> {
        Ok(Self {
            state: Box::default(),
            dict: zeroed(DICT_SIZE, 0u8, header)?,
            dict_pos: 0,
            done: false,
        })
    }
}

/// Sample layout of one image plus its palette and color key.
struct PixelFormat {
    color_type: u8,
    bit_depth: u8,
    palette: Vec<Color>,
    key: Option<ColorKey>,
}

impl PixelFormat {
    /// Raw sample `index` of an unfiltered scanline.
    #[inline]
    fn sample(&self, row: &[u8], index: usize) -> u16 {
        match self.bit_depth {
            16 => be_u16(row, index * 2),
            8 => row[index] as u16,
            depth => {
                let bit = index * depth as usize;
                let shift = 8 - depth as usize - bit % 8;
                (row[bit / 8] >> shift) as u16 & ((1 << depth) - 1)
            }
        }
    }

    /// Sample scaled to 8 bits.
    #[inline]
    fn level(&self, raw: u16) -> u8 {
        match self.bit_depth {
            16 => (raw >> 8) as u8,
            8 => raw as u8,
            depth => (raw as u32 * 255 / ((1 << depth) - 1)) as u8,
        }
    }

    fn pixel(&self, row: &[u8], x: usize) -> Color {
        match self.color_type {
            COLOR_GREY => {
                let raw = self.sample(row, x);
                let g = self.level(raw);
                let alpha = if self.key == Some(ColorKey::Grey(raw)) { 0 } else { 0xFF };
                Color::with_alpha(g, g, g, alpha)
            }
            COLOR_RGB => {
                let raw = [self.sample(row, x * 3), self.sample(row, x * 3 + 1), self.sample(row, x * 3 + 2)];
                let alpha = if self.key == Some(ColorKey::Rgb(raw)) { 0 } else { 0xFF };
                Color::with_alpha(self.level(raw[0]), self.level(raw[1]), self.level(raw[2]), alpha)
            }
            COLOR_PALETTE => {
                // out-of-range indices render black
                let index = self.sample(row, x) as usize;
                self.palette.get(index).copied().unwrap_or(Color::BLACK)
            }
            COLOR_GREY_ALPHA => {
                let g = self.level(self.sample(row, x * 2));
                Color::with_alpha(g, g, g, self.level(self.sample(row, x * 2 + 1)))
            }
            _ => {
                let c = |i| self.level(self.sample(row, x * 4 + i));
                Color::with_alpha(c(0), c(1), c(2), c(3))
            }
        }
    }
}

/// Reassembles inflated bytes into scanlines and converts them to pixels.
struct Scanlines {
    format: PixelFormat,
    height: u32,
    stride: usize,
    row: Vec<u8>,
    fill: usize,
    prev: Vec<u8>,
    line: Vec<Color>,
    y: u32,
}

impl Scanlines {
    fn new(header: &ImageHeader, format: PixelFormat) -> Result<Self, GfxError> {
        let bytes = header.scanline_bytes();
        Ok(Self {
            format,
            height: header.height,
            stride: header.filter_stride(),
            row: zeroed(bytes + 1, 0u8, header)?,
            fill: 0,
            prev: zeroed(bytes, 0u8, header)?,
            line: zeroed(header.width as usize, Color::TRANSPARENT, header)?,
            y: 0,
        })
    }

    #[inline]
    fn push<S: RowSink + ?Sized>(&mut self, byte: u8, sink: &mut S) -> Result<(), GfxError> {
        if self.y >= self.height {
            return Ok(());
        }
        self.row[self.fill] = byte;
        self.fill += 1;
        if self.fill < self.row.len() {
            return Ok(());
        }

        let (filter, data) = self.row.split_at_mut(1);
        unfilter(filter[0], data, &self.prev, self.stride)?;
        for (x, out) in self.line.iter_mut().enumerate() {
            *out = self.format.pixel(data, x);
        }
        sink.on_row(self.y, &self.line);

        self.prev.copy_from_slice(data);
        self.fill = 0;
        self.y += 1;
        Ok(())
    }
}

/// Reverse one scanline filter in place. `prev` is the previous unfiltered
/// scanline (all zero for the first).
fn unfilter(filter: u8, row: &mut [u8], prev: &[u8], stride: usize) -> Result<(), DecodeError> {
    match filter {
        FILTER_NONE => {}
        FILTER_SUB => {
            for i in stride..row.len() {
                row[i] = row[i].wrapping_add(row[i - stride]);
            }
        }
        FILTER_UP => {
            for (b, &up) in row.iter_mut().zip(prev) {
                *b = b.wrapping_add(up);
            }
        }
        FILTER_AVERAGE => {
            for i in 0..row.len() {
                let left = if i >= stride { row[i - stride] } else { 0 };
                row[i] = row[i].wrapping_add(((left as u16 + prev[i] as u16) >> 1) as u8);
            }
        }
        FILTER_PAETH => {
            for i in 0..row.len() {
                let (left, up_left) = if i >= stride { (row[i - stride], prev[i - stride]) } else { (0, 0) };
                row[i] = row[i].wrapping_add(paeth(left, prev[i], up_left));
            }
        }
        other => return Err(DecodeError::BadFilter(other)),
    }
    Ok(())
}

fn paeth(a: u8, b: u8, c: u8) -> u8 {
    let p = a as i16 + b as i16 - c as i16;
    let pa = (p - a as i16).abs();
    let pb = (p - b as i16).abs();
    let pc = (p - c as i16).abs();
    if pa <= pb && pa <= pc {
        a
    } else if pb <= pc {
        b
    } else {
        c
    }
}

fn zeroed<T: Clone>(len: usize, value: T, header: &ImageHeader) -> Result<Vec<T>, GfxError> {
    let mut v = Vec::new();
    v.try_reserve_exact(len).map_err(|_| GfxError::OutOfMemory {
        width: header.width,
        height: header.height,
    })?;
    v.resize(len, value);
    Ok(v)
}

#[inline]
fn be_u32(d: &[u8], o: usize) -> u32 {
    u32::from_be_bytes([d[o], d[o + 1], d[o + 2], d[o + 3]])
}

#[inline]
fn be_u16(d: &[u8], o: usize) -> u16 {
    u16::from_be_bytes([d[o], d[o + 1]])
}

/// Composites rows onto an existing buffer at an offset.
struct BlendInto<'b> {
    target: &'b mut PixelBuffer,
    x: i32,
    y: i32,
}

impl RowSink for BlendInto<'_> {
    fn on_header(&mut self, _header: &ImageHeader) -> Result<(), GfxError> {
        Ok(())
    }

    fn on_row(&mut self, y: u32, row: &[Color]) {
        let py = self.y.saturating_add(y as i32);
        for (i, &c) in row.iter().enumerate() {
            self.target.point(self.x.saturating_add(i as i32), py, c);
        }
    }
}

/// Allocates a buffer sized from the header and stores rows into it.
#[derive(Default)]
struct Allocate {
    buffer: Option<PixelBuffer>,
}

impl RowSink for Allocate {
    fn on_header(&mut self, header: &ImageHeader) -> Result<(), GfxError> {
        let mut buffer = PixelBuffer::new(header.width, header.height)?;
        buffer.clear(Color::TRANSPARENT);
        self.buffer = Some(buffer);
        Ok(())
    }

    fn on_row(&mut self, y: u32, row: &[Color]) {
        if let Some(buffer) = self.buffer.as_mut() {
            for (x, &c) in row.iter().enumerate() {
                buffer.put(x as i32, y as i32, c);
            }
        }
    }
}

/// PNG byte stream backed by borrowed asset data.
#[derive(Debug, Clone, Copy)]
pub struct PngImage<'a> {
    data: &'a [u8],
}

impl<'a> PngImage<'a> {
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data }
    }

    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Width from the fixed `IHDR` offset, without decoding. Does not check
    /// that the data is a PNG.
    pub fn width(&self) -> Option<u32> {
        self.data.get(16..20).map(|b| be_u32(b, 0))
    }

    /// Height from the fixed `IHDR` offset, without decoding.
    pub fn height(&self) -> Option<u32> {
        self.data.get(20..24).map(|b| be_u32(b, 0))
    }

    pub fn dimensions(&self) -> Option<(u32, u32)> {
        Some((self.width()?, self.height()?))
    }

    /// Decode and composite onto `target` with the image's upper-left corner
    /// at `(x, y)`. On error the rows already drawn stay in place.
    pub fn render_into(&self, target: &mut PixelBuffer, x: i32, y: i32) -> Result<(), GfxError> {
        if x >= target.width() as i32 || y >= target.height() as i32 {
            return Ok(());
        }
        let mut sink = BlendInto { target, x, y };
        self.run(&mut sink)
    }

    /// Decode into a freshly allocated buffer of the image's size. A failed
    /// or short decode drops the partial buffer.
    pub fn render_new(&self) -> Result<PixelBuffer, GfxError> {
        let mut sink = Allocate::default();
        self.run(&mut sink)?;
        sink.buffer.ok_or(DecodeError::MissingHeader.into())
    }

    fn run<S: RowSink>(&self, sink: &mut S) -> Result<(), GfxError> {
        let _session = DECODE_LOCK.lock();
        let mut decoder = Decoder::new();
        let mut rest = self.data;

        while !rest.is_empty() {
            let chunk = &rest[..rest.len().min(FEED_CHUNK)];
            let used = match decoder.feed(chunk, sink) {
                Ok(used) => used,
                Err(e) => {
                    log::error!("png: decode stopped after {} rows: {}", decoder.rows(), e);
                    return Err(e);
                }
            };
            if used == 0 {
                break;
            }
            rest = &rest[used..];
        }
        decoder.finish()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use miniz_oxide::deflate::compress_to_vec_zlib;

    fn chunk(out: &mut Vec<u8>, kind: &[u8; 4], data: &[u8]) {
        out.extend_from_slice(&(data.len() as u32).to_be_bytes());
        out.extend_from_slice(kind);
        out.extend_from_slice(data);
        out.extend_from_slice(&[0, 0, 0, 0]);
    }

    /// Build a PNG from already filtered scanlines. CRCs are left zero.
    fn png(width: u32, height: u32, depth: u8, color_type: u8, extra: &[(&[u8; 4], &[u8])], raw: &[u8]) -> Vec<u8> {
        let mut out = SIGNATURE.to_vec();
        let mut ihdr = Vec::new();
        ihdr.extend_from_slice(&width.to_be_bytes());
        ihdr.extend_from_slice(&height.to_be_bytes());
        ihdr.extend_from_slice(&[depth, color_type, 0, 0, 0]);
        chunk(&mut out, b"IHDR", &ihdr);
        for (kind, data) in extra {
            chunk(&mut out, kind, data);
        }
        let z = compress_to_vec_zlib(raw, 6);
        let (a, b) = z.split_at(z.len() / 2);
        chunk(&mut out, b"IDAT", a);
        chunk(&mut out, b"IDAT", b);
        chunk(&mut out, b"IEND", &[]);
        out
    }

    #[test]
    fn reads_dimensions_without_decoding() {
        let data = png(7, 3, 8, COLOR_RGBA, &[], &[0; 3 * 29]);
        let img = PngImage::new(&data);
        assert_eq!(img.dimensions(), Some((7, 3)));
        assert_eq!(PngImage::new(&data[..18]).height(), None);
    }

    #[test]
    fn decodes_rgba_rows() {
        let raw = [
            0, 255, 0, 0, 255, 0, 0, 255, 128, //
            0, 1, 2, 3, 4, 5, 6, 7, 0,
        ];
        let data = png(2, 2, 8, COLOR_RGBA, &[], &raw);
        let buf = PngImage::new(&data).render_new().unwrap();
        assert_eq!((buf.width(), buf.height()), (2, 2));
        assert_eq!(buf.pixel(0, 0), Some(Color::RED));
        assert_eq!(buf.pixel(1, 0), Some(Color::with_alpha(0, 0, 255, 128)));
        assert_eq!(buf.pixel(0, 1), Some(Color::with_alpha(1, 2, 3, 4)));
        assert_eq!(buf.pixel(1, 1), Some(Color::with_alpha(5, 6, 7, 0)));
    }

    #[test]
    fn filters_are_reversed() {
        // 3 grey pixels per row; every filter type once
        let raw = [
            FILTER_NONE, 10, 20, 30, //
            FILTER_SUB, 5, 5, 5, //
            FILTER_UP, 1, 2, 3, //
            FILTER_AVERAGE, 4, 4, 4, //
            FILTER_PAETH, 0, 1, 2,
        ];
        let data = png(3, 5, 8, COLOR_GREY, &[], &raw);
        let buf = PngImage::new(&data).render_new().unwrap();
        let grey = |x, y| buf.pixel(x, y).map(|c| c.red());
        assert_eq!([grey(0, 0), grey(1, 0), grey(2, 0)], [Some(10), Some(20), Some(30)]);
        assert_eq!([grey(0, 1), grey(1, 1), grey(2, 1)], [Some(5), Some(10), Some(15)]);
        assert_eq!([grey(0, 2), grey(1, 2), grey(2, 2)], [Some(6), Some(12), Some(18)]);
        // (0+6)/2+4, (7+12)/2+4, (13+18)/2+4
        assert_eq!([grey(0, 3), grey(1, 3), grey(2, 3)], [Some(7), Some(13), Some(19)]);
        // paeth picks up, then up, then up
        assert_eq!([grey(0, 4), grey(1, 4), grey(2, 4)], [Some(7), Some(14), Some(21)]);
    }

    #[test]
    fn paeth_predictor() {
        assert_eq!(paeth(10, 20, 10), 20);
        assert_eq!(paeth(20, 10, 10), 20);
        assert_eq!(paeth(5, 5, 5), 5);
        assert_eq!(paeth(100, 0, 50), 50);
    }

    #[test]
    fn palette_with_transparency() {
        let plte = [255, 0, 0, 0, 255, 0, 0, 0, 255];
        let trns = [255, 64];
        // 2-bit indices 0,1,2,3 packed in one byte
        let raw = [0, 0b00_01_10_11];
        let data = png(4, 1, 2, COLOR_PALETTE, &[(b"PLTE", &plte), (b"tRNS", &trns)], &raw);
        let buf = PngImage::new(&data).render_new().unwrap();
        assert_eq!(buf.pixel(0, 0), Some(Color::RED));
        assert_eq!(buf.pixel(1, 0), Some(Color::with_alpha(0, 255, 0, 64)));
        assert_eq!(buf.pixel(2, 0), Some(Color::BLUE));
        assert_eq!(buf.pixel(3, 0), Some(Color::BLACK));
    }

    #[test]
    fn low_depth_grey_scales_up() {
        let raw = [0, 0b1010_0000];
        let data = png(3, 1, 1, COLOR_GREY, &[], &raw);
        let buf = PngImage::new(&data).render_new().unwrap();
        assert_eq!(buf.pixel(0, 0), Some(Color::WHITE));
        assert_eq!(buf.pixel(1, 0), Some(Color::BLACK));
        assert_eq!(buf.pixel(2, 0), Some(Color::WHITE));
    }

    #[test]
    fn sixteen_bit_grey_with_key() {
        let raw = [0, 0x12, 0x34, 0xAB, 0xCD];
        let data = png(2, 1, 16, COLOR_GREY, &[(b"tRNS", &[0x12, 0x34])], &raw);
        let buf = PngImage::new(&data).render_new().unwrap();
        assert_eq!(buf.pixel(0, 0).map(|c| c.alpha()), Some(0));
        assert_eq!(buf.pixel(1, 0), Some(Color::new(0xAB, 0xAB, 0xAB)));
    }

    #[test]
    fn byte_at_a_time_matches_bulk() {
        struct Collect(Vec<Color>);
        impl RowSink for Collect {
            fn on_header(&mut self, _: &ImageHeader) -> Result<(), GfxError> {
                Ok(())
            }
            fn on_row(&mut self, _: u32, row: &[Color]) {
                self.0.extend_from_slice(row);
            }
        }

        let raw: Vec<u8> = (0..4).flat_map(|y| [0u8, y * 10, y * 20, y * 30, y * 40, y * 50, y * 60]).collect();
        let data = png(2, 4, 8, COLOR_RGB, &[(b"tEXt", b"k\0v")], &raw);

        let mut decoder = Decoder::new();
        let mut sink = Collect(Vec::new());
        for b in &data {
            if decoder.feed(core::slice::from_ref(b), &mut sink).unwrap() == 0 {
                break;
            }
        }
        decoder.finish().unwrap();
        assert!(decoder.is_complete());

        let buf = PngImage::new(&data).render_new().unwrap();
        for y in 0..4 {
            for x in 0..2 {
                assert_eq!(Some(sink.0[(y * 2 + x) as usize]), buf.pixel(x, y));
            }
        }
    }

    #[test]
    fn rejects_malformed_streams() {
        let good = png(1, 1, 8, COLOR_GREY, &[], &[0, 0]);

        let mut bad = good.clone();
        bad[0] = 0;
        assert_eq!(PngImage::new(&bad).render_new().unwrap_err(), GfxError::from(DecodeError::BadSignature));

        let mut interlaced = good.clone();
        interlaced[8 + 8 + 12] = 1;
        assert_eq!(PngImage::new(&interlaced).render_new().unwrap_err(), GfxError::from(DecodeError::Interlaced));

        let odd = png(1, 1, 4, COLOR_RGB, &[], &[0, 0]);
        assert_eq!(
            PngImage::new(&odd).render_new().unwrap_err(),
            GfxError::from(DecodeError::Unsupported { color_type: 2, bit_depth: 4 })
        );

        let mut headless = SIGNATURE.to_vec();
        chunk(&mut headless, b"IDAT", &[1, 2, 3]);
        assert_eq!(PngImage::new(&headless).render_new().unwrap_err(), GfxError::from(DecodeError::MissingHeader));

        let no_palette = png(1, 1, 8, COLOR_PALETTE, &[], &[0, 0]);
        assert_eq!(PngImage::new(&no_palette).render_new().unwrap_err(), GfxError::from(DecodeError::BadPalette));

        let bad_filter = png(1, 1, 8, COLOR_GREY, &[], &[9, 0]);
        assert_eq!(PngImage::new(&bad_filter).render_new().unwrap_err(), GfxError::from(DecodeError::BadFilter(9)));
    }

    #[test]
    fn truncated_stream_fails_and_keeps_partial_blend() {
        // noisy pixels so the compressed stream stays long
        let mut seed = 0x2545_F491u32;
        let mut noise = || {
            seed = seed.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            (seed >> 24) as u8
        };
        let raw: Vec<u8> = (0..16)
            .flat_map(|_| {
                let mut row = vec![FILTER_NONE];
                for _ in 0..4 {
                    row.extend_from_slice(&[noise(), noise(), noise(), 255]);
                }
                row
            })
            .collect();
        let data = png(4, 16, 8, COLOR_RGBA, &[], &raw);
        let cut = &data[..data.len() / 2];

        assert_eq!(PngImage::new(cut).render_new().unwrap_err(), GfxError::from(DecodeError::Truncated));

        let mut target = PixelBuffer::new(8, 20).unwrap();
        target.clear(Color::BLACK);
        assert!(PngImage::new(cut).render_into(&mut target, 1, 2).is_err());
        assert_eq!(target.pixel(1, 2), Some(Color::new(raw[1], raw[2], raw[3])));
        assert_eq!(target.pixel(1, 17), Some(Color::BLACK));
    }

    #[test]
    fn render_into_blends_at_offset() {
        let raw = [0, 0, 0, 255, 128];
        let data = png(1, 1, 8, COLOR_RGBA, &[], &raw);
        let mut target = PixelBuffer::new(4, 4).unwrap();
        target.clear(Color::RED);
        PngImage::new(&data).render_into(&mut target, 2, 3).unwrap();
        let top = Color::with_alpha(0, 0, 255, 128);
        assert_eq!(target.pixel(2, 3), Some(top.blend_over(Color::RED)));
        assert_eq!(target.pixel(0, 0), Some(Color::RED));

        // entirely off the right edge is a no-op
        PngImage::new(&data).render_into(&mut target, 4, 0).unwrap();
    }

    #[test]
    fn oversized_chunk_length_is_rejected() {
        let mut data = png(1, 1, 8, COLOR_GREY, &[], &[0, 0]);
        // replace IDAT and everything after it with one huge ancillary chunk
        data.truncate(SIGNATURE.len() + 8 + 13 + 4);
        data.extend_from_slice(&0x8000_0000u32.to_be_bytes());
        data.extend_from_slice(b"tEXt");
        data.extend_from_slice(&[0; 16]);

        assert_eq!(
            PngImage::new(&data).render_new().unwrap_err(),
            GfxError::from(DecodeError::ChunkTooLong(0x8000_0000))
        );

        let mut decoder = Decoder::new();
        let mut sink = Allocate::default();
        assert!(decoder.feed(&data, &mut sink).is_err());
    }

    #[test]
    fn sessions_wait_for_the_decode_lock() {
        use std::sync::atomic::{AtomicBool, Ordering};
        use std::sync::Arc;
        use std::thread;
        use std::time::Duration;

        let data = png(2, 1, 8, COLOR_RGBA, &[], &[0, 1, 2, 3, 4, 5, 6, 7, 8]);
        let done = Arc::new(AtomicBool::new(false));

        let held = DECODE_LOCK.lock();
        let worker = {
            let done = done.clone();
            thread::spawn(move || {
                let first = PngImage::new(&data).render_new().map(|b| b.pixel(0, 0));
                done.store(true, Ordering::SeqCst);
                first
            })
        };
        thread::sleep(Duration::from_millis(50));
        assert!(!done.load(Ordering::SeqCst));

        drop(held);
        assert_eq!(worker.join().unwrap(), Ok(Some(Color::with_alpha(1, 2, 3, 4))));
        assert!(done.load(Ordering::SeqCst));
    }
}
