//! BMP header parser and uncompressed 24-bit scanline decoder.
//!
//! Every field is read as explicit little-endian bytes through a
//! bounds-checked cursor; a read past the end of the input is always
//! [`BmpError::UnexpectedEof`], never zero-filled.

use alloc::vec;
use alloc::vec::Vec;

use enough::Stop;
use log::{trace, warn};

use super::header::{Compression, DIB_HEADER_SIZE, DibHeader, FILE_HEADER_SIZE, FileHeader};
use super::utils::{BYTES_PER_PIXEL, row_padding, row_stride};
use crate::error::BmpError;
use crate::pixel::Pixel;

// ── Cursor for reading from &[u8] ───────────────────────────────────

struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn position(&self) -> usize {
        self.pos
    }

    fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    fn skip(&mut self, n: usize) -> Result<(), BmpError> {
        let new_pos = self.pos.checked_add(n).ok_or(BmpError::UnexpectedEof)?;
        if new_pos > self.data.len() {
            return Err(BmpError::UnexpectedEof);
        }
        self.pos = new_pos;
        Ok(())
    }

    fn get_u16_le(&mut self) -> Result<u16, BmpError> {
        Ok(u16::from_le_bytes(self.read_fixed_bytes::<2>()?))
    }

    fn get_u32_le(&mut self) -> Result<u32, BmpError> {
        Ok(u32::from_le_bytes(self.read_fixed_bytes::<4>()?))
    }

    fn read_fixed_bytes<const N: usize>(&mut self) -> Result<[u8; N], BmpError> {
        if self.remaining() < N {
            return Err(BmpError::UnexpectedEof);
        }
        let mut buf = [0u8; N];
        buf.copy_from_slice(&self.data[self.pos..self.pos + N]);
        self.pos += N;
        Ok(buf)
    }

    fn read_exact_bytes(&mut self, buf: &mut [u8]) -> Result<(), BmpError> {
        let n = buf.len();
        if self.remaining() < n {
            return Err(BmpError::UnexpectedEof);
        }
        buf.copy_from_slice(&self.data[self.pos..self.pos + n]);
        self.pos += n;
        Ok(())
    }
}

// ── Validated pixel geometry ────────────────────────────────────────

/// Pixel array layout of a decodable (24 bpp, uncompressed) bitmap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Geometry {
    pub width: u32,
    pub height: u32,
    pub top_down: bool,
    /// On-disk bytes per scanline, padding included.
    pub stride: usize,
}

impl Geometry {
    pub(crate) fn pixel_count(&self) -> Result<usize, BmpError> {
        (self.width as usize)
            .checked_mul(self.height as usize)
            .ok_or(BmpError::DimensionsTooLarge {
                width: self.width,
                height: self.height,
            })
    }
}

/// Check that a DIB header describes a bitmap this crate can decode.
pub(crate) fn validate_24bpp(dib: &DibHeader) -> Result<Geometry, BmpError> {
    // 1, 4 and 8 bpp need a color table, 16 bpp needs bitfields.
    // Neither is decoded, and no other depth is valid BMP.
    if dib.bits_per_pixel != 24 {
        return Err(BmpError::UnsupportedBitDepth {
            bpp: dib.bits_per_pixel,
        });
    }

    if dib.compression() != Compression::Rgb {
        return Err(BmpError::UnsupportedCompression(dib.compression));
    }

    if (dib.header_size as usize) < DIB_HEADER_SIZE {
        return Err(BmpError::InvalidHeader(alloc::format!(
            "unsupported DIB header size: {}",
            dib.header_size
        )));
    }

    if dib.planes != 1 {
        warn!("BMP planes field is {}, expected 1", dib.planes);
    }

    let width = dib.width;
    let height = dib.rows();
    if width == 0 {
        return Err(BmpError::InvalidHeader("BMP width is zero".into()));
    }
    if height == 0 {
        return Err(BmpError::InvalidHeader("BMP height is zero".into()));
    }

    let stride =
        row_stride(width as usize).ok_or(BmpError::DimensionsTooLarge { width, height })?;

    trace!("Width: {width}");
    trace!("Height: {height}");
    trace!("Top-down: {}", dib.is_top_down());
    trace!("Row padding: {} bytes", row_padding(width as usize));

    Ok(Geometry {
        width,
        height,
        top_down: dib.is_top_down(),
        stride,
    })
}

// ── Internal decoder state ──────────────────────────────────────────

pub(crate) struct BmpDecoderState<'a> {
    bytes: Cursor<'a>,
}

impl<'a> BmpDecoderState<'a> {
    pub(crate) fn new(data: &'a [u8]) -> Self {
        Self {
            bytes: Cursor::new(data),
        }
    }

    /// Read the file header and the eleven DIB fields, in on-disk order.
    pub(crate) fn decode_headers(&mut self) -> Result<(FileHeader, DibHeader), BmpError> {
        let signature = self.bytes.read_fixed_bytes::<2>()?;
        let file_size = self.bytes.get_u32_le()?;
        let reserved = self.bytes.read_fixed_bytes::<4>()?;
        let pixel_offset = self.bytes.get_u32_le()?;

        let file = FileHeader {
            signature,
            file_size,
            reserved,
            pixel_offset,
        };
        if !file.has_bm_signature() {
            warn!(
                "unexpected BMP signature {:02X} {:02X}, continuing",
                signature[0], signature[1]
            );
        }

        let dib = DibHeader {
            header_size: self.bytes.get_u32_le()?,
            width: self.bytes.get_u32_le()?,
            height: self.bytes.get_u32_le()?,
            planes: self.bytes.get_u16_le()?,
            bits_per_pixel: self.bytes.get_u16_le()?,
            compression: self.bytes.get_u32_le()?,
            image_size: self.bytes.get_u32_le()?,
            x_pixels_per_meter: self.bytes.get_u32_le()?,
            y_pixels_per_meter: self.bytes.get_u32_le()?,
            colors_used: self.bytes.get_u32_le()?,
            important_colors: self.bytes.get_u32_le()?,
        };

        trace!("Bit depth: {}", dib.bits_per_pixel);
        trace!("Compression: {:?}", dib.compression());

        Ok((file, dib))
    }

    /// Move forward to the pixel array named by the file header.
    ///
    /// Offsets pointing back into the headers are ignored and the pixel
    /// array is taken to start right after the DIB fields.
    pub(crate) fn seek_pixel_array(&mut self, file: &FileHeader) -> Result<(), BmpError> {
        let offset = file.pixel_offset as usize;
        let pos = self.bytes.position();
        debug_assert_eq!(pos, FILE_HEADER_SIZE + DIB_HEADER_SIZE);

        if offset > pos {
            self.bytes.skip(offset - pos)?;
        } else if offset < pos {
            warn!("BMP pixel offset {offset} points inside the headers, reading from {pos}");
        }
        Ok(())
    }

    /// Decode every scanline into a freshly allocated top-to-bottom buffer.
    pub(crate) fn decode_pixels(
        &mut self,
        geometry: &Geometry,
        stop: &dyn Stop,
    ) -> Result<Vec<Pixel>, BmpError> {
        let width = geometry.width as usize;
        let too_large = BmpError::DimensionsTooLarge {
            width: geometry.width,
            height: geometry.height,
        };
        let needed = geometry
            .stride
            .checked_mul(geometry.height as usize)
            .ok_or(too_large)?;
        // Reject truncated input before allocating for it.
        if self.bytes.remaining() < needed {
            return Err(BmpError::UnexpectedEof);
        }

        let mut buf = vec![Pixel::default(); geometry.pixel_count()?];
        let mut scanline = vec![0u8; geometry.stride];

        if geometry.top_down {
            self.decode_rows(buf.chunks_exact_mut(width), &mut scanline, stop)?;
        } else {
            // Bottom-up: the first scanline on disk is the last logical row.
            self.decode_rows(buf.rchunks_exact_mut(width), &mut scanline, stop)?;
        }

        Ok(buf)
    }

    fn decode_rows<'b>(
        &mut self,
        rows: impl Iterator<Item = &'b mut [Pixel]>,
        scanline: &mut [u8],
        stop: &dyn Stop,
    ) -> Result<(), BmpError> {
        for (row_idx, out) in rows.enumerate() {
            if row_idx % 16 == 0 {
                stop.check()?;
            }
            // Pixel bytes and row padding in one read.
            self.bytes.read_exact_bytes(scanline)?;
            for (pixel, bgr) in out.iter_mut().zip(scanline.chunks_exact(BYTES_PER_PIXEL)) {
                *pixel = Pixel::new(bgr[2], bgr[1], bgr[0]);
            }
        }
        Ok(())
    }
}
