//! BMP format decoder (internal).
//!
//! Use top-level [`crate::decode`] or [`crate::DecodeRequest`].

mod decode;
pub(crate) mod header;
mod utils;

use enough::Stop;
use log::debug;

use crate::error::BmpError;
use crate::image::Image;
use crate::limits::Limits;
use header::{DibHeader, FileHeader};

pub(crate) use utils::row_stride;

/// Decode an uncompressed 24-bit BMP into an [`Image`].
pub(crate) fn decode(
    data: &[u8],
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<Image, BmpError> {
    let mut dec = decode::BmpDecoderState::new(data);
    let (file_header, dib_header) = dec.decode_headers()?;
    let geometry = decode::validate_24bpp(&dib_header)?;
    if let Some(limits) = limits {
        limits.check_image(geometry.width, geometry.height)?;
    }
    stop.check()?;

    dec.seek_pixel_array(&file_header)?;
    let pixels = dec.decode_pixels(&geometry, stop)?;

    let image = Image::from_parts(file_header, dib_header, None, pixels);
    debug!("decoded BMP\n{}", image.header_report());
    Ok(image)
}

/// Read both headers without validating or decoding pixels.
pub(crate) fn read_headers(data: &[u8]) -> Result<(FileHeader, DibHeader), BmpError> {
    decode::BmpDecoderState::new(data).decode_headers()
}
