use enough::Stop;

use crate::bmp;
use crate::bmp::header::{DibHeader, FileHeader};
use crate::error::BmpError;
use crate::image::Image;
use crate::limits::Limits;

/// A configured decode of one BMP byte buffer.
#[derive(Clone, Debug)]
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    limits: Option<&'a Limits>,
}

impl<'a> DecodeRequest<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, limits: None }
    }

    /// Reject images whose dimensions or buffer size exceed `limits`.
    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Decode the whole image. Either every pixel is decoded or an error is
    /// returned; no partial image is ever produced.
    pub fn decode(self, stop: impl Stop) -> Result<Image, BmpError> {
        bmp::decode(self.data, self.limits, &stop)
    }
}

/// Decode a BMP without limits.
pub fn decode(data: &[u8], stop: impl Stop) -> Result<Image, BmpError> {
    DecodeRequest::new(data).decode(stop)
}

/// Read all of `reader` and decode it as a BMP.
#[cfg(feature = "std")]
pub fn decode_reader<R: std::io::Read>(mut reader: R, stop: impl Stop) -> Result<Image, BmpError> {
    let mut data = alloc::vec::Vec::new();
    reader.read_to_end(&mut data)?;
    decode(&data, stop)
}

/// Parse the file header and DIB header only.
///
/// No bit depth or compression checks are made, so this also works on
/// bitmaps that [`decode`] rejects.
pub fn read_headers(data: &[u8]) -> Result<(FileHeader, DibHeader), BmpError> {
    bmp::read_headers(data)
}
