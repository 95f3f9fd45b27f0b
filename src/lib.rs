//! # bmploader
//!
//! Windows Bitmap (BMP) decoder for uncompressed 24-bit images, plus a few
//! whole-image pixel transforms.
//!
//! ## Decoding
//!
//! The decoder reads the 14-byte file header and the 40-byte DIB header as
//! explicit little-endian fields, then decodes the scanlines. BMP stores rows
//! bottom-up and pixels as blue, green, red, with every row padded to a
//! multiple of 4 bytes; the decoded [`Image`] is always top-down RGB with no
//! padding.
//!
//! ## Supported Formats
//!
//! - 24 bits per pixel, `BI_RGB` (uncompressed), bottom-up or top-down
//!
//! ## Non-Goals
//!
//! - RLE4/RLE8 compression
//! - Palette (1/4/8 bpp) and 16-bit bitfield images
//! - Encoding BMP files
//! - Display
//!
//! ## Usage
//!
//! ```no_run
//! use bmploader::{DecodeRequest, Limits, Unstoppable, transform};
//!
//! let data: &[u8] = &[]; // your BMP bytes
//!
//! let limits = Limits {
//!     max_pixels: Some(64 * 1024 * 1024),
//!     ..Default::default()
//! };
//! let image = DecodeRequest::new(data)
//!     .with_limits(&limits)
//!     .decode(Unstoppable)?;
//! println!("{}", image.header_report());
//!
//! let small = transform::downsample(transform::greyscale(image), 3)?;
//! let small = transform::maximize_contrast(small);
//! println!("{}x{}", small.width(), small.height());
//! # Ok::<(), bmploader::BmpError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod bmp;
mod decode;
mod error;
mod image;
mod limits;
mod pixel;

pub mod transform;

// Re-exports
pub use bmp::header::{
    Compression, DibHeader, FileHeader, HeaderReport, bit_depth_label,
};
#[cfg(feature = "std")]
pub use decode::decode_reader;
pub use decode::{DecodeRequest, decode, read_headers};
pub use enough::{Stop, StopReason, Unstoppable};
pub use error::BmpError;
pub use image::Image;
pub use limits::Limits;
pub use pixel::{Channel, Pixel};
