//! BMP file header and DIB (BITMAPINFOHEADER) fields.

use core::fmt;

/// Size in bytes of the BMP file header.
pub const FILE_HEADER_SIZE: usize = 14;

/// Size in bytes of the DIB fields this crate reads (BITMAPINFOHEADER).
pub const DIB_HEADER_SIZE: usize = 40;

/// The 14-byte file header at the start of every BMP.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FileHeader {
    /// Two signature bytes exactly as read, normally `b"BM"`.
    pub signature: [u8; 2],
    /// Total file size claimed by the header.
    pub file_size: u32,
    /// Reserved bytes, kept but not interpreted.
    pub reserved: [u8; 4],
    /// Byte offset of the pixel array from the start of the file.
    pub pixel_offset: u32,
}

impl FileHeader {
    /// Whether the signature is the standard `BM`.
    pub fn has_bm_signature(&self) -> bool {
        &self.signature == b"BM"
    }
}

/// Device-independent bitmap header fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DibHeader {
    pub header_size: u32,
    pub width: u32,
    /// Raw height field. Negative when reinterpreted as `i32` for top-down
    /// bitmaps; see [`DibHeader::rows`].
    pub height: u32,
    pub planes: u16,
    pub bits_per_pixel: u16,
    pub compression: u32,
    /// Compressed image size (may be 0 for uncompressed images).
    pub image_size: u32,
    pub x_pixels_per_meter: u32,
    pub y_pixels_per_meter: u32,
    pub colors_used: u32,
    pub important_colors: u32,
}

impl DibHeader {
    /// Scanlines are stored top row first.
    pub fn is_top_down(&self) -> bool {
        (self.height as i32) < 0
    }

    /// Number of pixel rows.
    pub fn rows(&self) -> u32 {
        (self.height as i32).unsigned_abs()
    }

    /// Decoded compression method.
    pub fn compression(&self) -> Compression {
        Compression::from_u32(self.compression)
    }
}

/// Compression method codes from the DIB header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Compression {
    /// `BI_RGB`, uncompressed.
    Rgb,
    /// `BI_RLE8`.
    Rle8,
    /// `BI_RLE4`.
    Rle4,
    /// Any other code.
    Other(u32),
}

impl Compression {
    pub fn from_u32(code: u32) -> Self {
        match code {
            0 => Self::Rgb,
            1 => Self::Rle8,
            2 => Self::Rle4,
            other => Self::Other(other),
        }
    }

    /// Human-readable label, empty for unknown codes.
    pub fn label(self) -> &'static str {
        match self {
            Self::Rgb => "BI_RGB (no compression)",
            Self::Rle8 => "BI_RLE8 (8bit RLE encoding)",
            Self::Rle4 => "BI_RLE4 (4bit RLE encoding)",
            Self::Other(_) => "",
        }
    }
}

/// Human-readable label for a bit depth, empty for unusual depths.
pub fn bit_depth_label(bpp: u16) -> &'static str {
    match bpp {
        1 => "(monochrome)",
        4 => "(16 colors)",
        8 => "(up to 256 colors)",
        16 => "(65536 colors)",
        24 => "(colors not in LUT)",
        _ => "",
    }
}

/// Diagnostic dump of both headers, created by
/// [`Image::header_report`](crate::Image::header_report).
#[derive(Clone, Copy, Debug)]
pub struct HeaderReport<'a> {
    pub(crate) file: &'a FileHeader,
    pub(crate) dib: &'a DibHeader,
}

impl<'a> HeaderReport<'a> {
    pub fn new(file: &'a FileHeader, dib: &'a DibHeader) -> Self {
        Self { file, dib }
    }
}

impl fmt::Display for HeaderReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = self.file;
        let dib = self.dib;

        writeln!(f, "header")?;
        writeln!(
            f,
            "\tsignature:       {}{}",
            char::from(file.signature[0]),
            char::from(file.signature[1])
        )?;
        writeln!(f, "\tsize:            {} bytes", file.file_size)?;
        writeln!(f, "\tpixel address:   {}", file.pixel_offset)?;

        writeln!(f)?;
        writeln!(f, "DIB")?;
        writeln!(f, "\theader size:  {} bytes", dib.header_size)?;
        writeln!(f, "\twidth:        {}", dib.width)?;
        writeln!(f, "\theight:       {}", dib.height as i32)?;
        writeln!(f, "\tplanes:       {}", dib.planes)?;
        writeln!(
            f,
            "\tbits / pixel: {} {}",
            dib.bits_per_pixel,
            bit_depth_label(dib.bits_per_pixel)
        )?;
        writeln!(f, "\tcompression:  {}", dib.compression().label())?;
        writeln!(f, "\timage size:   {} bytes", dib.image_size)?;
        writeln!(f, "\tpixels/meter")?;
        writeln!(f, "\t\th: {}", dib.x_pixels_per_meter)?;
        writeln!(f, "\t\tv: {}", dib.y_pixels_per_meter)?;
        writeln!(f, "\ttotal colors:     {}", dib.colors_used)?;
        write!(f, "\timportant colors: {}", dib.important_colors)
    }
}
