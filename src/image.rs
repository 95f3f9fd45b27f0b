use alloc::vec::Vec;
use core::ops::Index;

use crate::bmp::header::{DibHeader, FileHeader, HeaderReport};
use crate::error::BmpError;
use crate::pixel::{Channel, Pixel};

/// A decoded bitmap: both headers plus a row-major, top-to-bottom pixel
/// buffer of exactly `width * height` pixels.
///
/// Images are only produced by decoding or by the functions in
/// [`crate::transform`], which consume an image and return a new one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image {
    file_header: FileHeader,
    dib_header: DibHeader,
    color_table: Option<Vec<Pixel>>,
    pixels: Vec<Pixel>,
}

impl Image {
    pub(crate) fn from_parts(
        file_header: FileHeader,
        dib_header: DibHeader,
        color_table: Option<Vec<Pixel>>,
        pixels: Vec<Pixel>,
    ) -> Self {
        debug_assert_eq!(
            pixels.len(),
            dib_header.width as usize * dib_header.rows() as usize
        );
        Self {
            file_header,
            dib_header,
            color_table,
            pixels,
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.dib_header.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.dib_header.rows()
    }

    /// Number of pixels.
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn file_header(&self) -> &FileHeader {
        &self.file_header
    }

    pub fn dib_header(&self) -> &DibHeader {
        &self.dib_header
    }

    /// Palette for indexed formats. Always `None` for 24-bit images.
    pub fn color_table(&self) -> Option<&[Pixel]> {
        self.color_table.as_deref()
    }

    /// All pixels, row-major, top row first.
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Pixels as interleaved RGB bytes.
    pub fn as_bytes(&self) -> &[u8] {
        use rgb::ComponentBytes as _;
        self.pixels.as_bytes()
    }

    /// Iterate over rows, top row first.
    ///
    /// Always yields [`Image::height`] rows; each is empty when the width
    /// is zero.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[Pixel]> + '_ {
        let width = self.width() as usize;
        (0..self.height() as usize).map(move |row| &self.pixels[row * width..][..width])
    }

    /// The pixel at `row`, `col`, or `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<&Pixel> {
        let width = self.width() as usize;
        if col >= width || row >= self.height() as usize {
            return None;
        }
        self.pixels.get(row * width + col)
    }

    /// One channel of the pixel at `row`, `col`.
    ///
    /// # Panics
    ///
    /// Panics when `row` or `col` is out of bounds.
    pub fn channel(&self, row: usize, col: usize, channel: Channel) -> u8 {
        channel.get(&self[(row, col)])
    }

    /// Like [`Image::channel`] with a numeric channel index (0 = red,
    /// 1 = green, 2 = blue).
    ///
    /// # Panics
    ///
    /// Panics when `row` or `col` is out of bounds.
    pub fn channel_at(&self, row: usize, col: usize, channel: usize) -> Result<u8, BmpError> {
        let channel = Channel::try_from(channel)?;
        Ok(self.channel(row, col, channel))
    }

    /// Human-readable dump of the file and DIB headers.
    pub fn header_report(&self) -> HeaderReport<'_> {
        HeaderReport::new(&self.file_header, &self.dib_header)
    }

    /// Zero-copy 2D view of the pixels, or `None` when either dimension is
    /// zero (as [`crate::transform::downsample`] can produce).
    #[cfg(feature = "imgref")]
    pub fn as_imgref(&self) -> Option<imgref::ImgRef<'_, Pixel>> {
        if self.is_empty() {
            return None;
        }
        Some(imgref::ImgRef::new(
            &self.pixels[..],
            self.width() as usize,
            self.height() as usize,
        ))
    }

    pub(crate) fn into_parts(self) -> (FileHeader, DibHeader, Option<Vec<Pixel>>, Vec<Pixel>) {
        (
            self.file_header,
            self.dib_header,
            self.color_table,
            self.pixels,
        )
    }
}

impl Index<(usize, usize)> for Image {
    type Output = Pixel;

    /// Pixel at `(row, col)`.
    fn index(&self, (row, col): (usize, usize)) -> &Pixel {
        match self.get(row, col) {
            Some(p) => p,
            None => panic!(
                "pixel ({row}, {col}) out of bounds for {}x{} image",
                self.width(),
                self.height()
            ),
        }
    }
}

impl Index<(usize, usize, Channel)> for Image {
    type Output = u8;

    fn index(&self, (row, col, channel): (usize, usize, Channel)) -> &u8 {
        channel.get_ref(&self[(row, col)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn image_2x3() -> Image {
        let file = FileHeader {
            signature: *b"BM",
            file_size: 0,
            reserved: [0; 4],
            pixel_offset: 54,
        };
        let dib = DibHeader {
            header_size: 40,
            width: 2,
            height: 3,
            planes: 1,
            bits_per_pixel: 24,
            compression: 0,
            image_size: 0,
            x_pixels_per_meter: 0,
            y_pixels_per_meter: 0,
            colors_used: 0,
            important_colors: 0,
        };
        let pixels = (0..6u8).map(|i| Pixel::new(i, i + 10, i + 20)).collect();
        Image::from_parts(file, dib, None, pixels)
    }

    #[test]
    fn index_is_row_major() {
        let img = image_2x3();
        assert_eq!(img.width(), 2);
        assert_eq!(img.height(), 3);
        assert_eq!(img[(0, 1)], Pixel::new(1, 11, 21));
        assert_eq!(img[(2, 0)], Pixel::new(4, 14, 24));
        assert_eq!(img[(2, 1, Channel::Blue)], 25);
    }

    #[test]
    fn get_checks_column_bounds() {
        let img = image_2x3();
        // (0, 2) would alias (1, 0) in a flat buffer
        assert!(img.get(0, 2).is_none());
        assert!(img.get(3, 0).is_none());
        assert!(img.get(1, 1).is_some());
    }

    #[test]
    fn channel_at_rejects_bad_index() {
        let img = image_2x3();
        assert_eq!(img.channel_at(1, 0, 1).unwrap(), 12);
        assert!(matches!(
            img.channel_at(1, 0, 3),
            Err(BmpError::InvalidChannel(3))
        ));
    }

    #[test]
    #[should_panic]
    fn index_out_of_bounds_panics() {
        let img = image_2x3();
        let _pixel = img[(3, 0)];
    }

    #[test]
    fn rows_and_bytes() {
        let img = image_2x3();
        assert_eq!(img.rows().len(), 3);
        assert_eq!(img.rows().last().unwrap()[1], Pixel::new(5, 15, 25));
        assert_eq!(&img.as_bytes()[..6], &[0, 10, 20, 1, 11, 21]);
        assert_eq!(img.color_table(), None);
        assert_eq!(img.pixels(), &vec![
            Pixel::new(0, 10, 20),
            Pixel::new(1, 11, 21),
            Pixel::new(2, 12, 22),
            Pixel::new(3, 13, 23),
            Pixel::new(4, 14, 24),
            Pixel::new(5, 15, 25),
        ][..]);
    }

    fn with_width(mut img: Image, width: u32) -> Image {
        img.dib_header.width = width;
        img.pixels.truncate(width as usize * img.height() as usize);
        img
    }

    #[test]
    fn zero_width_image_still_has_rows() {
        let img = with_width(image_2x3(), 0);
        assert_eq!(img.height(), 3);
        assert_eq!(img.rows().len(), 3);
        assert!(img.rows().all(|row| row.is_empty()));
        assert!(img.get(0, 0).is_none());
    }

    #[cfg(feature = "imgref")]
    #[test]
    fn imgref_view_needs_pixels() {
        let img = image_2x3();
        let view = img.as_imgref().unwrap();
        assert_eq!((view.width(), view.height()), (2, 3));
        assert_eq!(view[(1usize, 2usize)], Pixel::new(5, 15, 25));

        assert!(with_width(image_2x3(), 0).as_imgref().is_none());
    }
}
