//! Whole-image pixel transforms.
//!
//! Each function consumes an [`Image`] and returns a new one, so a decoded
//! image is never mutated behind a caller's back.

use alloc::vec::Vec;

use crate::bmp::row_stride;
use crate::error::BmpError;
use crate::image::Image;
use crate::pixel::{Channel, Pixel};

/// Replace every pixel by the truncated mean of its three channels.
pub fn greyscale(image: Image) -> Image {
    let (file, dib, color_table, mut pixels) = image.into_parts();
    for p in pixels.iter_mut() {
        let sum = u16::from(p.r) + u16::from(p.g) + u16::from(p.b);
        let grey = (sum / 3) as u8;
        *p = Pixel::new(grey, grey, grey);
    }
    Image::from_parts(file, dib, color_table, pixels)
}

/// Stretch each channel linearly so its smallest value becomes 0 and its
/// largest becomes 255.
///
/// Channels are handled independently. A channel holding a single value
/// across the whole image has no range to stretch and is left unchanged.
pub fn maximize_contrast(image: Image) -> Image {
    let (file, dib, color_table, mut pixels) = image.into_parts();
    for channel in Channel::ALL {
        let Some((min, max)) = channel_range(&pixels, channel) else {
            continue;
        };
        if min == max {
            continue;
        }
        let span = u32::from(max - min);
        for p in pixels.iter_mut() {
            let v = channel.get_mut(p);
            *v = (u32::from(*v - min) * 255 / span) as u8;
        }
    }
    Image::from_parts(file, dib, color_table, pixels)
}

fn channel_range(pixels: &[Pixel], channel: Channel) -> Option<(u8, u8)> {
    let mut values = pixels.iter().map(|p| channel.get(p));
    let first = values.next()?;
    Some(values.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
}

/// Nearest-neighbour subsampling by an integer factor.
///
/// The result is `width / rate` by `height / rate` (rounded down); output
/// pixel `(row, col)` is source pixel `(row * rate, col * rate)`. The
/// headers are carried over with the new geometry.
pub fn downsample(image: Image, rate: u32) -> Result<Image, BmpError> {
    if rate == 0 {
        return Err(BmpError::InvalidSampleRate(rate));
    }

    let src_width = image.width() as usize;
    let new_width = image.width() / rate;
    let new_height = image.height() / rate;
    let step = rate as usize;

    let (mut file, mut dib, color_table, pixels) = image.into_parts();

    let mut out = Vec::with_capacity(new_width as usize * new_height as usize);
    for row in 0..new_height as usize {
        let src_row = &pixels[row * step * src_width..][..src_width];
        out.extend(src_row.iter().step_by(step).take(new_width as usize));
    }

    let image_size = row_stride(new_width as usize)
        .and_then(|stride| stride.checked_mul(new_height as usize))
        .and_then(|size| u32::try_from(size).ok())
        .ok_or(BmpError::DimensionsTooLarge {
            width: new_width,
            height: new_height,
        })?;

    dib.width = new_width;
    dib.height = new_height;
    dib.image_size = image_size;
    file.file_size = file.pixel_offset.saturating_add(image_size);

    Ok(Image::from_parts(file, dib, color_table, out))
}
