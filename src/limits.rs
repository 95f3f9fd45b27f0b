use alloc::format;

use crate::error::BmpError;
use crate::pixel::Pixel;

/// Caps applied to a bitmap's declared geometry before any pixel memory is
/// allocated.
///
/// Every cap is optional; [`Limits::default`] accepts any image whose
/// buffer size fits in `usize`.
///
/// ```
/// use bmploader::Limits;
///
/// let limits = Limits {
///     max_pixels: Some(4096 * 4096),
///     ..Default::default()
/// };
/// # let _ = limits;
/// ```
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Cap on `width * height`.
    pub max_pixels: Option<u64>,
    /// Cap on the decoded RGB buffer, `width * height * 3` bytes.
    pub max_memory_bytes: Option<u64>,
}

impl Limits {
    /// Reject a `width` x `height` image that breaks any cap.
    ///
    /// A geometry whose pixel buffer cannot be sized in `usize` is
    /// [`BmpError::DimensionsTooLarge`] whatever the caps are.
    pub(crate) fn check_image(&self, width: u32, height: u32) -> Result<(), BmpError> {
        let pixels = u64::from(width) * u64::from(height);
        let bytes = usize::try_from(pixels)
            .ok()
            .and_then(|px| px.checked_mul(core::mem::size_of::<Pixel>()))
            .ok_or(BmpError::DimensionsTooLarge { width, height })?;

        exceeds("width", u64::from(width), self.max_width)?;
        exceeds("height", u64::from(height), self.max_height)?;
        exceeds("pixel count", pixels, self.max_pixels)?;
        exceeds("pixel buffer bytes", bytes as u64, self.max_memory_bytes)
    }
}

fn exceeds(what: &str, value: u64, cap: Option<u64>) -> Result<(), BmpError> {
    match cap {
        Some(cap) if value > cap => Err(BmpError::LimitExceeded(format!(
            "{what} {value} exceeds limit {cap}"
        ))),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_accepts_large_images() {
        let limits = Limits::default();
        assert!(limits.check_image(65_535, 65_535).is_ok());
    }

    #[test]
    fn width_and_height_caps() {
        let limits = Limits {
            max_width: Some(8),
            max_height: Some(4),
            ..Default::default()
        };
        assert!(limits.check_image(8, 4).is_ok());
        assert!(limits.check_image(9, 1).is_err());
        assert!(limits.check_image(1, 5).is_err());
    }

    #[test]
    fn pixel_count_cap() {
        let limits = Limits {
            max_pixels: Some(100),
            ..Default::default()
        };
        assert!(limits.check_image(10, 10).is_ok());
        match limits.check_image(10, 11) {
            Err(BmpError::LimitExceeded(msg)) => assert!(msg.contains("110"), "{msg}"),
            other => panic!("expected LimitExceeded, got {other:?}"),
        }
    }

    #[test]
    fn memory_cap_counts_three_bytes_per_pixel() {
        let limits = Limits {
            max_memory_bytes: Some(30),
            ..Default::default()
        };
        assert!(limits.check_image(5, 2).is_ok());
        match limits.check_image(11, 1) {
            Err(BmpError::LimitExceeded(msg)) => {
                assert!(msg.contains("33"), "{msg}");
            }
            other => panic!("expected LimitExceeded, got {other:?}"),
        }
    }

    #[cfg(target_pointer_width = "32")]
    #[test]
    fn unaddressable_buffer_is_too_large() {
        assert!(matches!(
            Limits::default().check_image(u32::MAX, u32::MAX),
            Err(BmpError::DimensionsTooLarge { .. })
        ));
    }
}
