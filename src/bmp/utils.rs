//! Scanline stride arithmetic.

/// Bytes per pixel of the decodable 24-bit layout.
pub(crate) const BYTES_PER_PIXEL: usize = 3;

/// Padding bytes appended to a 24-bit scanline of `width` pixels.
pub(crate) fn row_padding(width: usize) -> usize {
    (4 - (width * BYTES_PER_PIXEL) % 4) % 4
}

/// On-disk length of a 24-bit scanline, rounded up to a multiple of 4.
///
/// Returns `None` on overflow.
pub(crate) fn row_stride(width: usize) -> Option<usize> {
    width
        .checked_mul(BYTES_PER_PIXEL)
        .and_then(|r| r.checked_add(3))
        .map(|r| r & !3)
}
