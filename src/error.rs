use alloc::string::String;
use enough::StopReason;

/// Errors from BMP decoding and pixel transforms.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BmpError {
    #[error("unsupported bit depth: {bpp} bpp")]
    UnsupportedBitDepth { bpp: u16 },

    #[error("unsupported compression method: {0}")]
    UnsupportedCompression(u32),

    #[error("invalid header: {0}")]
    InvalidHeader(String),

    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("invalid color channel index {0}, expected 0, 1 or 2")]
    InvalidChannel(usize),

    #[error("invalid sample rate {0}, must be at least 1")]
    InvalidSampleRate(u32),

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("operation cancelled")]
    Cancelled(StopReason),

    #[cfg(feature = "std")]
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

impl BmpError {
    /// Whether the error describes malformed or unsupported input, or a
    /// violated accessor contract, as opposed to resource, cancellation or
    /// I/O failures.
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedBitDepth { .. }
                | Self::UnsupportedCompression(_)
                | Self::InvalidHeader(_)
                | Self::UnexpectedEof
                | Self::InvalidChannel(_)
                | Self::InvalidSampleRate(_)
        )
    }
}

impl From<StopReason> for BmpError {
    fn from(r: StopReason) -> Self {
        BmpError::Cancelled(r)
    }
}
