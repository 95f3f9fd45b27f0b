use crate::error::BmpError;

/// One decoded pixel: 8-bit red, green and blue.
///
/// BMP stores the channels as blue, green, red on disk; decoding always
/// yields this logical order.
pub type Pixel = rgb::RGB8;

/// Color channel selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    /// All channels in logical order.
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    /// Numeric index of this channel (red = 0, green = 1, blue = 2).
    pub fn index(self) -> usize {
        match self {
            Self::Red => 0,
            Self::Green => 1,
            Self::Blue => 2,
        }
    }

    /// Read this channel from a pixel.
    pub fn get(self, pixel: &Pixel) -> u8 {
        match self {
            Self::Red => pixel.r,
            Self::Green => pixel.g,
            Self::Blue => pixel.b,
        }
    }

    pub(crate) fn get_ref(self, pixel: &Pixel) -> &u8 {
        match self {
            Self::Red => &pixel.r,
            Self::Green => &pixel.g,
            Self::Blue => &pixel.b,
        }
    }

    pub(crate) fn get_mut(self, pixel: &mut Pixel) -> &mut u8 {
        match self {
            Self::Red => &mut pixel.r,
            Self::Green => &mut pixel.g,
            Self::Blue => &mut pixel.b,
        }
    }
}

impl TryFrom<usize> for Channel {
    type Error = BmpError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(Self::Red),
            1 => Ok(Self::Green),
            2 => Ok(Self::Blue),
            other => Err(BmpError::InvalidChannel(other)),
        }
    }
}
