use crate::error::PnmError;

/// Marker for the closed set of pixel variants an [`Image`](crate::Image)
/// can hold.
///
/// Sealed: the four color models below are the only implementors.
pub trait Pixel: Copy + Default + sealed::Sealed {}

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::ColorPixel {}
    impl Sealed for super::BinaryPixel {}
    impl Sealed for super::GreyPixel {}
    impl Sealed for super::HsvPixel {}
}

fn channel(value: u16) -> Result<u8, PnmError> {
    u8::try_from(value).map_err(|_| PnmError::InvalidPixelValue { value, max: 255 })
}

/// RGB color pixel, one byte per channel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ColorPixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorPixel {
    /// Build from raw channel values, rejecting anything above 255.
    pub fn new(r: u16, g: u16, b: u16) -> Result<Self, PnmError> {
        Ok(Self {
            r: channel(r)?,
            g: channel(g)?,
            b: channel(b)?,
        })
    }
}

impl Pixel for ColorPixel {}

/// Bilevel pixel: 0 is black (unselected), 1 is white (selected).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BinaryPixel {
    value: u8,
}

impl BinaryPixel {
    pub const OFF: Self = Self { value: 0 };
    pub const ON: Self = Self { value: 1 };

    /// Build from a raw value, which must be exactly 0 or 1.
    pub fn new(value: u16) -> Result<Self, PnmError> {
        match value {
            0 | 1 => Ok(Self { value: value as u8 }),
            _ => Err(PnmError::InvalidPixelValue { value, max: 1 }),
        }
    }

    pub fn value(self) -> u8 {
        self.value
    }

    pub fn is_set(self) -> bool {
        self.value == 1
    }
}

impl Pixel for BinaryPixel {}

/// Greyscale pixel, 0 (black) to 255 (white).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GreyPixel {
    pub value: u8,
}

impl GreyPixel {
    pub fn new(value: u16) -> Result<Self, PnmError> {
        Ok(Self {
            value: channel(value)?,
        })
    }
}

impl Pixel for GreyPixel {}

/// HSV pixel, one byte per channel.
///
/// Hue is stored on the same 0..=255 scale as the other channels; the
/// conventional 0..=359 degree range is not enforced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HsvPixel {
    pub h: u8,
    pub s: u8,
    pub v: u8,
}

impl HsvPixel {
    pub fn new(h: u16, s: u16, v: u16) -> Result<Self, PnmError> {
        Ok(Self {
            h: channel(h)?,
            s: channel(s)?,
            v: channel(v)?,
        })
    }
}

impl Pixel for HsvPixel {}

#[cfg(feature = "rgb")]
impl From<rgb::RGB8> for ColorPixel {
    fn from(p: rgb::RGB8) -> Self {
        Self {
            r: p.r,
            g: p.g,
            b: p.b,
        }
    }
}

#[cfg(feature = "rgb")]
impl From<ColorPixel> for rgb::RGB8 {
    fn from(p: ColorPixel) -> Self {
        Self {
            r: p.r,
            g: p.g,
            b: p.b,
        }
    }
}
