use alloc::vec::Vec;
use core::ops::{Index, IndexMut};

use crate::error::PnmError;
use crate::pixel::{BinaryPixel, ColorPixel, GreyPixel, HsvPixel, Pixel};

/// A 2D pixel buffer: one contiguous row-major allocation plus its
/// dimensions.
///
/// The buffer length is always exactly `height * width`; cell `(row, col)`
/// lives at flat index `row * width + col`. Dimensions are fixed at
/// construction and the image exclusively owns its buffer, so dropping the
/// image releases every pixel in one step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image<P: Pixel> {
    height: u32,
    width: u32,
    pixels: Vec<P>,
}

/// RGB color image.
pub type ColorImage = Image<ColorPixel>;
/// Bilevel image.
pub type BinaryImage = Image<BinaryPixel>;
/// Greyscale image.
pub type GreyImage = Image<GreyPixel>;
/// HSV image.
pub type HsvImage = Image<HsvPixel>;

impl<P: Pixel> Image<P> {
    /// Allocate a `height`×`width` image filled with the default pixel
    /// (black / unselected).
    ///
    /// Every cell holds a valid pixel from the start, so a fresh image is
    /// already exportable; callers populate cells with [`IndexMut`] or
    /// [`Image::get_mut`].
    pub fn new(height: u32, width: u32) -> Result<Self, PnmError> {
        let len = checked_area(height, width)?;
        let mut pixels = Vec::new();
        pixels.resize(len, P::default());
        Ok(Self {
            height,
            width,
            pixels,
        })
    }

    /// Allocate and populate every cell from `f(row, col)`.
    pub fn from_fn(
        height: u32,
        width: u32,
        mut f: impl FnMut(u32, u32) -> P,
    ) -> Result<Self, PnmError> {
        let len = checked_area(height, width)?;
        let mut pixels = Vec::with_capacity(len);
        for row in 0..height {
            for col in 0..width {
                pixels.push(f(row, col));
            }
        }
        Ok(Self {
            height,
            width,
            pixels,
        })
    }

    /// Adopt a prebuilt row-major buffer.
    ///
    /// Fails with [`PnmError::BufferSizeMismatch`] unless `pixels.len()`
    /// equals `height * width`.
    pub fn from_raw(height: u32, width: u32, pixels: Vec<P>) -> Result<Self, PnmError> {
        let len = checked_area(height, width)?;
        if pixels.len() != len {
            return Err(PnmError::BufferSizeMismatch {
                needed: len,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            height,
            width,
            pixels,
        })
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    /// Flat index of cell `(row, col)`.
    fn index_of(&self, row: u32, col: u32) -> usize {
        row as usize * self.width as usize + col as usize
    }

    pub fn get(&self, row: u32, col: u32) -> Option<&P> {
        if row < self.height && col < self.width {
            self.pixels.get(self.index_of(row, col))
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, row: u32, col: u32) -> Option<&mut P> {
        if row < self.height && col < self.width {
            let idx = self.index_of(row, col);
            self.pixels.get_mut(idx)
        } else {
            None
        }
    }

    /// The whole buffer in row-major order.
    pub fn pixels(&self) -> &[P] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [P] {
        &mut self.pixels
    }

    /// Iterate over rows as contiguous slices.
    pub fn rows(&self) -> impl Iterator<Item = &[P]> {
        self.pixels.chunks_exact(self.width as usize)
    }

    /// Zero-copy 2D view over the pixel buffer.
    #[cfg(feature = "imgref")]
    pub fn as_imgref(&self) -> imgref::ImgRef<'_, P> {
        imgref::ImgRef::new(&self.pixels, self.width as usize, self.height as usize)
    }

    /// Convert into an [`imgref::ImgVec`], consuming the image.
    #[cfg(feature = "imgref")]
    pub fn into_imgvec(self) -> imgref::ImgVec<P> {
        imgref::ImgVec::new(self.pixels, self.width as usize, self.height as usize)
    }
}

impl<P: Pixel> Index<(u32, u32)> for Image<P> {
    type Output = P;

    fn index(&self, (row, col): (u32, u32)) -> &P {
        match self.get(row, col) {
            Some(p) => p,
            None => panic!(
                "cell ({row},{col}) out of bounds for {}x{} image",
                self.height, self.width
            ),
        }
    }
}

impl<P: Pixel> IndexMut<(u32, u32)> for Image<P> {
    fn index_mut(&mut self, (row, col): (u32, u32)) -> &mut P {
        let (height, width) = (self.height, self.width);
        match self.get_mut(row, col) {
            Some(p) => p,
            None => panic!("cell ({row},{col}) out of bounds for {height}x{width} image"),
        }
    }
}

/// Validated `height * width`, as a buffer length.
fn checked_area(height: u32, width: u32) -> Result<usize, PnmError> {
    if height == 0 || width == 0 {
        return Err(PnmError::InvalidDimensions { height, width });
    }
    (height as usize)
        .checked_mul(width as usize)
        .ok_or(PnmError::DimensionsTooLarge { width, height })
}

/// An image of whichever variant the codec produced: P2 yields grey,
/// P3 yields color.
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum AnyImage {
    Grey(GreyImage),
    Color(ColorImage),
}

impl AnyImage {
    pub fn height(&self) -> u32 {
        match self {
            AnyImage::Grey(img) => img.height(),
            AnyImage::Color(img) => img.height(),
        }
    }

    pub fn width(&self) -> u32 {
        match self {
            AnyImage::Grey(img) => img.width(),
            AnyImage::Color(img) => img.width(),
        }
    }
}
