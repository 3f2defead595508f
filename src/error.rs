use alloc::string::String;
use enough::StopReason;

/// Errors from plain PNM decoding, encoding, and image construction.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum PnmError {
    /// Image dimensions must both be positive.
    #[error("invalid dimensions: {height}x{width}")]
    InvalidDimensions { height: u32, width: u32 },

    /// A pixel channel value is out of range for its color model.
    #[error("pixel value {value} out of range (max {max})")]
    InvalidPixelValue { value: u16, max: u16 },

    /// Magic number is not one of the supported plain formats (P2/P3).
    #[error("unsupported format magic: {0}")]
    UnsupportedFormat(String),

    #[error("malformed header: {0}")]
    MalformedHeader(String),

    /// Maxval must be in 1..=255 for the plain 8-bit formats.
    #[error("unsupported maxval {0} (must be 1..=255)")]
    UnsupportedMaxval(u32),

    #[error("malformed pixel data: {0}")]
    MalformedPixelData(String),

    /// Input ended before the full sample stream was read.
    #[error("truncated input: got {got} of {expected} samples")]
    TruncatedInput { expected: usize, got: usize },

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    /// A prebuilt pixel buffer does not match `height * width`.
    #[error("buffer size mismatch: need {needed} pixels, got {actual}")]
    BufferSizeMismatch { needed: usize, actual: usize },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("operation cancelled")]
    Cancelled(StopReason),

    #[cfg(feature = "std")]
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<StopReason> for PnmError {
    fn from(r: StopReason) -> Self {
        PnmError::Cancelled(r)
    }
}
