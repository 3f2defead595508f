use crate::error::PnmError;
use crate::pnm::PnmFormat;

/// Header-level facts about a plain PNM stream, without decoding pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    /// Declared maximum sample value (1..=255).
    pub maxval: u8,
    pub format: PnmFormat,
}

impl ImageInfo {
    /// Parse just the header of a P2/P3 stream.
    pub fn from_bytes(data: &[u8]) -> Result<Self, PnmError> {
        crate::pnm::probe_header(data)
    }
}
