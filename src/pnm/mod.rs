//! Plain (ASCII) PNM family: P2 (PGM greyscale) and P3 (PPM color).
//!
//! Only the whitespace-delimited text variants are handled here; the raw
//! binary formats (P4/P5/P6) are out of scope for this crate.

mod decode;
mod encode;

pub use decode::{decode, decode_pgm, decode_ppm, DecodeRequest};
pub use encode::{encode_binary_pgm, encode_pgm, encode_ppm};

use crate::error::PnmError;
use crate::info::ImageInfo;

/// Which plain PNM sub-format a stream carries.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PnmFormat {
    /// P2 — plain greyscale (PGM).
    Pgm,
    /// P3 — plain RGB (PPM).
    Ppm,
}

impl PnmFormat {
    /// The two-character magic number for this format.
    pub fn magic(self) -> &'static str {
        match self {
            PnmFormat::Pgm => "P2",
            PnmFormat::Ppm => "P3",
        }
    }

    /// Samples per pixel.
    pub fn channels(self) -> usize {
        match self {
            PnmFormat::Pgm => 1,
            PnmFormat::Ppm => 3,
        }
    }
}

/// Parsed plain PNM header (internal).
#[derive(Debug)]
pub(crate) struct PnmHeader {
    pub format: PnmFormat,
    pub width: u32,
    pub height: u32,
    pub maxval: u8,
}

/// Probe the header for ImageInfo without decoding pixels.
pub(crate) fn probe_header(data: &[u8]) -> Result<ImageInfo, PnmError> {
    let (header, _) = decode::parse_header(data)?;
    Ok(ImageInfo {
        width: header.width,
        height: header.height,
        maxval: header.maxval,
        format: header.format,
    })
}
