//! Plain PNM encoder: P2 (PGM), P3 (PPM).
//!
//! Output is always maxval 255: one line each for the magic number, a
//! creator comment, `width height`, and `255`, then the samples in
//! row-major order, wrapped before the customary 70-column limit.

use alloc::format;
use alloc::vec::Vec;
use enough::Stop;

use super::PnmFormat;
use crate::error::PnmError;
use crate::image::{BinaryImage, ColorImage, GreyImage};

/// Netpbm tools keep plain-format lines at or under 70 characters.
const MAX_LINE: usize = 70;

const CREATOR: &str = "# created by plainpnm";

/// Samples between cancellation polls.
const STOP_INTERVAL: usize = 4096;

/// Serialize a greyscale image as plain PGM (`P2`).
///
/// Pixel content is in range by construction, so only cancellation can
/// fail this.
pub fn encode_pgm(image: &GreyImage, stop: &dyn Stop) -> Result<Vec<u8>, PnmError> {
    let samples = image.pixels().iter().map(|p| p.value);
    encode_plain(PnmFormat::Pgm, image, samples, stop)
}

/// Serialize a color image as plain PPM (`P3`).
pub fn encode_ppm(image: &ColorImage, stop: &dyn Stop) -> Result<Vec<u8>, PnmError> {
    let samples = image.pixels().iter().flat_map(|p| [p.r, p.g, p.b]);
    encode_plain(PnmFormat::Ppm, image, samples, stop)
}

/// Serialize a bilevel image as plain PGM, expanding 0/1 to 0/255.
///
/// Keeps the always-emit-maxval-255 contract; a set pixel comes back as
/// full white when reimported as greyscale.
pub fn encode_binary_pgm(image: &BinaryImage, stop: &dyn Stop) -> Result<Vec<u8>, PnmError> {
    let samples = image
        .pixels()
        .iter()
        .map(|p| if p.is_set() { 255 } else { 0 });
    encode_plain(PnmFormat::Pgm, image, samples, stop)
}

fn encode_plain<P: crate::pixel::Pixel>(
    format: PnmFormat,
    image: &crate::image::Image<P>,
    samples: impl Iterator<Item = u8>,
    stop: &dyn Stop,
) -> Result<Vec<u8>, PnmError> {
    let width = image.width();
    let height = image.height();
    let sample_count = image.pixels().len() * format.channels();

    let header = format!("{}\n{CREATOR}\n{width} {height}\n255\n", format.magic());
    // Worst case is three digits plus a separator per sample.
    let mut out = Vec::with_capacity(header.len() + sample_count * 4);
    out.extend_from_slice(header.as_bytes());

    let mut line_len = 0usize;
    let mut digits = [0u8; 3];
    for (i, sample) in samples.enumerate() {
        if i % STOP_INTERVAL == 0 {
            stop.check()?;
        }
        let token = format_u8(sample, &mut digits);
        if line_len == 0 {
            out.extend_from_slice(token);
            line_len = token.len();
        } else if line_len + 1 + token.len() > MAX_LINE {
            out.push(b'\n');
            out.extend_from_slice(token);
            line_len = token.len();
        } else {
            out.push(b' ');
            out.extend_from_slice(token);
            line_len += 1 + token.len();
        }
    }
    if line_len > 0 {
        out.push(b'\n');
    }
    Ok(out)
}

fn format_u8(value: u8, buf: &mut [u8; 3]) -> &[u8] {
    if value >= 100 {
        buf[0] = b'0' + value / 100;
        buf[1] = b'0' + (value / 10) % 10;
        buf[2] = b'0' + value % 10;
        &buf[..3]
    } else if value >= 10 {
        buf[0] = b'0' + value / 10;
        buf[1] = b'0' + value % 10;
        &buf[..2]
    } else {
        buf[0] = b'0' + value;
        &buf[..1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_u8_covers_digit_widths() {
        let mut buf = [0u8; 3];
        assert_eq!(format_u8(0, &mut buf), b"0");
        assert_eq!(format_u8(9, &mut buf), b"9");
        assert_eq!(format_u8(10, &mut buf), b"10");
        assert_eq!(format_u8(99, &mut buf), b"99");
        assert_eq!(format_u8(100, &mut buf), b"100");
        assert_eq!(format_u8(255, &mut buf), b"255");
    }
}
