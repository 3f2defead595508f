//! Plain PNM decoder: P2 (PGM), P3 (PPM).
//!
//! The grammar is a token stream: a two-character magic number, then
//! width, height, and maxval, then `width * height * channels` integer
//! samples. Whitespace runs and `#`-to-end-of-line comments separate
//! tokens and may appear between any two of them.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use enough::Stop;

use super::{PnmFormat, PnmHeader};
use crate::error::PnmError;
use crate::image::{AnyImage, ColorImage, GreyImage};
use crate::limits::Limits;
use crate::pixel::{ColorPixel, GreyPixel};

/// Samples between cancellation polls.
const STOP_INTERVAL: usize = 4096;

/// Decode a plain PNM stream, dispatching on the magic number.
///
/// `P2` yields [`AnyImage::Grey`], `P3` yields [`AnyImage::Color`]. Trailing
/// bytes after the final sample are ignored.
pub fn decode(data: &[u8], stop: &dyn Stop) -> Result<AnyImage, PnmError> {
    DecodeRequest::new(data).decode(stop)
}

/// Decode a plain PGM (`P2`) stream into a greyscale image.
pub fn decode_pgm(data: &[u8], stop: &dyn Stop) -> Result<GreyImage, PnmError> {
    DecodeRequest::new(data).decode_pgm(stop)
}

/// Decode a plain PPM (`P3`) stream into a color image.
pub fn decode_ppm(data: &[u8], stop: &dyn Stop) -> Result<ColorImage, PnmError> {
    DecodeRequest::new(data).decode_ppm(stop)
}

/// A decode operation with optional resource limits.
#[derive(Clone, Debug)]
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    limits: Option<&'a Limits>,
}

impl<'a> DecodeRequest<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, limits: None }
    }

    /// Reject images whose header exceeds `limits` before any pixel
    /// allocation happens.
    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Decode whichever of P2/P3 the stream declares.
    pub fn decode(&self, stop: &dyn Stop) -> Result<AnyImage, PnmError> {
        let (header, tokens) = parse_header(self.data)?;
        match header.format {
            PnmFormat::Pgm => Ok(AnyImage::Grey(self.grey_body(&header, tokens, stop)?)),
            PnmFormat::Ppm => Ok(AnyImage::Color(self.color_body(&header, tokens, stop)?)),
        }
    }

    /// Decode, requiring the stream to be a P2 greyscale image.
    pub fn decode_pgm(&self, stop: &dyn Stop) -> Result<GreyImage, PnmError> {
        let (header, tokens) = parse_header(self.data)?;
        if header.format != PnmFormat::Pgm {
            return Err(unexpected_magic(PnmFormat::Pgm, header.format));
        }
        self.grey_body(&header, tokens, stop)
    }

    /// Decode, requiring the stream to be a P3 color image.
    pub fn decode_ppm(&self, stop: &dyn Stop) -> Result<ColorImage, PnmError> {
        let (header, tokens) = parse_header(self.data)?;
        if header.format != PnmFormat::Ppm {
            return Err(unexpected_magic(PnmFormat::Ppm, header.format));
        }
        self.color_body(&header, tokens, stop)
    }

    fn grey_body(
        &self,
        header: &PnmHeader,
        tokens: TokenReader<'a>,
        stop: &dyn Stop,
    ) -> Result<GreyImage, PnmError> {
        let samples = self.read_body(header, tokens, stop)?;
        let pixels: Vec<GreyPixel> = samples
            .into_iter()
            .map(|value| GreyPixel { value })
            .collect();
        GreyImage::from_raw(header.height, header.width, pixels)
    }

    fn color_body(
        &self,
        header: &PnmHeader,
        tokens: TokenReader<'a>,
        stop: &dyn Stop,
    ) -> Result<ColorImage, PnmError> {
        let samples = self.read_body(header, tokens, stop)?;
        let pixels: Vec<ColorPixel> = samples
            .chunks_exact(3)
            .map(|c| ColorPixel {
                r: c[0],
                g: c[1],
                b: c[2],
            })
            .collect();
        ColorImage::from_raw(header.height, header.width, pixels)
    }

    /// Check limits, then read the full sample stream.
    ///
    /// Allocation happens only here, after the header has validated; on any
    /// sample failure the partial buffer is dropped before the error
    /// propagates.
    fn read_body(
        &self,
        header: &PnmHeader,
        mut tokens: TokenReader<'a>,
        stop: &dyn Stop,
    ) -> Result<Vec<u8>, PnmError> {
        if let Some(limits) = self.limits {
            limits.check(header.width, header.height)?;
        }
        stop.check()?;

        let expected = (header.width as usize)
            .checked_mul(header.height as usize)
            .and_then(|wh| wh.checked_mul(header.format.channels()))
            .ok_or(PnmError::DimensionsTooLarge {
                width: header.width,
                height: header.height,
            })?;

        let mut samples = Vec::with_capacity(expected);
        for i in 0..expected {
            if i % STOP_INTERVAL == 0 {
                stop.check()?;
            }
            let value = tokens.next_unsigned().map_err(|e| match e {
                TokenError::Eof => PnmError::TruncatedInput { expected, got: i },
                TokenError::NonNumeric(tok) => {
                    PnmError::MalformedPixelData(format!("sample {i} is not a number: {tok:?}"))
                }
                TokenError::Overflow => {
                    PnmError::MalformedPixelData(format!("sample {i} does not fit in 32 bits"))
                }
            })?;
            if value > u32::from(header.maxval) {
                return Err(PnmError::MalformedPixelData(format!(
                    "sample value {value} exceeds maxval {}",
                    header.maxval
                )));
            }
            samples.push(value as u8);
        }
        Ok(samples)
    }
}

fn unexpected_magic(wanted: PnmFormat, got: PnmFormat) -> PnmError {
    PnmError::UnsupportedFormat(format!(
        "expected {}, got {}",
        wanted.magic(),
        got.magic()
    ))
}

/// Parse magic, width, height, and maxval. Returns the header and a reader
/// positioned at the first sample.
pub(crate) fn parse_header(data: &[u8]) -> Result<(PnmHeader, TokenReader<'_>), PnmError> {
    let mut tokens = TokenReader::new(data);

    // Filler (including comment lines) is tolerated before the magic too.
    tokens.skip_filler();
    let magic = tokens.take_magic()?;
    let format = match magic {
        [b'P', b'2'] => PnmFormat::Pgm,
        [b'P', b'3'] => PnmFormat::Ppm,
        _ => {
            return Err(PnmError::UnsupportedFormat(magic_to_string(magic)));
        }
    };

    let width = tokens.header_field("width")?;
    let height = tokens.header_field("height")?;
    if width == 0 {
        return Err(PnmError::MalformedHeader(String::from(
            "width must be positive",
        )));
    }
    if height == 0 {
        return Err(PnmError::MalformedHeader(String::from(
            "height must be positive",
        )));
    }

    let maxval = tokens.header_field("maxval")?;
    if maxval == 0 || maxval > 255 {
        return Err(PnmError::UnsupportedMaxval(maxval));
    }

    let header = PnmHeader {
        format,
        width,
        height,
        maxval: maxval as u8,
    };
    Ok((header, tokens))
}

fn magic_to_string(magic: [u8; 2]) -> String {
    magic.iter().map(|&b| b as char).collect()
}

enum TokenError {
    Eof,
    NonNumeric(String),
    Overflow,
}

fn is_pnm_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r' | b'\n' | 0x0b | 0x0c)
}

/// Cursor over the input that hands out whitespace-delimited tokens,
/// skipping comments.
#[derive(Debug)]
pub(crate) struct TokenReader<'a> {
    rest: &'a [u8],
}

impl<'a> TokenReader<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { rest: data }
    }

    /// Skip whitespace runs and `#` comments, repeatedly, until the next
    /// token byte or end of input.
    fn skip_filler(&mut self) {
        loop {
            match self.rest.first() {
                Some(&b) if is_pnm_whitespace(b) => {
                    self.rest = &self.rest[1..];
                }
                Some(b'#') => {
                    let end = self
                        .rest
                        .iter()
                        .position(|&b| b == b'\n')
                        .map(|p| p + 1)
                        .unwrap_or(self.rest.len());
                    self.rest = &self.rest[end..];
                }
                _ => return,
            }
        }
    }

    /// Read the two-character magic number.
    fn take_magic(&mut self) -> Result<[u8; 2], PnmError> {
        match self.rest {
            [a, b, rest @ ..] => {
                let magic = [*a, *b];
                self.rest = rest;
                Ok(magic)
            }
            short => Err(PnmError::UnsupportedFormat(magic_to_string(match short {
                [a] => [*a, b' '],
                _ => [b' ', b' '],
            }))),
        }
    }

    /// Next whitespace-delimited token, after filler.
    fn next_token(&mut self) -> Option<&'a [u8]> {
        self.skip_filler();
        if self.rest.is_empty() {
            return None;
        }
        let end = self
            .rest
            .iter()
            .position(|&b| is_pnm_whitespace(b))
            .unwrap_or(self.rest.len());
        let (token, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(token)
    }

    /// Next token parsed as an unsigned decimal integer.
    fn next_unsigned(&mut self) -> Result<u32, TokenError> {
        let token = self.next_token().ok_or(TokenError::Eof)?;
        if token.iter().any(|b| !b.is_ascii_digit()) {
            return Err(TokenError::NonNumeric(
                token.iter().map(|&b| b as char).collect(),
            ));
        }
        let mut value: u64 = 0;
        for &b in token {
            value = value * 10 + u64::from(b - b'0');
            if value > u64::from(u32::MAX) {
                return Err(TokenError::Overflow);
            }
        }
        Ok(value as u32)
    }

    /// Header token: any failure is a malformed header.
    fn header_field(&mut self, name: &str) -> Result<u32, PnmError> {
        self.next_unsigned().map_err(|e| match e {
            TokenError::Eof => PnmError::MalformedHeader(format!("missing {name}")),
            TokenError::NonNumeric(tok) => {
                PnmError::MalformedHeader(format!("{name} is not a number: {tok:?}"))
            }
            TokenError::Overflow => {
                PnmError::MalformedHeader(format!("{name} does not fit in 32 bits"))
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reader(s: &str) -> TokenReader<'_> {
        TokenReader::new(s.as_bytes())
    }

    #[test]
    fn tokens_skip_whitespace_and_comments() {
        let mut t = reader("  12\t# comment to eol\n 34 #last\n56");
        assert_eq!(t.next_unsigned().ok(), Some(12));
        assert_eq!(t.next_unsigned().ok(), Some(34));
        assert_eq!(t.next_unsigned().ok(), Some(56));
        assert!(matches!(t.next_unsigned(), Err(TokenError::Eof)));
    }

    #[test]
    fn comment_without_trailing_newline_ends_input() {
        let mut t = reader("7 # trailing");
        assert_eq!(t.next_unsigned().ok(), Some(7));
        assert!(matches!(t.next_unsigned(), Err(TokenError::Eof)));
    }

    #[test]
    fn non_numeric_token_is_reported() {
        let mut t = reader("12a");
        assert!(matches!(t.next_unsigned(), Err(TokenError::NonNumeric(_))));
    }

    #[test]
    fn oversized_token_overflows() {
        let mut t = reader("99999999999");
        assert!(matches!(t.next_unsigned(), Err(TokenError::Overflow)));
    }

    #[test]
    fn header_rejects_zero_dimensions() {
        let err = parse_header(b"P2\n0 5\n255\n").unwrap_err();
        assert!(matches!(err, PnmError::MalformedHeader(_)));
    }

    #[test]
    fn header_rejects_negative_dimensions() {
        let err = parse_header(b"P2\n-3 5\n255\n").unwrap_err();
        assert!(matches!(err, PnmError::MalformedHeader(_)));
    }

    #[test]
    fn header_rejects_bad_maxval() {
        let err = parse_header(b"P2\n2 2\n0\n").unwrap_err();
        assert!(matches!(err, PnmError::UnsupportedMaxval(0)));
        let err = parse_header(b"P3\n2 2\n65535\n").unwrap_err();
        assert!(matches!(err, PnmError::UnsupportedMaxval(65535)));
    }

    #[test]
    fn header_rejects_unknown_magic() {
        let err = parse_header(b"P9\n2 2\n255\n").unwrap_err();
        match err {
            PnmError::UnsupportedFormat(s) => assert_eq!(s, "P9"),
            other => panic!("expected UnsupportedFormat, got {other:?}"),
        }
    }
}
