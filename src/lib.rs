//! # plainpnm
//!
//! Plain-text (ASCII) PGM/PPM netpbm codec with typed pixel and image
//! containers.
//!
//! ## Data model
//!
//! Four pixel variants — [`ColorPixel`] (RGB), [`GreyPixel`], [`BinaryPixel`]
//! (0/1 bilevel), and [`HsvPixel`] — each held in a generic [`Image`]
//! container: one contiguous row-major buffer sized exactly
//! `height * width`, with dimensions fixed at construction. Constructors
//! validate channel ranges ([`PnmError::InvalidPixelValue`]) and dimensions
//! ([`PnmError::InvalidDimensions`]).
//!
//! ## Supported formats
//!
//! - **P2** (PGM plain) — greyscale, decoded to/encoded from [`GreyImage`]
//! - **P3** (PPM plain) — RGB, decoded to/encoded from [`ColorImage`]
//!
//! Bilevel images can be written as PGM with [`pnm::encode_binary_pgm`]
//! (0/1 expanded to 0/255); no magic number produces a [`BinaryImage`] or
//! [`HsvImage`] on import — those are populated by direct construction.
//!
//! ## Non-goals
//!
//! - Raw binary netpbm variants (P4/P5/P6) and PAM/PFM
//! - Maxval rescaling (samples are validated against maxval, never scaled)
//! - Image processing (this crate is the read/write/allocate contract only)
//!
//! ## Usage
//!
//! ```
//! use enough::Unstoppable;
//! use plainpnm::{pnm, ColorImage, ColorPixel};
//!
//! let image = ColorImage::from_fn(2, 2, |row, col| ColorPixel {
//!     r: (row * 100) as u8,
//!     g: (col * 100) as u8,
//!     b: 0,
//! })?;
//!
//! let text = pnm::encode_ppm(&image, &Unstoppable)?;
//! let back = pnm::decode_ppm(&text, &Unstoppable)?;
//! assert_eq!(back, image);
//! # Ok::<(), plainpnm::PnmError>(())
//! ```
//!
//! With the `std` feature (default), [`import`] and the `export_*`
//! functions work on file paths directly.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod error;
mod image;
mod info;
mod limits;
mod pixel;

pub mod pnm;

#[cfg(feature = "std")]
mod files;

// Re-exports
pub use enough::{Stop, Unstoppable};
pub use error::PnmError;
pub use image::{AnyImage, BinaryImage, ColorImage, GreyImage, HsvImage, Image};
pub use info::ImageInfo;
pub use limits::Limits;
pub use pixel::{BinaryPixel, ColorPixel, GreyPixel, HsvPixel, Pixel};
pub use pnm::{DecodeRequest, PnmFormat};

#[cfg(feature = "std")]
pub use files::{export_binary_pgm, export_pgm, export_ppm, import, import_pgm, import_ppm};
