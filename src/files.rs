//! File-path import and export (`std` only).
//!
//! Thin wrappers over the slice-based codec: the whole file is read into
//! memory, then parsed. I/O failures surface as [`PnmError::Io`].

use std::fs;
use std::path::Path;

use enough::Unstoppable;

use crate::error::PnmError;
use crate::image::{AnyImage, BinaryImage, ColorImage, GreyImage};
use crate::pnm;

/// Import a plain PNM file, dispatching on its magic number.
pub fn import(path: impl AsRef<Path>) -> Result<AnyImage, PnmError> {
    let data = fs::read(path)?;
    pnm::decode(&data, &Unstoppable)
}

/// Import a plain PGM (`P2`) file as a greyscale image.
pub fn import_pgm(path: impl AsRef<Path>) -> Result<GreyImage, PnmError> {
    let data = fs::read(path)?;
    pnm::decode_pgm(&data, &Unstoppable)
}

/// Import a plain PPM (`P3`) file as a color image.
pub fn import_ppm(path: impl AsRef<Path>) -> Result<ColorImage, PnmError> {
    let data = fs::read(path)?;
    pnm::decode_ppm(&data, &Unstoppable)
}

/// Export a greyscale image as a plain PGM file.
pub fn export_pgm(path: impl AsRef<Path>, image: &GreyImage) -> Result<(), PnmError> {
    let bytes = pnm::encode_pgm(image, &Unstoppable)?;
    fs::write(path, bytes)?;
    Ok(())
}

/// Export a color image as a plain PPM file.
pub fn export_ppm(path: impl AsRef<Path>, image: &ColorImage) -> Result<(), PnmError> {
    let bytes = pnm::encode_ppm(image, &Unstoppable)?;
    fs::write(path, bytes)?;
    Ok(())
}

/// Export a bilevel image as a plain PGM file (0/1 expanded to 0/255).
pub fn export_binary_pgm(path: impl AsRef<Path>, image: &BinaryImage) -> Result<(), PnmError> {
    let bytes = pnm::encode_binary_pgm(image, &Unstoppable)?;
    fs::write(path, bytes)?;
    Ok(())
}
