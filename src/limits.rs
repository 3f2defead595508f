use crate::error::PnmError;

/// Resource limits for decode operations.
///
/// All fields default to `None` (no limit). Checked after the header is
/// parsed, before any pixel buffer is allocated.
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Maximum pixel count (width * height).
    pub max_pixels: Option<u64>,
}

impl Limits {
    /// Check parsed dimensions against the limits.
    pub(crate) fn check(&self, width: u32, height: u32) -> Result<(), PnmError> {
        let pixels = u64::from(width) * u64::from(height);
        let checks = [
            ("width", u64::from(width), self.max_width),
            ("height", u64::from(height), self.max_height),
            ("pixel count", pixels, self.max_pixels),
        ];
        for (label, actual, cap) in checks {
            if let Some(cap) = cap {
                if actual > cap {
                    return Err(PnmError::LimitExceeded(alloc::format!(
                        "{label} {actual} exceeds limit {cap}"
                    )));
                }
            }
        }
        Ok(())
    }
}
