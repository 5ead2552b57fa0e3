//! PNG snapshots of a published frame.
//!
//! The pixel buffer conversion itself lives in [`crate::pixel`].

use texdeform_core::error::EngineError;
use std::path::Path;

use crate::pixel::packed_to_rgba;

/// Writes a `width x height` frame of packed pixels as a PNG image.
///
/// Returns `EngineError::DimensionMismatch` if `pixels.len() != width * height`,
/// `EngineError::InvalidDimensions` if the dimensions overflow `u32`, or
/// `EngineError::Io` on write failure.
pub fn write_png(pixels: &[u32], width: usize, height: usize, path: &Path) -> Result<(), EngineError> {
    if width.checked_mul(height) != Some(pixels.len()) {
        return Err(EngineError::DimensionMismatch {
            lhs_w: width,
            lhs_h: height,
            rhs_w: pixels.len(),
            rhs_h: 1,
        });
    }
    let w = u32::try_from(width).map_err(|_| EngineError::InvalidDimensions)?;
    let h = u32::try_from(height).map_err(|_| EngineError::InvalidDimensions)?;
    let img = image::RgbaImage::from_raw(w, h, packed_to_rgba(pixels))
        .ok_or_else(|| EngineError::Io("RGBA buffer size mismatch".into()))?;
    img.save(path).map_err(|e| EngineError::Io(e.to_string()))?;
    tracing::debug!(path = %path.display(), width, height, "wrote png snapshot");
    Ok(())
}
