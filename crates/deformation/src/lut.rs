//! Per-pixel lookup table of texture coordinates and brightness deltas.
//!
//! The table is flattened: pixel `p` occupies `data[3p..3p + 3]` as
//! `(u, v, bright)`, in raster order (row-major, top to bottom).

use texdeform_core::error::EngineError;
use texdeform_core::raster_len;

use crate::warp::WarpStyle;

/// One pixel's precomputed texture coordinate and brightness delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LutEntry {
    /// Texel column in `[0, texture_width)`.
    pub u: i32,
    /// Texel row in `[0, texture_height)`.
    pub v: i32,
    /// Brightness delta, truncated toward zero.
    pub bright: i32,
}

/// Flattened `(u, v, bright)` table covering a whole raster.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lut {
    data: Vec<i32>,
}

impl Lut {
    /// Builds the table for a `width x height` raster warped by `style`
    /// against a `texture_width x texture_height` texture.
    ///
    /// Texture dimensions must be powers of two: indices are reduced with
    /// `& (size - 1)`, which is only a modulus for powers of two.
    /// Identical inputs always yield an identical table.
    ///
    /// Returns `EngineError::InvalidDimensions` if the raster is empty or
    /// the table cannot be allocated.
    pub fn build(
        width: usize,
        height: usize,
        style: WarpStyle,
        texture_width: usize,
        texture_height: usize,
    ) -> Result<Self, EngineError> {
        let entries = raster_len(width, height)? * 3;
        let mut data = Vec::new();
        data.try_reserve_exact(entries)
            .map_err(|_| EngineError::InvalidDimensions)?;

        let mut lut = Self { data };
        lut.refill(width, height, style, texture_width, texture_height);
        Ok(lut)
    }

    /// Recomputes the table in place, reusing the current allocation when
    /// the raster size is unchanged.
    pub(crate) fn refill(
        &mut self,
        width: usize,
        height: usize,
        style: WarpStyle,
        texture_width: usize,
        texture_height: usize,
    ) {
        self.data.clear();
        for j in 0..height {
            let y = -1.0 + 2.0 * j as f32 / height as f32;
            for i in 0..width {
                let x = -1.0 + 2.0 * i as f32 / width as f32;
                let w = style.warp(x, y);
                self.data.push(texel_index(w.u, texture_width));
                self.data.push(texel_index(w.v, texture_height));
                // saturating; NaN becomes 0
                self.data.push(w.bright as i32);
            }
        }
    }

    /// Flat length: three values per pixel.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the table covers no pixels.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of pixels covered.
    pub fn pixel_count(&self) -> usize {
        self.data.len() / 3
    }

    /// The entry for pixel `p`.
    ///
    /// # Panics
    ///
    /// Panics if `p >= self.pixel_count()`.
    pub fn entry(&self, p: usize) -> LutEntry {
        let o = 3 * p;
        LutEntry {
            u: self.data[o],
            v: self.data[o + 1],
            bright: self.data[o + 2],
        }
    }

    /// Iterates the entries in raster order.
    pub fn entries(&self) -> impl Iterator<Item = LutEntry> + '_ {
        self.data.chunks_exact(3).map(|c| LutEntry {
            u: c[0],
            v: c[1],
            bright: c[2],
        })
    }

    /// The raw flattened table.
    pub fn as_slice(&self) -> &[i32] {
        &self.data
    }
}

/// Scales a normalized coordinate to texels, floors it, and wraps it into
/// `[0, size)` with a power-of-two mask.
fn texel_index(coord: f32, size: usize) -> i32 {
    let mask = (size - 1) as i32;
    ((size as f32 * coord).floor() as i32) & mask
}
