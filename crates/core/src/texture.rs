//! Source textures with power-of-two dimensions and toroidal sampling.
//!
//! A `Texture` stores `width * height` packed `0x00RRGGBB` texels in
//! row-major order. Sampling masks coordinates with `width - 1` and
//! `height - 1`, so negative and overflowing indices wrap around. The
//! masks are only correct for power-of-two sizes, which construction checks.

use crate::error::EngineError;

/// A read-only texel buffer with power-of-two width and height.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Texture {
    width: usize,
    height: usize,
    pixels: Vec<u32>,
}

impl Texture {
    /// Creates a texture from pre-built row-major texels.
    ///
    /// Returns `EngineError::InvalidDimensions` if either dimension is zero
    /// or the product overflows, `EngineError::NotPowerOfTwo` if either is
    /// not a power of two, and `EngineError::DimensionMismatch` if
    /// `pixels.len() != width * height`.
    pub fn from_pixels(width: usize, height: usize, pixels: Vec<u32>) -> Result<Self, EngineError> {
        let expected = checked_len(width, height)?;
        if pixels.len() != expected {
            return Err(EngineError::DimensionMismatch {
                lhs_w: width,
                lhs_h: height,
                rhs_w: pixels.len(),
                rhs_h: 1,
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Creates a texture with every texel set to `color`.
    pub fn filled(width: usize, height: usize, color: u32) -> Result<Self, EngineError> {
        let len = checked_len(width, height)?;
        Ok(Self {
            width,
            height,
            pixels: vec![color; len],
        })
    }

    /// Creates a texture by evaluating `f(x, y)` for every texel in row-major order.
    pub fn from_fn(
        width: usize,
        height: usize,
        mut f: impl FnMut(usize, usize) -> u32,
    ) -> Result<Self, EngineError> {
        let len = checked_len(width, height)?;
        let mut pixels = Vec::with_capacity(len);
        for y in 0..height {
            for x in 0..width {
                pixels.push(f(x, y));
            }
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Texture width in texels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Texture height in texels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Read-only access to the row-major texels.
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Reads the texel at `(u, v)` with wraparound addressing.
    ///
    /// Any `i32` is accepted: the coordinate is reinterpreted as two's
    /// complement and masked, so `-1` maps to the last column or row.
    #[inline]
    pub fn sample(&self, u: i32, v: i32) -> u32 {
        let x = (u as usize) & (self.width - 1);
        let y = (v as usize) & (self.height - 1);
        self.pixels[self.width * y + x]
    }
}

fn checked_len(width: usize, height: usize) -> Result<usize, EngineError> {
    if width == 0 || height == 0 {
        return Err(EngineError::InvalidDimensions);
    }
    if !width.is_power_of_two() || !height.is_power_of_two() {
        return Err(EngineError::NotPowerOfTwo { width, height });
    }
    width
        .checked_mul(height)
        .ok_or(EngineError::InvalidDimensions)
}
