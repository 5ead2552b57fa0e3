//! Error types for the texdeform core.

use thiserror::Error;

/// Errors produced by generator, texture, and loader operations.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Width or height was zero (or their product overflowed) when creating
    /// a raster or texture.
    #[error("invalid dimensions: width and height must be non-zero")]
    InvalidDimensions,

    /// A pixel buffer did not match the dimensions it was declared with.
    #[error("dimension mismatch: ({lhs_w}, {lhs_h}) vs ({rhs_w}, {rhs_h})")]
    DimensionMismatch {
        lhs_w: usize,
        lhs_h: usize,
        rhs_w: usize,
        rhs_h: usize,
    },

    /// Texture dimensions must be powers of two for wraparound addressing.
    #[error("texture dimensions must be powers of two, got {width}x{height}")]
    NotPowerOfTwo { width: usize, height: usize },

    /// A warp style name was not recognized.
    #[error("unknown warp style: {0}")]
    UnknownStyle(String),

    /// The image-loading capability could not produce a texture.
    #[error("failed to load texture '{locator}': {reason}")]
    ImageLoad { locator: String, reason: String },

    /// A preset file parsed but described an unusable configuration, or
    /// did not parse at all.
    #[error("invalid preset: {0}")]
    InvalidPreset(String),

    /// A file could not be read or written.
    #[error("i/o error: {0}")]
    Io(String),
}
