//! Packed 8-bit RGB colors and the brightness adjustment applied by warp styles.
//!
//! Texels and output pixels are stored as `u32` values laid out `0x00RRGGBB`.
//! Channel math works on `i32` so a brightness delta can push a channel
//! outside `[0, 255]` before it is clamped back.

/// An 8-bit-per-channel RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Splits a packed `0x00RRGGBB` value into channels. Bits above 23 are ignored.
    pub fn from_packed(color: u32) -> Self {
        Self {
            r: (color >> 16 & 0xFF) as u8,
            g: (color >> 8 & 0xFF) as u8,
            b: (color & 0xFF) as u8,
        }
    }

    /// Packs the channels into `0x00RRGGBB`.
    pub fn to_packed(self) -> u32 {
        (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }
}

/// Adds `delta` to a single channel and clamps the result to `[0, 255]`.
pub fn shift_channel(channel: u8, delta: i32) -> u8 {
    (channel as i32).saturating_add(delta).clamp(0, 255) as u8
}

/// Brightens (positive `delta`) or darkens (negative `delta`) a packed color.
///
/// Each channel is shifted and clamped independently, and the result is
/// repacked without alpha. A zero delta is not special-cased here; callers
/// that want to preserve the input bit-for-bit skip the call instead.
pub fn adjust_brightness(color: u32, delta: i32) -> u32 {
    let c = Rgb::from_packed(color);
    Rgb {
        r: shift_channel(c.r, delta),
        g: shift_channel(c.g, delta),
        b: shift_channel(c.b, delta),
    }
    .to_packed()
}
