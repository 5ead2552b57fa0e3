//! Conversions between packed `0x00RRGGBB` pixels and byte buffers.

/// Expands packed pixels into an RGBA8 buffer with opaque alpha.
///
/// The buffer length is `pixels.len() * 4`. Bits above the blue, green, and
/// red bytes are ignored.
pub fn packed_to_rgba(pixels: &[u32]) -> Vec<u8> {
    pixels
        .iter()
        .flat_map(|&p| {
            let r = (p >> 16 & 0xFF) as u8;
            let g = (p >> 8 & 0xFF) as u8;
            let b = (p & 0xFF) as u8;
            [r, g, b, 255u8]
        })
        .collect()
}

/// Packs one RGB8 triple into `0x00RRGGBB`.
#[inline]
pub fn pack_rgb([r, g, b]: [u8; 3]) -> u32 {
    (r as u32) << 16 | (g as u32) << 8 | b as u32
}
