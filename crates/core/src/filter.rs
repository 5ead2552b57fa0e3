//! Smoothing passes applied to a rendered frame before it is published.
//!
//! A [`Smoothing`] reads a packed-RGB raster and writes a smoothed copy into
//! a caller-owned destination, so the generator can reuse its buffers
//! across ticks instead of allocating a new frame each time.

use crate::color::Rgb;

/// A smoothing pass over a row-major packed-RGB raster.
///
/// `offset_x` and `offset_y` select the kernel reach in each direction;
/// `width` is the raster row length. A trailing partial row is allowed.
/// Implementations write exactly `src.len()` pixels into `dst`.
pub trait Smoothing: Send + Sync {
    fn apply(&self, offset_x: usize, offset_y: usize, src: &[u32], width: usize, dst: &mut [u32]);
}

/// Cross-shaped box filter.
///
/// Each output pixel is the per-channel integer mean of the source pixel and
/// its neighbours `offset_x` columns left/right and `offset_y` rows up/down.
/// Neighbour coordinates are clamped to the raster edge. An offset of zero
/// contributes no neighbours on that axis, so `(0, 0)` copies the input.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoxFilter;

impl Smoothing for BoxFilter {
    fn apply(&self, offset_x: usize, offset_y: usize, src: &[u32], width: usize, dst: &mut [u32]) {
        if width == 0 || src.is_empty() {
            return;
        }
        let len = src.len().min(dst.len());

        for (idx, out) in dst.iter_mut().enumerate().take(len) {
            let x = idx % width;
            let y = idx / width;
            let row_start = y * width;
            let row_last = (row_start + width).min(src.len()) - 1;
            // last row that still has a pixel in column x
            let col_last = (src.len() - 1 - x) / width;

            let mut taps = Taps::default();
            taps.add(src[idx]);
            if offset_x > 0 {
                taps.add(src[row_start + x.saturating_sub(offset_x)]);
                taps.add(src[(idx + offset_x).min(row_last)]);
            }
            if offset_y > 0 {
                taps.add(src[y.saturating_sub(offset_y) * width + x]);
                taps.add(src[(y + offset_y).min(col_last) * width + x]);
            }
            *out = taps.mean();
        }
    }
}

/// Copies the frame unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSmoothing;

impl Smoothing for NoSmoothing {
    fn apply(&self, _offset_x: usize, _offset_y: usize, src: &[u32], _width: usize, dst: &mut [u32]) {
        let len = src.len().min(dst.len());
        dst[..len].copy_from_slice(&src[..len]);
    }
}

/// Per-channel accumulator for one kernel evaluation.
#[derive(Default)]
struct Taps {
    r: u32,
    g: u32,
    b: u32,
    count: u32,
}

impl Taps {
    fn add(&mut self, color: u32) {
        let c = Rgb::from_packed(color);
        self.r += c.r as u32;
        self.g += c.g as u32;
        self.b += c.b as u32;
        self.count += 1;
    }

    fn mean(&self) -> u32 {
        Rgb {
            r: (self.r / self.count) as u8,
            g: (self.g / self.count) as u8,
            b: (self.b / self.count) as u8,
        }
        .to_packed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn smooth(f: &dyn Smoothing, ox: usize, oy: usize, src: &[u32], width: usize) -> Vec<u32> {
        let mut dst = vec![0; src.len()];
        f.apply(ox, oy, src, width, &mut dst);
        dst
    }

    #[test]
    fn zero_offsets_copy_input() {
        let src = [0x102030, 0x405060, 0x708090, 0xA0B0C0];
        assert_eq!(smooth(&BoxFilter, 0, 0, &src, 2), src);
    }

    #[test]
    fn uniform_frame_is_unchanged() {
        let src = vec![0x336699; 16];
        assert_eq!(smooth(&BoxFilter, 0, 1, &src, 4), src);
        assert_eq!(smooth(&BoxFilter, 2, 3, &src, 4), src);
    }

    #[test]
    fn vertical_offset_averages_rows() {
        // single column, three rows: 0, 30, 90 (blue channel only)
        let src = [0, 30, 90];
        let out = smooth(&BoxFilter, 0, 1, &src, 1);
        // row 0: (0 + 0 + 30) / 3, top neighbour clamped to itself
        assert_eq!(out[0], 10);
        assert_eq!(out[1], 40);
        // row 2: (30 + 90 + 90) / 3
        assert_eq!(out[2], 70);
    }

    #[test]
    fn vertical_offset_leaves_rows_independent_columns() {
        // 2 columns; left column all 0, right column all 0xFF
        let src = [0, 0xFF, 0, 0xFF, 0, 0xFF];
        let out = smooth(&BoxFilter, 0, 1, &src, 2);
        assert_eq!(out, src);
    }

    #[test]
    fn horizontal_offset_averages_columns() {
        let src = [0x00_00_00, 0x00_00_60, 0x00_00_00];
        let out = smooth(&BoxFilter, 1, 0, &src, 3);
        assert_eq!(out, [0x20, 0x20, 0x20]);
    }

    #[test]
    fn channels_are_averaged_independently() {
        let src = [0xFF_00_00, 0x00_FF_00, 0x00_00_FF];
        let out = smooth(&BoxFilter, 0, 1, &src, 1);
        assert_eq!(Rgb::from_packed(out[1]), Rgb::new(0x55, 0x55, 0x55));
    }

    #[test]
    fn empty_frame_is_a_no_op() {
        let mut dst: Vec<u32> = Vec::new();
        BoxFilter.apply(0, 1, &[], 4, &mut dst);
        assert!(dst.is_empty());
    }

    #[test]
    fn frame_shorter_than_one_row_is_smoothed_within_itself() {
        let src = [3, 6, 9];
        assert_eq!(smooth(&BoxFilter, 0, 1, &src, 4), src);
        // right neighbour of the last pixel clamps to the end of the frame
        assert_eq!(smooth(&BoxFilter, 1, 0, &src, 4), [4, 6, 8]);
    }

    #[test]
    fn partial_last_row_clamps_per_column() {
        // width 2: rows [0, 60], [30, _]
        let src = [0, 60, 30];
        let out = smooth(&BoxFilter, 0, 1, &src, 2);
        assert_eq!(out, [10, 60, 20]);
    }

    #[test]
    fn no_smoothing_copies_input() {
        let src = [1, 2, 3, 4, 5, 6];
        assert_eq!(smooth(&NoSmoothing, 3, 3, &src, 3), src);
    }
}
