//! The twelve warp styles: closed-form maps from device space to texture space.
//!
//! Every style takes a normalized device coordinate `(x, y)` in `[-1, 1]` and
//! returns a normalized texture coordinate `(u, v)` plus a brightness delta.
//! The texture coordinate is not bounded; the LUT builder wraps it.
//! Several styles are singular at the origin or along an axis and produce
//! infinities or NaN there, which the LUT's saturating casts absorb.

use std::f32::consts::PI;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use texdeform_core::error::EngineError;
use texdeform_core::params::{param_i64, param_str};

use crate::DEFAULT_STYLE;

/// Output of a single warp evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Warp {
    /// Horizontal texture coordinate, one texture width per unit.
    pub u: f32,
    /// Vertical texture coordinate, one texture height per unit.
    pub v: f32,
    /// Brightness delta added to each color channel.
    pub bright: f32,
}

impl Warp {
    fn new(u: f32, v: f32, bright: f32) -> Self {
        Self { u, v, bright }
    }
}

/// A coordinate-transform style.
///
/// Numeric ids (0–11) exist for configuration compatibility; use
/// [`WarpStyle::from_id`] at that boundary and the enum everywhere else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WarpStyle {
    /// Texture shown as-is.
    #[default]
    Passthrough,
    /// Stereographic projection / anamorphosis.
    Stereographic,
    /// Hypnotic rainbow spiral.
    RainbowSpiral,
    /// Rotating tunnel, darkening toward the vanishing point.
    RotatingTunnel,
    /// Wavy star-burst.
    WavyStarburst,
    /// Hyperspace travel.
    Hyperspace,
    /// Five-point magnetic flare.
    MagneticFlare,
    /// Cloud-like dream scroll.
    CloudScroll,
    /// Floor and ceiling fading to a dark horizon.
    FloorCeiling,
    /// Hot magma liquid swirl.
    MagmaSwirl,
    /// Clockwise flush down the toilet.
    ToiletFlush,
    /// Lit 3D ball.
    Ball3d,
}

impl WarpStyle {
    /// All styles in id order.
    pub const ALL: [WarpStyle; 12] = [
        WarpStyle::Passthrough,
        WarpStyle::Stereographic,
        WarpStyle::RainbowSpiral,
        WarpStyle::RotatingTunnel,
        WarpStyle::WavyStarburst,
        WarpStyle::Hyperspace,
        WarpStyle::MagneticFlare,
        WarpStyle::CloudScroll,
        WarpStyle::FloorCeiling,
        WarpStyle::MagmaSwirl,
        WarpStyle::ToiletFlush,
        WarpStyle::Ball3d,
    ];

    /// Maps a numeric style id to a style. Ids outside `0..=11` are
    /// treated as [`WarpStyle::Passthrough`].
    pub fn from_id(id: i64) -> Self {
        usize::try_from(id)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
            .unwrap_or(WarpStyle::Passthrough)
    }

    /// The numeric id of this style.
    pub fn id(self) -> u8 {
        self as u8
    }

    /// Kebab-case name, matching the serde representation.
    pub fn name(self) -> &'static str {
        match self {
            WarpStyle::Passthrough => "passthrough",
            WarpStyle::Stereographic => "stereographic",
            WarpStyle::RainbowSpiral => "rainbow-spiral",
            WarpStyle::RotatingTunnel => "rotating-tunnel",
            WarpStyle::WavyStarburst => "wavy-starburst",
            WarpStyle::Hyperspace => "hyperspace",
            WarpStyle::MagneticFlare => "magnetic-flare",
            WarpStyle::CloudScroll => "cloud-scroll",
            WarpStyle::FloorCeiling => "floor-ceiling",
            WarpStyle::MagmaSwirl => "magma-swirl",
            WarpStyle::ToiletFlush => "toilet-flush",
            WarpStyle::Ball3d => "ball3d",
        }
    }

    /// Looks up a style by its kebab-case name (case insensitive).
    ///
    /// Returns `EngineError::UnknownStyle` if no style has that name.
    pub fn from_name(name: &str) -> Result<Self, EngineError> {
        Self::ALL
            .iter()
            .copied()
            .find(|s| s.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| EngineError::UnknownStyle(name.to_string()))
    }

    /// Reads `"style"` from a JSON params object.
    ///
    /// The value may be a numeric id (out-of-range ids select
    /// [`WarpStyle::Passthrough`]) or a style name. A missing style falls
    /// back to [`DEFAULT_STYLE`]; an unrecognized name is an error.
    pub fn from_params(params: &Value) -> Result<Self, EngineError> {
        match param_str(params, "style") {
            Some(name) => name.parse(),
            None => Ok(Self::from_id(param_i64(
                params,
                "style",
                DEFAULT_STYLE.id() as i64,
            ))),
        }
    }

    /// Returns the names of all styles in id order.
    pub fn list_names() -> Vec<&'static str> {
        Self::ALL.iter().map(|s| s.name()).collect()
    }

    /// Evaluates this style at device coordinate `(x, y)`.
    pub fn warp(self, x: f32, y: f32) -> Warp {
        let r = (x * x + y * y).sqrt();
        let a = y.atan2(x);

        match self {
            WarpStyle::Passthrough => Warp::new(x, y, 0.0),
            WarpStyle::Stereographic => Warp::new(
                a.cos() / r,
                a.sin() / r,
                -10.0 * (2.0 / (6.0 * r + 3.0 * x)),
            ),
            WarpStyle::RainbowSpiral => {
                let phase = a + (3.0 * r).cos();
                let falloff = r.powf(0.2);
                Warp::new(phase.cos() / falloff, phase.sin() / falloff, 1.0)
            }
            WarpStyle::RotatingTunnel => {
                let v = 2.0 / (6.0 * r + 3.0 * x);
                Warp::new(a * 3.0 / PI, v, 15.0 * -v)
            }
            WarpStyle::WavyStarburst => Warp::new(
                0.5 + 0.5 * a / PI,
                -0.4 / r + 0.1 * (8.0 * a).sin(),
                0.0,
            ),
            WarpStyle::Hyperspace => {
                let k = 0.02 * y + 0.03;
                Warp::new(k * (3.0 * a).cos() / r, k * (3.0 * a).sin() / r, 0.0)
            }
            WarpStyle::MagneticFlare => Warp::new(
                a * 3.0 / PI,
                1.0 / (r + 0.5 + 0.5 * (5.0 * a).sin()),
                0.0,
            ),
            WarpStyle::CloudScroll => {
                let scale = 0.11 + 0.5 * r;
                Warp::new(0.1 * x / scale, 0.1 * y / scale, 0.0)
            }
            WarpStyle::FloorCeiling => {
                let v = 1.0 / y.abs();
                Warp::new(x / y.abs(), v, 10.0 * -v)
            }
            WarpStyle::MagmaSwirl => Warp::new(0.5 * a / PI, (2.0 * r).sin(), 0.0),
            WarpStyle::ToiletFlush => Warp::new(a / PI + r, r.powf(0.1), 0.0),
            WarpStyle::Ball3d => {
                let r2 = r * r;
                let depth = (4.0 - 5.0 * r2).sqrt();
                Warp::new(
                    y * (3.0 - depth) / (r2 + 1.0),
                    x * (3.0 - depth) / (r2 + 1.0),
                    7.0 * -18.7 * (x + y + r2 - (x + y - 1.0) * depth / 3.0) / (r2 + 1.0),
                )
            }
        }
    }
}

impl fmt::Display for WarpStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parses either a numeric id (`"9"`) or a style name (`"magma-swirl"`).
impl FromStr for WarpStyle {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.parse::<i64>() {
            Ok(id) => Ok(WarpStyle::from_id(id)),
            Err(_) => WarpStyle::from_name(s),
        }
    }
}
