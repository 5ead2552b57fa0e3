#![deny(unsafe_code)]
//! Texture-deformation generator.
//!
//! Warps a source texture through one of twelve closed-form coordinate
//! transforms ([`WarpStyle`]) and animates the result by sliding the
//! sampled texture coordinates one texel per tick along both axes.
//!
//! The warp is evaluated once per pixel into a lookup table ([`Lut`]) when
//! the generator is built, when the style changes, and when the texture is
//! reloaded. Each tick only reads the table, samples the texture with
//! wraparound, applies the per-pixel brightness delta, and runs a vertical
//! box-filter pass before publishing the frame.

pub mod lut;
pub mod warp;

use std::sync::Arc;

use serde_json::{json, Value};
use texdeform_core::color::adjust_brightness;
use texdeform_core::error::EngineError;
use texdeform_core::filter::{BoxFilter, Smoothing};
use texdeform_core::texture::Texture;
use texdeform_core::{raster_len, Generator, TextureLoader};
use tracing::{debug, info, trace};

pub use lut::{Lut, LutEntry};
pub use warp::{Warp, WarpStyle};

/// Style used when no style is configured.
pub const DEFAULT_STYLE: WarpStyle = WarpStyle::MagmaSwirl;
/// Horizontal reach of the smoothing kernel.
const SMOOTHING_OFFSET_X: usize = 0;
/// Vertical reach of the smoothing kernel.
const SMOOTHING_OFFSET_Y: usize = 1;

/// Texture-deformation generator.
///
/// Owns the lookup table, a shared handle to the source texture, the
/// scratch and output frames, and the displacement counter. All mutation
/// goes through `&mut self`, so one instance is driven by one render loop.
pub struct TextureDeformation {
    width: usize,
    height: usize,
    texture: Arc<Texture>,
    style: WarpStyle,
    lut: Lut,
    scratch: Vec<u32>,
    output: Vec<u32>,
    displacement: u64,
    smoothing: Box<dyn Smoothing>,
    closed: bool,
}

impl TextureDeformation {
    /// Creates a generator for a `width x height` raster that smooths each
    /// frame with a [`BoxFilter`].
    ///
    /// Returns `EngineError::InvalidDimensions` if width or height is zero,
    /// or if the raster is too large for its buffers to be allocated.
    pub fn new(
        width: usize,
        height: usize,
        texture: Arc<Texture>,
        style: WarpStyle,
    ) -> Result<Self, EngineError> {
        Self::with_smoothing(width, height, texture, style, Box::new(BoxFilter))
    }

    /// Creates a generator with a caller-supplied smoothing pass.
    pub fn with_smoothing(
        width: usize,
        height: usize,
        texture: Arc<Texture>,
        style: WarpStyle,
        smoothing: Box<dyn Smoothing>,
    ) -> Result<Self, EngineError> {
        let len = raster_len(width, height)?;
        let lut = Lut::build(width, height, style, texture.width(), texture.height())?;
        let scratch = zeroed_frame(len)?;
        let output = zeroed_frame(len)?;
        debug!(
            style = %style,
            width,
            height,
            texture_width = texture.width(),
            texture_height = texture.height(),
            "built deformation lut"
        );

        Ok(Self {
            width,
            height,
            texture,
            style,
            lut,
            scratch,
            output,
            displacement: 0,
            smoothing,
            closed: false,
        })
    }

    /// Creates a generator whose texture is resolved through `loader`.
    ///
    /// A loader failure is returned unchanged; there is no fallback texture.
    /// Use [`WarpStyle::from_params`] to take the style from a JSON params
    /// object.
    pub fn load(
        width: usize,
        height: usize,
        loader: &dyn TextureLoader,
        locator: &str,
        style: WarpStyle,
    ) -> Result<Self, EngineError> {
        let texture = load_texture(loader, locator)?;
        Self::new(width, height, texture, style)
    }

    /// Creates a generator from a JSON params object.
    ///
    /// `"style"` may be a numeric id (out-of-range ids select
    /// [`WarpStyle::Passthrough`]) or a style name. A missing style falls
    /// back to [`DEFAULT_STYLE`]; an unrecognized name is an error.
    pub fn from_json(
        width: usize,
        height: usize,
        texture: Arc<Texture>,
        params: &Value,
    ) -> Result<Self, EngineError> {
        Self::new(width, height, texture, WarpStyle::from_params(params)?)
    }

    /// Selects a new warp style and rebuilds the lookup table.
    ///
    /// The raster size and the displacement counter are untouched.
    pub fn change_style(&mut self, style: WarpStyle) {
        self.style = style;
        self.rebuild_lut();
    }

    /// Replaces the source texture and rebuilds the lookup table for its
    /// dimensions at the current style.
    pub fn reload_texture(&mut self, texture: Arc<Texture>) {
        self.texture = texture;
        self.rebuild_lut();
    }

    /// Resolves a new texture through `loader` and swaps it in.
    ///
    /// On failure the generator keeps its previous texture and table.
    pub fn reload_from(
        &mut self,
        loader: &dyn TextureLoader,
        locator: &str,
    ) -> Result<(), EngineError> {
        let texture = load_texture(loader, locator)?;
        self.reload_texture(texture);
        Ok(())
    }

    /// The active warp style.
    pub fn style(&self) -> WarpStyle {
        self.style
    }

    /// Number of ticks rendered so far.
    pub fn displacement(&self) -> u64 {
        self.displacement
    }

    /// The current lookup table.
    pub fn lut(&self) -> &Lut {
        &self.lut
    }

    /// The current source texture.
    pub fn texture(&self) -> &Arc<Texture> {
        &self.texture
    }

    fn rebuild_lut(&mut self) {
        if self.closed {
            return;
        }
        // same raster, so the existing allocation is reused
        self.lut.refill(
            self.width,
            self.height,
            self.style,
            self.texture.width(),
            self.texture.height(),
        );
        debug!(
            style = %self.style,
            width = self.width,
            height = self.height,
            texture_width = self.texture.width(),
            texture_height = self.texture.height(),
            "rebuilt deformation lut"
        );
    }
}

impl Generator for TextureDeformation {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn output(&self) -> &[u32] {
        &self.output
    }

    fn tick(&mut self) -> Result<(), EngineError> {
        if self.closed {
            return Ok(());
        }

        // only the low bits survive the texture mask, so truncating is exact
        let shift = self.displacement as i32;
        let texture = &*self.texture;

        for (px, e) in self.scratch.iter_mut().zip(self.lut.entries()) {
            let color = texture.sample(e.u.wrapping_add(shift), e.v.wrapping_add(shift));
            *px = if e.bright != 0 {
                adjust_brightness(color, e.bright)
            } else {
                color
            };
        }

        self.smoothing.apply(
            SMOOTHING_OFFSET_X,
            SMOOTHING_OFFSET_Y,
            &self.scratch,
            self.width,
            &mut self.output,
        );
        self.displacement = self.displacement.wrapping_add(1);
        trace!(displacement = self.displacement, "rendered deformation frame");

        Ok(())
    }

    fn close(&mut self) {
        self.closed = true;
        self.lut = Lut::default();
        self.scratch = Vec::new();
        self.output = Vec::new();
        debug!("closed texture deformation generator");
    }

    fn params(&self) -> Value {
        json!({
            "style": self.style.id(),
            "style_name": self.style.name(),
            "displacement": self.displacement,
        })
    }

    fn param_schema(&self) -> Value {
        json!({
            "style": {
                "type": "integer",
                "default": DEFAULT_STYLE.id(),
                "min": 0,
                "max": WarpStyle::ALL.len() - 1,
                "names": WarpStyle::list_names(),
                "description": "Warp style id or name; out-of-range ids show the texture undeformed"
            }
        })
    }
}

fn zeroed_frame(len: usize) -> Result<Vec<u32>, EngineError> {
    let mut frame = Vec::new();
    frame
        .try_reserve_exact(len)
        .map_err(|_| EngineError::InvalidDimensions)?;
    frame.resize(len, 0);
    Ok(frame)
}

fn load_texture(loader: &dyn TextureLoader, locator: &str) -> Result<Arc<Texture>, EngineError> {
    let texture = loader.load(locator)?;
    info!(
        locator,
        width = texture.width(),
        height = texture.height(),
        "loaded texture"
    );
    Ok(Arc::new(texture))
}
