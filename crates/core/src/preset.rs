//! Reproducible description of a rendered frame.
//!
//! A [`Preset`] captures everything needed to recreate a frame: texture
//! locator, raster dimensions, generator parameters, and tick count.

use crate::error::EngineError;
use crate::generator::raster_len;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Reproducible description of a texture-deformation render.
///
/// Two identical presets rendered against the same texture produce
/// bit-identical frames.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Preset {
    pub texture: String,
    pub width: usize,
    pub height: usize,
    #[serde(default = "empty_object")]
    pub params: serde_json::Value,
    #[serde(default = "one_tick")]
    pub ticks: usize,
}

/// A frame is only published by a tick, so a render needs at least one.
fn one_tick() -> usize {
    1
}

fn empty_object() -> serde_json::Value {
    serde_json::Value::Object(serde_json::Map::new())
}

impl Preset {
    /// Creates a preset with default params (`{}`) and a single tick.
    pub fn new(texture: &str, width: usize, height: usize) -> Self {
        Self {
            texture: texture.to_string(),
            width,
            height,
            params: empty_object(),
            ticks: one_tick(),
        }
    }

    /// Reads and validates a JSON preset file.
    pub fn from_path(path: &Path) -> Result<Self, EngineError> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| EngineError::Io(format!("{}: {e}", path.display())))?;
        let preset: Preset = serde_json::from_str(&text)
            .map_err(|e| EngineError::InvalidPreset(format!("{}: {e}", path.display())))?;
        preset.validate()?;
        tracing::debug!(
            path = %path.display(),
            texture = %preset.texture,
            width = preset.width,
            height = preset.height,
            "loaded preset"
        );
        Ok(preset)
    }

    /// Validates that the preset names a texture, renders at least one
    /// tick, and has a raster that [`raster_len`] accepts.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.texture.trim().is_empty() {
            return Err(EngineError::InvalidPreset(
                "texture locator must not be empty".to_string(),
            ));
        }
        if self.ticks == 0 {
            return Err(EngineError::InvalidPreset(
                "ticks must be at least 1".to_string(),
            ));
        }
        raster_len(self.width, self.height)?;
        Ok(())
    }
}
