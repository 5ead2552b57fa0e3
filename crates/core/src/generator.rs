//! The `Generator` capability trait and the `TextureLoader` collaborator.
//!
//! Both traits are object-safe so an orchestrator can hold a
//! `Box<dyn Generator>` and inject any `&dyn TextureLoader`.

use crate::error::EngineError;
use crate::texture::Texture;
use serde_json::Value;

/// A tick-driven frame generator.
///
/// The orchestrator calls [`tick`](Generator::tick) once per render cycle
/// and then reads [`output`](Generator::output). The output slice stays owned
/// by the generator; copy it if it must outlive the next tick.
pub trait Generator {
    /// Raster width in pixels, fixed for the generator lifetime.
    fn width(&self) -> usize;

    /// Raster height in pixels, fixed for the generator lifetime.
    fn height(&self) -> usize;

    /// The most recently published frame as packed `0x00RRGGBB` pixels.
    fn output(&self) -> &[u32];

    /// Render one frame.
    fn tick(&mut self) -> Result<(), EngineError>;

    /// Release held buffers. Further ticks do nothing.
    fn close(&mut self);

    /// Current parameter values as a JSON object.
    fn params(&self) -> Value;

    /// Schema describing all available parameters, their types, ranges, and defaults.
    fn param_schema(&self) -> Value;
}

/// Values a generator stores per pixel in its largest per-raster table.
const MAX_VALUES_PER_PIXEL: usize = 3;

/// Pixel count of a `width x height` raster.
///
/// Fails with `EngineError::InvalidDimensions` if either side is zero, or
/// if a table of `MAX_VALUES_PER_PIXEL` 32-bit values per pixel could not
/// be addressed (more than `isize::MAX` bytes).
pub fn raster_len(width: usize, height: usize) -> Result<usize, EngineError> {
    if width == 0 || height == 0 {
        return Err(EngineError::InvalidDimensions);
    }
    let len = width
        .checked_mul(height)
        .ok_or(EngineError::InvalidDimensions)?;
    len.checked_mul(MAX_VALUES_PER_PIXEL)
        .and_then(|n| n.checked_mul(std::mem::size_of::<u32>()))
        .filter(|&bytes| bytes <= isize::MAX as usize)
        .ok_or(EngineError::InvalidDimensions)?;
    Ok(len)
}

/// Resolves a texture locator (usually a file name) into a [`Texture`].
pub trait TextureLoader {
    fn load(&self, locator: &str) -> Result<Texture, EngineError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// Minimal generator that publishes its tick count in every pixel.
    struct CountingGenerator {
        frame: Vec<u32>,
        ticks: u32,
    }

    impl CountingGenerator {
        fn new() -> Self {
            Self {
                frame: vec![0; 8],
                ticks: 0,
            }
        }
    }

    impl Generator for CountingGenerator {
        fn width(&self) -> usize {
            4
        }

        fn height(&self) -> usize {
            2
        }

        fn output(&self) -> &[u32] {
            &self.frame
        }

        fn tick(&mut self) -> Result<(), EngineError> {
            self.ticks += 1;
            self.frame.fill(self.ticks);
            Ok(())
        }

        fn close(&mut self) {
            self.frame = Vec::new();
        }

        fn params(&self) -> Value {
            json!({"ticks": self.ticks})
        }

        fn param_schema(&self) -> Value {
            json!({"ticks": {"type": "integer", "default": 0}})
        }
    }

    struct FixedLoader;

    impl TextureLoader for FixedLoader {
        fn load(&self, locator: &str) -> Result<Texture, EngineError> {
            match locator {
                "grey" => Texture::filled(2, 2, 0x808080),
                other => Err(EngineError::ImageLoad {
                    locator: other.to_string(),
                    reason: "not found".into(),
                }),
            }
        }
    }

    #[test]
    fn generator_trait_is_object_safe() {
        let mut gen: Box<dyn Generator> = Box::new(CountingGenerator::new());
        assert_eq!(gen.width() * gen.height(), gen.output().len());
        gen.tick().unwrap();
        assert!(gen.output().iter().all(|&p| p == 1));
    }

    #[test]
    fn close_releases_output() {
        let mut gen = CountingGenerator::new();
        gen.close();
        assert!(gen.output().is_empty());
    }

    #[test]
    fn params_reflect_state() {
        let mut gen = CountingGenerator::new();
        gen.tick().unwrap();
        gen.tick().unwrap();
        assert_eq!(gen.params()["ticks"], 2);
        assert_eq!(gen.param_schema()["ticks"]["type"], "integer");
    }

    #[test]
    fn raster_len_counts_pixels() {
        assert_eq!(raster_len(16, 9).unwrap(), 144);
        assert_eq!(raster_len(1, 1).unwrap(), 1);
    }

    #[test]
    fn raster_len_rejects_empty_and_unaddressable_rasters() {
        for (w, h) in [
            (0, 4),
            (4, 0),
            (usize::MAX, 2),
            (1 << 62, 1),
            (isize::MAX as usize / 4, 1),
        ] {
            assert!(
                matches!(raster_len(w, h), Err(EngineError::InvalidDimensions)),
                "{w}x{h}"
            );
        }
    }

    #[test]
    fn loader_trait_is_object_safe() {
        let loader: &dyn TextureLoader = &FixedLoader;
        assert_eq!(loader.load("grey").unwrap().pixels(), &[0x808080; 4]);
        assert!(matches!(
            loader.load("missing"),
            Err(EngineError::ImageLoad { .. })
        ));
    }
}
