//! Image-file implementation of [`TextureLoader`].

use std::path::{Path, PathBuf};

use image::RgbImage;
use texdeform_core::error::EngineError;
use texdeform_core::texture::Texture;
use texdeform_core::TextureLoader;

use crate::pixel::pack_rgb;

/// Loads textures from image files (PNG, JPEG, BMP, GIF).
///
/// Relative locators resolve against `root` when one is set, otherwise
/// against the working directory. Decoded images are flattened to RGB;
/// alpha is discarded.
#[derive(Debug, Clone, Default)]
pub struct ImageFileLoader {
    root: Option<PathBuf>,
}

impl ImageFileLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// A loader resolving relative locators against `root`.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
        }
    }

    /// The path a locator resolves to.
    pub fn resolve(&self, locator: &str) -> PathBuf {
        match &self.root {
            // an absolute locator replaces the root
            Some(root) => root.join(locator),
            None => PathBuf::from(locator),
        }
    }
}

impl TextureLoader for ImageFileLoader {
    fn load(&self, locator: &str) -> Result<Texture, EngineError> {
        let path = self.resolve(locator);
        let img = open_rgb(&path).map_err(|reason| EngineError::ImageLoad {
            locator: locator.to_string(),
            reason,
        })?;
        tracing::debug!(
            path = %path.display(),
            width = img.width(),
            height = img.height(),
            "decoded texture image"
        );
        texture_from_rgb(&img)
    }
}

fn open_rgb(path: &Path) -> Result<RgbImage, String> {
    let img = image::open(path).map_err(|e| e.to_string())?;
    Ok(img.to_rgb8())
}

/// Converts a decoded RGB image into a [`Texture`].
///
/// Fails with `EngineError::NotPowerOfTwo` unless both image dimensions
/// are powers of two.
pub fn texture_from_rgb(img: &RgbImage) -> Result<Texture, EngineError> {
    let pixels = img.pixels().map(|p| pack_rgb(p.0)).collect();
    Texture::from_pixels(img.width() as usize, img.height() as usize, pixels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn write_image(dir: &Path, name: &str, w: u32, h: u32) -> PathBuf {
        let img = RgbImage::from_fn(w, h, |x, y| Rgb([x as u8, y as u8, 0x40]));
        let path = dir.join(name);
        img.save(&path).unwrap();
        path
    }

    #[test]
    fn loads_png_as_packed_texture() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_image(dir.path(), "tex.png", 8, 4);

        let tex = ImageFileLoader::new()
            .load(path.to_str().unwrap())
            .unwrap();
        assert_eq!(tex.width(), 8);
        assert_eq!(tex.height(), 4);
        assert_eq!(tex.sample(3, 2), 0x03_02_40);
    }

    #[test]
    fn relative_locator_resolves_against_root() {
        let dir = tempfile::tempdir().unwrap();
        write_image(dir.path(), "rooted.png", 4, 4);

        let loader = ImageFileLoader::with_root(dir.path());
        assert_eq!(loader.resolve("rooted.png"), dir.path().join("rooted.png"));
        assert_eq!(loader.load("rooted.png").unwrap().width(), 4);
    }

    #[test]
    fn missing_file_is_image_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ImageFileLoader::with_root(dir.path())
            .load("absent.png")
            .unwrap_err();
        match err {
            EngineError::ImageLoad { locator, .. } => assert_eq!(locator, "absent.png"),
            other => panic!("expected ImageLoad, got {other:?}"),
        }
    }

    #[test]
    fn undecodable_file_is_image_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("junk.png");
        std::fs::write(&path, b"definitely not a png").unwrap();
        let err = ImageFileLoader::new()
            .load(path.to_str().unwrap())
            .unwrap_err();
        assert!(matches!(err, EngineError::ImageLoad { .. }));
    }

    #[test]
    fn non_power_of_two_image_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        write_image(dir.path(), "odd.png", 6, 4);
        let err = ImageFileLoader::with_root(dir.path())
            .load("odd.png")
            .unwrap_err();
        assert!(matches!(
            err,
            EngineError::NotPowerOfTwo {
                width: 6,
                height: 4
            }
        ));
    }

    #[test]
    fn texture_from_rgb_keeps_raster_order() {
        let img = RgbImage::from_fn(2, 2, |x, y| Rgb([(y * 2 + x) as u8, 0, 0]));
        let tex = texture_from_rgb(&img).unwrap();
        assert_eq!(tex.pixels(), &[0x00_00_00, 0x01_00_00, 0x02_00_00, 0x03_00_00]);
    }
}
