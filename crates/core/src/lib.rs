#![deny(unsafe_code)]
//! Core types and traits for the texdeform texture-deformation generator.
//!
//! Provides the `Generator` and `TextureLoader` traits, the power-of-two
//! `Texture` with wraparound sampling, packed RGB color helpers, the
//! `Smoothing` pass with its `BoxFilter`, `Preset`, and parameter helpers.

pub mod color;
pub mod error;
pub mod filter;
pub mod generator;
pub mod params;
pub mod preset;
pub mod texture;

pub use color::Rgb;
pub use error::EngineError;
pub use filter::{BoxFilter, NoSmoothing, Smoothing};
pub use generator::{raster_len, Generator, TextureLoader};
pub use preset::Preset;
pub use texture::Texture;
