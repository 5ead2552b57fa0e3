#![deny(unsafe_code)]
//! File-system collaborators for the texdeform generator.
//!
//! The generator core never touches storage: it receives textures through
//! the `TextureLoader` trait and publishes packed pixel frames. This crate
//! supplies the image-file loader and the PNG writer that the CLI wires in.

pub mod loader;
pub mod pixel;
pub mod snapshot;

pub use loader::ImageFileLoader;
pub use snapshot::write_png;
