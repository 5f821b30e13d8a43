//! Loading background images.

use crate::error::{Error, Result};
use image::RgbaImage;
use log::debug;
use std::fs;
use std::path::Path;

/// Reads and decodes the image at `path`, guessing the format from its contents.
///
/// PNG and JPEG are supported. The image is converted to 8-bit RGBA.
pub fn load_background_image(path: impl AsRef<Path>) -> Result<RgbaImage> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let image = image::load_from_memory(&bytes).map_err(|source| Error::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(
        "Loaded background {} ({}x{})",
        path.display(),
        image.width(),
        image.height()
    );
    Ok(image.to_rgba8())
}
