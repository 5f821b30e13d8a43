//! Writing rendered images to disk.

use crate::error::{Error, Result};
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageFormat, RgbaImage};
use log::debug;
use std::fs;
use std::io::Cursor;
use std::path::Path;

/// Picks the output format from the file extension: `jpg`/`jpeg` is JPEG,
/// everything else is PNG.
pub fn output_format(path: &Path) -> ImageFormat {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("jpg") || ext.eq_ignore_ascii_case("jpeg") => {
            ImageFormat::Jpeg
        }
        _ => ImageFormat::Png,
    }
}

/// Encodes `image` and writes it to `path`.
///
/// The whole image is encoded in memory first, so an encoding failure
/// leaves no file behind. JPEG output drops the alpha channel.
pub fn save_image(image: &RgbaImage, path: impl AsRef<Path>, jpeg_quality: u8) -> Result<()> {
    let path = path.as_ref();
    let format = output_format(path);
    let mut bytes = Cursor::new(Vec::new());

    let encoded = match format {
        ImageFormat::Jpeg => {
            let rgb = DynamicImage::ImageRgba8(image.clone()).to_rgb8();
            let encoder = JpegEncoder::new_with_quality(&mut bytes, jpeg_quality.clamp(1, 100));
            rgb.write_with_encoder(encoder)
        }
        _ => image.write_to(&mut bytes, ImageFormat::Png),
    };
    encoded.map_err(|source| Error::Encode {
        path: path.to_path_buf(),
        source,
    })?;

    let bytes = bytes.into_inner();
    debug!(
        "Writing {} bytes of {:?} to {}",
        bytes.len(),
        format,
        path.display()
    );
    fs::write(path, bytes).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}
