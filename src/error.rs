//! Errors returned by the loaders, the drawer and the output writer.

use std::path::PathBuf;
use thiserror::Error;

/// Convenience alias for results carrying this crate's [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Everything that can go wrong while building or drawing a card.
#[derive(Debug, Error)]
pub enum Error {
    /// A file could not be read or written.
    #[error("failed to access {}: {source}", path.display())]
    Io {
        /// The file being accessed.
        path: PathBuf,
        /// The underlying I/O failure.
        source: std::io::Error,
    },

    /// A background image could not be decoded.
    #[error("failed to decode image {}: {source}", path.display())]
    Decode {
        /// The image file.
        path: PathBuf,
        /// The codec failure.
        source: image::ImageError,
    },

    /// A font file could not be parsed.
    #[error("failed to parse font {}: {source}", path.display())]
    FontParse {
        /// The font file.
        path: PathBuf,
        /// The parser failure.
        source: ab_glyph::InvalidFont,
    },

    /// A hex color string was malformed.
    #[error("invalid hex color: {0}")]
    Format(String),

    /// `draw` was called before any font was configured.
    #[error("a font must be configured before drawing")]
    MissingFont,

    /// Glyphs could not be painted onto the canvas.
    #[error("failed to render text: {0}")]
    Render(String),

    /// The finished image could not be encoded.
    #[error("failed to encode {}: {source}", path.display())]
    Encode {
        /// The output file.
        path: PathBuf,
        /// The codec failure.
        source: image::ImageError,
    },
}
