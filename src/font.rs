//! Loading fonts and querying them through the [`GlyphSource`] capability.

use crate::drawing::draw_text_mut;
use crate::error::{Error, Result};
use ab_glyph::{Font, FontVec, InvalidFont, PxScale, ScaleFont};
use image::{Rgba, RgbaImage};
use log::debug;
use std::fs;
use std::path::Path;

/// Number of fixed-point advance units in one pixel (26.6 fixed point).
pub const UNITS_PER_PIXEL: i32 = 64;

/// What the sizing engine and the drawer need from a rasterizer.
///
/// Sizes are in points at 72 DPI, so one point is one pixel.
pub trait GlyphSource {
    /// Horizontal advance of `c` at `size`, in 26.6 fixed-point units.
    ///
    /// Returns `None` when the font has no glyph for `c`.
    fn glyph_advance(&self, c: char, size: f32) -> Option<i32>;

    /// Paints `text` onto `canvas` in `color`, with the pen starting at
    /// `origin` and the baseline at `origin.1`.
    ///
    /// Glyphs are not hinted and anything outside the canvas is clipped.
    fn draw_glyphs(
        &self,
        canvas: &mut RgbaImage,
        text: &str,
        origin: (i32, i32),
        size: f32,
        color: Rgba<u8>,
    ) -> Result<()>;
}

/// A TrueType or OpenType font held in memory.
pub struct FontFile {
    font: FontVec,
}

impl FontFile {
    /// Reads and parses the font at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let font = Self::from_bytes(bytes).map_err(|source| Error::FontParse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(
            "Loaded font {} with {} glyphs",
            path.display(),
            font.font.glyph_count()
        );
        Ok(font)
    }

    /// Parses font data that is already in memory.
    pub fn from_bytes(bytes: Vec<u8>) -> std::result::Result<Self, InvalidFont> {
        FontVec::try_from_vec(bytes).map(|font| Self { font })
    }

    /// The pixel scale at which an em is `size` pixels tall.
    ///
    /// `ab_glyph` scales by ascent minus descent rather than by the em box.
    pub fn scale(&self, size: f32) -> PxScale {
        match self.font.units_per_em() {
            Some(units_per_em) => PxScale::from(size * self.font.height_unscaled() / units_per_em),
            None => PxScale::from(size),
        }
    }
}

impl GlyphSource for FontFile {
    fn glyph_advance(&self, c: char, size: f32) -> Option<i32> {
        let glyph_id = self.font.glyph_id(c);
        // Glyph 0 is .notdef, which is what unmapped characters resolve to.
        if glyph_id.0 == 0 {
            return None;
        }
        let advance = self.font.as_scaled(self.scale(size)).h_advance(glyph_id);
        Some((advance * UNITS_PER_PIXEL as f32).round() as i32)
    }

    fn draw_glyphs(
        &self,
        canvas: &mut RgbaImage,
        text: &str,
        origin: (i32, i32),
        size: f32,
        color: Rgba<u8>,
    ) -> Result<()> {
        if !size.is_finite() || size <= 0.0 {
            return Err(Error::Render(format!("cannot draw at font size {size}")));
        }
        draw_text_mut(canvas, color, origin.0, origin.1, self.scale(size), &self.font, text);
        Ok(())
    }
}
