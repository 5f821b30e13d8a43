//! Measuring text and picking a font size that fits a width.

use crate::font::{GlyphSource, UNITS_PER_PIXEL};

/// The size the search starts from, and the smallest size it returns.
pub const MIN_FONT_SIZE: f32 = 1.0;

/// Factor applied to the size at each step of the search.
pub const GROWTH_RATIO: f32 = 1.2;

/// Share of the target width the text may occupy.
pub const WIDTH_FILL_RATIO: f32 = 0.85;

// 1.2^256 is far past any usable size.
const MAX_GROWTH_STEPS: usize = 256;

// A glyph advancing by a thousandth of an em is a pixel wide at this size,
// so text still measuring zero here has nothing to fit.
const BLANK_TEXT_SIZE: f32 = 1000.0;

/// Width in whole pixels of `text` drawn at `size`.
///
/// Each glyph advance is truncated to whole pixels before summing.
/// Characters without a glyph add nothing.
pub fn measure_width<F>(font: &F, size: f32, text: &str) -> u32
where
    F: GlyphSource + ?Sized,
{
    let width: i64 = text
        .chars()
        .filter_map(|c| font.glyph_advance(c, size))
        .map(|advance| i64::from(advance / UNITS_PER_PIXEL))
        .sum();
    u32::try_from(width.max(0)).unwrap_or(u32::MAX)
}

/// Largest size in the sequence `1, 1.2, 1.2², …` at which `text` is
/// narrower than 85% of `target_width`.
///
/// Returns [`MIN_FONT_SIZE`] when the text is empty, when the font maps none
/// of its characters, when even the smallest size is too wide, or when the
/// text is made only of zero-advance glyphs such as U+200B or combining
/// marks.
pub fn fit_font_size<F>(font: &F, target_width: u32, text: &str) -> f32
where
    F: GlyphSource + ?Sized,
{
    if !text
        .chars()
        .any(|c| font.glyph_advance(c, MIN_FONT_SIZE).is_some())
    {
        return MIN_FONT_SIZE;
    }

    let threshold = target_width as f32 * WIDTH_FILL_RATIO;

    let mut size = MIN_FONT_SIZE;
    for _ in 0..MAX_GROWTH_STEPS {
        let next = size * GROWTH_RATIO;
        let width = measure_width(font, next, text);
        if width == 0 && next > BLANK_TEXT_SIZE {
            return MIN_FONT_SIZE;
        }
        if width as f32 >= threshold {
            break;
        }
        size = next;
    }
    size
}

#[cfg(test)]
pub(crate) mod test_font {
    use crate::error::Result;
    use crate::font::GlyphSource;
    use image::{Rgba, RgbaImage};

    /// Every ASCII character is half an em wide and drawn as a solid box
    /// from the baseline up to `size`. Nothing else is mapped.
    pub struct BoxFont;

    impl GlyphSource for BoxFont {
        fn glyph_advance(&self, c: char, size: f32) -> Option<i32> {
            c.is_ascii().then(|| (size * 32.0) as i32)
        }

        fn draw_glyphs(
            &self,
            canvas: &mut RgbaImage,
            text: &str,
            origin: (i32, i32),
            size: f32,
            color: Rgba<u8>,
        ) -> Result<()> {
            let mut pen = origin.0;
            for c in text.chars() {
                let Some(advance) = self.glyph_advance(c, size) else {
                    continue;
                };
                let advance = advance / 64;
                let (width, height) = (canvas.width() as i32, canvas.height() as i32);
                let xs = pen.max(0)..pen.saturating_add(advance).min(width);
                let ys = origin.1.saturating_sub(size as i32).max(0)..origin.1.min(height);
                for x in xs {
                    for y in ys.clone() {
                        canvas.put_pixel(x as u32, y as u32, color);
                    }
                }
                pen = pen.saturating_add(advance);
            }
            Ok(())
        }
    }

    /// Maps U+200B and combining marks with no advance, like a real font
    /// does. Draws nothing.
    pub struct ZeroAdvanceFont;

    impl GlyphSource for ZeroAdvanceFont {
        fn glyph_advance(&self, c: char, size: f32) -> Option<i32> {
            match c {
                '\u{200b}' | '\u{300}'..='\u{36f}' => Some(0),
                _ => BoxFont.glyph_advance(c, size),
            }
        }

        fn draw_glyphs(
            &self,
            _canvas: &mut RgbaImage,
            _text: &str,
            _origin: (i32, i32),
            _size: f32,
            _color: Rgba<u8>,
        ) -> Result<()> {
            Ok(())
        }
    }
}


#[cfg(not(miri))]
#[cfg(test)]
mod proptests {
    use super::test_font::BoxFont;
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn proptest_measure_is_monotonic_in_size(
            text in "[ -~]{0,40}",
            size in 0.0f32..500.0,
            step in 0.0f32..100.0,
        ) {
            prop_assert!(measure_width(&BoxFont, size, &text) <= measure_width(&BoxFont, size + step, &text));
        }

        #[test]
        fn proptest_fit_respects_threshold(text in "[ -~]{1,40}", width in 1u32..4000) {
            let size = fit_font_size(&BoxFont, width, &text);
            let threshold = width as f32 * WIDTH_FILL_RATIO;
            prop_assert!(size >= MIN_FONT_SIZE);
            if size > MIN_FONT_SIZE {
                prop_assert!((measure_width(&BoxFont, size, &text) as f32) < threshold);
            }
            prop_assert!((measure_width(&BoxFont, size * GROWTH_RATIO, &text) as f32) >= threshold);
        }
    }
}
