use crate::definitions::Clamp;
use crate::drawing::Canvas;
use crate::pixelops::weighted_sum;
use image::Pixel;

use ab_glyph::{point, Font, GlyphId, OutlinedGlyph, PxScale, Rect, ScaleFont};

// Lays out `text` on a baseline at y = 0 starting at x = 0, calling `f` for
// every glyph that has an outline. Characters the font does not map are
// skipped without advancing the pen.
fn layout_glyphs(
    scale: impl Into<PxScale> + Copy,
    font: &impl Font,
    text: &str,
    mut f: impl FnMut(OutlinedGlyph, Rect),
) {
    let font = font.as_scaled(scale);
    let mut x = 0f32;
    let mut last: Option<GlyphId> = None;

    for c in text.chars() {
        let glyph_id = font.glyph_id(c);
        if glyph_id.0 == 0 {
            continue;
        }
        if let Some(last) = last {
            x += font.kern(last, glyph_id);
        }
        let glyph = glyph_id.with_scale_and_position(scale, point(x, 0.0));
        x += font.h_advance(glyph_id);
        last = Some(glyph_id);

        if let Some(g) = font.outline_glyph(glyph) {
            let bb = g.px_bounds();
            f(g, bb);
        }
    }
}

/// Draws colored text on an image in place, blending glyph coverage into
/// the existing pixels.
///
/// The pen starts at `x` and `y` is the baseline, so ascenders extend above
/// `y`. `scale` is the font scaling on both the x and y axis (in pixels).
/// Pixels falling outside the canvas are skipped.
///
/// Note that this function *does not* support newlines, you must do this manually.
pub fn draw_text_mut<C>(
    canvas: &mut C,
    color: C::Pixel,
    x: i32,
    y: i32,
    scale: impl Into<PxScale> + Copy,
    font: &impl Font,
    text: &str,
) where
    C: Canvas,
    <C::Pixel as Pixel>::Subpixel: Into<f32> + Clamp<f32>,
{
    let image_width = canvas.width() as i32;
    let image_height = canvas.height() as i32;

    layout_glyphs(scale, font, text, |g, bb| {
        g.draw(|gx, gy, gv| {
            let image_x = gx as i32 + x + bb.min.x.round() as i32;
            let image_y = gy as i32 + y + bb.min.y.round() as i32;
            let gv = gv.clamp(0.0, 1.0);

            if (0..image_width).contains(&image_x) && (0..image_height).contains(&image_y) {
                let image_x = image_x as u32;
                let image_y = image_y as u32;
                let pixel = canvas.get_pixel(image_x, image_y);
                let weighted_color = weighted_sum(pixel, color, 1.0 - gv, gv);
                canvas.draw_pixel(image_x, image_y, weighted_color);
            }
        })
    });
}
