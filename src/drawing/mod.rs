//! Painting glyphs onto images.

mod canvas;
pub use self::canvas::Canvas;

mod text;
pub use self::text::draw_text_mut;
