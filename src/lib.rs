//! Renders a line of text onto a banner image, built on the
//! [image] and [ab_glyph] crates.
//!
//! A [`Drawer`] holds the canvas size, colors, font and text offsets. Each
//! call to [`Drawer::draw`] fills a new canvas with the background color or
//! image, picks the largest font size that keeps the text within 85% of the
//! canvas width (unless a fixed size is set) and paints the text centered.
//!
//! ```no_run
//! use textcard::{Drawer, DrawerConfig};
//!
//! # fn main() -> textcard::Result<()> {
//! let drawer = Drawer::new(DrawerConfig {
//!     font_path: Some("fonts/Inter-Bold.ttf".into()),
//!     ..DrawerConfig::default()
//! })?;
//! let image = drawer.draw("text on a card")?;
//! textcard::save_image(&image, "card.png", 100)?;
//! # Ok(())
//! # }
//! ```
//!
//! [image]: https://github.com/image-rs/image
//! [ab_glyph]: https://github.com/alexheretic/ab-glyph
#![deny(missing_docs)]
#![allow(clippy::cast_lossless, clippy::many_single_char_names)]

pub mod background;
pub mod color;
pub mod config;
pub mod definitions;
pub mod drawer;
pub mod drawing;
pub mod error;
pub mod fit;
pub mod font;
pub mod output;
pub mod palette;
pub mod pixelops;

pub use background::load_background_image;
pub use color::{parse_hex, ColorPair};
pub use config::Settings;
pub use drawer::{Drawer, DrawerConfig, FontSize};
pub use error::{Error, Result};
pub use fit::{fit_font_size, measure_width};
pub use font::{FontFile, GlyphSource};
pub use output::save_image;
pub use palette::{pick_color, pick_color_with, PALETTE};
