//! Composes a background, sizes the text and paints it centered.

use crate::background::load_background_image;
use crate::color::ColorPair;
use crate::error::{Error, Result};
use crate::fit::{fit_font_size, measure_width};
use crate::font::{FontFile, GlyphSource};
use crate::palette::pick_color;
use image::{Rgba, RgbaImage};
use log::debug;
use std::path::{Path, PathBuf};

/// Canvas width used when none (or a non-positive one) is given.
pub const DEFAULT_WIDTH: u32 = 1200;

/// Canvas height used when none (or a non-positive one) is given.
pub const DEFAULT_HEIGHT: u32 = 630;

/// How the font size is chosen for each [`Drawer::draw`] call.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum FontSize {
    /// Fit the text to the canvas width on every draw.
    #[default]
    Auto,
    /// Always draw at this many points.
    Fixed(f32),
}

impl From<f32> for FontSize {
    /// Positive sizes are fixed, anything else means automatic sizing.
    fn from(size: f32) -> Self {
        if size.is_finite() && size > 0.0 {
            FontSize::Fixed(size)
        } else {
            FontSize::Auto
        }
    }
}

/// Parameters for [`Drawer::new`].
///
/// Zero widths and heights mean the defaults, or the background image size
/// when a background image is given.
#[derive(Clone, Debug, Default)]
pub struct DrawerConfig {
    /// Image drawn under the text. Its size becomes the canvas size.
    pub background_image: Option<PathBuf>,
    /// Solid fill used when there is no background image.
    pub background_color: Option<Rgba<u8>>,
    /// Text color.
    pub text_color: Option<Rgba<u8>>,
    /// Pixels to move the text down from center.
    pub text_pos_vertical: i32,
    /// Pixels to move the text right from center.
    pub text_pos_horizontal: i32,
    /// Canvas width.
    pub width: i32,
    /// Canvas height.
    pub height: i32,
    /// Font to draw with. Drawing fails without one.
    pub font_path: Option<PathBuf>,
    /// Fixed size in points, or automatic.
    pub font_size: FontSize,
}

/// Renders single lines of text onto fresh images.
///
/// The configuration can be changed between draws; each [`draw`](Self::draw)
/// only reads it.
pub struct Drawer<F = FontFile> {
    background_image: Option<RgbaImage>,
    colors: ColorPair,
    text_pos_vertical: i32,
    text_pos_horizontal: i32,
    width: u32,
    height: u32,
    font: Option<F>,
    font_size: FontSize,
}

impl Drawer<FontFile> {
    /// Builds a drawer, loading the font and background image named in `config`.
    pub fn new(config: DrawerConfig) -> Result<Self> {
        let mut drawer = Self::unconfigured();
        if let Some(path) = &config.font_path {
            drawer.set_font_path(path)?;
        }
        if let Some(path) = &config.background_image {
            drawer.set_background_image(path)?;
        } else {
            drawer.set_size(config.width, config.height);
        }
        drawer.set_colors(config.text_color, config.background_color);
        drawer.set_text_pos(config.text_pos_vertical, config.text_pos_horizontal);
        drawer.set_font_size(config.font_size);
        Ok(drawer)
    }

    /// Loads the font at `path` and draws with it from now on.
    pub fn set_font_path(&mut self, path: impl AsRef<Path>) -> Result<()> {
        self.font = Some(FontFile::load(path)?);
        Ok(())
    }
}

impl<F> Drawer<F> {
    fn unconfigured() -> Self {
        Self {
            background_image: None,
            colors: ColorPair {
                background: Rgba([0, 0, 0, 255]),
                foreground: Rgba([255, 255, 255, 255]),
            },
            text_pos_vertical: 0,
            text_pos_horizontal: 0,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            font: None,
            font_size: FontSize::Auto,
        }
    }

    /// A drawer around an already loaded font, with the default canvas size,
    /// palette colors and automatic sizing.
    pub fn with_font(font: F) -> Self {
        let mut drawer = Self::unconfigured();
        drawer.set_font(font);
        drawer.set_colors(None, None);
        drawer
    }

    /// Draws with `font` from now on.
    pub fn set_font(&mut self, font: F) {
        self.font = Some(font);
    }

    /// Sets the text and background colors.
    ///
    /// Two distinct colors are used as given. If a color is missing it comes
    /// from a random palette entry, and if the text would end up the same
    /// color as its background the whole palette entry is used instead.
    pub fn set_colors(
        &mut self,
        text_color: Option<Rgba<u8>>,
        background_color: Option<Rgba<u8>>,
    ) {
        self.colors = match (text_color, background_color) {
            (Some(foreground), Some(background)) if foreground != background => ColorPair {
                background,
                foreground,
            },
            (foreground, background) => {
                let picked = pick_color();
                let merged = ColorPair {
                    background: background.unwrap_or(picked.background),
                    foreground: foreground.unwrap_or(picked.foreground),
                };
                if merged.foreground == merged.background {
                    picked
                } else {
                    merged
                }
            }
        };
    }

    /// Offsets the text from the center of the canvas. Positive values move
    /// it down and right.
    pub fn set_text_pos(&mut self, vertical: i32, horizontal: i32) {
        self.text_pos_vertical = vertical;
        self.text_pos_horizontal = horizontal;
    }

    /// Fixes the font size, or switches to automatic sizing for sizes <= 0.
    pub fn set_font_size(&mut self, size: impl Into<FontSize>) {
        self.font_size = size.into();
    }

    /// Sets the canvas size used without a background image. Non-positive
    /// values fall back to 1200x630.
    pub fn set_size(&mut self, width: i32, height: i32) {
        self.width = u32::try_from(width)
            .ok()
            .filter(|&w| w > 0)
            .unwrap_or(DEFAULT_WIDTH);
        self.height = u32::try_from(height)
            .ok()
            .filter(|&h| h > 0)
            .unwrap_or(DEFAULT_HEIGHT);
    }

    /// Loads the image at `path` as the background. The canvas takes its size.
    pub fn set_background_image(&mut self, path: impl AsRef<Path>) -> Result<()> {
        self.background_image = Some(load_background_image(path)?);
        Ok(())
    }

    /// The size of the images [`draw`](Self::draw) produces.
    pub fn size(&self) -> (u32, u32) {
        match &self.background_image {
            Some(image) => image.dimensions(),
            None => (self.width, self.height),
        }
    }

    /// The colors text and background are drawn in.
    pub fn colors(&self) -> ColorPair {
        self.colors
    }

    /// The current sizing policy.
    pub fn font_size(&self) -> FontSize {
        self.font_size
    }
}

impl<F: GlyphSource> Drawer<F> {
    /// Renders `text` centered on a new image.
    ///
    /// Fails with [`Error::MissingFont`] when no font is configured.
    pub fn draw(&self, text: &str) -> Result<RgbaImage> {
        let font = self.font.as_ref().ok_or(Error::MissingFont)?;
        let (width, height) = self.size();

        let mut canvas = match &self.background_image {
            Some(background) => background.clone(),
            None => RgbaImage::from_pixel(width, height, self.colors.background),
        };

        let size = match self.font_size {
            FontSize::Fixed(size) => size,
            FontSize::Auto => fit_font_size(font, width, text),
        };
        let text_width = i64::from(measure_width(font, size, text));
        // At 72 DPI a point is a pixel; the height is the size truncated.
        let text_height = size as i64;

        // Huge fixed sizes saturate here and are then clamped by to_coordinate.
        let x = (i64::from(width).saturating_sub(text_width) / 2)
            .saturating_add(i64::from(self.text_pos_horizontal));
        let y = (i64::from(height).saturating_add(text_height) / 2)
            .saturating_add(i64::from(self.text_pos_vertical));
        debug!("Drawing {text:?} at size {size} from ({x}, {y}), {text_width}px wide");

        let origin = (to_coordinate(x), to_coordinate(y));
        font.draw_glyphs(&mut canvas, text, origin, size, self.colors.foreground)?;
        Ok(canvas)
    }
}

// Keeps pen positions far enough from the i32 limits that glyph offsets
// cannot overflow.
fn to_coordinate(v: i64) -> i32 {
    v.clamp(i64::from(i32::MIN / 2), i64::from(i32::MAX / 2)) as i32
}
