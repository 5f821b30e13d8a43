//! Settings file support for the command line tool.
//!
//! Settings are read from `~/.config/textcard/config.toml`, or from a file
//! given with `--config`. Every field is optional and command line flags
//! take precedence over the file.

use crate::color::parse_hex;
use crate::drawer::{DrawerConfig, FontSize};
use crate::error::Result;
use anyhow::Context;
use log::{debug, info};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Root of the settings file.
///
/// # Example TOML
/// ```toml
/// [font]
/// path = "fonts/Inter-Bold.ttf"
/// size = 0.0
///
/// [canvas]
/// width = 1200
/// height = 630
/// background_color = "#003d47"
/// text_color = "#fff"
///
/// [text]
/// vertical_offset = 0
/// horizontal_offset = 0
///
/// [output]
/// path = "image.png"
/// jpeg_quality = 100
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct Settings {
    /// Font file and size.
    #[serde(default)]
    pub font: FontSettings,

    /// Canvas size and colors.
    #[serde(default)]
    pub canvas: CanvasSettings,

    /// Text placement.
    #[serde(default)]
    pub text: TextSettings,

    /// Where and how the image is written.
    #[serde(default)]
    pub output: OutputSettings,
}

/// Font selection.
#[derive(Debug, Default, Deserialize)]
pub struct FontSettings {
    /// TrueType/OpenType file to draw with.
    pub path: Option<PathBuf>,

    /// Size in points; 0 or less fits the text to the canvas.
    #[serde(default)]
    pub size: f32,
}

/// Canvas appearance.
#[derive(Debug, Default, Deserialize)]
pub struct CanvasSettings {
    /// Canvas width; 0 means 1200 or the background image width.
    #[serde(default)]
    pub width: i32,

    /// Canvas height; 0 means 630 or the background image height.
    #[serde(default)]
    pub height: i32,

    /// PNG or JPEG image to draw on.
    pub background_image: Option<PathBuf>,

    /// `#rgb` or `#rrggbb`; picked from the palette when unset.
    pub background_color: Option<String>,

    /// `#rgb` or `#rrggbb`; picked from the palette when unset.
    pub text_color: Option<String>,
}

/// Offsets from the centered position, in pixels.
#[derive(Debug, Default, Deserialize)]
pub struct TextSettings {
    /// Positive moves the text down.
    #[serde(default)]
    pub vertical_offset: i32,

    /// Positive moves the text right.
    #[serde(default)]
    pub horizontal_offset: i32,
}

/// Output file settings.
#[derive(Debug, Deserialize)]
pub struct OutputSettings {
    /// Output file; a `.jpg`/`.jpeg` extension selects JPEG, anything else PNG.
    #[serde(default = "default_output_path")]
    pub path: PathBuf,

    /// JPEG quality (valid range: 1 - 100)
    #[serde(default = "default_jpeg_quality")]
    pub jpeg_quality: u8,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            path: default_output_path(),
            jpeg_quality: default_jpeg_quality(),
        }
    }
}

fn default_output_path() -> PathBuf {
    PathBuf::from("image.png")
}

fn default_jpeg_quality() -> u8 {
    100
}

impl Settings {
    /// Returns the path of the default settings file,
    /// `~/.config/textcard/config.toml` on Linux.
    pub fn default_path() -> anyhow::Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("textcard");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads the default settings file, or returns defaults if it does not exist.
    pub fn load_default() -> anyhow::Result<Self> {
        let path = match Self::default_path() {
            Ok(path) => path,
            Err(e) => {
                debug!("{e}, using default settings");
                return Ok(Self::default());
            }
        };

        if !path.exists() {
            info!("Settings file not found, using defaults");
            debug!("Expected settings at: {}", path.display());
            return Ok(Self::default());
        }

        Self::load(&path)
    }

    /// Reads and validates the settings file at `path`.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {}", path.display()))?;

        let mut settings: Settings = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse settings from {}", path.display()))?;

        settings.validate_and_clamp();

        info!("Loaded settings from {}", path.display());
        debug!("Settings: {:?}", settings);

        Ok(settings)
    }

    /// Clamps values that would otherwise make encoding fail.
    fn validate_and_clamp(&mut self) {
        if !(1..=100).contains(&self.output.jpeg_quality) {
            log::warn!(
                "Invalid jpeg_quality {}, clamping to 1-100 range",
                self.output.jpeg_quality
            );
            self.output.jpeg_quality = self.output.jpeg_quality.clamp(1, 100);
        }
    }

    /// Converts the settings into drawer parameters, parsing the hex colors.
    pub fn drawer_config(&self) -> Result<DrawerConfig> {
        Ok(DrawerConfig {
            background_image: self.canvas.background_image.clone(),
            background_color: self
                .canvas
                .background_color
                .as_deref()
                .map(parse_hex)
                .transpose()?,
            text_color: self
                .canvas
                .text_color
                .as_deref()
                .map(parse_hex)
                .transpose()?,
            text_pos_vertical: self.text.vertical_offset,
            text_pos_horizontal: self.text.horizontal_offset,
            width: self.canvas.width,
            height: self.canvas.height,
            font_path: self.font.path.clone(),
            font_size: FontSize::from(self.font.size),
        })
    }
}
