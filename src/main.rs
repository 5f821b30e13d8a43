use clap::Parser;
use log::{error, info};
use std::path::PathBuf;
use std::process::ExitCode;
use textcard::{save_image, Drawer, Settings};

#[derive(Parser, Debug)]
#[command(name = "textcard")]
#[command(version, about = "Renders a line of text onto a banner image")]
struct Cli {
    /// Path to the font ttf file
    #[arg(long, value_name = "PATH")]
    fontpath: Option<PathBuf>,

    /// Path to the background image (PNG or JPEG)
    #[arg(long, value_name = "PATH")]
    bgimg: Option<PathBuf>,

    /// Path to the output image; .jpg/.jpeg writes JPEG, anything else PNG
    #[arg(long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Text to draw
    #[arg(long, default_value = "")]
    text: String,

    /// Settings file (default: ~/.config/textcard/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Canvas width, ignored with a background image
    #[arg(long)]
    width: Option<i32>,

    /// Canvas height, ignored with a background image
    #[arg(long)]
    height: Option<i32>,

    /// Font size in points; 0 fits the text to the canvas
    #[arg(long)]
    font_size: Option<f32>,

    /// Text color as #rgb or #rrggbb
    #[arg(long, value_name = "HEX")]
    text_color: Option<String>,

    /// Background color as #rgb or #rrggbb
    #[arg(long, value_name = "HEX")]
    bg_color: Option<String>,
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut settings = match &cli.config {
        Some(path) => Settings::load(path)?,
        None => Settings::load_default()?,
    };

    // Flags replace file values before anything is parsed, so a bad color in
    // the file does not matter when the flag overrides it.
    if let Some(path) = cli.fontpath {
        settings.font.path = Some(path);
    }
    if let Some(size) = cli.font_size {
        settings.font.size = size;
    }
    if let Some(path) = cli.bgimg {
        settings.canvas.background_image = Some(path);
    }
    if let Some(width) = cli.width {
        settings.canvas.width = width;
    }
    if let Some(height) = cli.height {
        settings.canvas.height = height;
    }
    if cli.text_color.is_some() {
        settings.canvas.text_color = cli.text_color;
    }
    if cli.bg_color.is_some() {
        settings.canvas.background_color = cli.bg_color;
    }
    if let Some(path) = cli.output {
        settings.output.path = path;
    }

    let config = settings.drawer_config()?;
    let output = settings.output.path;
    let drawer = Drawer::new(config)?;
    let image = drawer.draw(&cli.text)?;
    save_image(&image, &output, settings.output.jpeg_quality)?;

    info!("Wrote {}", output.display());
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run(Cli::parse()) {
        Ok(()) => {
            println!("Success");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
