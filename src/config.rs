// Command-line configuration for the painting window.

use std::path::PathBuf;

use clap::Parser;

use crate::types::{Color, DEFAULT_TOLERANCE};

/// Keys 1-8 pick these.
pub const PALETTE: [Color; 8] = [
    Color::rgb(0x00, 0x00, 0x00),
    Color::rgb(0xE5, 0x39, 0x35),
    Color::rgb(0xFB, 0x8C, 0x00),
    Color::rgb(0xFD, 0xD8, 0x35),
    Color::rgb(0x43, 0xA0, 0x47),
    Color::rgb(0x1E, 0x88, 0xE5),
    Color::rgb(0x8E, 0x24, 0xAA),
    Color::rgb(0xFF, 0xFF, 0xFF),
];

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Coloring-book painter: strokes stay inside the region you start in")]
pub struct Config {
    /// Base artwork (any format the image crate decodes). A demo page is drawn when omitted.
    pub image: Option<PathBuf>,

    /// Canvas width in pixels; the artwork is scaled to fit
    #[arg(long, default_value_t = 640, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    /// Canvas height in pixels
    #[arg(long, default_value_t = 480, value_parser = clap::value_parser!(u32).range(1..))]
    pub height: u32,

    /// Per-channel color slack when finding regions
    #[arg(long, default_value_t = DEFAULT_TOLERANCE)]
    pub tolerance: u8,

    /// Brush diameter in pixels
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u32).range(1..))]
    pub brush_size: u32,

    /// Starting paint color, #rgb or #rrggbb
    #[arg(long, default_value = "#000000", value_parser = parse_color)]
    pub color: Color,
}

fn parse_color(text: &str) -> Result<Color, String> {
    Color::from_hex(text).map_err(|e| e.to_string())
}
