use crate::orientation::CaptureOrientation;
use crate::types::Dimensions;
use clap::Parser;
use std::path::PathBuf;

/// Normalize raw 32-bit float depth maps into the [0, 1] range
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Raw little-endian f32 depth file(s) to normalize
    #[arg(value_name = "FILE", requires_all = ["width", "height"])]
    pub files: Vec<PathBuf>,

    /// Samples per row
    #[arg(short = 'W', long)]
    pub width: Option<u32>,

    /// Number of rows
    #[arg(short = 'H', long)]
    pub height: Option<u32>,

    /// Capture orientation the depth maps were taken in
    #[arg(short, long, value_enum, default_value_t = CaptureOrientation::LandscapeRight)]
    pub orientation: CaptureOrientation,

    /// Directory to write `<name>.normalized.f32` files into
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Fail on depth maps with a zero range instead of writing NaN
    #[arg(long)]
    pub strict: bool,

    /// Show a summary for every depth map
    #[arg(short, long)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,
}

impl Args {
    /// Frame size from `--width`/`--height`; a missing side is zero, which
    /// decoding rejects
    #[must_use]
    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.width.unwrap_or(0), self.height.unwrap_or(0))
    }
}
