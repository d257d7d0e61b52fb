//! CLI argument parser.
//!
//! Every argument is optional: running with none renders the asset to its
//! default location with fresh random noise.

use std::path::PathBuf;

use clap::Parser;

use crate::config::default_output_path;

/// generate-fart-wav: render the UltraRunner bathroom sound effect
#[derive(Parser, Debug)]
#[command(name = "generate-fart-wav")]
#[command(about = "Render the UltraRunner fart sound effect to a 16-bit mono WAV file")]
#[command(version)]
pub struct Cli {
    /// Random seed for reproducible output
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Output WAV file path (defaults to ../UltraRunner/fart.wav next to this crate)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl Cli {
    /// Parses command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// Returns the effective output path.
    pub fn output_path(&self) -> PathBuf {
        self.output.clone().unwrap_or_else(default_output_path)
    }
}
