//! generate-fart-wav: renders the UltraRunner bathroom sound effect.
//!
//! Prints one status line to stdout on success. Diagnostics go to stderr
//! and are controlled by `RUST_LOG`.

use tracing_subscriber::EnvFilter;

use ultrarunner_sfx::cli::Cli;
use ultrarunner_sfx::config::SynthParams;
use ultrarunner_sfx::error::Result;
use ultrarunner_sfx::generation::render;

fn main() {
    init_logging();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse_args();
    let output_path = cli.output_path();

    let report = render(&SynthParams::default(), &output_path, cli.seed)?;
    println!("{}", report);

    Ok(())
}
