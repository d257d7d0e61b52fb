//! ultrarunner-sfx: procedural sound effects for UltraRunner.
//!
//! Renders the short "fart" effect used in the game's bathroom scene:
//! one-pole low-passed white noise under an attack/decay envelope, written
//! as a mono 16-bit PCM WAV file.
//!
//! # Modules
//!
//! - [`config`]: Fixed synthesis parameters and output location
//! - [`generation`]: Envelope, filtered noise and the render pipeline
//! - [`audio`]: WAV encoding
//! - [`error`]: Error types and codes (SfxError, ErrorCode)
//!
//! # Example
//!
//! ```rust,ignore
//! use ultrarunner_sfx::{render, SynthParams};
//!
//! let report = render(&SynthParams::default(), Path::new("fart.wav"), Some(42))?;
//! println!("{}", report);
//! ```

pub mod audio;
pub mod cli;
pub mod config;
pub mod error;
pub mod generation;

// Re-export commonly used types at crate root for convenience
pub use config::{default_output_path, SynthParams};
pub use error::{ErrorCode, Result, SfxError};
pub use generation::{generate, render, RenderReport};
