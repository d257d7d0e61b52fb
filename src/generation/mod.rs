//! Sound-effect generation module.
//!
//! Filtered noise shaped by an attack/decay envelope, and the render
//! pipeline that writes it to disk.

pub mod envelope;
pub mod noise;
pub mod pipeline;

// Re-export commonly used items
pub use envelope::Envelope;
pub use noise::FilteredNoise;
pub use pipeline::{generate, generate_with_rng, render, RenderReport};
