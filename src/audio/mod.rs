//! Audio output module.
//!
//! Provides 16-bit PCM WAV file writing for rendered effects.

pub mod wav;

// Re-export commonly used items
pub use wav::{
    encode_wav, expected_file_len, quantize, write_wav, BITS_PER_SAMPLE, CHANNELS, HEADER_LEN,
};
