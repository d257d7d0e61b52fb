//! Error types for the sound-effect generator.
//!
//! Generation itself cannot fail; every error comes from the filesystem
//! while placing the rendered WAV file, or from hand-built parameters.

use std::fmt;

/// Error codes identifying the failure class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// The output directory could not be created.
    /// Trigger: Permissions, invalid path, disk full.
    OutputDirFailed,

    /// The WAV file could not be created, written or finalized.
    /// Trigger: Permissions, path is a directory, disk full.
    WavWriteFailed,

    /// Synthesis parameters are out of range.
    /// Trigger: Hand-built `SynthParams` with a zero rate or bad duration.
    InvalidParams,
}

impl ErrorCode {
    /// Returns the string representation of the error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::OutputDirFailed => "OUTPUT_DIR_FAILED",
            ErrorCode::WavWriteFailed => "WAV_WRITE_FAILED",
            ErrorCode::InvalidParams => "INVALID_PARAMS",
        }
    }

    /// Returns a recovery hint suggesting how to resolve this error.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCode::OutputDirFailed => {
                "Check write permissions on the parent directory and available disk space, \
                 or pass --output to write somewhere else"
            }
            ErrorCode::WavWriteFailed => {
                "Check that the output path is not a directory, that it is writable, \
                 and that the disk is not full. The file is fully rewritten on the next run"
            }
            ErrorCode::InvalidParams => {
                "Use SynthParams::default() or keep sample_rate > 0, duration > 0 \
                 and filter_retention in [0, 1)"
            }
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Main error type for generator operations.
#[derive(Debug)]
pub struct SfxError {
    /// The error code identifying the type of error.
    pub code: ErrorCode,
    /// Human-readable error message with context.
    pub message: String,
    /// Optional underlying cause of the error.
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl SfxError {
    /// Creates a new SfxError with the given code and message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new SfxError with an underlying cause.
    pub fn with_source(
        code: ErrorCode,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates an OUTPUT_DIR_FAILED error.
    pub fn output_dir_failed(
        dir: impl fmt::Display,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        let message = format!("Failed to create output directory {}: {}", dir, source);
        Self::with_source(ErrorCode::OutputDirFailed, message, source)
    }

    /// Creates a WAV_WRITE_FAILED error.
    pub fn wav_write_failed(
        reason: impl fmt::Display,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        let message = format!("{}: {}", reason, source);
        Self::with_source(ErrorCode::WavWriteFailed, message, source)
    }

    /// Creates an INVALID_PARAMS error.
    pub fn invalid_params(reason: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::InvalidParams,
            format!("Invalid synthesis parameters: {}", reason.into()),
        )
    }
}

impl fmt::Display for SfxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}. Recovery: {}",
            self.code,
            self.message,
            self.code.recovery_hint()
        )
    }
}

impl std::error::Error for SfxError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Result type alias using SfxError.
pub type Result<T> = std::result::Result<T, SfxError>;
