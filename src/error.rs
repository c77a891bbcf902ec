use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the SVGA transcoder library
#[derive(Error, Debug)]
pub enum SvgaError {
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    #[error("Output error: {0}")]
    Output(#[from] OutputError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Generic error: {0}")]
    Generic(String),
}

/// Errors raised while decoding the SVGA container and movie data
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Unsupported SVGA format version: {detail}")]
    UnsupportedFormatVersion { detail: String },

    #[error("Decompression failed: {reason}")]
    DecompressionFailed { reason: String },

    #[error("Malformed movie data: {reason}")]
    MalformedMovieData { reason: String },

    #[error("Input too large: {size} bytes (limit {limit})")]
    InputTooLarge { size: u64, limit: u64 },
}

/// Errors raised while writing output artifacts
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to create output directory: {path}")]
    DirectoryCreateFailed { path: String },

    #[error("Failed to write artifact: {path} - {reason}")]
    ArtifactWriteFailed { path: String, reason: String },

    /// The scene document (and possibly some images) landed on disk before a
    /// later write failed. The caller decides whether this is fatal.
    #[error("Partial write: {} file(s) written, {} failed", .written.len(), .failed.len())]
    PartialWrite {
        written: Vec<PathBuf>,
        failed: Vec<(PathBuf, String)>,
    },
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse configuration file: {path}")]
    ParseFailed { path: String },

    #[error("Invalid configuration value: {key} = {value}")]
    InvalidValue { key: String, value: String },

    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },
}

/// Convenience type alias for Results using SvgaError
pub type Result<T> = std::result::Result<T, SvgaError>;

impl SvgaError {
    /// Create a generic error with a custom message
    pub fn generic<S: Into<String>>(message: S) -> Self {
        Self::Generic(message.into())
    }

    /// Check if this error is recoverable (can be retried)
    pub fn is_recoverable(&self) -> bool {
        match self {
            // IO and output errors might be temporary (disk full, permissions)
            Self::Io(_) => true,
            Self::Output(_) => true,
            // Decode errors are structural and permanent
            Self::Decode(_) => false,
            _ => false,
        }
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Decode(DecodeError::UnsupportedFormatVersion { .. }) => {
                "This file uses the legacy SVGA v1 (ZIP-based) container. \
                 Only SVGA v2 files are supported."
                    .to_string()
            }
            Self::Decode(DecodeError::DecompressionFailed { .. }) => {
                "The file could not be decompressed. It is likely truncated or corrupt."
                    .to_string()
            }
            Self::Decode(DecodeError::MalformedMovieData { reason }) => {
                format!("The decompressed movie data is not valid SVGA v2: {}", reason)
            }
            Self::Config(ConfigError::FileNotFound { path }) => {
                format!("Configuration file '{}' not found.", path)
            }
            _ => self.to_string(),
        }
    }
}
