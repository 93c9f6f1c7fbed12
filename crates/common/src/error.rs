//! Error types shared across the affect crates.

use std::path::PathBuf;

/// Top-level error type for affect analysis operations.
#[derive(Debug, thiserror::Error)]
pub enum AffectError {
    #[error("Detection error: {message}")]
    Detection { message: String },

    #[error("Frame source error: {message}")]
    FrameSource { message: String },

    #[error("Invalid emotion distribution: {message}")]
    InvalidDistribution { message: String },

    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias using AffectError.
pub type AffectResult<T> = Result<T, AffectError>;

impl AffectError {
    pub fn detection(msg: impl Into<String>) -> Self {
        Self::Detection {
            message: msg.into(),
        }
    }

    pub fn frame_source(msg: impl Into<String>) -> Self {
        Self::FrameSource {
            message: msg.into(),
        }
    }

    pub fn invalid_distribution(msg: impl Into<String>) -> Self {
        Self::InvalidDistribution {
            message: msg.into(),
        }
    }

    pub fn parse(line: usize, msg: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: msg.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Whether this error was raised by the face-emotion detector.
    pub fn is_detection(&self) -> bool {
        matches!(self, Self::Detection { .. })
    }
}
