//! # Error Types
//!
//! This module defines error types used throughout the ikonograf library.
//!
//! The rendering core (sampler, packer, fitter, color math) is total and
//! never fails; errors only arise at the I/O shell around it.

use thiserror::Error;

/// Main error type for ikonograf operations
#[derive(Debug, Error)]
pub enum IkonografError {
    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON input (comment list or preset file)
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Image decoding or encoding error
    #[error("Image error: {0}")]
    Image(String),

    /// Font loading error
    #[error("Font error: {0}")]
    Font(String),

    /// Unknown preset selector
    #[error("Preset error: {0}")]
    Preset(String),

    /// Invalid command-line argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
