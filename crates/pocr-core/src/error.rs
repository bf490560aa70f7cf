//! Error types for the pocr-core library.

use std::process::ExitStatus;

use thiserror::Error;

/// Main error type for the pocr library.
#[derive(Error, Debug)]
pub enum PocrError {
    /// OCR engine error.
    #[error("OCR error: {0}")]
    Ocr(#[from] OcrError),

    /// Image processing error.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors raised by the external OCR engine.
#[derive(Error, Debug)]
pub enum OcrError {
    /// The engine binary could not be started.
    #[error("failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The engine ran but exited unsuccessfully.
    #[error("engine exited with {status}: {stderr}")]
    Failed { status: ExitStatus, stderr: String },

    /// The image could not be encoded for the engine.
    #[error("failed to encode image: {0}")]
    Encode(String),

    /// The engine output could not be read.
    #[error("unreadable engine output: {0}")]
    Output(String),
}

/// Field-level extraction failures.
///
/// These never leave the extraction stages; each one resolves its field to
/// an empty string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    /// Date text did not form a valid calendar date in any accepted format.
    #[error("invalid date: {raw:?}")]
    InvalidDate { raw: String },

    /// A fixed MRZ window fell outside the line.
    #[error("MRZ window for {field} is out of range")]
    MissingWindow { field: &'static str },
}

/// Result type for the pocr library.
pub type Result<T> = std::result::Result<T, PocrError>;
