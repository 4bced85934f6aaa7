//! Error types for email scrubbing

use thiserror::Error;

/// Errors that can occur while scrubbing an email
#[derive(Error, Debug)]
pub enum ScrubError {
    /// Threshold outside the accepted [0, 1] range
    #[error("threshold must be within [0, 1], got {0}")]
    InvalidThreshold(f64),

    /// Failed to read the input file or write the cleaned copy
    #[error("failed to read or write email file: {0}")]
    Io(#[from] std::io::Error),
}

/// The part-of-speech signal could not be obtained for a line.
///
/// Recoverable: the classifier keeps the line and carries on.
#[derive(Error, Debug)]
#[error("part-of-speech tagger unavailable: {0}")]
pub struct TaggerUnavailable(pub String);

/// Result type for scrubbing operations
pub type Result<T> = std::result::Result<T, ScrubError>;
