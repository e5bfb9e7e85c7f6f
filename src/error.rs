//! Error types with a tailored exit status.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PeekError {
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Unsupported destination format: {0}")]
    UnsupportedDestinationFormat(String),

    #[error("Empty dataset.")]
    EmptySample,

    #[error("Invalid delimiter '{0}': expected a single ASCII character or \\t")]
    InvalidDelimiter(String),
}

impl PeekError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            PeekError::UnsupportedDestinationFormat(_) => 2,
            PeekError::EmptySample
            | PeekError::UnsupportedFormat(_)
            | PeekError::InvalidDelimiter(_) => 1,
        }
    }

    /// Business-rule failures that are rendered as a notice on the output
    /// instead of a generic diagnostic on stderr.
    pub fn is_reported(&self) -> bool {
        matches!(
            self,
            PeekError::UnsupportedDestinationFormat(_) | PeekError::EmptySample
        )
    }
}
