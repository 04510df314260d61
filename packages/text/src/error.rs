use thiserror::Error;

/// Text processing errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TextError {
    /// Lines shorter than two characters cannot hold a hyphenated fragment
    #[error("Line width must be at least 2, got {0}")]
    InvalidWidth(usize),

    /// Hyphen thresholds must be finite and non-negative
    #[error("Invalid hyphen threshold: {0}")]
    InvalidThreshold(f64),

    /// A delimiter or literal pattern failed to compile
    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),
}

impl From<TextError> for trinkets_common::Error {
    fn from(e: TextError) -> Self {
        trinkets_common::Error::with_source(trinkets_common::ErrorKind::Text, e)
    }
}

/// Result type for text operations
pub type Result<T> = std::result::Result<T, TextError>;
