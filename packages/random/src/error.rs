use thiserror::Error;

/// Random generation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RandomError {
    /// The half-open range `[min, max)` contains no values
    #[error("Empty range: [{min}, {max})")]
    EmptyRange {
        /// Lower bound as given
        min: String,
        /// Upper bound as given
        max: String,
    },

    /// A float bound was NaN or infinite
    #[error("Range bounds must be finite")]
    NonFinite,
}

impl From<RandomError> for trinkets_common::Error {
    fn from(e: RandomError) -> Self {
        trinkets_common::Error::with_source(trinkets_common::ErrorKind::Random, e)
    }
}

/// Result type for random generation
pub type Result<T> = std::result::Result<T, RandomError>;
