//! Error handling for the hashing crate

use crate::HashAlgorithm;
use thiserror::Error;

/// Hashing-specific errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HashError {
    /// The identifier does not name a supported digest
    #[error("Unsupported hash algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// The digest has no HMAC construction here
    #[error("HMAC is not supported for {0}")]
    UnsupportedHmac(HashAlgorithm),

    /// The identifier does not name a supported output encoding
    #[error("Unsupported encoding: {0}")]
    UnsupportedEncoding(String),

    /// The MAC rejected its key
    #[error("MAC initialization error: {0}")]
    MacInitialization(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl HashError {
    /// Create an internal error
    #[must_use]
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

impl From<HashError> for trinkets_common::Error {
    fn from(e: HashError) -> Self {
        trinkets_common::Error::with_source(trinkets_common::ErrorKind::Hashing, e)
    }
}

/// Result type for hashing operations
pub type Result<T> = std::result::Result<T, HashError>;
