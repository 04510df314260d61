//! Token error types

use thiserror::Error;
use trinkets_hashing::HashError;

/// Token operation result type
pub type Result<T> = std::result::Result<T, TokenError>;

/// Token error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Not three segments, or a segment is not valid base64url/JSON
    #[error("Malformed token: {0}")]
    Malformed(String),

    /// The recomputed HMAC does not match the token's signature
    #[error("Invalid token signature")]
    InvalidSignature,

    /// The header names a different algorithm than the verifier expects
    #[error("Algorithm mismatch: expected {expected}, found {found}")]
    AlgorithmMismatch {
        /// Algorithm the verifier was configured with
        expected: String,
        /// Algorithm named in the token header
        found: String,
    },

    /// Salting needs the payload to be a JSON object
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    /// The payload could not be converted to or from JSON
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// HMAC computation failed
    #[error(transparent)]
    Hash(#[from] HashError),
}

impl TokenError {
    #[inline]
    pub(crate) fn malformed(msg: &str) -> Self {
        TokenError::Malformed(msg.to_string())
    }

    #[inline]
    pub(crate) fn serialization(e: &serde_json::Error) -> Self {
        TokenError::Serialization(e.to_string())
    }
}

impl From<TokenError> for trinkets_common::Error {
    fn from(e: TokenError) -> Self {
        let kind = match e {
            TokenError::Serialization(_) => trinkets_common::ErrorKind::Serialization,
            _ => trinkets_common::ErrorKind::Token,
        };
        trinkets_common::Error::with_source(kind, e)
    }
}
