//! Core error types and definitions

use std::sync::Arc;
use thiserror::Error;

/// Core error type with context propagation support
#[derive(Debug, Clone)]
pub struct Error {
    pub(super) inner: Arc<ErrorInner>,
}

#[derive(Debug)]
pub(super) struct ErrorInner {
    pub kind: ErrorKind,
    pub context: Option<String>,
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
    #[cfg(feature = "full-backtrace")]
    pub backtrace: backtrace::Backtrace,
}

/// Different kinds of errors that can occur
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// Digest or HMAC computation failed
    #[error("Hashing error")]
    Hashing,

    /// Signed token could not be produced or was rejected
    #[error("Token error")]
    Token,

    /// Random generation was asked for an impossible range
    #[error("Random generation error")]
    Random,

    /// Text processing errors (wrapping, regex construction)
    #[error("Text processing error")]
    Text,

    /// Network related errors
    #[error("Network error")]
    Network,

    /// Operation timeout
    #[error("Operation timed out")]
    Timeout,

    /// A wrapped closure or future panicked
    #[error("Operation panicked")]
    Panicked,

    /// Validation errors
    #[error("Validation error")]
    Validation,

    /// JSON encoding or decoding failed
    #[error("Serialization error")]
    Serialization,

    /// Internal error
    #[error("Internal error")]
    Internal,

    /// Other error with custom message
    #[error("{0}")]
    Other(String),
}

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;
