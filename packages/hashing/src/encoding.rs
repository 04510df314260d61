//! Output encodings for digests

use crate::HashError;
use std::str::FromStr;

/// How a digest is handed back to the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Encoding {
    /// Raw digest bytes
    Raw,
    /// Lowercase hexadecimal
    #[default]
    Hex,
    /// Standard Base64 with padding
    Base64,
    /// URL-safe Base64 without padding
    Base64Url,
}

impl FromStr for Encoding {
    type Err = HashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "raw" | "bytes" | "buffer" => Ok(Self::Raw),
            "hex" => Ok(Self::Hex),
            "base64" => Ok(Self::Base64),
            "base64url" | "base64-url" => Ok(Self::Base64Url),
            _ => Err(HashError::UnsupportedEncoding(s.to_string())),
        }
    }
}

/// An encoded digest: bytes for [`Encoding::Raw`], text for everything else
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Encoded {
    /// Raw bytes
    Bytes(Vec<u8>),
    /// Hex or Base64 text
    Text(String),
}

impl Encoded {
    /// Borrow the output as bytes (text is returned as its UTF-8 bytes)
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Bytes(bytes) => bytes,
            Self::Text(text) => text.as_bytes(),
        }
    }

    /// Borrow the output as text, if it was text-encoded
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Bytes(_) => None,
            Self::Text(text) => Some(text),
        }
    }

    /// Take the output as text, if it was text-encoded
    #[must_use]
    pub fn into_text(self) -> Option<String> {
        match self {
            Self::Bytes(_) => None,
            Self::Text(text) => Some(text),
        }
    }
}
