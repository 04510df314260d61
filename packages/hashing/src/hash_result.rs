//! Digest output tagged with the algorithm that produced it

use crate::{Encoded, Encoding, HashAlgorithm};
use base64::{Engine as _, engine::general_purpose::STANDARD};

/// Digest bytes plus the algorithm they came from
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HashResult {
    algorithm: HashAlgorithm,
    bytes: Vec<u8>,
}

impl HashResult {
    pub(crate) fn new(algorithm: HashAlgorithm, bytes: Vec<u8>) -> Self {
        Self { algorithm, bytes }
    }

    /// Algorithm that produced this digest
    #[must_use]
    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    /// Raw digest bytes
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consume into the raw digest bytes
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Lowercase hex
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(&self.bytes)
    }

    /// Standard padded Base64
    #[must_use]
    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.bytes)
    }

    /// URL-safe Base64 without padding
    #[must_use]
    pub fn to_base64url(&self) -> String {
        base64_url::encode(&self.bytes)
    }

    /// Render the digest in the requested encoding
    #[must_use]
    pub fn encode(self, encoding: Encoding) -> Encoded {
        match encoding {
            Encoding::Raw => Encoded::Bytes(self.bytes),
            Encoding::Hex => Encoded::Text(self.to_hex()),
            Encoding::Base64 => Encoded::Text(self.to_base64()),
            Encoding::Base64Url => Encoded::Text(self.to_base64url()),
        }
    }

    /// Digest length in bytes
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always false for a real digest; present for API symmetry with `len`
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl AsRef<[u8]> for HashResult {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl std::fmt::Display for HashResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.algorithm, self.to_hex())
    }
}
