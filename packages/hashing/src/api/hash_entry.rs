//! Entry point for the fluent hashing API

use super::hash_builder::HashBuilder;
use crate::{HashAlgorithm, Result};

/// Entry point for hash operations
pub struct Hash;

impl Hash {
    /// Use any supported algorithm
    #[must_use]
    pub fn algorithm(algorithm: HashAlgorithm) -> HashBuilder {
        HashBuilder::new(algorithm)
    }

    /// Use the algorithm named by `id`, e.g. `"SHA-384"`
    ///
    /// # Errors
    ///
    /// Returns `HashError::UnsupportedAlgorithm` for unknown identifiers.
    pub fn named(id: &str) -> Result<HashBuilder> {
        Ok(HashBuilder::new(id.parse()?))
    }

    /// Use SHA-256
    #[must_use]
    pub fn sha256() -> HashBuilder {
        HashBuilder::new(HashAlgorithm::Sha256)
    }

    /// Use SHA-512
    #[must_use]
    pub fn sha512() -> HashBuilder {
        HashBuilder::new(HashAlgorithm::Sha512)
    }

    /// Use SHA3-256
    #[must_use]
    pub fn sha3_256() -> HashBuilder {
        HashBuilder::new(HashAlgorithm::Sha3_256)
    }

    /// Use BLAKE2b-512
    #[must_use]
    pub fn blake2b() -> HashBuilder {
        HashBuilder::new(HashAlgorithm::Blake2b512)
    }

    /// Use BLAKE3
    #[must_use]
    pub fn blake3() -> HashBuilder {
        HashBuilder::new(HashAlgorithm::Blake3)
    }
}
