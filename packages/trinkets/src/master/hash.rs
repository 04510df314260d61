//! Hash master builder

use trinkets_hashing::{Hash, HashAlgorithm, HashBuilder};

/// Picks the algorithm for a [`HashBuilder`]
pub struct HashMasterBuilder;

impl HashMasterBuilder {
    /// Use any supported algorithm
    #[must_use]
    pub fn algorithm(self, algorithm: HashAlgorithm) -> HashBuilder {
        Hash::algorithm(algorithm)
    }

    /// Use the algorithm named by `id`
    ///
    /// # Errors
    ///
    /// Returns `HashError::UnsupportedAlgorithm` for unknown identifiers.
    pub fn named(self, id: &str) -> trinkets_hashing::Result<HashBuilder> {
        Hash::named(id)
    }

    /// Use SHA-1
    #[must_use]
    pub fn sha1(self) -> HashBuilder {
        Hash::algorithm(HashAlgorithm::Sha1)
    }

    /// Use SHA-256
    #[must_use]
    pub fn sha256(self) -> HashBuilder {
        Hash::sha256()
    }

    /// Use SHA-512
    #[must_use]
    pub fn sha512(self) -> HashBuilder {
        Hash::sha512()
    }

    /// Use SHA3-256
    #[must_use]
    pub fn sha3_256(self) -> HashBuilder {
        Hash::sha3_256()
    }

    /// Use `BLAKE2b`
    #[must_use]
    pub fn blake2b(self) -> HashBuilder {
        Hash::blake2b()
    }

    /// Use BLAKE3
    #[must_use]
    pub fn blake3(self) -> HashBuilder {
        Hash::blake3()
    }
}
