//! Token master builder

use trinkets_hashing::HashAlgorithm;
use trinkets_token::{SignOptions, TokenSigner};

/// Collects the algorithm and options for a [`TokenSigner`]
#[derive(Debug, Clone, Default)]
pub struct TokenMasterBuilder {
    algorithm: HashAlgorithm,
    options: SignOptions,
}

impl TokenMasterBuilder {
    /// Sign with any HMAC-capable algorithm
    #[must_use]
    pub fn algorithm(mut self, algorithm: HashAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Sign with HMAC-SHA-256 (the default)
    #[must_use]
    pub fn sha256(self) -> Self {
        self.algorithm(HashAlgorithm::Sha256)
    }

    /// Sign with HMAC-SHA-512
    #[must_use]
    pub fn sha512(self) -> Self {
        self.algorithm(HashAlgorithm::Sha512)
    }

    /// Salt payloads under `field`
    #[must_use]
    pub fn salted(mut self, field: impl Into<String>) -> Self {
        self.options = self.options.salted(field);
        self
    }

    /// Replace the signing options
    #[must_use]
    pub fn with_options(mut self, options: SignOptions) -> Self {
        self.options = options;
        self
    }

    /// Finish with the signing key
    #[must_use]
    pub fn with_key(self, key: impl Into<Vec<u8>>) -> TokenSigner {
        TokenSigner::new(self.algorithm, key).with_options(self.options)
    }
}
