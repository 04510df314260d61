//! Reusable signer that owns its key

use crate::{Result, SignOptions, decode_and_verify, encode_and_sign};
use serde::Serialize;
use serde::de::DeserializeOwned;
use trinkets_hashing::HashAlgorithm;
use zeroize::Zeroizing;

/// Signs and verifies tokens with a fixed algorithm, key and options
///
/// The key is zeroed when the signer is dropped.
#[derive(Clone)]
pub struct TokenSigner {
    algorithm: HashAlgorithm,
    key: Zeroizing<Vec<u8>>,
    options: SignOptions,
}

impl TokenSigner {
    /// Create a signer for `algorithm` keyed with `key`
    pub fn new(algorithm: HashAlgorithm, key: impl Into<Vec<u8>>) -> Self {
        Self {
            algorithm,
            key: Zeroizing::new(key.into()),
            options: SignOptions::default(),
        }
    }

    /// Replace the signing options
    #[must_use]
    pub fn with_options(mut self, options: SignOptions) -> Self {
        self.options = options;
        self
    }

    /// Salt payloads under `field`
    #[must_use]
    pub fn salted(mut self, field: impl Into<String>) -> Self {
        self.options = self.options.salted(field);
        self
    }

    /// The signing algorithm
    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    /// The signing options
    pub fn options(&self) -> &SignOptions {
        &self.options
    }

    /// Sign `data`; see [`encode_and_sign`]
    ///
    /// # Errors
    ///
    /// Propagates the errors of [`encode_and_sign`].
    pub async fn sign<T: Serialize + ?Sized>(&self, data: &T) -> Result<String> {
        encode_and_sign(data, self.algorithm, &self.key, &self.options).await
    }

    /// Verify `token` and decode its payload; see [`decode_and_verify`]
    ///
    /// # Errors
    ///
    /// Propagates the errors of [`decode_and_verify`].
    pub async fn verify<T: DeserializeOwned>(&self, token: &str) -> Result<T> {
        decode_and_verify(token, self.algorithm, &self.key, &self.options).await
    }
}

impl std::fmt::Debug for TokenSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenSigner")
            .field("algorithm", &self.algorithm)
            .field("key", &"<redacted>")
            .field("options", &self.options)
            .finish()
    }
}
