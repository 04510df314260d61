use serde::{Deserialize, Serialize};
use trinkets_hashing::HashAlgorithm;

/// JSON header of a signed token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenHeader {
    /// Canonical name of the HMAC digest, e.g. `"SHA-256"`
    pub alg: String,
    /// Always `"JWT"`
    pub typ: String,
}

impl TokenHeader {
    #[must_use]
    pub(crate) fn new(algorithm: HashAlgorithm) -> Self {
        Self {
            alg: algorithm.name().to_string(),
            typ: "JWT".to_string(),
        }
    }
}
