use serde::Deserialize;

/// Salting configuration for token payloads
///
/// With a salt field set, `salt_len` random bytes (base64url) are inserted
/// into the payload object under that name before signing, so equal payloads
/// produce different tokens. Verification strips the field again.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SignOptions {
    /// Payload field that carries the salt; `None` disables salting
    pub salt_field: Option<String>,
    /// Number of random bytes in the salt
    pub salt_len: usize,
}

impl Default for SignOptions {
    fn default() -> Self {
        Self {
            salt_field: None,
            salt_len: 16,
        }
    }
}

impl SignOptions {
    /// No salting
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Salt under `field`
    #[must_use]
    pub fn salted(mut self, field: impl Into<String>) -> Self {
        self.salt_field = Some(field.into());
        self
    }

    /// Number of random salt bytes
    #[must_use]
    pub fn salt_len(mut self, len: usize) -> Self {
        self.salt_len = len;
        self
    }
}
