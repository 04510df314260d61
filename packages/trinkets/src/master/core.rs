//! Core master builder

use super::HashMasterBuilder;

#[cfg(feature = "token")]
use super::TokenMasterBuilder;

/// Unified entry point for the builder-style APIs
pub struct Trinkets;

impl Trinkets {
    /// Entry point for hashing
    /// Example: `Trinkets::hash().sha256().compute(data).await`
    #[must_use]
    pub fn hash() -> HashMasterBuilder {
        HashMasterBuilder
    }

    /// Entry point for signed tokens
    /// Example: `Trinkets::token().sha512().with_key(key).sign(&claims).await`
    #[cfg(feature = "token")]
    #[must_use]
    pub fn token() -> TokenMasterBuilder {
        TokenMasterBuilder::default()
    }
}
