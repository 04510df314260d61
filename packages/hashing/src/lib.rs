//! Digest and HMAC hashing with selectable algorithm and output encoding
//!
//! Two equivalent entry points:
//! - free functions: `hash(data, algorithm, encoding).await`
//! - fluent builder: `Hash::sha256().with_key(key).compute(data).await`

#![forbid(unsafe_code)]

pub mod algorithm;
pub mod api;
pub mod async_result;
pub mod encoding;
pub mod error;
pub mod hash_functions;
pub mod hash_result;

pub use algorithm::HashAlgorithm;
pub use api::{Hash, HashBuilder, HashBuilderWithHandler};
pub use async_result::{AsyncHashResult, AsyncHashResultWithHandler};
pub use encoding::{Encoded, Encoding};
pub use error::{HashError, Result};
pub use hash_functions::{digest, hash, hmac, hmac_hash, verify_hmac};
pub use hash_result::HashResult;
