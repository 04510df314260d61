//! Minimal HMAC-signed tokens
//!
//! A token is `base64url(header).base64url(payload).base64url(signature)`
//! where the signature is an HMAC over the first two segments joined by `.`.
//! The format borrows the JWT layout but is not a JWT implementation:
//! there are no registered claims and no expiry handling.

mod codec;
mod error;
mod operations;
mod options;
mod signer;
mod types;

pub use error::{Result, TokenError};
pub use operations::{decode_and_verify, encode_and_sign};
pub use options::SignOptions;
pub use signer::TokenSigner;
pub use types::TokenHeader;

pub use trinkets_hashing::HashAlgorithm;
