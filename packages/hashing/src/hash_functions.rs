//! Digest and HMAC functions over the RustCrypto primitives
//!
//! The synchronous cores (`digest`, `hmac`) do the work; the async wrappers
//! (`hash`, `hmac_hash`) add encoding and a cooperative yield point.

use crate::{Encoded, Encoding, HashAlgorithm, HashError, HashResult, Result};
use blake2::Blake2b512;
use digest::Digest;
use hmac::digest::KeyInit;
use hmac::{Hmac, Mac, SimpleHmac};
use sha1::Sha1;
use sha2::{Sha256, Sha384, Sha512};
use sha3::{Sha3_256, Sha3_384, Sha3_512};
use subtle::ConstantTimeEq;

fn digest_with<D: Digest>(data: &[u8]) -> Vec<u8> {
    D::digest(data).to_vec()
}

fn mac_with<M: Mac + KeyInit>(key: &[u8], data: &[u8]) -> Result<Vec<u8>> {
    let mut mac = <M as KeyInit>::new_from_slice(key)
        .map_err(|e| HashError::MacInitialization(e.to_string()))?;
    mac.update(data);
    Ok(mac.finalize().into_bytes().to_vec())
}

/// Compute the digest of `data`
#[must_use]
pub fn digest(data: &[u8], algorithm: HashAlgorithm) -> HashResult {
    let bytes = match algorithm {
        HashAlgorithm::Sha1 => digest_with::<Sha1>(data),
        HashAlgorithm::Sha256 => digest_with::<Sha256>(data),
        HashAlgorithm::Sha384 => digest_with::<Sha384>(data),
        HashAlgorithm::Sha512 => digest_with::<Sha512>(data),
        HashAlgorithm::Sha3_256 => digest_with::<Sha3_256>(data),
        HashAlgorithm::Sha3_384 => digest_with::<Sha3_384>(data),
        HashAlgorithm::Sha3_512 => digest_with::<Sha3_512>(data),
        HashAlgorithm::Blake2b512 => digest_with::<Blake2b512>(data),
        HashAlgorithm::Blake3 => blake3::hash(data).as_bytes().to_vec(),
    };
    HashResult::new(algorithm, bytes)
}

/// Compute the HMAC of `data` under `key`
///
/// # Errors
///
/// Returns `HashError::UnsupportedHmac` for BLAKE3, which has its own keyed
/// mode instead of an HMAC construction.
pub fn hmac(data: &[u8], key: &[u8], algorithm: HashAlgorithm) -> Result<HashResult> {
    let bytes = match algorithm {
        HashAlgorithm::Sha1 => mac_with::<Hmac<Sha1>>(key, data)?,
        HashAlgorithm::Sha256 => mac_with::<Hmac<Sha256>>(key, data)?,
        HashAlgorithm::Sha384 => mac_with::<Hmac<Sha384>>(key, data)?,
        HashAlgorithm::Sha512 => mac_with::<Hmac<Sha512>>(key, data)?,
        // Sponge and BLAKE2 cores are not eager-buffered, so they need SimpleHmac
        HashAlgorithm::Sha3_256 => mac_with::<SimpleHmac<Sha3_256>>(key, data)?,
        HashAlgorithm::Sha3_384 => mac_with::<SimpleHmac<Sha3_384>>(key, data)?,
        HashAlgorithm::Sha3_512 => mac_with::<SimpleHmac<Sha3_512>>(key, data)?,
        HashAlgorithm::Blake2b512 => mac_with::<SimpleHmac<Blake2b512>>(key, data)?,
        HashAlgorithm::Blake3 => return Err(HashError::UnsupportedHmac(algorithm)),
    };
    Ok(HashResult::new(algorithm, bytes))
}

/// Check `expected` against the HMAC of `data` in constant time
///
/// # Errors
///
/// Propagates the errors of [`hmac`].
pub fn verify_hmac(
    data: &[u8],
    key: &[u8],
    algorithm: HashAlgorithm,
    expected: &[u8],
) -> Result<bool> {
    let actual = hmac(data, key, algorithm)?;
    Ok(actual.as_bytes().ct_eq(expected).into())
}

/// Hash `data` and return it in the requested encoding
///
/// # Errors
///
/// Infallible for every supported algorithm; the `Result` keeps the
/// signature aligned with [`hmac_hash`].
pub async fn hash(
    data: impl AsRef<[u8]>,
    algorithm: HashAlgorithm,
    encoding: Encoding,
) -> Result<Encoded> {
    let result = digest(data.as_ref(), algorithm);
    tracing::debug!(algorithm = %algorithm, len = data.as_ref().len(), "computed digest");

    tokio::task::yield_now().await;

    Ok(result.encode(encoding))
}

/// HMAC `data` under `key` and return it in the requested encoding
///
/// # Errors
///
/// Returns `HashError::UnsupportedHmac` when the algorithm has no HMAC form.
pub async fn hmac_hash(
    data: impl AsRef<[u8]>,
    key: impl AsRef<[u8]>,
    algorithm: HashAlgorithm,
    encoding: Encoding,
) -> Result<Encoded> {
    let result = hmac(data.as_ref(), key.as_ref(), algorithm).inspect_err(|e| {
        trinkets_common::LoggingTransformer::log_crypto_error("hmac", e);
    })?;
    tracing::debug!(algorithm = %algorithm, len = data.as_ref().len(), "computed hmac");

    tokio::task::yield_now().await;

    Ok(result.encode(encoding))
}
