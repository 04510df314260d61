//! Signing and verification
//!
//! The synchronous cores work on `serde_json::Value` so the typed async
//! entry points only add (de)serialization and a yield point.

use crate::codec::{base64_url_decode, base64_url_encode, decode_json, encode_json, split_token};
use crate::{Result, SignOptions, TokenError, TokenHeader};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use trinkets_common::LoggingTransformer;
use trinkets_hashing::{HashAlgorithm, hmac, verify_hmac};

fn apply_salt(payload: &mut Value, options: &SignOptions) -> Result<()> {
    let Some(field) = options.salt_field.as_deref() else {
        return Ok(());
    };
    let Value::Object(map) = payload else {
        return Err(TokenError::InvalidPayload(format!(
            "salting into '{field}' requires a JSON object payload"
        )));
    };
    let salt = trinkets_random::random_bytes(options.salt_len);
    map.insert(field.to_string(), Value::String(base64_url_encode(&salt)));
    Ok(())
}

fn strip_salt(payload: &mut Value, options: &SignOptions) {
    if let (Some(field), Value::Object(map)) = (options.salt_field.as_deref(), payload) {
        map.remove(field);
    }
}

pub(crate) fn sign_value(
    mut payload: Value,
    algorithm: HashAlgorithm,
    key: &[u8],
    options: &SignOptions,
) -> Result<String> {
    apply_salt(&mut payload, options)?;

    let header_b64 = encode_json(&TokenHeader::new(algorithm))?;
    let payload_b64 = encode_json(&payload)?;
    let message = format!("{header_b64}.{payload_b64}");

    let signature = hmac(message.as_bytes(), key, algorithm)?;
    let signature_b64 = base64_url_encode(signature.as_bytes());

    Ok(format!("{message}.{signature_b64}"))
}

pub(crate) fn verify_value(
    token: &str,
    algorithm: HashAlgorithm,
    key: &[u8],
    options: &SignOptions,
) -> Result<Value> {
    let (header_b64, payload_b64, signature_b64) = split_token(token)?;

    let header: TokenHeader = decode_json(header_b64, "header")?;
    if header.alg != algorithm.name() {
        return Err(TokenError::AlgorithmMismatch {
            expected: algorithm.name().to_string(),
            found: header.alg,
        });
    }

    let signature = base64_url_decode(signature_b64, "signature")?;
    let message = &token[..header_b64.len() + 1 + payload_b64.len()];
    if !verify_hmac(message.as_bytes(), key, algorithm, &signature)? {
        return Err(TokenError::InvalidSignature);
    }

    let mut payload: Value = decode_json(payload_b64, "payload")?;
    strip_salt(&mut payload, options);
    Ok(payload)
}

/// Serialize `data`, optionally salt it, and sign it with `key`
///
/// # Errors
///
/// - `TokenError::Serialization` if `data` cannot be represented as JSON
/// - `TokenError::InvalidPayload` if salting is enabled and `data` is not a JSON object
/// - `TokenError::Hash` if `algorithm` has no HMAC form (BLAKE3)
pub async fn encode_and_sign<T: Serialize + ?Sized>(
    data: &T,
    algorithm: HashAlgorithm,
    key: &[u8],
    options: &SignOptions,
) -> Result<String> {
    let payload = serde_json::to_value(data).map_err(|e| TokenError::serialization(&e))?;

    tokio::task::yield_now().await;

    let token = sign_value(payload, algorithm, key, options).inspect_err(|e| {
        LoggingTransformer::log_crypto_error("token sign", e);
    })?;
    tracing::debug!(algorithm = %algorithm, len = token.len(), "signed token");
    Ok(token)
}

/// Verify `token` against `key` and decode its payload
///
/// The salt field named in `options`, if any, is removed before the payload
/// is deserialized into `T`.
///
/// # Errors
///
/// - `TokenError::Malformed` for a token that is not three base64url JSON segments
/// - `TokenError::AlgorithmMismatch` if the header names another algorithm
/// - `TokenError::InvalidSignature` if the HMAC does not match
/// - `TokenError::Serialization` if the payload does not fit `T`
pub async fn decode_and_verify<T: DeserializeOwned>(
    token: &str,
    algorithm: HashAlgorithm,
    key: &[u8],
    options: &SignOptions,
) -> Result<T> {
    tokio::task::yield_now().await;

    let payload = match verify_value(token, algorithm, key, options) {
        Ok(payload) => payload,
        Err(e) => {
            LoggingTransformer::log_keyed_operation("token verify", key, false);
            tracing::debug!(error = %e, "token rejected");
            return Err(e);
        }
    };
    LoggingTransformer::log_keyed_operation("token verify", key, true);

    serde_json::from_value(payload).map_err(|e| TokenError::serialization(&e))
}
