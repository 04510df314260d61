//! Segment encoding: base64url without padding over JSON

use crate::{Result, TokenError};
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use serde::Serialize;
use serde::de::DeserializeOwned;

#[inline]
pub(crate) fn base64_url_encode(input: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(input)
}

#[inline]
pub(crate) fn base64_url_decode(input: &str, segment: &str) -> Result<Vec<u8>> {
    URL_SAFE_NO_PAD
        .decode(input)
        .map_err(|_| TokenError::Malformed(format!("invalid {segment} encoding")))
}

pub(crate) fn encode_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let json = serde_json::to_vec(value).map_err(|e| TokenError::serialization(&e))?;
    Ok(base64_url_encode(&json))
}

pub(crate) fn decode_json<T: DeserializeOwned>(input: &str, segment: &str) -> Result<T> {
    let bytes = base64_url_decode(input, segment)?;
    serde_json::from_slice(&bytes)
        .map_err(|_| TokenError::Malformed(format!("invalid {segment} JSON")))
}

/// Split a token into its three segments
pub(crate) fn split_token(token: &str) -> Result<(&str, &str, &str)> {
    let mut parts = token.split('.');
    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(header), Some(payload), Some(signature), None) => Ok((header, payload, signature)),
        _ => Err(TokenError::malformed("expected three dot-separated segments")),
    }
}
