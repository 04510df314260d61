//! Tests for signed token encoding and verification

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use proptest::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use trinkets_hashing::HashError;
use trinkets_token::{
    HashAlgorithm, SignOptions, TokenError, TokenHeader, TokenSigner, decode_and_verify,
    encode_and_sign,
};

const KEY: &[u8] = b"correct horse battery staple";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Session {
    user: String,
    admin: bool,
    visits: u32,
}

fn session() -> Session {
    Session {
        user: "ada".to_string(),
        admin: false,
        visits: 3,
    }
}

fn segment_json(token: &str, index: usize) -> Value {
    let segment = token.split('.').nth(index).unwrap_or_default();
    let bytes = URL_SAFE_NO_PAD.decode(segment).expect("valid base64url");
    serde_json::from_slice(&bytes).expect("valid JSON")
}

#[tokio::test]
async fn test_round_trip() {
    let options = SignOptions::default();
    let token = encode_and_sign(&session(), HashAlgorithm::Sha256, KEY, &options)
        .await
        .expect("sign");

    assert_eq!(token.split('.').count(), 3);
    let decoded: Session = decode_and_verify(&token, HashAlgorithm::Sha256, KEY, &options)
        .await
        .expect("verify");
    assert_eq!(decoded, session());
}

#[tokio::test]
async fn test_header_names_algorithm() {
    let token = encode_and_sign(&session(), HashAlgorithm::Sha3_256, KEY, &SignOptions::new())
        .await
        .expect("sign");

    let header: TokenHeader = serde_json::from_value(segment_json(&token, 0)).expect("header");
    assert_eq!(header.alg, "SHA3-256");
    assert_eq!(header.typ, "JWT");
}

#[tokio::test]
async fn test_unsalted_tokens_are_deterministic() {
    let options = SignOptions::default();
    let a = encode_and_sign(&session(), HashAlgorithm::Sha256, KEY, &options)
        .await
        .expect("sign");
    let b = encode_and_sign(&session(), HashAlgorithm::Sha256, KEY, &options)
        .await
        .expect("sign");
    assert_eq!(a, b);
}

#[tokio::test]
async fn test_salted_round_trip_strips_salt() {
    let options = SignOptions::new().salted("_salt");
    let a = encode_and_sign(&session(), HashAlgorithm::Sha512, KEY, &options)
        .await
        .expect("sign");
    let b = encode_and_sign(&session(), HashAlgorithm::Sha512, KEY, &options)
        .await
        .expect("sign");

    assert_ne!(a, b, "salted tokens should differ");
    let salt = segment_json(&a, 1)["_salt"]
        .as_str()
        .map(str::to_owned)
        .expect("salt field present in payload");
    assert_eq!(URL_SAFE_NO_PAD.decode(salt).expect("salt").len(), 16);

    let decoded: Value = decode_and_verify(&a, HashAlgorithm::Sha512, KEY, &options)
        .await
        .expect("verify");
    assert!(decoded.get("_salt").is_none());
    assert_eq!(decoded, json!({"user": "ada", "admin": false, "visits": 3}));
}

#[tokio::test]
async fn test_salt_length_is_configurable() {
    let options = SignOptions::new().salted("nonce").salt_len(4);
    let token = encode_and_sign(&json!({"a": 1}), HashAlgorithm::Sha256, KEY, &options)
        .await
        .expect("sign");
    let salt = segment_json(&token, 1)["nonce"]
        .as_str()
        .map(str::to_owned)
        .expect("salt");
    assert_eq!(URL_SAFE_NO_PAD.decode(salt).expect("salt").len(), 4);
}

#[tokio::test]
async fn test_salting_requires_object_payload() {
    let options = SignOptions::new().salted("_salt");
    let err = encode_and_sign(&vec![1, 2, 3], HashAlgorithm::Sha256, KEY, &options)
        .await
        .unwrap_err();
    assert!(matches!(err, TokenError::InvalidPayload(_)));

    // Without salting any JSON value is a valid payload
    let token = encode_and_sign(&vec![1, 2, 3], HashAlgorithm::Sha256, KEY, &SignOptions::new())
        .await
        .expect("sign");
    let decoded: Vec<i32> = decode_and_verify(&token, HashAlgorithm::Sha256, KEY, &SignOptions::new())
        .await
        .expect("verify");
    assert_eq!(decoded, vec![1, 2, 3]);
}

#[tokio::test]
async fn test_wrong_key_is_rejected() {
    let options = SignOptions::default();
    let token = encode_and_sign(&session(), HashAlgorithm::Sha256, KEY, &options)
        .await
        .expect("sign");

    let err = decode_and_verify::<Session>(&token, HashAlgorithm::Sha256, b"other key", &options)
        .await
        .unwrap_err();
    assert_eq!(err, TokenError::InvalidSignature);
}

#[tokio::test]
async fn test_tampered_payload_is_rejected() {
    let options = SignOptions::default();
    let token = encode_and_sign(&session(), HashAlgorithm::Sha256, KEY, &options)
        .await
        .expect("sign");

    let mut parts: Vec<String> = token.split('.').map(str::to_owned).collect();
    let forged = json!({"user": "ada", "admin": true, "visits": 3});
    parts[1] = URL_SAFE_NO_PAD.encode(serde_json::to_vec(&forged).expect("json"));
    let forged_token = parts.join(".");

    let err = decode_and_verify::<Session>(&forged_token, HashAlgorithm::Sha256, KEY, &options)
        .await
        .unwrap_err();
    assert_eq!(err, TokenError::InvalidSignature);
}

#[tokio::test]
async fn test_tampered_signature_is_rejected() {
    let options = SignOptions::default();
    let token = encode_and_sign(&session(), HashAlgorithm::Sha256, KEY, &options)
        .await
        .expect("sign");

    let (message, signature) = token.rsplit_once('.').expect("three segments");
    let mut raw = URL_SAFE_NO_PAD.decode(signature).expect("signature");
    raw[0] ^= 0x01;
    let forged_token = format!("{message}.{}", URL_SAFE_NO_PAD.encode(raw));

    let err = decode_and_verify::<Session>(&forged_token, HashAlgorithm::Sha256, KEY, &options)
        .await
        .unwrap_err();
    assert_eq!(err, TokenError::InvalidSignature);
}

#[tokio::test]
async fn test_any_single_byte_change_is_rejected() {
    const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_.";
    let options = SignOptions::default();

    for algorithm in [
        HashAlgorithm::Sha256,
        HashAlgorithm::Sha1,
        HashAlgorithm::Sha384,
        HashAlgorithm::Sha3_256,
        HashAlgorithm::Blake2b512,
    ] {
        let token = encode_and_sign(&session(), algorithm, KEY, &options)
            .await
            .expect("sign");
        let original = token.as_bytes();

        for position in 0..original.len() {
            for &replacement in ALPHABET.iter().filter(|&&c| c != original[position]) {
                let mut altered = original.to_vec();
                altered[position] = replacement;
                let altered = String::from_utf8(altered).expect("ascii token");

                let result = decode_and_verify::<Value>(&altered, algorithm, KEY, &options).await;
                assert!(
                    result.is_err(),
                    "{algorithm}: byte {position} -> {:?} was accepted",
                    char::from(replacement)
                );
            }
        }
    }
}

#[tokio::test]
async fn test_empty_key_and_empty_salt_round_trip() {
    let options = SignOptions::new().salted("_salt").salt_len(0);
    let token = encode_and_sign(&session(), HashAlgorithm::Sha256, b"", &options)
        .await
        .expect("sign");
    let decoded: Session = decode_and_verify(&token, HashAlgorithm::Sha256, b"", &options)
        .await
        .expect("verify");
    assert_eq!(decoded, session());
}

#[tokio::test]
async fn test_algorithm_mismatch() {
    let options = SignOptions::default();
    let token = encode_and_sign(&session(), HashAlgorithm::Sha512, KEY, &options)
        .await
        .expect("sign");

    let err = decode_and_verify::<Session>(&token, HashAlgorithm::Sha256, KEY, &options)
        .await
        .unwrap_err();
    assert_eq!(
        err,
        TokenError::AlgorithmMismatch {
            expected: "SHA-256".to_string(),
            found: "SHA-512".to_string(),
        }
    );
}

#[tokio::test]
async fn test_malformed_tokens() {
    let options = SignOptions::default();
    for token in ["", "abc", "a.b", "a.b.c.d", "!!!.e30.AAAA"] {
        let err = decode_and_verify::<Value>(token, HashAlgorithm::Sha256, KEY, &options)
            .await
            .unwrap_err();
        assert!(
            matches!(err, TokenError::Malformed(_)),
            "{token:?} gave {err:?}"
        );
    }
}

#[tokio::test]
async fn test_payload_type_mismatch_is_serialization_error() {
    let options = SignOptions::default();
    let token = encode_and_sign(&json!({"user": 1}), HashAlgorithm::Sha256, KEY, &options)
        .await
        .expect("sign");
    let err = decode_and_verify::<Session>(&token, HashAlgorithm::Sha256, KEY, &options)
        .await
        .unwrap_err();
    assert!(matches!(err, TokenError::Serialization(_)));
}

#[tokio::test]
async fn test_blake3_cannot_sign() {
    let err = encode_and_sign(&session(), HashAlgorithm::Blake3, KEY, &SignOptions::default())
        .await
        .unwrap_err();
    assert_eq!(
        err,
        TokenError::Hash(HashError::UnsupportedHmac(HashAlgorithm::Blake3))
    );
}

#[tokio::test]
async fn test_signer_round_trip() {
    let signer = TokenSigner::new(HashAlgorithm::Blake2b512, KEY.to_vec()).salted("_s");
    let token = signer.sign(&session()).await.expect("sign");
    let decoded: Session = signer.verify(&token).await.expect("verify");
    assert_eq!(decoded, session());

    let other = TokenSigner::new(HashAlgorithm::Blake2b512, b"different".to_vec());
    assert_eq!(
        other.verify::<Session>(&token).await.unwrap_err(),
        TokenError::InvalidSignature
    );
    assert!(!format!("{signer:?}").contains("horse"));
}

#[tokio::test]
async fn test_into_common_error() {
    let err: trinkets_common::Error = TokenError::InvalidSignature.into();
    assert_eq!(err.kind(), &trinkets_common::ErrorKind::Token);
}

#[test]
fn test_options_deserialize() {
    let options: SignOptions = serde_json::from_str(r#"{"salt_field": "n"}"#).expect("options");
    assert_eq!(options.salt_field.as_deref(), Some("n"));
    assert_eq!(options.salt_len, 16);

    let options: SignOptions = serde_json::from_str("{}").expect("options");
    assert_eq!(options, SignOptions::default());
}

proptest! {
    #[test]
    fn prop_round_trip(user in ".{0,32}", visits in any::<u32>(), admin in any::<bool>(), key in proptest::collection::vec(any::<u8>(), 0..64)) {
        let rt = tokio::runtime::Builder::new_current_thread().build().expect("runtime");
        let data = Session { user, admin, visits };
        let options = SignOptions::new().salted("_salt");
        let decoded: Session = rt.block_on(async {
            let token = encode_and_sign(&data, HashAlgorithm::Sha256, &key, &options).await?;
            decode_and_verify(&token, HashAlgorithm::Sha256, &key, &options).await
        }).expect("round trip");
        prop_assert_eq!(decoded, data);
    }
}
