//! Hashing behaviour: known answers, determinism, key sensitivity, encodings

use base64::{Engine as _, engine::general_purpose};
use hex_literal::hex;
use trinkets_hashing::{
    Encoded, Encoding, Hash, HashAlgorithm, HashError, digest, hash, hmac, hmac_hash, verify_hmac,
};

#[test]
fn test_known_answer_digests() {
    assert_eq!(
        digest(b"abc", HashAlgorithm::Sha256).as_bytes(),
        hex!("ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad")
    );
    assert_eq!(
        digest(b"abc", HashAlgorithm::Sha1).as_bytes(),
        hex!("a9993e364706816aba3e25717850c26c9cd0d89d")
    );
    assert_eq!(
        digest(b"abc", HashAlgorithm::Sha3_256).as_bytes(),
        hex!("3a985da74fe225b2045c172d6bd390bd855f086e3e9d525b46bfe24511431532")
    );
    assert_eq!(
        digest(b"abc", HashAlgorithm::Blake3).as_bytes(),
        hex!("6437b3ac38465133ffb63b75273a8db548c558465d79db03fd359c6cd5bd9d85")
    );
}

#[test]
fn test_known_answer_hmac() {
    // RFC 4231 test case 2 / RFC 2202 test case 2
    let data = b"what do ya want for nothing?";
    assert_eq!(
        hmac(data, b"Jefe", HashAlgorithm::Sha256)
            .expect("HMAC-SHA256 should succeed")
            .as_bytes(),
        hex!("5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843")
    );
    assert_eq!(
        hmac(data, b"Jefe", HashAlgorithm::Sha1)
            .expect("HMAC-SHA1 should succeed")
            .as_bytes(),
        hex!("effcdf6ae5eb2fa2d27416d5f184df9c259a7c79")
    );
}

#[test]
fn test_output_lengths_match_algorithm() {
    for algorithm in HashAlgorithm::ALL {
        let result = digest(b"length check", algorithm);
        assert_eq!(result.len(), algorithm.output_len(), "{algorithm}");
        assert_eq!(result.algorithm(), algorithm);

        if algorithm.supports_hmac() {
            let mac = hmac(b"length check", b"k", algorithm).expect("HMAC should succeed");
            assert_eq!(mac.len(), algorithm.output_len(), "HMAC {algorithm}");
        }
    }
}

#[tokio::test]
async fn test_hash_is_deterministic_and_distinct() {
    for algorithm in HashAlgorithm::ALL {
        let first = hash("payload", algorithm, Encoding::Hex).await.unwrap();
        let second = hash("payload", algorithm, Encoding::Hex).await.unwrap();
        let other = hash("payload!", algorithm, Encoding::Hex).await.unwrap();

        assert_eq!(first, second, "{algorithm} must be deterministic");
        assert_ne!(first, other, "{algorithm} must separate inputs");
    }
}

#[tokio::test]
async fn test_hmac_is_key_sensitive() {
    let a = hmac_hash("payload", "key-one", HashAlgorithm::Sha512, Encoding::Raw)
        .await
        .unwrap();
    let b = hmac_hash("payload", "key-two", HashAlgorithm::Sha512, Encoding::Raw)
        .await
        .unwrap();
    assert_ne!(a, b);
}

#[tokio::test]
async fn test_encodings_agree_on_the_same_bytes() {
    let raw = hash("abc", HashAlgorithm::Sha256, Encoding::Raw).await.unwrap();
    let Encoded::Bytes(raw) = raw else {
        panic!("raw encoding must produce bytes");
    };

    let hex_text = hash("abc", HashAlgorithm::Sha256, Encoding::Hex)
        .await
        .unwrap()
        .into_text()
        .unwrap();
    assert_eq!(hex::decode(hex_text).unwrap(), raw);

    let b64 = hash("abc", HashAlgorithm::Sha256, Encoding::Base64)
        .await
        .unwrap()
        .into_text()
        .unwrap();
    assert!(b64.ends_with('='));
    assert_eq!(general_purpose::STANDARD.decode(b64).unwrap(), raw);

    let b64url = hash("abc", HashAlgorithm::Sha256, Encoding::Base64Url)
        .await
        .unwrap()
        .into_text()
        .unwrap();
    assert!(!b64url.contains('=') && !b64url.contains('+') && !b64url.contains('/'));
    assert_eq!(general_purpose::URL_SAFE_NO_PAD.decode(b64url).unwrap(), raw);
}

#[test]
fn test_algorithm_identifiers_parse_verbatim() {
    assert_eq!("SHA-256".parse::<HashAlgorithm>().unwrap(), HashAlgorithm::Sha256);
    assert_eq!("sha256".parse::<HashAlgorithm>().unwrap(), HashAlgorithm::Sha256);
    assert_eq!("sha3_512".parse::<HashAlgorithm>().unwrap(), HashAlgorithm::Sha3_512);
    assert_eq!("BLAKE2b".parse::<HashAlgorithm>().unwrap(), HashAlgorithm::Blake2b512);

    for algorithm in HashAlgorithm::ALL {
        assert_eq!(algorithm.name().parse::<HashAlgorithm>().unwrap(), algorithm);
    }

    assert_eq!(
        "MD5".parse::<HashAlgorithm>(),
        Err(HashError::UnsupportedAlgorithm("MD5".to_string()))
    );
    assert!("base32".parse::<Encoding>().is_err());
    assert_eq!("buffer".parse::<Encoding>().unwrap(), Encoding::Raw);
}

#[test]
fn test_blake3_has_no_hmac() {
    assert_eq!(
        hmac(b"data", b"key", HashAlgorithm::Blake3),
        Err(HashError::UnsupportedHmac(HashAlgorithm::Blake3))
    );
}

#[test]
fn test_verify_hmac() {
    let mac = hmac(b"message", b"secret", HashAlgorithm::Sha384).unwrap();
    assert!(verify_hmac(b"message", b"secret", HashAlgorithm::Sha384, mac.as_bytes()).unwrap());
    assert!(!verify_hmac(b"message", b"other", HashAlgorithm::Sha384, mac.as_bytes()).unwrap());
    assert!(!verify_hmac(b"message", b"secret", HashAlgorithm::Sha384, &mac.as_bytes()[1..]).unwrap());
}

#[tokio::test]
async fn test_builder_matches_free_functions() {
    let built = Hash::sha256().compute(b"abc".to_vec()).await.unwrap();
    assert_eq!(built, digest(b"abc", HashAlgorithm::Sha256));

    let keyed = Hash::named("sha-384")
        .unwrap()
        .with_key(b"secret".to_vec())
        .compute("abc")
        .await
        .unwrap();
    assert_eq!(keyed, hmac(b"abc", b"secret", HashAlgorithm::Sha384).unwrap());
}

#[tokio::test]
async fn test_builder_result_handler() {
    let hex = Hash::blake2b()
        .on_result(|result| match result {
            Ok(hash) => hash.to_hex(),
            Err(e) => format!("error: {e}"),
        })
        .compute("abc")
        .await;
    assert_eq!(hex.len(), 128);

    let message = Hash::blake3()
        .with_key("k")
        .compute("abc")
        .on_result(|result| result.err().map(|e| e.to_string()))
        .await;
    assert_eq!(message.as_deref(), Some("HMAC is not supported for BLAKE3"));
}

#[test]
fn test_display_names_algorithm() {
    let result = digest(b"", HashAlgorithm::Sha256);
    assert!(result.to_string().starts_with("SHA-256:e3b0c442"));
}
