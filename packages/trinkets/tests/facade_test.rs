//! End-to-end use of the facade with `?` into the unified error

use serde::{Deserialize, Serialize};
use std::time::Duration;
use trinkets::prelude::*;
use trinkets::{Debouncer, Encoded, JsonKind, TokenError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Claims {
    sub: String,
    scope: Vec<String>,
}

#[tokio::test]
async fn test_hash_entry_points_agree() -> trinkets::Result<()> {
    let free = trinkets::hash("abc", HashAlgorithm::Sha256, Encoding::Hex).await?;
    let built = Trinkets::hash().sha256().compute("abc").await?;
    let named = Trinkets::hash().named("sha-256")?.compute("abc").await?;

    assert_eq!(free, Encoded::Text(built.to_hex()));
    assert_eq!(built, named);
    assert_eq!(
        built.to_hex(),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
    Ok(())
}

#[tokio::test]
async fn test_hmac_through_master_builder() -> trinkets::Result<()> {
    let tag = Trinkets::hash()
        .sha256()
        .with_key("Jefe")
        .compute("what do ya want for nothing?")
        .await?;
    assert_eq!(
        tag.to_hex(),
        "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"
    );
    Ok(())
}

#[tokio::test]
async fn test_token_round_trip() -> trinkets::Result<()> {
    let signer = Trinkets::token().sha512().salted("_salt").with_key("k3y");
    let claims = Claims {
        sub: "user-1".to_string(),
        scope: vec!["read".to_string()],
    };

    let token = signer.sign(&claims).await?;
    let back: Claims = signer.verify(&token).await?;
    assert_eq!(back, claims);

    let other = Trinkets::token().sha512().with_key("other");
    let err = other.verify::<Claims>(&token).await.unwrap_err();
    assert_eq!(err, TokenError::InvalidSignature);

    let err: trinkets::Error = err.into();
    assert_eq!(err.kind(), &ErrorKind::Token);
    Ok(())
}

#[test]
fn test_text_and_random() -> trinkets::Result<()> {
    let lines = trinkets::create_wrapped_text("a bb ccc", 3, &WrapOptions::default())?;
    assert_eq!(lines, vec!["a", "bb", "ccc"]);

    let pattern = trinkets::literal_regex("a.b*c")?;
    assert!(pattern.is_match("xa.b*cx"));
    assert!(!pattern.is_match("aXbbc"));

    let n = trinkets::randint(10_u32, 20)?;
    assert!((10..20).contains(&n));
    assert!(trinkets::randint(5, 5).is_err());
    Ok(())
}

#[test]
fn test_errors_convert_with_context() {
    let err = trinkets::wrap_text("text", 1)
        .context("wrapping the banner")
        .unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::Text);
    assert_eq!(err.get_context(), Some("wrapping the banner"));
}

#[test]
fn test_util_helpers() {
    let err = try_catch(|| -> u8 { panic!("kaboom") }).unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::Panicked);

    assert_eq!(trinkets::zip([1, 2], ['a', 'b', 'c']), vec![(1, 'a'), (2, 'b')]);
    assert_eq!(trinkets::json_kind(&serde_json::json!([1, 2])), JsonKind::Array);
}

#[tokio::test]
async fn test_debouncer_from_facade() {
    let debouncer = Debouncer::new(Duration::from_millis(10), |_: ()| {});
    debouncer.call(());
    assert!(debouncer.is_pending());
    debouncer.cancel();
    assert!(!debouncer.is_pending());
}
