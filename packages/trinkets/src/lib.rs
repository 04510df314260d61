//! # Trinkets
//!
//! Small, independent helpers behind one facade, each topic feature-gated:
//!
//! - `hashing` - digests and HMACs (SHA-1, SHA-2, SHA-3, BLAKE2b, BLAKE3) in raw, hex, base64 or base64url
//! - `token` - HMAC-signed `header.payload.signature` tokens with optional salting
//! - `random` - integer/float ranges, uniform choice, random bytes
//! - `text` - greedy fixed-width wrapping with hyphenation, regex escaping
//! - `util` - zipping, panic capture, type guards, debouncing
//! - `fetch` - HTTP requests raced against a timeout
//!
//! `full` (the default) enables everything.
//!
//! ## Example
//!
//! ```rust,no_run
//! use trinkets::{Encoding, HashAlgorithm, Trinkets};
//!
//! async fn example() -> trinkets::Result<()> {
//!     let digest = trinkets::hash(b"abc", HashAlgorithm::Sha256, Encoding::Hex).await?;
//!
//!     let tag = Trinkets::hash()
//!         .sha256()
//!         .with_key(b"secret".to_vec())
//!         .compute(b"abc".to_vec())
//!         .await?;
//!
//!     let signer = Trinkets::token().sha256().with_key(b"secret".to_vec());
//!     let token = signer.sign(&vec!["a", "b"]).await?;
//!     let back: Vec<String> = signer.verify(&token).await?;
//!
//!     let lines = trinkets::create_wrapped_text("a bb ccc", 3, &Default::default())?;
//!     # let _ = (digest, tag, back, lines);
//!     Ok(())
//! }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

// === Core Modules ===

#[cfg(feature = "hashing")]
mod master;

#[cfg(feature = "hashing")]
pub use master::{HashMasterBuilder, Trinkets};

#[cfg(feature = "token")]
pub use master::TokenMasterBuilder;

// === Core Re-exports ===

pub use trinkets_common::{
    Error, ErrorKind, LoggingTransformer, OptionExt, Result, ResultExt, bail, ensure, err,
};

// === Hashing Re-exports ===

#[cfg(feature = "hashing")]
#[cfg_attr(docsrs, doc(cfg(feature = "hashing")))]
pub use trinkets_hashing as hashing;

#[cfg(feature = "hashing")]
#[cfg_attr(docsrs, doc(cfg(feature = "hashing")))]
pub use trinkets_hashing::{
    Encoded, Encoding, Hash, HashAlgorithm, HashError, HashResult, hash, hmac_hash,
};

// === Token Re-exports ===

#[cfg(feature = "token")]
#[cfg_attr(docsrs, doc(cfg(feature = "token")))]
pub use trinkets_token as token;

#[cfg(feature = "token")]
#[cfg_attr(docsrs, doc(cfg(feature = "token")))]
pub use trinkets_token::{SignOptions, TokenError, TokenSigner, decode_and_verify, encode_and_sign};

// === Random Re-exports ===

#[cfg(feature = "random")]
#[cfg_attr(docsrs, doc(cfg(feature = "random")))]
pub use trinkets_random as random;

#[cfg(feature = "random")]
#[cfg_attr(docsrs, doc(cfg(feature = "random")))]
pub use trinkets_random::{RandomError, choice, randint, random_bytes, shuffle, uniform};

// === Text Re-exports ===

#[cfg(feature = "text")]
#[cfg_attr(docsrs, doc(cfg(feature = "text")))]
pub use trinkets_text as text;

#[cfg(feature = "text")]
#[cfg_attr(docsrs, doc(cfg(feature = "text")))]
pub use trinkets_text::{
    Delimiter, HyphenThreshold, TextError, WrapOptions, create_wrapped_text, escape_regex,
    exact_regex, literal_regex, wrap_text,
};

// === Util Re-exports ===

#[cfg(feature = "util")]
#[cfg_attr(docsrs, doc(cfg(feature = "util")))]
pub use trinkets_util as util;

#[cfg(feature = "util")]
#[cfg_attr(docsrs, doc(cfg(feature = "util")))]
pub use trinkets_util::{
    Debouncer, JsonKind, is, is_blank, is_present, json_kind, narrow, try_catch,
    try_catch_async, try_discard, try_discard_async, try_result, zip, zip_all, zip_longest,
};

#[cfg(feature = "fetch")]
#[cfg_attr(docsrs, doc(cfg(feature = "fetch")))]
pub use trinkets_util::{FetchError, FetchOptions, fetch, fetch_with_client, with_timeout};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{Error, ErrorKind, OptionExt, Result, ResultExt};

    #[cfg(feature = "hashing")]
    pub use crate::{Encoding, Hash, HashAlgorithm, Trinkets};

    #[cfg(feature = "token")]
    pub use crate::{SignOptions, TokenSigner};

    #[cfg(feature = "text")]
    pub use crate::WrapOptions;

    #[cfg(feature = "util")]
    pub use crate::{try_catch, try_catch_async};

    #[cfg(feature = "fetch")]
    pub use crate::FetchOptions;
}
