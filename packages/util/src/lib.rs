//! Small general-purpose helpers
//!
//! - [`zip`]: pairwise and N-way lockstep iteration
//! - [`attempt`]: turn panics into returned errors
//! - [`guards`]: runtime type and shape checks
//! - [`debounce`]: delay a callback until calls stop arriving
//! - [`fetch`]: HTTP requests raced against a timeout (feature `fetch`)

pub mod attempt;
pub mod debounce;
#[cfg(feature = "fetch")]
pub mod fetch;
pub mod guards;
pub mod zip;

pub use attempt::{try_catch, try_catch_async, try_discard, try_discard_async, try_result};
pub use debounce::Debouncer;
#[cfg(feature = "fetch")]
pub use fetch::{FetchError, FetchOptions, fetch, fetch_with_client, with_timeout};
pub use guards::{JsonKind, is, is_blank, is_present, json_kind, narrow};
pub use zip::{ZipAll, ZipLongest, zip, zip_all, zip_longest};
