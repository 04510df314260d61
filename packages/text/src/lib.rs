//! Text helpers: fixed-width wrapping with hyphenation and regex escaping

#![forbid(unsafe_code)]

mod error;
pub mod options;
pub mod pattern;
pub mod wrap;

pub use error::{Result, TextError};
pub use options::{Delimiter, HyphenThreshold, WrapOptions};
pub use pattern::{escape_regex, exact_regex, literal_regex};
pub use wrap::{create_wrapped_text, wrap_text};
