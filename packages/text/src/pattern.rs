//! Building regexes that match text literally

use crate::Result;
use regex::Regex;

/// Escape every regex metacharacter in `text`
///
/// `escape_regex("a.b*c") == r"a\.b\*c"`
#[must_use]
pub fn escape_regex(text: &str) -> String {
    regex::escape(text)
}

/// A regex matching `text` literally anywhere in the haystack
///
/// # Errors
///
/// Returns `TextError::Pattern` if the compiled pattern exceeds the regex
/// size limit.
pub fn literal_regex(text: &str) -> Result<Regex> {
    Ok(Regex::new(&escape_regex(text))?)
}

/// A regex matching exactly `text` and nothing else
///
/// # Errors
///
/// Same as [`literal_regex`].
pub fn exact_regex(text: &str) -> Result<Regex> {
    Ok(Regex::new(&format!("^{}$", escape_regex(text)))?)
}
