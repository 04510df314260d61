//! Configuration for [`create_wrapped_text`](crate::create_wrapped_text)

use crate::{Result, TextError};
use regex::Regex;
use serde::Deserialize;

/// Line length below which a non-fitting word is hyphenated across the break
///
/// Values in `[0, 1]` are a fraction of the line width; values above `1` are
/// an absolute character count. `0` never hyphenates (forced splits aside).
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct HyphenThreshold(f64);

impl HyphenThreshold {
    /// Never hyphenate a word that fits on a line of its own
    pub const NEVER: Self = Self(0.0);

    /// Hyphenate whenever a word does not fit and there is room
    pub const ALWAYS: Self = Self(1.0);

    /// The character count for a line of `max_len`
    ///
    /// # Errors
    ///
    /// Returns `TextError::InvalidThreshold` for negative or non-finite values.
    pub fn limit(self, max_len: usize) -> Result<f64> {
        if !self.0.is_finite() || self.0 < 0.0 {
            return Err(TextError::InvalidThreshold(self.0));
        }
        #[allow(clippy::cast_precision_loss)]
        let limit = if self.0 <= 1.0 {
            self.0 * max_len as f64
        } else {
            self.0
        };
        Ok(limit)
    }
}

impl Default for HyphenThreshold {
    fn default() -> Self {
        Self(0.5)
    }
}

impl From<f64> for HyphenThreshold {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

/// How text is split into words
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(try_from = "DelimiterSpec")]
pub enum Delimiter {
    /// Any run of Unicode whitespace
    #[default]
    Whitespace,
    /// A literal separator
    Str(String),
    /// A compiled regex separator
    Pattern(Regex),
}

impl Delimiter {
    /// Compile `pattern` into a regex delimiter
    ///
    /// # Errors
    ///
    /// Returns `TextError::Pattern` if the regex does not compile.
    pub fn pattern(pattern: &str) -> Result<Self> {
        Ok(Self::Pattern(Regex::new(pattern)?))
    }

    /// Split `text` into words; empty tokens are dropped
    pub fn split<'t>(&self, text: &'t str) -> Vec<&'t str> {
        let words: Vec<&str> = match self {
            Self::Whitespace => text.split_whitespace().collect(),
            Self::Str(sep) => text.split(sep.as_str()).collect(),
            Self::Pattern(re) => re.split(text).collect(),
        };
        words.into_iter().filter(|w| !w.is_empty()).collect()
    }
}

impl From<&str> for Delimiter {
    fn from(sep: &str) -> Self {
        Self::Str(sep.to_string())
    }
}

impl From<Regex> for Delimiter {
    fn from(re: Regex) -> Self {
        Self::Pattern(re)
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "snake_case")]
enum DelimiterSpec {
    Whitespace,
    Str(String),
    Pattern(String),
}

impl TryFrom<DelimiterSpec> for Delimiter {
    type Error = regex::Error;

    fn try_from(spec: DelimiterSpec) -> std::result::Result<Self, Self::Error> {
        Ok(match spec {
            DelimiterSpec::Whitespace => Self::Whitespace,
            DelimiterSpec::Str(sep) => Self::Str(sep),
            DelimiterSpec::Pattern(pattern) => Self::Pattern(Regex::new(&pattern)?),
        })
    }
}

/// Options for [`create_wrapped_text`](crate::create_wrapped_text)
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WrapOptions {
    /// When to hyphenate across a line break
    pub hyphen_threshold: HyphenThreshold,
    /// Word separator
    pub delimiter: Delimiter,
}

impl WrapOptions {
    /// Default options: threshold `0.5`, whitespace delimiter
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the hyphen threshold
    #[must_use]
    pub fn hyphen_threshold(mut self, threshold: impl Into<HyphenThreshold>) -> Self {
        self.hyphen_threshold = threshold.into();
        self
    }

    /// Set the word delimiter
    #[must_use]
    pub fn delimiter(mut self, delimiter: impl Into<Delimiter>) -> Self {
        self.delimiter = delimiter.into();
        self
    }
}
