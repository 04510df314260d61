//! Extension traits for attaching context to results and options

use super::types::{Error, ErrorKind, Result};
use std::fmt;

/// Attach context to any fallible result whose error converts into [`Error`]
pub trait ResultExt<T> {
    /// Wrap the error with a context message
    ///
    /// # Errors
    ///
    /// Returns the original error, converted and annotated with `context`.
    fn context<C: fmt::Display>(self, context: C) -> Result<T>;

    /// Wrap the error with a lazily built context message
    ///
    /// # Errors
    ///
    /// Returns the original error, converted and annotated with the closure's output.
    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: fmt::Display,
        F: FnOnce() -> C;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<Error>,
{
    fn context<C: fmt::Display>(self, context: C) -> Result<T> {
        self.map_err(|e| e.into().context(context))
    }

    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: fmt::Display,
        F: FnOnce() -> C,
    {
        self.map_err(|e| e.into().context(f()))
    }
}

/// Turn a missing value into a typed [`Error`]
pub trait OptionExt<T> {
    /// Convert `None` into an error of the given kind
    ///
    /// # Errors
    ///
    /// Returns an error of `kind` when the option is empty.
    fn ok_or_kind(self, kind: ErrorKind) -> Result<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_kind(self, kind: ErrorKind) -> Result<T> {
        self.ok_or_else(|| Error::new(kind))
    }
}
