//! Rendering of the error and its cause chain

use super::types::Error;
use std::error::Error as StdError;
use std::fmt;

impl Error {
    /// `kind` or `kind: context`, without any causes
    fn write_headline(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner.context {
            Some(context) => write!(f, "{}: {context}", self.inner.kind),
            None => write!(f, "{}", self.inner.kind),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_headline(f)?;

        let mut cause = self.source();
        while let Some(err) = cause {
            match err.downcast_ref::<Error>() {
                // A bare wrapper adds nothing beyond the error it holds
                Some(nested) if nested.inner.context.is_none() => {}
                Some(nested) => {
                    f.write_str("\n  caused by: ")?;
                    nested.write_headline(f)?;
                }
                None => write!(f, "\n  caused by: {err}")?,
            }
            cause = err.source();
        }

        Ok(())
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.inner
            .source
            .as_deref()
            .map(|e| e as &(dyn StdError + 'static))
    }
}
