//! Panic capture
//!
//! These helpers run a closure or future and report a panic as
//! `ErrorKind::Panicked` carrying the panic message. The default panic hook
//! still runs, so the message is also printed to stderr.
//!
//! Closures are wrapped in `AssertUnwindSafe`: state shared with the caller
//! may be left half-updated when a panic is caught.

use futures::FutureExt;
use std::any::Any;
use std::future::Future;
use std::panic::{self, AssertUnwindSafe};
use trinkets_common::{Error, Result};

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

fn panicked(payload: Box<dyn Any + Send>) -> Error {
    let message = panic_message(payload.as_ref());
    tracing::warn!(%message, "caught panic");
    Error::panicked(message)
}

/// Run `f`, returning its value or the panic it raised as an error
///
/// # Errors
///
/// Returns an `ErrorKind::Panicked` error if `f` panics.
pub fn try_catch<T, F>(f: F) -> Result<T>
where
    F: FnOnce() -> T,
{
    panic::catch_unwind(AssertUnwindSafe(f)).map_err(panicked)
}

/// Run `f`, returning `None` if it panics
pub fn try_discard<T, F>(f: F) -> Option<T>
where
    F: FnOnce() -> T,
{
    try_catch(f).ok()
}

/// Run a fallible closure, folding both its error and a panic into [`Error`]
///
/// # Errors
///
/// Returns the closure's own error converted into [`Error`], or an
/// `ErrorKind::Panicked` error if it panics.
pub fn try_result<T, E, F>(f: F) -> Result<T>
where
    E: Into<Error>,
    F: FnOnce() -> std::result::Result<T, E>,
{
    try_catch(f)?.map_err(Into::into)
}

/// Await `fut`, returning its output or the panic it raised as an error
///
/// # Errors
///
/// Returns an `ErrorKind::Panicked` error if polling `fut` panics.
pub async fn try_catch_async<F>(fut: F) -> Result<F::Output>
where
    F: Future,
{
    AssertUnwindSafe(fut).catch_unwind().await.map_err(panicked)
}

/// Await `fut`, returning `None` if it panics
pub async fn try_discard_async<F>(fut: F) -> Option<F::Output>
where
    F: Future,
{
    try_catch_async(fut).await.ok()
}
