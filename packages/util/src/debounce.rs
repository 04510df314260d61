//! Trailing-edge debouncing on the tokio runtime

use arc_swap::ArcSwapOption;
use std::marker::PhantomData;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Delays a callback until `delay` has passed without another call
///
/// Each [`call`](Self::call) aborts the pending invocation, if any, and
/// schedules a new one with the latest argument. Dropping the debouncer
/// cancels whatever is pending.
pub struct Debouncer<A, F> {
    delay: Duration,
    callback: Arc<F>,
    pending: ArcSwapOption<JoinHandle<()>>,
    _arg: PhantomData<fn(A)>,
}

impl<A, F> Debouncer<A, F>
where
    A: Send + 'static,
    F: Fn(A) + Send + Sync + 'static,
{
    /// Create a debouncer that runs `callback` `delay` after the last call
    pub fn new(delay: Duration, callback: F) -> Self {
        Self {
            delay,
            callback: Arc::new(callback),
            pending: ArcSwapOption::empty(),
            _arg: PhantomData,
        }
    }

    /// The configured delay
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedule `callback(arg)`, replacing any pending invocation
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime, like `tokio::spawn`.
    pub fn call(&self, arg: A) {
        let callback = Arc::clone(&self.callback);
        let delay = self.delay;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            callback(arg);
        });

        if let Some(previous) = self.pending.swap(Some(Arc::new(handle))) {
            previous.abort();
            tracing::trace!("debounced call superseded");
        }
    }

    /// Drop the pending invocation, if any
    pub fn cancel(&self) {
        if let Some(previous) = self.pending.swap(None) {
            previous.abort();
        }
    }

    /// Whether an invocation is scheduled and has not run yet
    pub fn is_pending(&self) -> bool {
        match &*self.pending.load() {
            Some(handle) => !handle.is_finished(),
            None => false,
        }
    }
}

impl<A, F> Drop for Debouncer<A, F> {
    fn drop(&mut self) {
        if let Some(previous) = self.pending.swap(None) {
            previous.abort();
        }
    }
}

impl<A, F> std::fmt::Debug for Debouncer<A, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Debouncer")
            .field("delay", &self.delay)
            .field("pending", &self.pending.load().is_some())
            .finish()
    }
}
