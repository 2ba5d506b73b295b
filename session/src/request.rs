//! Last-request-wins cancellation.
//!
//! Search pages fire a request per keystroke or filter change. Only the most
//! recent one may land; starting a new request aborts the previous one, and
//! dropping the owner aborts whatever is still in flight.

#[cfg(test)]
#[path = "request_test.rs"]
mod request_test;

use std::cell::RefCell;
use std::future::Future;

use futures::future::{AbortHandle, Abortable};

pub use futures::future::Aborted;

/// Owner of at most one in-flight request.
#[derive(Debug, Default)]
pub struct LatestOnly {
    current: RefCell<Option<AbortHandle>>,
}

impl LatestOnly {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap `fut` as the newest request, aborting the previous one.
    ///
    /// The returned future resolves to `Err(Aborted)` once superseded.
    pub fn begin<F: Future>(&self, fut: F) -> Abortable<F> {
        let (handle, registration) = AbortHandle::new_pair();
        if let Some(previous) = self.current.replace(Some(handle)) {
            previous.abort();
        }
        Abortable::new(fut, registration)
    }

    /// Abort the in-flight request, if any.
    pub fn cancel(&self) {
        if let Some(handle) = self.current.take() {
            handle.abort();
        }
    }

    /// Whether a request was started and not yet superseded or cancelled.
    #[must_use]
    pub fn in_flight(&self) -> bool {
        self.current.borrow().as_ref().is_some_and(|h| !h.is_aborted())
    }
}

impl Drop for LatestOnly {
    fn drop(&mut self) {
        self.cancel();
    }
}
