//! Deferred tasks.
//!
//! A small FIFO of work that must wait until the current render pass has
//! attached its elements. The host calls [`flush_deferred`] once it has;
//! [`Owner::mount`](super::Owner::mount) flushes it too.

use std::cell::RefCell;
use std::collections::VecDeque;

use crate::primitives::Cleanup;

thread_local! {
    static DEFERRED: RefCell<VecDeque<Cleanup>> = RefCell::new(VecDeque::new());
}

/// Queue `f` to run at the next [`flush_deferred`].
pub fn defer<F: FnOnce() + 'static>(f: F) {
    DEFERRED.with(|queue| queue.borrow_mut().push_back(Box::new(f)));
}

/// Run every queued task in order, including tasks queued while flushing.
///
/// Returns how many ran.
pub fn flush_deferred() -> usize {
    let mut ran = 0;
    // Pop one at a time so a task may queue more without a borrow conflict.
    while let Some(task) = DEFERRED.with(|queue| queue.borrow_mut().pop_front()) {
        task();
        ran += 1;
    }
    if ran > 0 {
        tracing::trace!(ran, "flushed deferred tasks");
    }
    ran
}

/// Number of tasks waiting.
pub fn pending_deferred() -> usize {
    DEFERRED.with(|queue| queue.borrow().len())
}
