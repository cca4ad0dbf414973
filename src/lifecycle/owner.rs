//! Owner - Component lifetime: mount callbacks, cleanups, effect disposal.
//!
//! Every component body runs under an [`Owner`]. The owner wraps an
//! `EffectScope`, so effects created while it runs are disposed with it, and
//! it holds the callbacks queued with [`on_mount`] until the renderer reports
//! the component's elements are in place.
//!
//! # Example
//!
//! ```ignore
//! use spark_aria::lifecycle::{Owner, on_mount, on_cleanup};
//!
//! let owner = Owner::new();
//! owner.run(|| {
//!     on_mount(|| println!("elements are in place"));
//!     on_cleanup(|| println!("unmounted"));
//! });
//!
//! owner.mount();   // "elements are in place"
//! owner.mount();   // nothing, mount callbacks are one-shot
//! owner.unmount(); // "unmounted"
//! ```

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use spark_signals::{effect_scope, on_scope_dispose, untrack, EffectScope};

use super::deferred::flush_deferred;
use crate::primitives::Cleanup;

// =============================================================================
// Owner Stack
// =============================================================================

thread_local! {
    /// Owners currently running, innermost last.
    static OWNER_STACK: RefCell<Vec<Owner>> = RefCell::new(Vec::new());
}

/// The innermost owner currently running, if any.
pub fn current_owner() -> Option<Owner> {
    OWNER_STACK.with(|stack| stack.borrow().last().cloned())
}

struct OwnerGuard;

impl Drop for OwnerGuard {
    fn drop(&mut self) {
        OWNER_STACK.with(|stack| {
            stack.borrow_mut().pop();
        });
    }
}

// =============================================================================
// Owner
// =============================================================================

struct OwnerInner {
    scope: EffectScope,
    mount_callbacks: RefCell<Vec<Cleanup>>,
    mounted: Cell<bool>,
}

/// Lifetime of one mounted component. Cloning shares the same owner.
#[derive(Clone)]
pub struct Owner {
    inner: Rc<OwnerInner>,
}

impl Owner {
    /// Create an owner. Created inside another owner's `run`, it is disposed
    /// together with that owner.
    pub fn new() -> Self {
        Self {
            inner: Rc::new(OwnerInner {
                scope: effect_scope(false),
                mount_callbacks: RefCell::new(Vec::new()),
                mounted: Cell::new(false),
            }),
        }
    }

    /// Run `f` with this owner current.
    ///
    /// Returns `None` once the owner has been unmounted.
    pub fn run<R, F: FnOnce() -> R>(&self, f: F) -> Option<R> {
        if !self.is_active() {
            tracing::warn!("Owner::run called on an unmounted owner");
            return None;
        }

        OWNER_STACK.with(|stack| stack.borrow_mut().push(self.clone()));
        let _guard = OwnerGuard;
        self.inner.scope.run(f)
    }

    /// Report that the component's elements exist.
    ///
    /// Runs the queued mount callbacks once, in registration order and
    /// untracked, then flushes deferred tasks. Later calls do nothing.
    pub fn mount(&self) {
        if self.inner.mounted.replace(true) || !self.is_active() {
            return;
        }

        let callbacks = std::mem::take(&mut *self.inner.mount_callbacks.borrow_mut());
        tracing::trace!(count = callbacks.len(), "running mount callbacks");
        for callback in callbacks {
            self.run(|| untrack(callback));
        }

        flush_deferred();
    }

    /// Dispose the owner's effects and run its cleanups (last registered
    /// first). Later calls do nothing.
    pub fn unmount(&self) {
        self.inner.mount_callbacks.borrow_mut().clear();
        self.inner.scope.stop();
    }

    pub fn is_mounted(&self) -> bool {
        self.inner.mounted.get() && self.is_active()
    }

    /// False once unmounted.
    pub fn is_active(&self) -> bool {
        self.inner.scope.active()
    }

    fn queue_mount(&self, callback: Cleanup) {
        if self.inner.mounted.get() {
            self.run(|| untrack(callback));
        } else {
            self.inner.mount_callbacks.borrow_mut().push(callback);
        }
    }

    fn add_cleanup(&self, cleanup: Cleanup) {
        self.inner.scope.run(move || on_scope_dispose(cleanup));
    }
}

impl Default for Owner {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Public API
// =============================================================================

/// Run `f` once the current owner is mounted.
///
/// If the owner is already mounted, `f` runs immediately. Outside an owner
/// there is no mount to wait for, and `f` is dropped.
pub fn on_mount<F: FnOnce() + 'static>(f: F) {
    match current_owner() {
        Some(owner) => owner.queue_mount(Box::new(f)),
        None => tracing::warn!("on_mount called outside an owner; callback will never run"),
    }
}

/// Run `f` when the current owner is unmounted.
pub fn on_cleanup<F: FnOnce() + 'static>(f: F) {
    match current_owner() {
        Some(owner) => owner.add_cleanup(Box::new(f)),
        None => tracing::warn!("on_cleanup called outside an owner; callback will never run"),
    }
}

/// Create an owner, run `f` under it, then mount it.
///
/// `f` is where the renderer builds the component and loads its node refs.
pub fn mount<F: FnOnce()>(f: F) -> Owner {
    let owner = Owner::new();
    owner.run(f);
    owner.mount();
    owner
}

// =============================================================================
// Tests
// =============================================================================
