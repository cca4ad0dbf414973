//! Lifecycle Module - When component code runs relative to rendering.
//!
//! - [`Owner`] - scope of one component: effects, mount callbacks, cleanups
//! - [`on_mount`] / [`on_cleanup`] - hooks for the current owner
//! - [`defer`] / [`flush_deferred`] - work that waits for the render pass

mod deferred;
mod owner;

pub use deferred::{defer, flush_deferred, pending_deferred};
pub use owner::{current_owner, mount, on_cleanup, on_mount, Owner};
