//! Ids - Unique, render-stable element ids.
//!
//! Ids come from a per-thread counter. Resetting the counter before rendering
//! a tree makes the same tree produce the same ids, so ids generated by a
//! first render and by a later re-render of the same tree line up.
//!
//! # Example
//!
//! ```ignore
//! use spark_aria::utils::id::{create_id, reset_id_counter};
//!
//! reset_id_counter();
//! let label = create_id(None);            // "spark-aria-0"
//! let hint = create_id(Some("hint"));     // "hint-1"
//! ```

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use spark_signals::{effect_sync, signal, Signal};

use crate::dom::registry;
use crate::lifecycle::{current_owner, defer, on_cleanup};

/// Default id prefix.
pub const ID_PREFIX: &str = "spark-aria";

/// A reactive read that should re-trigger a slot id check.
pub type Dependency = Rc<dyn Fn()>;

thread_local! {
    static NEXT_ID: Cell<u64> = const { Cell::new(0) };
    static PREFIX: RefCell<String> = RefCell::new(ID_PREFIX.to_string());
}

/// Set the prefix [`create_id`] uses when none is given.
pub fn set_id_prefix(prefix: impl Into<String>) {
    PREFIX.with(|p| *p.borrow_mut() = prefix.into());
}

/// The current default prefix.
pub fn id_prefix() -> String {
    PREFIX.with(|p| p.borrow().clone())
}

/// Next value of the per-thread counter, as a string.
pub fn create_unique_id() -> String {
    NEXT_ID.with(|next| {
        let id = next.get();
        next.set(id + 1);
        id.to_string()
    })
}

/// Restart the id counter at zero.
pub fn reset_id_counter() {
    NEXT_ID.with(|next| next.set(0));
}

/// `"{prefix}-{n}"`, using the default prefix when `prefix` is `None`.
pub fn create_id(prefix: Option<&str>) -> String {
    let unique = create_unique_id();
    match prefix {
        Some(prefix) => format!("{prefix}-{unique}"),
        None => format!("{}-{unique}", id_prefix()),
    }
}

/// An id that reads `None` when no attached element ends up carrying it.
///
/// Whenever one of `deps` changes, the id is restored and re-checked after
/// the next [`flush_deferred`](crate::lifecycle::flush_deferred). Use it for
/// optional parts of a widget (a description, an error message) whose id
/// should only be referenced while the part is rendered.
///
/// Call it while an [`Owner`](crate::lifecycle::Owner) runs. The owner keeps
/// the dependency effect alive and disposes it on unmount; outside an owner
/// the id is checked once and never again.
pub fn create_slot_id(prefix: Option<&str>, deps: Vec<Dependency>) -> Signal<Option<String>> {
    let id = create_id(prefix);
    let slot_id = signal(Some(id.clone()));

    let slot = slot_id.clone();
    let dispose = effect_sync(move || {
        for dep in &deps {
            dep();
        }
        slot.set(Some(id.clone()));

        let slot = slot.clone();
        let id = id.clone();
        defer(move || {
            if !registry::is_attached(&id) {
                tracing::trace!(%id, "slot id not attached; clearing");
                slot.set(None);
            }
        });
    });

    if current_owner().is_some() {
        on_cleanup(dispose);
    } else {
        tracing::warn!(
            "create_slot_id called outside an owner; dependency changes are not tracked"
        );
    }

    slot_id
}
