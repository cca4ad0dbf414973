//! Element Registry - Which element ids are currently attached.
//!
//! The renderer registers an element under its id when it attaches it and
//! removes it on detach. This is the lookup `create_slot_id` uses to decide
//! whether an id it handed out ended up on a rendered element.

use std::cell::RefCell;
use std::collections::HashMap;

use super::element::ElementHandle;

thread_local! {
    /// Map element id to the attached element.
    static ID_TO_ELEMENT: RefCell<HashMap<String, ElementHandle>> = RefCell::new(HashMap::new());
}

/// Register `element` as attached under `id`.
///
/// Re-attaching an id replaces the previous element.
pub fn attach(id: impl Into<String>, element: ElementHandle) {
    let id = id.into();
    let replaced = ID_TO_ELEMENT.with(|map| map.borrow_mut().insert(id.clone(), element));
    if replaced.is_some() {
        tracing::debug!(%id, "element id attached twice; keeping the latest element");
    }
}

/// Register an element under the id it reports. Elements without an id are
/// not tracked.
pub fn attach_element(element: ElementHandle) -> bool {
    match element.element().id() {
        Some(id) => {
            attach(id, element);
            true
        }
        None => false,
    }
}

/// Remove `id` from the registry.
pub fn detach(id: &str) -> Option<ElementHandle> {
    ID_TO_ELEMENT.with(|map| map.borrow_mut().remove(id))
}

/// Look up an attached element by id.
pub fn get_element_by_id(id: &str) -> Option<ElementHandle> {
    ID_TO_ELEMENT.with(|map| map.borrow().get(id).cloned())
}

/// Whether any attached element carries `id`.
pub fn is_attached(id: &str) -> bool {
    ID_TO_ELEMENT.with(|map| map.borrow().contains_key(id))
}

/// Drop every registration (for testing).
pub fn reset_registry() {
    ID_TO_ELEMENT.with(|map| map.borrow_mut().clear());
}
