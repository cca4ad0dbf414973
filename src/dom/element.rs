//! Element references.
//!
//! The rendering layer owns elements; behaviors only hold a [`NodeRef`] that
//! the renderer fills in once the element exists.

use std::fmt;
use std::rc::Rc;

use spark_signals::{signal, Signal};

/// Why an element refused focus.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FocusError {
    #[error("<{0}> cannot receive focus")]
    NotFocusable(String),

    #[error("<{0}> is not attached to a document")]
    Detached(String),
}

/// A rendered element, as far as behaviors are concerned.
pub trait Element {
    /// Tag or widget name, used in diagnostics.
    fn tag_name(&self) -> &str;

    /// The element's id attribute, if it has one.
    fn id(&self) -> Option<String> {
        None
    }

    /// Move keyboard focus to this element.
    ///
    /// Elements that cannot hold focus keep the default.
    fn focus(&self) -> Result<(), FocusError> {
        Err(FocusError::NotFocusable(self.tag_name().to_string()))
    }
}

/// Shared handle to a rendered element. Equality is identity.
#[derive(Clone)]
pub struct ElementHandle(Rc<dyn Element>);

impl ElementHandle {
    pub fn new<E: Element + 'static>(element: E) -> Self {
        Self(Rc::new(element))
    }

    pub fn from_rc(element: Rc<dyn Element>) -> Self {
        Self(element)
    }

    pub fn element(&self) -> &dyn Element {
        &*self.0
    }

    pub fn focus(&self) -> Result<(), FocusError> {
        self.0.focus()
    }
}

impl PartialEq for ElementHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for ElementHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ElementHandle(<{}>)", self.0.tag_name())
    }
}

// =============================================================================
// Node Ref
// =============================================================================

/// Reactive reference to an element that may not be rendered yet.
///
/// Cloning shares the same slot.
///
/// # Example
///
/// ```ignore
/// let node_ref = NodeRef::new();
/// assert!(node_ref.get().is_none());
///
/// // renderer, once the element exists:
/// node_ref.load(ElementHandle::new(my_button));
/// ```
#[derive(Clone)]
pub struct NodeRef {
    element: Signal<Option<ElementHandle>>,
}

impl NodeRef {
    pub fn new() -> Self {
        Self {
            element: signal(None),
        }
    }

    /// Called by the renderer when the element is created.
    pub fn load(&self, element: ElementHandle) {
        self.element.set(Some(element));
    }

    /// Called by the renderer when the element is removed.
    pub fn clear(&self) {
        self.element.set(None);
    }

    /// The element, tracked when read reactively.
    pub fn get(&self) -> Option<ElementHandle> {
        self.element.get()
    }

    /// The element, without creating a dependency.
    pub fn get_untracked(&self) -> Option<ElementHandle> {
        spark_signals::untrack(|| self.element.get())
    }

    pub fn is_loaded(&self) -> bool {
        self.get_untracked().is_some()
    }
}

impl Default for NodeRef {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spark_signals::effect_sync;
    use std::cell::Cell;

    struct Label;

    impl Element for Label {
        fn tag_name(&self) -> &str {
            "label"
        }
    }

    struct Button {
        focused: Cell<bool>,
    }

    impl Element for Button {
        fn tag_name(&self) -> &str {
            "button"
        }

        fn focus(&self) -> Result<(), FocusError> {
            self.focused.set(true);
            Ok(())
        }
    }

    #[test]
    fn test_default_focus_is_refused() {
        let handle = ElementHandle::new(Label);
        assert_eq!(handle.focus(), Err(FocusError::NotFocusable("label".to_string())));
    }

    #[test]
    fn test_focusable_element() {
        let button = Rc::new(Button { focused: Cell::new(false) });
        let handle = ElementHandle::from_rc(button.clone());
        assert_eq!(handle.focus(), Ok(()));
        assert!(button.focused.get());
    }

    #[test]
    fn test_handle_identity() {
        let a = ElementHandle::new(Label);
        let b = ElementHandle::new(Label);
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }

    #[test]
    fn test_node_ref_load_and_clear() {
        let node_ref = NodeRef::new();
        assert!(!node_ref.is_loaded());

        node_ref.load(ElementHandle::new(Label));
        assert!(node_ref.is_loaded());

        node_ref.clear();
        assert!(node_ref.get().is_none());
    }

    #[test]
    fn test_node_ref_is_reactive() {
        let node_ref = NodeRef::new();
        let seen = Rc::new(Cell::new(0));
        let seen_clone = seen.clone();
        let reader = node_ref.clone();

        let _dispose = effect_sync(move || {
            if reader.get().is_some() {
                seen_clone.set(seen_clone.get() + 1);
            }
        });

        assert_eq!(seen.get(), 0);
        node_ref.load(ElementHandle::new(Label));
        assert_eq!(seen.get(), 1);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            FocusError::Detached("input".to_string()).to_string(),
            "<input> is not attached to a document"
        );
    }
}
