//! Focusable - Keyboard, focus and tab order behavior for one element.
//!
//! [`create_focusable`] combines the keyboard and focus behaviors into a
//! single derived prop map, adds a `tabIndex` of -1 when the element should
//! be skipped by Tab navigation, and focuses the element once at mount when
//! auto-focus was requested.
//!
//! # Example
//!
//! ```ignore
//! use spark_aria::dom::{ElementHandle, NodeRef};
//! use spark_aria::focusable::{create_focusable, FocusableProps};
//! use spark_aria::lifecycle::mount;
//!
//! let node_ref = NodeRef::new();
//! let node = node_ref.clone();
//! let owner = mount(move || {
//!     let focusable = create_focusable(
//!         FocusableProps {
//!             auto_focus: Some(true.into()),
//!             ..Default::default()
//!         },
//!         node.clone(),
//!     );
//!     // Renderer spreads `focusable.focusable_props.get()` onto the element
//!     // and loads the node ref.
//!     node.load(ElementHandle::new(my_button));
//! });
//! // The button received focus when `mount` returned.
//! ```

use std::cell::Cell;
use std::rc::Rc;

use spark_signals::{derived, untrack, Derived};

use crate::dom::NodeRef;
use crate::interactions::{create_focus, create_keyboard, FocusProps, KeyboardProps};
use crate::lifecycle::on_mount;
use crate::primitives::{
    resolve_flag, FocusCallback, FocusChangeCallback, KeyCallback, PropValue,
};
use crate::props::{merge_props, names, ElementProps};

// =============================================================================
// Props
// =============================================================================

/// Input to [`create_focusable`].
#[derive(Clone, Default)]
pub struct FocusableProps {
    // =========================================================================
    // State
    // =========================================================================

    /// Ignore key and focus events, and keep the element in the tab order.
    pub is_disabled: Option<PropValue<bool>>,

    /// Focus the element at mount. Read once, when the behavior is created.
    pub auto_focus: Option<PropValue<bool>>,

    /// Skip the element during Tab navigation. Avoid unless the element is
    /// reachable by the keyboard some other way.
    pub exclude_from_tab_order: Option<PropValue<bool>>,

    // =========================================================================
    // Callbacks
    // =========================================================================

    pub on_focus: Option<FocusCallback>,
    pub on_blur: Option<FocusCallback>,
    pub on_focus_change: Option<FocusChangeCallback>,
    pub on_key_down: Option<KeyCallback>,
    pub on_key_up: Option<KeyCallback>,
}

impl FocusableProps {
    /// The subset [`create_keyboard`] consumes.
    pub fn keyboard(&self) -> KeyboardProps {
        KeyboardProps {
            is_disabled: self.is_disabled.clone(),
            on_key_down: self.on_key_down.clone(),
            on_key_up: self.on_key_up.clone(),
        }
    }

    /// The subset [`create_focus`] consumes.
    pub fn focus(&self) -> FocusProps {
        FocusProps {
            is_disabled: self.is_disabled.clone(),
            on_focus: self.on_focus.clone(),
            on_blur: self.on_blur.clone(),
            on_focus_change: self.on_focus_change.clone(),
        }
    }
}

/// Output of [`create_focusable`].
pub struct FocusableResult {
    /// Props to spread onto the element.
    pub focusable_props: Derived<ElementProps>,
}

// =============================================================================
// Auto Focus Latch
// =============================================================================

/// One-shot flag: armed at creation when auto-focus was requested, disarmed
/// by the first [`take`](Self::take).
#[derive(Debug, Default)]
pub struct AutoFocusLatch {
    armed: Cell<bool>,
}

impl AutoFocusLatch {
    pub fn new(armed: bool) -> Self {
        Self {
            armed: Cell::new(armed),
        }
    }

    /// Whether the latch was armed. Always disarms it.
    pub fn take(&self) -> bool {
        self.armed.replace(false)
    }

    pub fn is_armed(&self) -> bool {
        self.armed.get()
    }
}

// =============================================================================
// Create Focusable
// =============================================================================

/// Make an element focusable, capable of auto focus and excludable from the
/// tab order.
///
/// Call it while an [`Owner`](crate::lifecycle::Owner) runs; the auto-focus
/// fires when that owner mounts.
pub fn create_focusable(props: FocusableProps, node_ref: NodeRef) -> FocusableResult {
    let latch = Rc::new(AutoFocusLatch::new(untrack(|| resolve_flag(&props.auto_focus))));

    let keyboard_props = create_keyboard(props.keyboard()).keyboard_props;
    let focus_props = create_focus(props.focus()).focus_props;

    let is_disabled = props.is_disabled;
    let exclude_from_tab_order = props.exclude_from_tab_order;

    let focusable_props = derived(move || {
        merge_props([
            keyboard_props.clone(),
            focus_props.get(),
            tab_index_props(&exclude_from_tab_order, &is_disabled),
        ])
    });

    on_mount(move || {
        if !latch.take() {
            return;
        }
        let Some(element) = node_ref.get_untracked() else {
            tracing::trace!("auto-focus skipped; element not rendered");
            return;
        };
        if let Err(err) = element.focus() {
            tracing::debug!(%err, "auto-focus skipped");
        }
    });

    FocusableResult { focusable_props }
}

/// `tabIndex: -1` when excluded from the tab order and not disabled, nothing
/// otherwise.
fn tab_index_props(
    exclude_from_tab_order: &Option<PropValue<bool>>,
    is_disabled: &Option<PropValue<bool>>,
) -> ElementProps {
    if resolve_flag(exclude_from_tab_order) && !resolve_flag(is_disabled) {
        ElementProps::new().with(names::TAB_INDEX, -1_i64)
    } else {
        ElementProps::new()
    }
}

// =============================================================================
// Tests
// =============================================================================
