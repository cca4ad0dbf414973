//! # spark-aria
//!
//! Accessibility behavior primitives for reactive UIs.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals) for fine-grained reactivity.
//!
//! ## Architecture
//!
//! Behaviors never touch elements. Each one returns an [`ElementProps`] map
//! (attributes plus `on*` event handlers) that the rendering layer spreads
//! onto the element it draws. Maps from several behaviors are combined with
//! [`merge_props`], which chains handlers that share a name:
//!
//! ```text
//! create_keyboard ─┐
//! create_focus ────┼─ merge_props ─→ focusable_props (derived) ─→ element
//! tabIndex ────────┘
//! ```
//!
//! Element access goes through a [`NodeRef`] the renderer fills in, and
//! mount-time work runs through the [`lifecycle`] owner.
//!
//! ## Modules
//!
//! - [`props`] - Element prop maps, merging and filtering
//! - [`interactions`] - Keyboard and focus behaviors
//! - [`focusable`] - Keyboard + focus + tab order + auto-focus
//! - [`lifecycle`] - Owners, mount and cleanup hooks
//! - [`dom`] - Element references and the id registry
//! - [`state`] - Event types and terminal event conversion
//! - [`utils`] - Id generation

pub mod dom;
pub mod focusable;
pub mod interactions;
pub mod lifecycle;
pub mod primitives;
pub mod props;
pub mod state;
pub mod utils;

// Re-export commonly used items
pub use dom::{Element, ElementHandle, FocusError, NodeRef};

pub use focusable::{create_focusable, AutoFocusLatch, FocusableProps, FocusableResult};

pub use interactions::{
    create_focus, create_keyboard, FocusProps, FocusResult, KeyboardProps, KeyboardResult,
};

pub use lifecycle::{defer, flush_deferred, mount, on_cleanup, on_mount, Owner};

pub use primitives::{Cleanup, FocusCallback, FocusChangeCallback, KeyCallback, PropValue};

pub use props::{filter_dom_props, merge_props, ElementProps, EventHandler, FilterOptions, Prop};

pub use state::{Event, FocusEvent, FocusKind, KeyState, KeyboardEvent, Modifiers};

pub use utils::{create_id, create_slot_id, set_id_prefix, ID_PREFIX};
