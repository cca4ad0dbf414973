//! Element Props - The attribute/handler map a behavior hands to the renderer.
//!
//! Behaviors don't touch elements. They produce an [`ElementProps`] map that
//! the rendering layer spreads onto the element it draws: attribute names map
//! to plain values, `on*` names map to [`EventHandler`]s.
//!
//! - [`merge_props`] - combine several maps, chaining handlers
//! - [`filter_dom_props`] - keep only the props safe to forward to an element

mod filter;
mod merge;

pub use filter::{filter_dom_props, FilterOptions};
pub use merge::{is_handler_key, merge_props};

use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;

use crate::state::Event;

/// Well-known prop names.
pub mod names {
    pub const ID: &str = "id";
    pub const TAB_INDEX: &str = "tabIndex";
    pub const ON_KEY_DOWN: &str = "onKeyDown";
    pub const ON_KEY_UP: &str = "onKeyUp";
    pub const ON_FOCUS: &str = "onFocus";
    pub const ON_BLUR: &str = "onBlur";
    pub const ARIA_LABEL: &str = "aria-label";
    pub const ARIA_LABELLEDBY: &str = "aria-labelledby";
    pub const ARIA_DESCRIBEDBY: &str = "aria-describedby";
    pub const ARIA_DETAILS: &str = "aria-details";
}

// =============================================================================
// Event Handler
// =============================================================================

/// A shared event handler stored under an `on*` prop name.
///
/// Equality is identity: two handlers are equal only if they are the same
/// allocation. That keeps a derived holding props from reporting a change
/// when it rebuilds a map out of the same handlers.
#[derive(Clone)]
pub struct EventHandler(Rc<dyn Fn(&Event)>);

impl EventHandler {
    pub fn new<F: Fn(&Event) + 'static>(f: F) -> Self {
        Self(Rc::new(f))
    }

    /// Invoke the handler.
    pub fn call(&self, event: &Event) {
        (self.0)(event)
    }

    /// A handler that invokes each of `handlers` in order with the same event.
    ///
    /// A panic in one handler unwinds out of the chain; the handlers after it
    /// do not run for that event.
    pub fn chain(handlers: Vec<EventHandler>) -> Self {
        Self::new(move |event| {
            for handler in &handlers {
                handler.call(event);
            }
        })
    }
}

impl PartialEq for EventHandler {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for EventHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("EventHandler(..)")
    }
}

// =============================================================================
// Prop
// =============================================================================

/// One prop value.
#[derive(Clone, Debug, PartialEq)]
pub enum Prop {
    /// Present but explicitly cleared.
    Unset,
    Bool(bool),
    Int(i64),
    Text(String),
    Handler(EventHandler),
}

impl Prop {
    pub fn as_handler(&self) -> Option<&EventHandler> {
        match self {
            Prop::Handler(handler) => Some(handler),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Prop::Int(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Prop::Text(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Prop::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, Prop::Unset)
    }
}

impl From<bool> for Prop {
    fn from(value: bool) -> Self {
        Prop::Bool(value)
    }
}

impl From<i64> for Prop {
    fn from(value: i64) -> Self {
        Prop::Int(value)
    }
}

impl From<i32> for Prop {
    fn from(value: i32) -> Self {
        Prop::Int(i64::from(value))
    }
}

impl From<&str> for Prop {
    fn from(value: &str) -> Self {
        Prop::Text(value.to_string())
    }
}

impl From<String> for Prop {
    fn from(value: String) -> Self {
        Prop::Text(value)
    }
}

impl From<EventHandler> for Prop {
    fn from(handler: EventHandler) -> Self {
        Prop::Handler(handler)
    }
}

impl<T: Into<Prop>> From<Option<T>> for Prop {
    fn from(value: Option<T>) -> Self {
        value.map_or(Prop::Unset, Into::into)
    }
}

// =============================================================================
// Element Props
// =============================================================================

/// Insertion-ordered map from prop name to value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ElementProps {
    entries: IndexMap<String, Prop>,
}

impl ElementProps {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Prop>) -> Self {
        self.insert(name, value);
        self
    }

    /// Builder-style handler insert.
    pub fn with_handler<F: Fn(&Event) + 'static>(self, name: impl Into<String>, f: F) -> Self {
        self.with(name, EventHandler::new(f))
    }

    /// Insert or overwrite a prop. Overwriting keeps the key's original position.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Prop>) -> Option<Prop> {
        self.entries.insert(name.into(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&Prop> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<Prop> {
        self.entries.shift_remove(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Prop)> {
        self.entries.iter().map(|(name, prop)| (name.as_str(), prop))
    }

    /// The handler stored under `name`, if it is one.
    pub fn handler(&self, name: &str) -> Option<&EventHandler> {
        self.get(name).and_then(Prop::as_handler)
    }

    /// The `tabIndex` value, if one is set.
    pub fn tab_index(&self) -> Option<i64> {
        self.get(names::TAB_INDEX).and_then(Prop::as_int)
    }

    /// Dispatch `event` to the handler its kind maps to. Returns whether a
    /// handler was found.
    pub fn dispatch(&self, event: &Event) -> bool {
        match self.handler(event.handler_name()) {
            Some(handler) => {
                handler.call(event);
                true
            }
            None => false,
        }
    }
}

impl<K: Into<String>, V: Into<Prop>> FromIterator<(K, V)> for ElementProps {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut props = ElementProps::new();
        for (name, value) in iter {
            props.insert(name, value);
        }
        props
    }
}

impl IntoIterator for ElementProps {
    type Item = (String, Prop);
    type IntoIter = indexmap::map::IntoIter<String, Prop>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

// =============================================================================
// Tests
// =============================================================================
