//! Primitive types - Maybe-reactive values and callbacks.
//!
//! Behavior props accept static values, signals, and getters so callers can
//! pass a constant or something that changes over time through one field.

use std::rc::Rc;
use spark_signals::{Derived, Signal};

use crate::state::focus::FocusEvent;
use crate::state::keyboard::KeyboardEvent;

// =============================================================================
// Cleanup Function
// =============================================================================

/// Cleanup function registered with an owner.
pub type Cleanup = Box<dyn FnOnce()>;

// =============================================================================
// Callback Types
// =============================================================================

/// Keyboard event callback.
///
/// Rc<dyn Fn> so a callback can be shared between the props struct the
/// caller built and the handler closures a behavior creates from it.
pub type KeyCallback = Rc<dyn Fn(&KeyboardEvent)>;

/// Focus / blur event callback.
pub type FocusCallback = Rc<dyn Fn(&FocusEvent)>;

/// Focus change callback (true = gained, false = lost).
pub type FocusChangeCallback = Rc<dyn Fn(bool)>;

// =============================================================================
// Prop Value - Maybe-reactive property wrapper
// =============================================================================

/// A property value that can be static, a signal, or a getter.
///
/// Reading through [`PropValue::get`] inside a derived or effect tracks the
/// underlying signal, so behaviors stay reactive without knowing which form
/// the caller chose.
#[derive(Clone)]
pub enum PropValue<T: Clone + PartialEq + 'static> {
    /// Static value (not reactive).
    Static(T),
    /// Reactive signal (changes propagate automatically).
    Signal(Signal<T>),
    /// Getter function (called each time value is needed).
    Getter(Rc<dyn Fn() -> T>),
}

impl<T: Clone + PartialEq + 'static> PropValue<T> {
    /// Get the current value, tracking it when read reactively.
    pub fn get(&self) -> T {
        match self {
            PropValue::Static(v) => v.clone(),
            PropValue::Signal(s) => s.get(),
            PropValue::Getter(f) => f(),
        }
    }

    /// Create a getter-backed value from a closure.
    pub fn getter<F: Fn() -> T + 'static>(f: F) -> Self {
        PropValue::Getter(Rc::new(f))
    }
}

impl<T: Clone + PartialEq + Default + 'static> Default for PropValue<T> {
    fn default() -> Self {
        PropValue::Static(T::default())
    }
}

impl<T: Clone + PartialEq + 'static> From<T> for PropValue<T> {
    fn from(value: T) -> Self {
        PropValue::Static(value)
    }
}

impl<T: Clone + PartialEq + 'static> From<Signal<T>> for PropValue<T> {
    fn from(signal: Signal<T>) -> Self {
        PropValue::Signal(signal)
    }
}

impl<T: Clone + PartialEq + 'static> From<Derived<T>> for PropValue<T> {
    fn from(derived: Derived<T>) -> Self {
        PropValue::Getter(Rc::new(move || derived.get()))
    }
}

/// Resolve an optional boolean prop. An absent prop reads as `false`.
pub fn resolve_flag(prop: &Option<PropValue<bool>>) -> bool {
    prop.as_ref().is_some_and(PropValue::get)
}

// =============================================================================
// Tests
// =============================================================================
