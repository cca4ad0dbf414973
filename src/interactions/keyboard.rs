//! Keyboard Behavior - Disabled-aware key handlers.
//!
//! [`create_keyboard`] returns an `onKeyDown` / `onKeyUp` pair that forwards
//! key events to the caller's callbacks. The disabled flag is read each time
//! a handler runs, so toggling it never rebuilds the handlers.
//!
//! # Example
//!
//! ```ignore
//! use std::rc::Rc;
//! use spark_signals::signal;
//! use spark_aria::interactions::{create_keyboard, KeyboardProps};
//!
//! let disabled = signal(false);
//! let keyboard = create_keyboard(KeyboardProps {
//!     is_disabled: Some(disabled.clone().into()),
//!     on_key_down: Some(Rc::new(|event: &KeyboardEvent| println!("down: {}", event.key))),
//!     ..Default::default()
//! });
//!
//! // Spread onto the element:
//! let props = keyboard.keyboard_props;
//! ```

use std::rc::Rc;

use crate::primitives::{resolve_flag, KeyCallback, PropValue};
use crate::props::{names, ElementProps, EventHandler};
use crate::state::Event;

/// Input to [`create_keyboard`].
#[derive(Clone, Default)]
pub struct KeyboardProps {
    /// While true, key events are ignored.
    pub is_disabled: Option<PropValue<bool>>,
    pub on_key_down: Option<KeyCallback>,
    pub on_key_up: Option<KeyCallback>,
}

/// Output of [`create_keyboard`].
pub struct KeyboardResult {
    /// `onKeyDown` and `onKeyUp`, in that order.
    pub keyboard_props: ElementProps,
}

/// Handles keyboard interactions for a focusable element.
pub fn create_keyboard(props: KeyboardProps) -> KeyboardResult {
    let is_disabled: Rc<Option<PropValue<bool>>> = Rc::new(props.is_disabled);

    let keyboard_props = ElementProps::new()
        .with(
            names::ON_KEY_DOWN,
            key_handler(is_disabled.clone(), props.on_key_down),
        )
        .with(names::ON_KEY_UP, key_handler(is_disabled, props.on_key_up));

    KeyboardResult { keyboard_props }
}

fn key_handler(
    is_disabled: Rc<Option<PropValue<bool>>>,
    callback: Option<KeyCallback>,
) -> EventHandler {
    EventHandler::new(move |event: &Event| {
        let Some(key) = event.as_key() else {
            return;
        };
        if resolve_flag(&is_disabled) {
            return;
        }
        if let Some(callback) = &callback {
            callback(key);
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{FocusEvent, KeyboardEvent};
    use spark_signals::signal;
    use std::cell::RefCell;

    fn recorder() -> (Rc<RefCell<Vec<String>>>, KeyCallback) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let log_clone = log.clone();
        let callback: KeyCallback = Rc::new(move |event: &KeyboardEvent| {
            log_clone.borrow_mut().push(event.key.clone());
        });
        (log, callback)
    }

    #[test]
    fn test_forwards_key_events() {
        let (downs, on_down) = recorder();
        let (ups, on_up) = recorder();
        let result = create_keyboard(KeyboardProps {
            on_key_down: Some(on_down),
            on_key_up: Some(on_up),
            ..Default::default()
        });

        assert!(result.keyboard_props.dispatch(&KeyboardEvent::new("Enter").into()));
        assert!(result.keyboard_props.dispatch(&KeyboardEvent::release("Enter").into()));

        assert_eq!(*downs.borrow(), vec!["Enter"]);
        assert_eq!(*ups.borrow(), vec!["Enter"]);
    }

    #[test]
    fn test_disabled_is_read_per_call() {
        let disabled = signal(true);
        let (downs, on_down) = recorder();
        let result = create_keyboard(KeyboardProps {
            is_disabled: Some(disabled.clone().into()),
            on_key_down: Some(on_down),
            ..Default::default()
        });
        let handler = result.keyboard_props.handler(names::ON_KEY_DOWN).cloned();

        result.keyboard_props.dispatch(&KeyboardEvent::new("a").into());
        assert!(downs.borrow().is_empty());

        disabled.set(false);
        result.keyboard_props.dispatch(&KeyboardEvent::new("b").into());
        assert_eq!(*downs.borrow(), vec!["b"]);

        // Same handler before and after the toggle.
        assert_eq!(result.keyboard_props.handler(names::ON_KEY_DOWN).cloned(), handler);
    }

    #[test]
    fn test_missing_callbacks_are_noops() {
        let result = create_keyboard(KeyboardProps::default());
        assert!(result.keyboard_props.dispatch(&KeyboardEvent::new("x").into()));
        assert_eq!(
            result.keyboard_props.keys().collect::<Vec<_>>(),
            vec![names::ON_KEY_DOWN, names::ON_KEY_UP]
        );
    }

    #[test]
    fn test_focus_events_are_ignored() {
        let (downs, on_down) = recorder();
        let result = create_keyboard(KeyboardProps {
            on_key_down: Some(on_down),
            ..Default::default()
        });

        if let Some(handler) = result.keyboard_props.handler(names::ON_KEY_DOWN) {
            handler.call(&FocusEvent::focus(0).into());
        }
        assert!(downs.borrow().is_empty());
    }
}
