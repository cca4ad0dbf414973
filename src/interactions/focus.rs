//! Focus Behavior - Disabled-aware focus and blur handlers.
//!
//! [`create_focus`] exposes its handlers through a derived map so a disabled
//! element carries no focus handlers at all. The handlers themselves are
//! built once; the derived only decides whether to include them.
//!
//! Only focus events that target the element itself are handled. Focus moving
//! between descendants of the element bubbles through its handlers as well,
//! and those events are ignored.

use std::rc::Rc;

use spark_signals::{derived, signal, Derived, Signal};

use crate::primitives::{resolve_flag, FocusCallback, FocusChangeCallback, PropValue};
use crate::props::{names, ElementProps, EventHandler};
use crate::state::{Event, FocusKind};

/// Input to [`create_focus`].
#[derive(Clone, Default)]
pub struct FocusProps {
    /// While true, focus events are ignored and no handlers are exposed.
    pub is_disabled: Option<PropValue<bool>>,
    pub on_focus: Option<FocusCallback>,
    pub on_blur: Option<FocusCallback>,
    /// Called with `true` after `on_focus` and `false` after `on_blur`.
    pub on_focus_change: Option<FocusChangeCallback>,
}

/// Output of [`create_focus`].
pub struct FocusResult {
    /// `onFocus` and `onBlur`, or nothing while disabled.
    pub focus_props: Derived<ElementProps>,
    /// Whether the element currently holds focus.
    pub is_focused: Signal<bool>,
}

/// Handles focus events for the immediate target.
pub fn create_focus(props: FocusProps) -> FocusResult {
    let is_disabled = Rc::new(props.is_disabled);
    let is_focused = signal(false);

    let handlers = ElementProps::new()
        .with(
            names::ON_FOCUS,
            focus_handler(
                FocusKind::Focus,
                is_disabled.clone(),
                props.on_focus,
                props.on_focus_change.clone(),
                is_focused.clone(),
            ),
        )
        .with(
            names::ON_BLUR,
            focus_handler(
                FocusKind::Blur,
                is_disabled.clone(),
                props.on_blur,
                props.on_focus_change,
                is_focused.clone(),
            ),
        );

    let focus_props = derived(move || {
        if resolve_flag(&is_disabled) {
            ElementProps::new()
        } else {
            handlers.clone()
        }
    });

    FocusResult {
        focus_props,
        is_focused,
    }
}

fn focus_handler(
    kind: FocusKind,
    is_disabled: Rc<Option<PropValue<bool>>>,
    callback: Option<FocusCallback>,
    on_focus_change: Option<FocusChangeCallback>,
    is_focused: Signal<bool>,
) -> EventHandler {
    let gained = kind == FocusKind::Focus;

    EventHandler::new(move |event: &Event| {
        let Some(focus) = event.as_focus() else {
            return;
        };
        if focus.kind != kind || !focus.is_self_target() || resolve_flag(&is_disabled) {
            return;
        }

        if let Some(callback) = &callback {
            callback(focus);
        }
        if let Some(on_focus_change) = &on_focus_change {
            on_focus_change(gained);
        }
        is_focused.set(gained);
    })
}
