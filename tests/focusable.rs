//! Integration tests for create_focusable: auto-focus at mount, tab order,
//! and disabled handling, driven through a mounted owner.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use spark_aria::{
    create_focusable, mount, Element, ElementHandle, FocusError, FocusEvent, FocusableProps,
    KeyboardEvent, NodeRef, Owner,
};
use spark_aria::props::names;
use spark_signals::{signal, Derived};

/// A button that counts focus requests.
struct Button {
    focus_calls: Rc<Cell<u32>>,
}

impl Element for Button {
    fn tag_name(&self) -> &str {
        "button"
    }

    fn focus(&self) -> Result<(), FocusError> {
        self.focus_calls.set(self.focus_calls.get() + 1);
        Ok(())
    }
}

/// Static text, which keeps the default (refusing) focus.
struct Label;

impl Element for Label {
    fn tag_name(&self) -> &str {
        "label"
    }
}

fn button() -> (ElementHandle, Rc<Cell<u32>>) {
    let calls = Rc::new(Cell::new(0));
    let handle = ElementHandle::new(Button {
        focus_calls: calls.clone(),
    });
    (handle, calls)
}

/// Mount a focusable, loading `element` into its node ref during render.
fn render(
    props: FocusableProps,
    element: Option<ElementHandle>,
) -> (Owner, Derived<spark_aria::ElementProps>) {
    let node_ref = NodeRef::new();
    let slot = Rc::new(RefCell::new(None));

    let slot_clone = slot.clone();
    let owner = mount(move || {
        let result = create_focusable(props, node_ref.clone());
        if let Some(element) = element {
            node_ref.load(element);
        }
        *slot_clone.borrow_mut() = Some(result.focusable_props);
    });

    let focusable_props = slot.borrow_mut().take().expect("render ran");
    (owner, focusable_props)
}

#[test]
fn auto_focus_focuses_once_at_mount() {
    let (element, calls) = button();
    let exclude = signal(false);

    let (owner, focusable_props) = render(
        FocusableProps {
            auto_focus: Some(true.into()),
            exclude_from_tab_order: Some(exclude.clone().into()),
            ..Default::default()
        },
        Some(element),
    );
    assert_eq!(calls.get(), 1);

    // Unrelated updates never re-fire it.
    exclude.set(true);
    assert_eq!(focusable_props.get().tab_index(), Some(-1));
    exclude.set(false);
    owner.mount();
    assert_eq!(calls.get(), 1);
}

#[test]
fn auto_focus_is_read_once_at_creation() {
    let (element, calls) = button();
    let auto_focus = signal(false);

    let node_ref = NodeRef::new();
    let owner = Owner::new();
    let auto_focus_prop = auto_focus.clone();
    let node = node_ref.clone();
    owner.run(move || {
        let _ = create_focusable(
            FocusableProps {
                auto_focus: Some(auto_focus_prop.into()),
                ..Default::default()
            },
            node,
        );
    });

    // Turned on after creation but before mount: no focus.
    auto_focus.set(true);
    node_ref.load(element);
    owner.mount();
    assert_eq!(calls.get(), 0);
}

#[test]
fn auto_focus_without_element_is_skipped() {
    let (_owner, focusable_props) = render(
        FocusableProps {
            auto_focus: Some(true.into()),
            ..Default::default()
        },
        None,
    );

    // Mount completed without error and the props are still usable.
    assert!(focusable_props.get().contains(names::ON_KEY_DOWN));
}

#[test]
fn auto_focus_on_non_focusable_element_is_skipped() {
    let (_owner, focusable_props) = render(
        FocusableProps {
            auto_focus: Some(true.into()),
            ..Default::default()
        },
        Some(ElementHandle::new(Label)),
    );
    assert!(focusable_props.get().contains(names::ON_FOCUS));
}

#[test]
fn remount_focuses_again() {
    let (element, calls) = button();
    let props = FocusableProps {
        auto_focus: Some(true.into()),
        ..Default::default()
    };

    let (first, _) = render(props.clone(), Some(element.clone()));
    first.unmount();
    let (_second, _) = render(props, Some(element));

    assert_eq!(calls.get(), 2);
}

#[test]
fn disabled_suppresses_every_callback() {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let key_down = calls.clone();
    let key_up = calls.clone();
    let on_focus = calls.clone();
    let on_change = calls.clone();

    let (_owner, focusable_props) = render(
        FocusableProps {
            is_disabled: Some(true.into()),
            on_key_down: Some(Rc::new(move |_: &KeyboardEvent| key_down.borrow_mut().push("down"))),
            on_key_up: Some(Rc::new(move |_: &KeyboardEvent| key_up.borrow_mut().push("up"))),
            on_focus: Some(Rc::new(move |_: &FocusEvent| on_focus.borrow_mut().push("focus"))),
            on_focus_change: Some(Rc::new(move |_: bool| on_change.borrow_mut().push("change"))),
            ..Default::default()
        },
        None,
    );

    let props = focusable_props.get();
    props.dispatch(&KeyboardEvent::new("Enter").into());
    props.dispatch(&KeyboardEvent::release("Enter").into());
    props.dispatch(&FocusEvent::focus(0).into());
    assert!(calls.borrow().is_empty());
}

#[test]
fn enabled_callbacks_receive_events() {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let key_down = calls.clone();
    let on_focus = calls.clone();

    let (_owner, focusable_props) = render(
        FocusableProps {
            on_key_down: Some(Rc::new(move |event: &KeyboardEvent| {
                key_down.borrow_mut().push(event.key.clone());
            })),
            on_focus: Some(Rc::new(move |_: &FocusEvent| {
                on_focus.borrow_mut().push("focus".to_string());
            })),
            ..Default::default()
        },
        None,
    );

    let props = focusable_props.get();
    props.dispatch(&KeyboardEvent::new("ArrowDown").into());
    props.dispatch(&FocusEvent::focus(0).into());
    assert_eq!(*calls.borrow(), vec!["ArrowDown", "focus"]);
}

#[test]
fn tab_index_for_every_flag_combination() {
    let flags = [None, Some(false), Some(true)];
    for exclude in flags {
        for disabled in flags {
            let (_owner, focusable_props) = render(
                FocusableProps {
                    exclude_from_tab_order: exclude.map(Into::into),
                    is_disabled: disabled.map(Into::into),
                    ..Default::default()
                },
                None,
            );

            let props = focusable_props.get();
            if exclude == Some(true) && disabled != Some(true) {
                assert_eq!(
                    props.tab_index(),
                    Some(-1),
                    "exclude={exclude:?} disabled={disabled:?}"
                );
            } else {
                assert!(
                    !props.contains(names::TAB_INDEX),
                    "exclude={exclude:?} disabled={disabled:?}"
                );
            }
        }
    }
}
