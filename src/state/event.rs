//! The event value every element-prop handler receives.

use super::focus::{FocusEvent, FocusKind};
use super::keyboard::KeyboardEvent;

/// Event passed through an element's handlers.
///
/// Handlers are stored under string prop names, so one handler signature has
/// to fit every event kind. Behaviors match on the variant they care about
/// and ignore the rest.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// Key down / key up.
    Key(KeyboardEvent),
    /// Focus / blur.
    Focus(FocusEvent),
}

impl Event {
    /// The keyboard event, if this is one.
    pub fn as_key(&self) -> Option<&KeyboardEvent> {
        match self {
            Event::Key(event) => Some(event),
            Event::Focus(_) => None,
        }
    }

    /// The focus event, if this is one.
    pub fn as_focus(&self) -> Option<&FocusEvent> {
        match self {
            Event::Focus(event) => Some(event),
            Event::Key(_) => None,
        }
    }

    /// The prop name a host should dispatch this event to.
    ///
    /// Repeats are reported as key downs, as browsers do.
    pub fn handler_name(&self) -> &'static str {
        use crate::props::names;
        match self {
            Event::Key(event) if event.is_release() => names::ON_KEY_UP,
            Event::Key(_) => names::ON_KEY_DOWN,
            Event::Focus(event) => match event.kind {
                FocusKind::Focus => names::ON_FOCUS,
                FocusKind::Blur => names::ON_BLUR,
            },
        }
    }
}

impl From<KeyboardEvent> for Event {
    fn from(event: KeyboardEvent) -> Self {
        Event::Key(event)
    }
}

impl From<FocusEvent> for Event {
    fn from(event: FocusEvent) -> Self {
        Event::Focus(event)
    }
}
