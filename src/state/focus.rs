//! Focus Events - The value handed to `onFocus` / `onBlur` handlers.
//!
//! Elements are identified by the index the host assigned them, the same
//! way the rest of the host addresses components. A focus event carries both
//! the element that actually gained or lost focus (`target`) and the element
//! whose handler is running (`current_target`), so handlers can tell a
//! direct focus apart from one that bubbled up from a descendant.
//!
//! # Example
//!
//! ```ignore
//! use spark_aria::state::focus::FocusEvent;
//!
//! let direct = FocusEvent::focus(3);
//! assert!(direct.is_self_target());
//!
//! let bubbled = FocusEvent::focus(7).with_current_target(3);
//! assert!(!bubbled.is_self_target());
//! ```

/// Whether focus was gained or lost.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FocusKind {
    Focus,
    Blur,
}

/// Focus event
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FocusEvent {
    /// Gained or lost.
    pub kind: FocusKind,
    /// Element that gained or lost focus.
    pub target: usize,
    /// Element whose handler is being invoked.
    pub current_target: usize,
    /// The other side of the transition (element losing focus on a focus
    /// event, element gaining focus on a blur event), if any.
    pub related_target: Option<usize>,
}

impl FocusEvent {
    /// Focus gained directly on `index`.
    pub fn focus(index: usize) -> Self {
        Self {
            kind: FocusKind::Focus,
            target: index,
            current_target: index,
            related_target: None,
        }
    }

    /// Focus lost directly on `index`.
    pub fn blur(index: usize) -> Self {
        Self {
            kind: FocusKind::Blur,
            target: index,
            current_target: index,
            related_target: None,
        }
    }

    /// Re-target the event at an ancestor handler.
    pub fn with_current_target(mut self, index: usize) -> Self {
        self.current_target = index;
        self
    }

    /// Attach the other side of the focus transition.
    pub fn with_related_target(mut self, index: usize) -> Self {
        self.related_target = Some(index);
        self
    }

    /// True when the handler runs on the element that changed focus itself.
    pub fn is_self_target(&self) -> bool {
        self.target == self.current_target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direct_focus_is_self_target() {
        let event = FocusEvent::focus(2);
        assert_eq!(event.kind, FocusKind::Focus);
        assert!(event.is_self_target());
    }

    #[test]
    fn test_bubbled_blur_is_not_self_target() {
        let event = FocusEvent::blur(5).with_current_target(1).with_related_target(9);
        assert_eq!(event.kind, FocusKind::Blur);
        assert!(!event.is_self_target());
        assert_eq!(event.related_target, Some(9));
    }
}
